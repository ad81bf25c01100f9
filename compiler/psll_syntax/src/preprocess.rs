//! Source reduction.

/// Reduce source text to a single line of bracketed expressions.
///
/// In order:
/// - `//` comments are dropped up to the end of their line
/// - line breaks (`\n` or `\r\n`) are deleted
/// - leading and trailing whitespace is trimmed
/// - whitespace directly after `(` or directly before `)` is deleted
/// - `)(` gets a single blank between the brackets
pub fn preprocess(source: &str) -> String {
    let mut joined = String::with_capacity(source.len());
    for line in source.lines() {
        let code = line.find("//").map_or(line, |comment| &line[..comment]);
        joined.push_str(code);
    }

    let trimmed = joined.trim();
    let mut reduced = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            let mut run = String::from(ch);
            while let Some(&next) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                run.push(next);
                chars.next();
            }
            let after_open = reduced.ends_with('(');
            let before_close = chars.peek() == Some(&')');
            if !after_open && !before_close {
                reduced.push_str(&run);
            }
            continue;
        }
        if ch == '(' && reduced.ends_with(')') {
            reduced.push(' ');
        }
        reduced.push(ch);
    }
    reduced
}

#[cfg(test)]
mod tests;
