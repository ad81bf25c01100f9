//! Laying text out inside a pyramid.
//!
//! Level `k` of a pyramid holds `2k - 1` characters, so a pyramid with `n`
//! levels holds `n²` characters. Text is poured in from the top; the last
//! level is padded with blanks.

use super::TextOptions;
use crate::grid::{Row, BASE, LEFT_SIDE, RIGHT_SIDE, SPACE, TOP};

pub(super) fn text_to_rows(text: &str, options: TextOptions) -> (Vec<Row>, usize) {
    let mut text: Vec<char> = if options.remove_spaces {
        text.chars().filter(|&c| c != SPACE).collect()
    } else {
        text.chars().collect()
    };

    if let Some(min_width) = options.min_width.filter(|&w| w > 0) {
        pad_to_width(&mut text, min_width);
    }
    shape_short_text(&mut text);

    let mut lines = vec![TOP.to_string()];
    let mut level = 0;
    let mut rest = text.as_slice();
    while !rest.is_empty() {
        level += 1;
        let span = 2 * level - 1;
        let (front, tail) = rest.split_at(span.min(rest.len()));
        let mut line = String::with_capacity(span + 2);
        line.push(LEFT_SIDE);
        line.extend(front);
        line.extend(std::iter::repeat(SPACE).take(span - front.len()));
        line.push(RIGHT_SIDE);
        lines.push(line);
        rest = tail;
    }
    lines.push(std::iter::repeat(BASE).take(2 * level + 1).collect());

    let last = lines.len() - 1;
    let rows = lines
        .into_iter()
        .enumerate()
        .map(|(j, line)| {
            let pad = if j == last { 1 } else { level + 1 - j };
            Row::new(pad, line, pad)
        })
        .collect();

    (rows, 2 * level + 3)
}

/// Pad `text` so the pyramid's base comes out at least `min_width` wide.
///
/// The text is first centred in a single line of the target width, then
/// left-padded to fill every level above the last one.
fn pad_to_width(text: &mut Vec<char>, min_width: usize) {
    let min_width = min_width / 2 * 2 + 1;
    let capacity = ((min_width - 1) / 2).pow(2);

    if let Some(line_pad) = min_width.checked_sub(text.len() + 2).filter(|&p| p > 0) {
        let before = line_pad / 2;
        let after = line_pad - before;
        text.splice(0..0, std::iter::repeat(SPACE).take(before));
        text.extend(std::iter::repeat(SPACE).take(after));
    }

    let fill = capacity.saturating_sub(text.len());
    text.splice(0..0, std::iter::repeat(SPACE).take(fill));
}

/// Lengths that would otherwise leave a lopsided last level get a few blanks
/// so the text sits centred.
fn shape_short_text(text: &mut Vec<char>) {
    match text.len() {
        2 | 3 => text.insert(0, SPACE),
        5 => {
            text.splice(0..0, [SPACE; 4]);
        }
        6 => {
            text.insert(3, SPACE);
            text.insert(0, SPACE);
        }
        7 => text.insert(4, SPACE),
        10 => {
            text.insert(5, SPACE);
            text.splice(0..0, [SPACE; 4]);
        }
        _ => {}
    }
}
