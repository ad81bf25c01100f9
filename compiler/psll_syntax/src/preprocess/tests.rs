use super::*;
use pretty_assertions::assert_eq;

fn check(cases: &[(&str, &str)]) {
    for &(source, expected) in cases {
        assert_eq!(preprocess(source), expected, "source: {source:?}");
    }
}

#[test]
fn empty_brackets() {
    check(&[
        ("", ""),
        ("()", "()"),
        ("( )", "()"),
        ("()()", "() ()"),
        ("()()()", "() () ()"),
        ("(())", "(())"),
        ("() (())", "() (())"),
    ]);
}

#[test]
fn simple_contents_unchanged() {
    for source in ["(set)", "(hi)", "(set 1)", "(set hi 1)", "(1 2 3 4)", "(hi) (salut)"] {
        assert_eq!(preprocess(source), source);
    }
}

#[test]
fn comments() {
    check(&[
        ("// hi", ""),
        ("() // hi", "()"),
        ("(\n// hi\n)", "()"),
        ("//(\n()", "()"),
        ("()\n//)", "()"),
        ("// hi\n()\n// hi", "()"),
        ("//()", ""),
    ]);
}

#[test]
fn multiline() {
    check(&[
        ("()\n()", "() ()"),
        ("\n(hi)", "(hi)"),
        ("(\nhi)", "(hi)"),
        ("(hi\n)", "(hi)"),
        ("(hi)\n", "(hi)"),
    ]);
}

#[test]
fn blanks_inside_brackets() {
    check(&[
        ("(   hi)", "(hi)"),
        ("(hi   )", "(hi)"),
        ("( hi 1 )", "(hi 1)"),
        ("(set a\t1)", "(set a\t1)"),
    ]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(preprocess("(out a)\r\n(out b)\r\n"), "(out a) (out b)");
}
