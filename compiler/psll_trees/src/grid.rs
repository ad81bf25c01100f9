//! Rows and glyphs.

/// Apex of a pyramid.
pub const TOP: char = '^';
/// Base line of a pyramid.
pub const BASE: char = '-';
/// Left side of a pyramid body.
pub const LEFT_SIDE: char = '/';
/// Right side of a pyramid body.
pub const RIGHT_SIDE: char = '\\';
/// Blank.
pub const SPACE: char = ' ';

/// One row of a shape: blank padding around a run of content.
///
/// Widths are counted in characters, not bytes, so leaf text outside ASCII
/// lays out the same way it renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Row {
    /// Blank columns before the content.
    pub left: usize,
    /// The visible run of the row. Starts and ends with a glyph.
    pub content: String,
    /// Blank columns after the content.
    pub right: usize,
}

impl Row {
    pub fn new(left: usize, content: impl Into<String>, right: usize) -> Self {
        Row {
            left,
            content: content.into(),
            right,
        }
    }

    /// Width of the content in characters.
    #[inline]
    pub fn content_width(&self) -> usize {
        self.content.chars().count()
    }

    /// Total width of the row, padding included.
    #[inline]
    pub fn width(&self) -> usize {
        self.left + self.content_width() + self.right
    }

    /// First glyph of the content.
    #[inline]
    pub fn first_glyph(&self) -> Option<char> {
        self.content.chars().next()
    }

    /// Last glyph of the content.
    #[inline]
    pub fn last_glyph(&self) -> Option<char> {
        self.content.chars().next_back()
    }
}

/// Append `n` blanks to `out`.
pub(crate) fn push_blanks(out: &mut String, n: usize) {
    out.extend(std::iter::repeat(SPACE).take(n));
}
