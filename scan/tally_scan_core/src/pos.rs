//! Cursor positions and source spans.
//!
//! A [`Pos`] is a byte offset into the UTF-8 source, stored as `u32` for a
//! compact 8-byte [`Span`]. Positions handed out by the scanner always fall
//! on `char` boundaries, so slicing the source with them cannot split a
//! scalar value.
//!
//! # Scalar vs. Code-Unit Indexing
//!
//! The scanner moves one Unicode scalar at a time, but `Pos` counts UTF-8
//! code units (bytes). The conversion helpers [`Pos::from_char_index`] and
//! [`Pos::char_index`] bridge the two views; nothing else in this crate
//! reasons about storage width.

use std::fmt;

/// Byte offset into a UTF-8 source.
///
/// Ordered and comparable: for two positions in the same source, `a < b`
/// iff `a` is earlier in the text.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Debug)]
pub struct Pos(u32);

impl Pos {
    /// Position of the first scalar in any source.
    pub const START: Pos = Pos(0);

    /// Create a position from a byte offset.
    #[inline]
    pub const fn new(byte_offset: u32) -> Self {
        Pos(byte_offset)
    }

    /// The byte offset this position denotes.
    #[inline]
    pub const fn byte_offset(self) -> u32 {
        self.0
    }

    /// Create a position from a `usize` byte offset.
    ///
    /// # Panics
    ///
    /// Panics if `offset` exceeds `u32::MAX` (sources of 4 GiB and above
    /// are not supported).
    #[inline]
    pub(crate) fn from_usize(offset: usize) -> Self {
        match u32::try_from(offset) {
            Ok(v) => Pos(v),
            Err(_) => panic!("byte offset {offset} exceeds the 4 GiB source limit"),
        }
    }

    #[inline]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Position of the `index`-th scalar of `source` (scalar-indexed view).
    ///
    /// `index` may equal the scalar count, giving the past-the-end
    /// position. Returns `None` if `index` exceeds the scalar count.
    pub fn from_char_index(source: &str, index: usize) -> Option<Pos> {
        let mut remaining = index;
        for (offset, _) in source.char_indices() {
            if remaining == 0 {
                return Some(Pos::from_usize(offset));
            }
            remaining -= 1;
        }
        if remaining == 0 {
            Some(Pos::from_usize(source.len()))
        } else {
            None
        }
    }

    /// Number of scalars of `source` preceding this position.
    ///
    /// Inverse of [`from_char_index`](Self::from_char_index) for positions
    /// on `char` boundaries.
    ///
    /// # Panics
    ///
    /// Panics if the position is past the end of `source` or not on a
    /// `char` boundary.
    pub fn char_index(self, source: &str) -> usize {
        source[..self.as_usize()].chars().count()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-open region of the source, `start..end`.
///
/// Layout: 8 bytes. Produced by [`Scanner::span_from`](crate::Scanner::span_from)
/// so callers can snapshot the region a consumption operation covered and
/// recover its text later via [`Scanner::slice`](crate::Scanner::slice).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Span {
    pub start: Pos,
    pub end: Pos,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub fn new(start: Pos, end: Pos) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Span { start, end }
    }

    /// Zero-length span at `pos`.
    #[inline]
    pub const fn point(pos: Pos) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.byte_offset() - self.start.byte_offset()
    }

    /// Check if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start.byte_offset() == self.end.byte_offset()
    }

    /// Merge two spans to create one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// Size assertion: Span should stay 8 bytes on all platforms.
const _: () = assert!(std::mem::size_of::<Span>() == 8);
