//! Forward-only cursor over a borrowed UTF-8 source.
//!
//! The scanner advances through the source one Unicode scalar at a time.
//! Consumption helpers (`advance_while`, `consume_until`, the numeric
//! extractors) are built from two primitives: an `is_at_end()` test and an
//! unchecked single-scalar step.
//!
//! # Checked vs. Unchecked
//!
//! Every cursor primitive comes in two flavors. The checked one
//! ([`peek`](Scanner::peek), [`advance`](Scanner::advance),
//! [`read`](Scanner::read)) performs its own end-of-input test and returns
//! [`ScanError::EndOfInput`] past the end. The unchecked one
//! ([`peek_unchecked`](Scanner::peek_unchecked),
//! [`advance_unchecked`](Scanner::advance_unchecked)) assumes the caller
//! already established `!is_at_end()` and traps when that contract is
//! violated. The checked flavor is the end-of-input test plus a delegation
//! to the unchecked one, so the decode logic exists exactly once.
//!
//! # Consumed-on-Failure Cases
//!
//! Two operations leave the cursor moved even when they fail:
//! [`expect`](Scanner::expect) consumes the mismatched scalar, and
//! [`parse_float_str`](Scanner::parse_float_str) keeps a consumed `.` that
//! turns out to have no digits after it. Rolling back would hand a naive
//! retrying caller the same scalar forever; both methods document the
//! contract.

use crate::classify;
use crate::error::ScanError;
use crate::pos::{Pos, Span};

/// How [`Scanner::advance_if_equals`] compares a literal against the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Comparison {
    /// Scalar-by-scalar equality.
    #[default]
    Exact,
    /// Unicode simple case folding per scalar: `'A'` matches `'a'`,
    /// `'Σ'` matches `'σ'`.
    CaseInsensitive,
}

impl Comparison {
    fn matches(self, expected: char, actual: char) -> bool {
        match self {
            Comparison::Exact => expected == actual,
            Comparison::CaseInsensitive => {
                expected == actual || expected.to_lowercase().eq(actual.to_lowercase())
            }
        }
    }
}

/// Forward-only cursor over a borrowed UTF-8 source.
///
/// The scanner is [`Copy`], so callers snapshot state cheaply before a
/// speculative scan; no method ever moves an existing scanner backwards.
///
/// # Invariant
///
/// `pos` is always on a `char` boundary and satisfies
/// `Pos::START <= pos <= end`, where `end` is fixed at construction as the
/// past-the-end position of the source.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    /// The source text. Never mutated; owned by the caller.
    source: &'a str,
    /// Current read position (byte offset, `char` boundary).
    pos: Pos,
    /// Past-the-end position of `source`.
    end: Pos,
}

/// Size assertion: Scanner should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), Pos = 4, Pos = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Scanner<'static>>() <= 24);

/// Returns the byte width of the UTF-8 sequence starting with `lead`.
///
/// - `0xC0..=0xDF`: 2 bytes
/// - `0xE0..=0xEF`: 3 bytes
/// - `0xF0..=0xF7`: 4 bytes
/// - Everything else (ASCII): 1 byte
///
/// Continuation and invalid lead bytes cannot occur at the cursor, which
/// only ever rests on `char` boundaries of a valid `&str`.
#[inline]
fn utf8_char_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

impl<'a> Scanner<'a> {
    // ─── Construction ───────────────────────────────────────────────────

    /// Create a scanner with the cursor at the beginning of `source`.
    pub fn new(source: &'a str) -> Self {
        Self::new_at(source, Pos::START)
    }

    /// Create a scanner with the cursor at a caller-supplied position,
    /// typically one snapshotted from an earlier scan of the same source.
    ///
    /// # Panics
    ///
    /// Panics if `start` is past the end of `source` or not on a `char`
    /// boundary; that is a contract violation by the caller, not
    /// malformed input.
    pub fn new_at(source: &'a str, start: Pos) -> Self {
        let end = Pos::from_usize(source.len());
        assert!(
            start <= end,
            "start position {start} is past the end of the source ({end})"
        );
        assert!(
            source.is_char_boundary(start.as_usize()),
            "start position {start} is not on a char boundary"
        );
        Self {
            source,
            pos: start,
            end,
        }
    }

    // ─── Accessors ──────────────────────────────────────────────────────

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current cursor position.
    #[inline]
    pub fn position(&self) -> Pos {
        self.pos
    }

    /// Past-the-end position of the source.
    #[inline]
    pub fn end(&self) -> Pos {
        self.end
    }

    /// Everything from the cursor to the end of the source, without
    /// advancing.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos.as_usize()..]
    }

    /// Span from `start` to the current cursor.
    ///
    /// `start` is typically a [`position()`](Self::position) snapshot taken
    /// before a run of consumption calls.
    #[inline]
    pub fn span_from(&self, start: Pos) -> Span {
        Span::new(start, self.pos)
    }

    /// Extract the text of a span of this scanner's source.
    ///
    /// # Contract
    ///
    /// Both endpoints must come from this scanner (or be otherwise valid
    /// `char`-boundary positions within the source); violations trap.
    #[inline]
    pub fn slice(&self, span: Span) -> &'a str {
        debug_assert!(
            span.end <= self.end,
            "span end {} exceeds source length {}",
            span.end,
            self.end
        );
        &self.source[span.start.as_usize()..span.end.as_usize()]
    }

    // ─── Cursor Primitives ──────────────────────────────────────────────

    /// Returns `true` if the cursor has reached the end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// The scalar at the cursor, without advancing.
    #[inline]
    pub fn peek(&self) -> Result<char, ScanError> {
        if self.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        Ok(self.peek_unchecked())
    }

    /// The scalar at the cursor, without advancing.
    ///
    /// # Contract
    ///
    /// The caller must have established `!is_at_end()`; violation traps.
    #[inline]
    pub fn peek_unchecked(&self) -> char {
        debug_assert!(!self.is_at_end(), "peek_unchecked at end of input");
        match self.rest().chars().next() {
            Some(c) => c,
            None => panic!("peek_unchecked called with the cursor at end of input"),
        }
    }

    /// The `n`-th scalar ahead of the cursor, without advancing.
    ///
    /// `peek_nth(0)` sees the same scalar as [`peek`](Self::peek). Returns
    /// `None` when fewer than `n + 1` scalars remain.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Move the cursor forward by exactly one scalar.
    ///
    /// The cursor is unchanged on failure.
    #[inline]
    pub fn advance(&mut self) -> Result<(), ScanError> {
        if self.is_at_end() {
            return Err(ScanError::EndOfInput);
        }
        self.advance_unchecked();
        Ok(())
    }

    /// Move the cursor forward by exactly one scalar.
    ///
    /// Steps by the UTF-8 width of the current lead byte, so no full
    /// decode is needed.
    ///
    /// # Contract
    ///
    /// The caller must have established `!is_at_end()`; violation traps.
    #[inline]
    pub fn advance_unchecked(&mut self) {
        debug_assert!(!self.is_at_end(), "advance_unchecked at end of input");
        let width = utf8_char_width(self.source.as_bytes()[self.pos.as_usize()]);
        self.pos = Pos::from_usize(self.pos.as_usize() + width);
    }

    /// Consume and return the scalar at the cursor.
    ///
    /// The cursor advances only on success.
    #[inline]
    pub fn read(&mut self) -> Result<char, ScanError> {
        let c = self.peek()?;
        self.advance_unchecked();
        Ok(c)
    }

    /// Consume one scalar and require it to equal `atom`.
    ///
    /// On mismatch the offending scalar stays consumed: a retrying caller
    /// does not see the same scalar again, which keeps naive
    /// error-recovery loops from spinning. [`ScanError::InvalidCharacter`]
    /// carries both scalars for diagnostics.
    pub fn expect(&mut self, atom: char) -> Result<(), ScanError> {
        let found = self.read()?;
        if found == atom {
            Ok(())
        } else {
            Err(ScanError::InvalidCharacter {
                expected: atom,
                found,
            })
        }
    }

    // ─── Predicate-Driven Consumption ───────────────────────────────────

    /// Advance while `pred` holds for the scalar at the cursor.
    ///
    /// Never fails: stops at end of input or at the first non-matching
    /// scalar. Zero matches is a no-op.
    #[inline]
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.peek_unchecked()) {
            self.advance_unchecked();
        }
    }

    /// Advance while `pred` does NOT hold for the scalar at the cursor.
    ///
    /// Stops at end of input or at the first matching scalar, leaving the
    /// cursor on that scalar.
    #[inline]
    pub fn advance_until(&mut self, pred: impl Fn(char) -> bool) {
        self.advance_while(|c| !pred(c));
    }

    /// Advance to the next occurrence of `target`, or to the end of input.
    ///
    /// Equivalent to `advance_until(|c| c == target)` with a
    /// memchr-accelerated path for ASCII targets (an ASCII byte in UTF-8
    /// always lands on a `char` boundary).
    pub fn advance_until_char(&mut self, target: char) {
        if let Ok(byte) = u8::try_from(u32::from(target)) {
            if byte.is_ascii() {
                match memchr::memchr(byte, self.rest().as_bytes()) {
                    Some(offset) => self.pos = Pos::from_usize(self.pos.as_usize() + offset),
                    None => self.pos = self.end,
                }
                return;
            }
        }
        self.advance_until(|c| c == target);
    }

    /// Consume scalars while `pred` holds and return the consumed
    /// substring (possibly empty).
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        self.advance_while(pred);
        self.slice(self.span_from(start))
    }

    /// Consume scalars while `pred` does NOT hold and return the consumed
    /// substring (possibly empty).
    pub fn consume_until(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        self.advance_until(pred);
        self.slice(self.span_from(start))
    }

    /// Consume and return everything from the cursor to the end of input.
    ///
    /// The cursor moves to the end; a second call returns the empty
    /// string.
    pub fn consume_remaining(&mut self) -> &'a str {
        let rest = self.rest();
        self.pos = self.end;
        rest
    }

    /// Advance past any run of Unicode whitespace at the cursor.
    #[inline]
    pub fn skip_whitespace(&mut self) {
        self.advance_while(classify::is_whitespace);
    }

    // ─── Lookahead & Literal Matching ───────────────────────────────────

    /// Returns `true` iff not at end and `pred` holds for the scalar at
    /// the cursor. End of input is `false`, never an error.
    #[inline]
    pub fn peek_matches(&self, pred: impl Fn(char) -> bool) -> bool {
        !self.is_at_end() && pred(self.peek_unchecked())
    }

    /// Returns `true` iff not at end and the scalar at the cursor equals
    /// `atom`.
    #[inline]
    pub fn next_equals(&self, atom: char) -> bool {
        self.peek_matches(|c| c == atom)
    }

    /// Attempt to match `literal` starting exactly at the cursor.
    ///
    /// On a full match the cursor advances past the matched span and this
    /// returns `true`; otherwise the cursor is unchanged and this returns
    /// `false`. The match is anchored: an occurrence of `literal` later in
    /// the remaining input never advances the cursor.
    ///
    /// Under [`Comparison::CaseInsensitive`] the cursor advances by the
    /// width of the scalars found in the source, which may differ from the
    /// literal's own byte length.
    pub fn advance_if_equals(&mut self, literal: &str, comparison: Comparison) -> bool {
        let mut matched_bytes = 0usize;
        let mut source_chars = self.rest().chars();
        for expected in literal.chars() {
            match source_chars.next() {
                Some(actual) if comparison.matches(expected, actual) => {
                    matched_bytes += actual.len_utf8();
                }
                _ => return false,
            }
        }
        self.pos = Pos::from_usize(self.pos.as_usize() + matched_bytes);
        true
    }

    // ─── Numeric Literal Extraction ─────────────────────────────────────

    /// Consume a maximal ASCII digit run and parse it as base-10 `u64`.
    ///
    /// Best-effort consume, then validate: the cursor ends past the
    /// consumed digits whether or not the value fits, so a failed parse
    /// does not stall a scanning loop. An empty run and an overflowing run
    /// both yield [`ScanError::InvalidNumber`].
    pub fn parse_int(&mut self, skip_leading_whitespace: bool) -> Result<u64, ScanError> {
        if skip_leading_whitespace {
            self.skip_whitespace();
        }
        let digits = self.consume_while(classify::is_digit);
        match accumulate_decimal(digits) {
            Some(value) => Ok(value),
            None => Err(ScanError::InvalidNumber {
                raw: digits.to_owned(),
            }),
        }
    }

    /// Consume a maximal ASCII digit run and return it as a substring,
    /// with no numeric conversion.
    ///
    /// Unlike [`parse_int`](Self::parse_int), this fails up front: if the
    /// scalar at the cursor (after the optional whitespace skip) is not a
    /// digit, the cursor does not move and
    /// [`ScanError::UnexpectedCharacter`] is returned.
    pub fn parse_int_str(&mut self, skip_leading_whitespace: bool) -> Result<&'a str, ScanError> {
        if skip_leading_whitespace {
            self.skip_whitespace();
        }
        if !self.peek_matches(classify::is_digit) {
            return Err(ScanError::UnexpectedCharacter {
                expected: "a digit",
                found: self.peek().ok(),
            });
        }
        Ok(self.consume_while(classify::is_digit))
    }

    /// Consume a floating-point literal of the form `digit+ ('.' digit+)?`
    /// and return it as a substring, with no numeric conversion.
    ///
    /// If the first scalar is not a digit the cursor does not move. If a
    /// `.` is consumed and no digit follows, the `.` stays consumed (see
    /// the module docs on consumed-on-failure cases) and
    /// [`ScanError::UnexpectedCharacter`] is returned.
    pub fn parse_float_str(&mut self, skip_leading_whitespace: bool) -> Result<&'a str, ScanError> {
        if skip_leading_whitespace {
            self.skip_whitespace();
        }
        let start = self.pos;
        if !self.peek_matches(classify::is_digit) {
            return Err(ScanError::UnexpectedCharacter {
                expected: "a digit",
                found: self.peek().ok(),
            });
        }
        self.advance_while(classify::is_digit);
        if self.next_equals('.') {
            self.advance_unchecked();
            if !self.peek_matches(classify::is_digit) {
                return Err(ScanError::UnexpectedCharacter {
                    expected: "a digit after the decimal point",
                    found: self.peek().ok(),
                });
            }
            self.advance_while(classify::is_digit);
        }
        Ok(self.slice(self.span_from(start)))
    }
}

/// Accumulate an ASCII digit run as base-10 `u64`.
///
/// Returns `None` for an empty run or on overflow. Checked arithmetic
/// rather than `str::parse` keeps the failure surface to exactly those two
/// cases.
fn accumulate_decimal(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(10)?;
        value = value.checked_mul(10)?.checked_add(u64::from(digit))?;
    }
    Some(value)
}
