//! Scanner error types.
//!
//! Every error here is recoverable: the scanner returns them as ordinary
//! `Result` values and never prints, logs, or aborts on its own. The
//! expression parser above this crate translates them into its own
//! diagnostics (with line/column rendering and suggestions).
//!
//! Misuse of the `_unchecked` primitives is not represented here; that is
//! programmer error in the calling parser, not malformed input, and traps
//! instead.

use thiserror::Error;

/// Recoverable scanning failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A checked peek/advance/read was issued with the cursor already at
    /// the end of input.
    ///
    /// Expected and non-fatal: callers use this to decide whether a
    /// grammar rule is complete.
    #[error("unexpected end of input")]
    EndOfInput,

    /// [`expect`](crate::Scanner::expect) consumed a scalar that differs
    /// from the required one.
    ///
    /// The offending scalar is already consumed when this is returned, so
    /// a retrying caller does not see it again.
    #[error("expected '{expected}', found '{found}'")]
    InvalidCharacter {
        /// The scalar the caller required.
        expected: char,
        /// The scalar actually consumed.
        found: char,
    },

    /// A required character class is absent at the cursor.
    #[error("expected {expected}, found {}", describe_found(.found))]
    UnexpectedCharacter {
        /// Description of what was required (e.g. `"a digit"`).
        expected: &'static str,
        /// The scalar at the cursor, or `None` at end of input.
        found: Option<char>,
    },

    /// A consumed digit run does not fit the integer type.
    ///
    /// Practically this means overflow: the digit predicate guarantees
    /// digit-only content, so no other conversion failure exists.
    #[error("integer literal `{raw}` out of range")]
    InvalidNumber {
        /// The digit run as consumed from the source.
        raw: String,
    },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("'{c}'"),
        None => "end of input".to_owned(),
    }
}
