//! Low-level character scanner for Tally's expression parser.
//!
//! This crate is standalone: it knows nothing about Tally's token set,
//! grammar, or report pipeline. It maintains a forward-only cursor over a
//! borrowed UTF-8 source and exposes the primitives a recognizer is built
//! from: checked and unchecked peek/advance, predicate-driven consumption,
//! anchored literal matching, and numeric literal extraction.
//!
//! The expression parser composes these into token recognizers; this
//! crate never interprets what it consumed. Scanning failures are
//! ordinary [`ScanError`] values; nothing here prints, logs, or aborts.
//!
//! # Example
//!
//! ```
//! use tally_scan_core::{classify, Comparison, Scanner};
//!
//! let mut scanner = Scanner::new("width = 120.5");
//! let name = scanner.consume_while(classify::is_letter);
//! assert_eq!(name, "width");
//!
//! scanner.skip_whitespace();
//! assert!(scanner.advance_if_equals("=", Comparison::Exact));
//!
//! let value = scanner.parse_float_str(true);
//! assert_eq!(value, Ok("120.5"));
//! assert!(scanner.is_at_end());
//! ```

pub mod classify;
mod error;
mod pos;
mod scanner;

pub use error::ScanError;
pub use pos::{Pos, Span};
pub use scanner::{Comparison, Scanner};
