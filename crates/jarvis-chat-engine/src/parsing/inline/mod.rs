//! # Inline Formatting
//!
//! Cursor-based inline parsing of a single line into styled [`Span`]s.
//!
//! ## Architecture
//!
//! Inline parsing runs on the text of one leaf line (paragraph, heading, list item,
//! table cell). At every byte position the parser tries, in order, an inline code
//! span, a bold run and an italic run; the first construct that closes wins, so the
//! leftmost opening delimiter always takes precedence.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Bold, Italic, Code)
//! - **`kinds`**: Inline-specific types with owned delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_inline()` main entry point with `try_parse_*` helpers
//! - **`strip`**: `strip_inline()` regex stripper used for plain-text output
//!
//! ## Unclosed delimiters
//!
//! A delimiter without a matching closer is emitted as literal text. A single `*`
//! touching another `*` never opens or closes italics, so an unterminated `**`
//! cannot be misread as nested emphasis.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod strip;
pub mod types;

pub use parser::parse_inline;
pub use strip::{strip_inline, strip_links};
pub use types::{Span, plain_text};
