//! # Inline Kinds
//!
//! Each inline construct owns its delimiter constants so the parser and the
//! plain-text stripper agree on them.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
