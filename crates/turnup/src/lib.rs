//! # turnup
//!
//! Convert a restricted Markdown dialect to HTML.
//!
//! The dialect covers bold (`__`) and italic (`_`) emphasis, single-level
//! headers (`# `), inline links (`[name](url)`) and backslash escapes.
//! Parsing is total: malformed or ambiguous markup never fails, it degrades
//! to literal text.
//!
//! ## Example
//!
//! ```rust
//! use turnup::convert;
//!
//! assert_eq!(convert("__bold__"), "<strong>bold</strong>");
//! assert_eq!(convert("# _Set_ __of__ tokens"),
//!            "<h1><em>Set</em> <strong>of</strong> tokens</h1>");
//! assert_eq!(convert("_Hello world__"), "_Hello world__");
//! ```
//!
//! ## Example (service with options)
//!
//! ```rust
//! use turnup::{ConvertOptions, TurnupService};
//!
//! let service = TurnupService::with_options(ConvertOptions { max_nesting: 16 });
//! let html = service.convert("[docs](https://example.com)");
//! assert_eq!(html, "<a href=\"https://example.com\">docs</a>");
//! ```

mod markers;
mod parser;
mod service;

pub use service::{convert, parse, ConvertOptions, TurnupService};
pub use turnup_core::{render, AstError, Node};
