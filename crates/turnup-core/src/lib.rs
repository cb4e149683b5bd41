//! turnup-core - markup AST and HTML rendering
//!
//! This crate provides the core data structures and HTML serialization for
//! the restricted Markdown dialect handled by `turnup`. The parser in the
//! `turnup` crate produces the node tree; this crate renders it.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──parse──▶ ┌───────────┐
//!                            │           │
//!                            │ Node Tree │ ──render──▶ HTML String
//!                            │           │
//!                            └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use turnup_core::{render, Node};
//!
//! let nodes = vec![
//!     Node::header(Node::text("Hello World")),
//!     Node::text("This is "),
//!     Node::bold(Node::text("bold")),
//!     Node::text(" text."),
//! ];
//!
//! let html = render(&nodes);
//! assert_eq!(html, "<h1>Hello World</h1>This is <strong>bold</strong> text.");
//! ```

mod ast;
mod render;

pub use ast::{AstError, Node};
pub use render::render;
