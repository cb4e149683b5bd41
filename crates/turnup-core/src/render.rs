//! HTML rendering of the markup tree
//!
//! Walks the node tree depth-first and emits HTML into an owned buffer.
//! Text is appended verbatim; the dialect performs no HTML escaping.

use crate::ast::Node;

/// Render a parsed node sequence to an HTML string.
///
/// The walk is total: every tree renders to completion. Each call owns its
/// output buffer, so independent renders can run on independent threads.
pub fn render(nodes: &[Node]) -> String {
    let capacity: usize = nodes.iter().map(|n| n.html_len()).sum();
    let mut output = String::with_capacity(capacity);
    for node in nodes {
        render_node(node, &mut output);
    }
    output
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),

        Node::Bold(inner) => {
            out.push_str("<strong>");
            render_node(inner, out);
            out.push_str("</strong>");
        }

        Node::Italic(inner) => {
            out.push_str("<em>");
            render_node(inner, out);
            out.push_str("</em>");
        }

        Node::Header(inner) => {
            out.push_str("<h1>");
            render_node(inner, out);
            out.push_str("</h1>");
        }

        Node::Link { content, url } => {
            out.push_str("<a href=\"");
            out.push_str(url);
            out.push_str("\">");
            render_node(content, out);
            out.push_str("</a>");
        }

        Node::Group(children) => {
            for child in children {
                render_node(child, out);
            }
        }
    }
}
