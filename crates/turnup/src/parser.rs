//! Recursive-descent parser for the markup dialect.
//!
//! The driver classifies the character at the cursor, dispatches to a
//! construct sub-parser and advances; construct bodies recurse back into the
//! driver. Malformed or ambiguous markup always degrades to literal text, so
//! parsing has no failure mode for any input.

use turnup_core::Node;

use crate::markers;
use crate::service::ConvertOptions;

const ITALIC_MARKER: &str = "_";
const BOLD_MARKER: &str = "__";
const HEADER_MARKER: &str = "# ";

/// Parse a full text into an ordered sequence of top-level nodes.
pub(crate) fn parse(text: &str, options: &ConvertOptions) -> Vec<Node> {
    let chars: Vec<char> = text.chars().collect();
    parse_span(&chars, options, 0)
}

fn parse_span(chars: &[char], options: &ConvertOptions, depth: usize) -> Vec<Node> {
    if chars.is_empty() {
        return Vec::new();
    }
    if depth >= options.max_nesting {
        // Nesting guard: spans beyond the limit stay literal.
        return vec![Node::Text(chars.iter().collect())];
    }

    let mut nodes = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        pos = if markers::is_escape_start(chars, pos) {
            parse_escape(chars, pos, &mut nodes)
        } else if markers::is_header_start(chars, pos) {
            parse_header(chars, pos, &mut nodes, options, depth)
        } else if markers::is_link_start(chars, pos) {
            parse_link(chars, pos, &mut nodes, options, depth)
        } else if markers::is_bold_start(chars, pos) {
            parse_emphasis(chars, pos, &mut nodes, options, depth, BOLD_MARKER)
        } else if markers::is_italic_start(chars, pos) {
            parse_emphasis(chars, pos, &mut nodes, options, depth, ITALIC_MARKER)
        } else {
            parse_text(chars, pos, &mut nodes)
        };
    }
    nodes
}

fn parse_escape(chars: &[char], pos: usize, nodes: &mut Vec<Node>) -> usize {
    nodes.push(Node::Text(chars[pos + 1].to_string()));
    pos + 2
}

fn parse_header(
    chars: &[char],
    pos: usize,
    nodes: &mut Vec<Node>,
    options: &ConvertOptions,
    depth: usize,
) -> usize {
    let body_start = pos + HEADER_MARKER.len();
    let body_end = find_line_end(chars, body_start);
    let inner = parse_span(&chars[body_start..body_end], options, depth + 1);
    nodes.push(Node::header(wrap_inner(inner)));
    body_end + 1
}

fn parse_link(
    chars: &[char],
    pos: usize,
    nodes: &mut Vec<Node>,
    options: &ConvertOptions,
    depth: usize,
) -> usize {
    match try_parse_link(chars, pos, options, depth) {
        Some((node, next)) => {
            nodes.push(node);
            next
        }
        None => {
            // Unterminated or blank-URL links stay a literal bracket.
            nodes.push(Node::text("["));
            pos + 1
        }
    }
}

/// First-occurrence matching: the first `]`, the first `(` after it and the
/// first `)` after that delimit the link; nested brackets are not balanced.
fn try_parse_link(
    chars: &[char],
    pos: usize,
    options: &ConvertOptions,
    depth: usize,
) -> Option<(Node, usize)> {
    let close_bracket = find_char(chars, pos + 1, ']')?;
    let open_paren = find_char(chars, close_bracket + 1, '(')?;
    let close_paren = find_char(chars, open_paren + 1, ')')?;

    let url: String = chars[open_paren + 1..close_paren].iter().collect();
    let content = wrap_inner(parse_span(
        &chars[pos + 1..close_bracket],
        options,
        depth + 1,
    ));

    let node = Node::link(content, url).ok()?;
    Some((node, close_paren + 1))
}

fn parse_emphasis(
    chars: &[char],
    pos: usize,
    nodes: &mut Vec<Node>,
    options: &ConvertOptions,
    depth: usize,
    marker: &str,
) -> usize {
    let marker_len = marker.len();
    let body_start = pos + marker_len;

    // A marker that ends the input, touches whitespace or digits opens
    // nothing and stays literal.
    if body_start >= chars.len()
        || markers::is_flanked_by_digits(chars, pos, marker_len)
        || chars[body_start].is_whitespace()
    {
        nodes.push(Node::text(marker));
        return body_start;
    }

    let Some(body_end) = markers::find_closing_marker(chars, body_start, '_', marker_len) else {
        nodes.push(Node::text(marker));
        return body_start;
    };

    let mut inner = parse_span(&chars[body_start..body_end], options, depth + 1);
    if marker_len == ITALIC_MARKER.len() {
        demote_bold_children(&mut inner);
        nodes.push(Node::italic(wrap_inner(inner)));
    } else {
        nodes.push(Node::bold(wrap_inner(inner)));
    }
    body_end + marker_len
}

/// Bold does not render inside italic: a direct bold child whose body is a
/// plain text leaf is rewritten back to its literal `__…__` source. A bold
/// with a composite body keeps its parsed form.
fn demote_bold_children(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        if let Node::Bold(inner) = node {
            if let Node::Text(text) = inner.as_ref() {
                *node = Node::Text(format!("{BOLD_MARKER}{text}{BOLD_MARKER}"));
            }
        }
    }
}

fn parse_text(chars: &[char], pos: usize, nodes: &mut Vec<Node>) -> usize {
    let mut end = pos;
    while end < chars.len() && !markers::is_marker(chars[end]) {
        // Stop at a real escape so the driver can process it; a backslash
        // escaping nothing is ordinary content.
        if markers::is_escape_start(chars, end) {
            break;
        }
        end += 1;
    }

    // A marker character that opened no construct is consumed as itself.
    if end == pos {
        end += 1;
    }

    nodes.push(Node::Text(chars[pos..end].iter().collect()));
    end
}

fn find_line_end(chars: &[char], start: usize) -> usize {
    find_char(chars, start, '\n').unwrap_or(chars.len())
}

fn find_char(chars: &[char], start: usize, target: char) -> Option<usize> {
    chars[start..]
        .iter()
        .position(|&c| c == target)
        .map(|offset| start + offset)
}

/// A body that parses to exactly one node is used unwrapped; anything else
/// becomes a group.
fn wrap_inner(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1 {
        nodes.remove(0)
    } else {
        Node::Group(nodes)
    }
}
