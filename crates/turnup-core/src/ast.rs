//! Markup Abstract Syntax Tree
//!
//! This module defines the node tree produced by parsing the restricted
//! Markdown dialect. The tree is immutable once built: the parser creates
//! nodes bottom-up and the renderer only reads them.

/// Error raised by the fallible node constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// A link was constructed with an empty or whitespace-only URL.
    #[error("link URL must not be empty or whitespace-only")]
    BlankUrl,
}

/// A node of the markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Plain text, emitted verbatim
    Text(String),

    /// Strong emphasis (bold) around a single child
    Bold(Box<Node>),

    /// Emphasis (italic) around a single child
    Italic(Box<Node>),

    /// Single-level header around a single child
    Header(Box<Node>),

    /// Link with display content and a non-blank URL
    Link { content: Box<Node>, url: String },

    /// Ordered siblings produced when a construct body parsed to more
    /// than one node; renders its children with no wrapper of its own
    Group(Vec<Node>),
}

impl Node {
    /// Create a text leaf
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create a bold node around `inner`
    pub fn bold(inner: Node) -> Self {
        Node::Bold(Box::new(inner))
    }

    /// Create an italic node around `inner`
    pub fn italic(inner: Node) -> Self {
        Node::Italic(Box::new(inner))
    }

    /// Create a header node around `inner`
    pub fn header(inner: Node) -> Self {
        Node::Header(Box::new(inner))
    }

    /// Create a group of sibling nodes
    pub fn group(children: Vec<Node>) -> Self {
        Node::Group(children)
    }

    /// Create a link node.
    ///
    /// The URL is used verbatim by the renderer, so it must carry at least
    /// one non-whitespace character.
    pub fn link(content: Node, url: impl Into<String>) -> Result<Self, AstError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(AstError::BlankUrl);
        }
        Ok(Node::Link {
            content: Box::new(content),
            url,
        })
    }

    /// Estimate the rendered HTML length of this node (for buffer sizing)
    pub fn html_len(&self) -> usize {
        match self {
            Node::Text(text) => text.len(),
            Node::Bold(inner) => inner.html_len() + "<strong></strong>".len(),
            Node::Italic(inner) => inner.html_len() + "<em></em>".len(),
            Node::Header(inner) => inner.html_len() + "<h1></h1>".len(),
            Node::Link { content, url } => {
                content.html_len() + url.len() + "<a href=\"\"></a>".len()
            }
            Node::Group(children) => children.iter().map(|c| c.html_len()).sum(),
        }
    }
}
