use serde::{Deserialize, Serialize};

/// One element of a replacement result.
///
/// `Text` holds literal, unmatched text. `Item` holds either a value produced
/// by a replacer or an opaque element passed through from a mixed source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node<T> {
    Text(String),
    Item(T),
}

impl<T> Node<T> {
    pub fn text<S: Into<String>>(value: S) -> Self {
        Node::Text(value.into())
    }

    pub fn item(value: T) -> Self {
        Node::Item(value)
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, Node::Item(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text.as_str()),
            Node::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            Node::Text(_) => None,
            Node::Item(item) => Some(item),
        }
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Node::Text(_) => None,
            Node::Item(item) => Some(item),
        }
    }

    pub fn map_item<U, F>(self, f: F) -> Node<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Node::Text(text) => Node::Text(text),
            Node::Item(item) => Node::Item(f(item)),
        }
    }
}

impl<T> From<&str> for Node<T> {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl<T> From<String> for Node<T> {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

/// Concatenates the text spans of `nodes`, skipping items.
pub fn collect_text<T>(nodes: &[Node<T>]) -> String {
    let capacity = nodes
        .iter()
        .filter_map(Node::as_text)
        .map(str::len)
        .sum();
    let mut out = String::with_capacity(capacity);
    for text in nodes.iter().filter_map(Node::as_text) {
        out.push_str(text);
    }
    out
}

/// Input accepted by the replace entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<T> {
    Text(String),
    Mixed(Vec<Node<T>>),
}

impl<T> Source<T> {
    pub fn is_empty(&self) -> bool {
        match self {
            Source::Text(text) => text.is_empty(),
            Source::Mixed(nodes) => nodes.is_empty(),
        }
    }

    pub(crate) fn into_nodes(self) -> Vec<Node<T>> {
        match self {
            Source::Text(text) => vec![Node::Text(text)],
            Source::Mixed(nodes) => nodes,
        }
    }
}

impl<T> From<&str> for Source<T> {
    fn from(value: &str) -> Self {
        Source::Text(value.to_string())
    }
}

impl<T> From<String> for Source<T> {
    fn from(value: String) -> Self {
        Source::Text(value)
    }
}

impl<T> From<Vec<Node<T>>> for Source<T> {
    fn from(value: Vec<Node<T>>) -> Self {
        Source::Mixed(value)
    }
}
