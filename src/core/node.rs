//! Document tree nodes.
//!
//! A document is authored as nested tuples:
//!
//! ```text
//! ["a", {"href": "guide/start"}, "Get started"]
//!  tag   props (object | null)   ...children
//! ```
//!
//! Text children are plain JSON strings. Children order is significant and is
//! preserved by every rewrite.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Insertion-ordered prop mapping.
pub type Props = serde_json::Map<String, Value>;

/// Errors raised while decoding a document tree from JSON.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    #[error("element array is empty, expected at least a tag name")]
    EmptyElement,

    #[error("element tag must be a string, found {0}")]
    InvalidTag(&'static str),

    #[error("expected an element array or a text string, found {0}")]
    UnexpectedValue(&'static str),
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Node {
    Text(String),
    Element(Element),
}

/// A tagged node: `(tag, props | null, ...children)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub props: Option<Props>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create an element node.
    pub fn element(tag: impl Into<String>, props: Option<Props>, children: Vec<Node>) -> Self {
        Self::Element(Element::new(tag, props, children))
    }

    /// Tag name, `None` for text nodes.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(elem) => Some(&elem.tag),
            Self::Text(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(elem) => Some(elem),
            Self::Text(_) => None,
        }
    }

    /// Mutable children slice (empty for text nodes).
    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Self::Element(elem) => &mut elem.children,
            Self::Text(_) => &mut [],
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>, props: Option<Props>, children: Vec<Node>) -> Self {
        Self {
            tag: tag.into(),
            props,
            children,
        }
    }
}

/// Read a non-empty string value out of a props mapping.
pub fn str_prop<'a>(props: &'a Props, name: &str) -> Option<&'a str> {
    props
        .get(name)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

// ============================================================================
// JSON conversion
// ============================================================================

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Node {
    type Error = NodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Array(items) => Element::try_from(items).map(Self::Element),
            other => Err(NodeError::UnexpectedValue(value_kind(&other))),
        }
    }
}

impl TryFrom<Vec<Value>> for Element {
    type Error = NodeError;

    fn try_from(items: Vec<Value>) -> Result<Self, Self::Error> {
        let mut items = items.into_iter();

        let tag = match items.next() {
            Some(Value::String(tag)) => tag,
            Some(other) => return Err(NodeError::InvalidTag(value_kind(&other))),
            None => return Err(NodeError::EmptyElement),
        };

        // A filled second slot that is not an object becomes the first child,
        // and the element gets empty props
        let (props, first_child) = match items.next() {
            None | Some(Value::Null) => (None, None),
            Some(Value::Object(map)) => (Some(map), None),
            Some(other) => (Some(Props::new()), Some(other)),
        };

        let children = first_child
            .into_iter()
            .chain(items)
            .map(Node::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            tag,
            props,
            children,
        })
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Text(text) => Value::String(text),
            Node::Element(elem) => elem.into(),
        }
    }
}

impl From<Element> for Value {
    fn from(elem: Element) -> Self {
        let mut items = Vec::with_capacity(elem.children.len() + 2);
        items.push(Value::String(elem.tag));
        items.push(elem.props.map_or(Value::Null, Value::Object));
        items.extend(elem.children.into_iter().map(Value::from));
        Value::Array(items)
    }
}

// ============================================================================
// Tests
// ============================================================================
