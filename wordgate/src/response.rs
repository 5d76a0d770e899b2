//! Typed view of the gtx translation response
//!
//! The endpoint answers with an undocumented nested array, for example:
//!
//! ```text
//! [[["house","ev",null,null,10]],null,"tr",null,null,null,1,[],[["tr"],null,[1],["tr"]]]
//! ```
//!
//! The first element holds one array per translated sentence, and the first
//! element of each sentence array is the translated fragment. The body is
//! parsed into a small [`Node`] tree and walked with explicit shape checks;
//! any shape the walk inspects and does not recognise yields
//! [`TranslateError::MalformedResponse`].

use crate::error::{TranslateError, TranslateResult};
use serde_json::Value;

/// A JSON value reduced to the variants the extraction cares about
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Array(Vec<Node>),
    Text(String),
    Null,
    /// Numbers, booleans and objects. Present in real responses but never
    /// read by the walk.
    Other,
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::String(s) => Node::Text(s),
            Value::Null => Node::Null,
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => Node::Other,
        }
    }
}

impl Node {
    fn kind(&self) -> &'static str {
        match self {
            Node::Array(_) => "array",
            Node::Text(_) => "string",
            Node::Null => "null",
            Node::Other => "scalar or object",
        }
    }

    fn into_array(self, what: &str) -> TranslateResult<Vec<Node>> {
        match self {
            Node::Array(items) => Ok(items),
            other => Err(TranslateError::MalformedResponse(format!(
                "expected {} to be an array, found {}",
                what,
                other.kind()
            ))),
        }
    }
}

/// Parse a response body into a [`Node`] tree
pub fn parse_body(body: &str) -> TranslateResult<Node> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;
    Ok(Node::from(value))
}

/// Extract the translated fragment from a response body
///
/// Walks the sentence arrays under the first top-level element and keeps the
/// first element of each. Every sentence overwrites the previous one, so only
/// the last sentence's fragment is returned. That matches the behaviour
/// existing clients rely on and is correct for single words; multi-sentence
/// input loses all but its last sentence.
///
/// # Errors
///
/// * `MalformedResponse` - body is not JSON, or a level the walk reads is not
///   the expected array/string
/// * `NoTranslation` - the top-level array is empty
pub fn extract_translation(body: &str) -> TranslateResult<String> {
    let top = parse_body(body)?.into_array("response")?;

    let Some(first) = top.into_iter().next() else {
        return Err(TranslateError::NoTranslation);
    };

    let mut fragment = String::new();
    for sentence in first.into_array("sentence list")? {
        let sentence = sentence.into_array("sentence")?;
        match sentence.into_iter().next() {
            Some(Node::Text(text)) => fragment = text,
            Some(other) => {
                return Err(TranslateError::MalformedResponse(format!(
                    "expected translated fragment to be a string, found {}",
                    other.kind()
                )));
            }
            None => {}
        }
    }

    Ok(fragment)
}
