//! In-memory tree of a draw.io XML document.
//!
//! A [`Document`] owns the source text and the element tree built from it.
//! Every [`Node`] keeps its attributes in document order and the span of its
//! start tag, which diagnostics point at.

use indexmap::IndexMap;
use log::debug;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, ReadError},
    span::Span,
};

/// An XML element with its attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
    span: Span,
}

impl Node {
    /// Returns the element name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the value of attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Iterates over all attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the child elements.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns the span of this element's start tag.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Iterates over this node and all nodes below it in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A parsed draw.io document together with its source text.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Node,
}

impl Document {
    /// Parses `source` into a document.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Parse`] carrying an [`ErrorCode::E002`]
    /// diagnostic if the text is not well-formed XML.
    pub fn from_source(source: String) -> Result<Self, ReadError> {
        match parse_tree(&source) {
            Ok(root) => Ok(Self { source, root }),
            Err(err) => Err(ReadError::new_parse_error(err, source)),
        }
    }

    /// Returns the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the root element.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns `true` if the root element is flagged `compressed="true"`.
    pub fn is_compressed(&self) -> bool {
        self.root.attribute("compressed") == Some("true")
    }
}

/// Builds the element tree of an XML text.
///
/// Text, comments, processing instructions and the XML declaration are
/// skipped; only elements and their attributes are kept.
pub fn parse_tree(source: &str) -> Result<Node, ParseError> {
    let mut reader = Reader::from_str(source);
    let mut open: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        let start = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(ref tag)) => {
                let span = Span::new(start..reader.buffer_position());
                open.push(element(tag, span)?);
            }
            Ok(Event::Empty(ref tag)) => {
                let span = Span::new(start..reader.buffer_position());
                let node = element(tag, span)?;
                attach(node, &mut open, &mut root)?;
            }
            Ok(Event::End(_)) => {
                let Some(node) = open.pop() else {
                    return Err(malformed("closing tag without an opening tag", Span::at(start)));
                };
                attach(node, &mut open, &mut root)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(malformed(
                    format!("invalid XML: {err}"),
                    Span::at(reader.buffer_position()),
                ));
            }
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Diagnostic::error(
            ErrorCode::E002,
            format!("element `{}` is never closed", unclosed.tag),
        )
        .with_label(unclosed.span, "opened here")
        .into());
    }

    let root = root.ok_or_else(|| {
        ParseError::from(
            Diagnostic::error(ErrorCode::E002, "document has no root element")
                .with_help("draw.io files start with an `<mxfile>` element"),
        )
    })?;

    debug!(root_tag = root.tag.as_str(), elements_count = root.descendants().count(); "Document parsed");
    Ok(root)
}

fn element(tag: &BytesStart<'_>, span: Span) -> Result<Node, ParseError> {
    let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();

    let mut attributes = IndexMap::new();
    for attribute in tag.attributes() {
        let attribute = attribute
            .map_err(|err| malformed(format!("invalid attribute on `{name}`: {err}"), span))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|err| malformed(format!("invalid value for `{key}`: {err}"), span))?
            .into_owned();
        attributes.insert(key, value);
    }

    Ok(Node {
        tag: name,
        attributes,
        children: Vec::new(),
        span,
    })
}

fn attach(node: Node, open: &mut [Node], root: &mut Option<Node>) -> Result<(), ParseError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(node);
        return Ok(());
    }

    if root.is_some() {
        return Err(Diagnostic::error(
            ErrorCode::E002,
            format!("unexpected second root element `{}`", node.tag),
        )
        .with_label(node.span, "second root")
        .into());
    }

    *root = Some(node);
    Ok(())
}

fn malformed(message: impl Into<String>, span: Span) -> ParseError {
    Diagnostic::error(ErrorCode::E002, message)
        .with_label(span, "here")
        .into()
}
