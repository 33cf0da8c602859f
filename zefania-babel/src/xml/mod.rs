//! Generic XML-to-tree decoding
//!
//!     Bible dialects disagree on almost everything, so parsers do not walk the XML DOM
//!     directly. Instead the source is decoded into a loose, name-keyed tree in which
//!     attributes and child elements live side by side as named fields:
//!
//!         <book number="1"><chapter n="1"/><chapter n="2"/></book>
//!
//!     becomes an element with a `number` field (text) and a `chapter` field holding a
//!     list of two elements. A name that occurs once is stored bare, not wrapped in a list,
//!     which is why every extraction step goes through [`as_sequence`].
//!
//!     An element without attributes or child elements collapses to its text. Text is
//!     trimmed and inner whitespace runs collapse to a single space. Field names keep
//!     their source case; lookups ignore ASCII case.
//!
//!     Mixed content (`In the <w>beginning</w>.`) cannot be rebuilt from named fields, so
//!     elements also keep their child elements and raw text runs in document order, see
//!     [`XmlNode::children`].

use crate::error::FormatError;
use crate::sanitize::sanitize_prolog;

/// A decoded XML value.
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Text(String),
    Element(XmlElement),
    /// Repeated siblings sharing a name, in document order
    List(Vec<XmlNode>),
}

/// One entry of an element's content, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XmlChild<'a> {
    /// A raw text run, whitespace untouched
    Text(&'a str),
    /// A child element and its name
    Element(&'a str, &'a XmlNode),
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Text(String),
    /// Position of a child element: field index, then index within that field's list
    Field(usize, usize),
}

/// An element with attributes and children merged into ordered fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    fields: Vec<(String, XmlNode)>,
    content: Vec<Slot>,
    /// Text directly inside the element
    text: Option<String>,
    /// Text of the element and all of its descendants, in document order
    deep_text: Option<String>,
}

impl XmlElement {
    /// Store `value` under `name` and return where it landed (see [`Slot::Field`]).
    fn insert(&mut self, name: &str, value: XmlNode) -> (usize, usize) {
        match self.fields.iter().position(|(key, _)| key == name) {
            Some(index) => {
                let existing = &mut self.fields[index].1;
                let item = match existing {
                    XmlNode::List(items) => {
                        items.push(value);
                        items.len() - 1
                    }
                    other => {
                        let first = std::mem::replace(other, XmlNode::List(Vec::new()));
                        *other = XmlNode::List(vec![first, value]);
                        1
                    }
                };
                (index, item)
            }
            None => {
                self.fields.push((name.to_string(), value));
                (self.fields.len() - 1, 0)
            }
        }
    }

    fn child_element(&self, field: usize, item: usize) -> Option<XmlChild<'_>> {
        let (name, node) = self.fields.get(field)?;
        let node = match node {
            XmlNode::List(items) => items.get(item)?,
            single => single,
        };
        Some(XmlChild::Element(name.as_str(), node))
    }

    pub fn get(&self, name: &str) -> Option<&XmlNode> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }
}

impl XmlNode {
    /// Look up a field by name. Only elements have fields.
    pub fn get(&self, name: &str) -> Option<&XmlNode> {
        match self {
            XmlNode::Element(element) => element.get(name),
            _ => None,
        }
    }

    /// The first field present among `names`, tried in order.
    pub fn get_any(&self, names: &[&str]) -> Option<&XmlNode> {
        names.iter().find_map(|name| self.get(name))
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Direct text content. For a list, the text of its first item.
    pub fn text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(text.as_str()),
            XmlNode::Element(element) => element.text.as_deref(),
            XmlNode::List(items) => items.first().and_then(XmlNode::text),
        }
    }

    /// Text of the node and all of its descendants.
    pub fn deep_text(&self) -> Option<&str> {
        match self {
            XmlNode::Text(text) => Some(text.as_str()),
            XmlNode::Element(element) => element.deep_text.as_deref(),
            XmlNode::List(items) => items.first().and_then(XmlNode::deep_text),
        }
    }

    /// Text of the field `name`, if present and non-empty.
    pub fn field_text(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(XmlNode::text)
            .filter(|text| !text.is_empty())
    }

    /// The first non-empty text among the fields `names`, tried in order.
    pub fn field_text_any(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.field_text(name))
    }

    pub fn keys(&self) -> Vec<&str> {
        match self {
            XmlNode::Element(element) => element.keys().collect(),
            _ => Vec::new(),
        }
    }

    /// Child elements and text runs in document order. Attributes are not included.
    ///
    /// A text-only node yields its (already collapsed) text; a list yields nothing.
    pub fn children(&self) -> Vec<XmlChild<'_>> {
        match self {
            XmlNode::Text(text) if text.is_empty() => Vec::new(),
            XmlNode::Text(text) => vec![XmlChild::Text(text.as_str())],
            XmlNode::Element(element) => element
                .content
                .iter()
                .filter_map(|slot| match slot {
                    Slot::Text(text) => Some(XmlChild::Text(text.as_str())),
                    Slot::Field(field, item) => element.child_element(*field, *item),
                })
                .collect(),
            XmlNode::List(_) => Vec::new(),
        }
    }
}

/// Normalize "one node or a list of nodes" into a sequence.
pub fn as_sequence(node: &XmlNode) -> Vec<&XmlNode> {
    match node {
        XmlNode::List(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Decode XML text into a tree whose single field is the source root element.
pub fn decode(source: &str) -> Result<XmlNode, FormatError> {
    let source = sanitize_prolog(source);
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(&source, options)?;

    let root = doc.root_element();
    let mut top = XmlElement::default();
    let slot = top.insert(root.tag_name().name(), decode_element(root));
    top.content.push(Slot::Field(slot.0, slot.1));
    Ok(XmlNode::Element(top))
}

fn decode_element(node: roxmltree::Node) -> XmlNode {
    let mut element = XmlElement::default();

    for attr in node.attributes() {
        element.insert(attr.name(), XmlNode::Text(attr.value().to_string()));
    }

    let mut direct = String::new();
    for child in node.children() {
        if child.is_element() {
            let (field, item) = element.insert(child.tag_name().name(), decode_element(child));
            element.content.push(Slot::Field(field, item));
        } else if child.is_text() {
            let text = child.text().unwrap_or_default();
            direct.push_str(text);
            element.content.push(Slot::Text(text.to_string()));
        }
    }

    let direct = collapse_whitespace(&direct);
    if element.fields.is_empty() {
        return XmlNode::Text(direct);
    }

    let deep: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    let deep = collapse_whitespace(&deep);

    element.text = Some(direct).filter(|t| !t.is_empty());
    element.deep_text = Some(deep).filter(|t| !t.is_empty());
    XmlNode::Element(element)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
