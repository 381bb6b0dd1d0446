//! # Wire Fragments
//!
//! `WireFragment` is an assembled piece of an output document: a named
//! element with attributes, optional text, an optional nil-reason
//! marker, and embedded child fragments in declaration order.
//!
//! A slot that is required by the wire schema but has no concrete value
//! yet is not omitted — it is marked explicitly nil with a reason token
//! via [`FragmentBuilder::nil_with_reason`]. On the XML rendering the
//! reason appears as a `nilReason` attribute.

use serde::{Deserialize, Serialize};

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use swire_core::CodecError;

/// An assembled element of a wire document.
///
/// Fields are private: producers go through [`FragmentBuilder`],
/// consumers through the read accessors. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireFragment {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    attributes: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    nil_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    children: Vec<WireFragment>,
}

impl WireFragment {
    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of a named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Nil-reason token, if the slot is explicitly nil.
    pub fn nil_reason(&self) -> Option<&str> {
        self.nil_reason.as_deref()
    }

    /// First child element with the given name.
    pub fn find(&self, name: &str) -> Option<&WireFragment> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a WireFragment> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All child elements in document order.
    pub fn children(&self) -> &[WireFragment] {
        &self.children
    }

    /// Materialize as a JSON value tree.
    ///
    /// Shape: `{"name": ..., "attributes": {...}, "nilReason": ...,
    /// "text": ..., "children": [...]}` with absent parts omitted.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut obj = serde_json::Map::new();
        obj.insert("name".to_string(), self.name.clone().into());
        if !self.attributes.is_empty() {
            let attrs: serde_json::Map<String, serde_json::Value> = self
                .attributes
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            obj.insert("attributes".to_string(), attrs.into());
        }
        if let Some(reason) = &self.nil_reason {
            obj.insert("nilReason".to_string(), reason.clone().into());
        }
        if let Some(text) = &self.text {
            obj.insert("text".to_string(), text.clone().into());
        }
        if !self.children.is_empty() {
            let children: Vec<serde_json::Value> =
                self.children.iter().map(WireFragment::to_json_value).collect();
            obj.insert("children".to_string(), children.into());
        }
        serde_json::Value::Object(obj)
    }

    /// Rebuild a fragment from its JSON materialization.
    ///
    /// Inverse of [`to_json_value`](Self::to_json_value). Unknown keys
    /// are rejected so malformed input fails loudly.
    ///
    /// # Errors
    ///
    /// `Decoding` for any value that does not follow the materialized
    /// shape.
    pub fn from_json_value(value: &serde_json::Value) -> Result<WireFragment, CodecError> {
        let obj = value
            .as_object()
            .ok_or_else(|| CodecError::decoding("fragment", "expected a JSON object"))?;
        let name = obj
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| CodecError::decoding("fragment", "missing name"))?
            .to_string();
        let bad = |detail: &str| CodecError::decoding(name.clone(), detail.to_string());

        let mut fragment = WireFragment {
            name: name.clone(),
            attributes: Vec::new(),
            nil_reason: None,
            text: None,
            children: Vec::new(),
        };
        for (key, value) in obj {
            match key.as_str() {
                "name" => {}
                "attributes" => {
                    let attrs = value
                        .as_object()
                        .ok_or_else(|| bad("attributes must be an object"))?;
                    for (k, v) in attrs {
                        let v = v
                            .as_str()
                            .ok_or_else(|| bad("attribute values must be strings"))?;
                        fragment.attributes.push((k.clone(), v.to_string()));
                    }
                }
                "nilReason" => {
                    let reason = value
                        .as_str()
                        .ok_or_else(|| bad("nilReason must be a string"))?;
                    fragment.nil_reason = Some(reason.to_string());
                }
                "text" => {
                    let text = value.as_str().ok_or_else(|| bad("text must be a string"))?;
                    fragment.text = Some(text.to_string());
                }
                "children" => {
                    let children = value
                        .as_array()
                        .ok_or_else(|| bad("children must be an array"))?;
                    for child in children {
                        fragment.children.push(WireFragment::from_json_value(child)?);
                    }
                }
                other => {
                    return Err(bad(&format!("unknown key {other:?}")));
                }
            }
        }
        Ok(fragment)
    }

    /// Materialize as XML text.
    ///
    /// Attributes render inline, the nil-reason as a `nilReason`
    /// attribute, and elements with no content self-close.
    pub fn to_xml_string(&self) -> Result<String, CodecError> {
        let mut writer = Writer::new(Vec::new());
        self.write_xml(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(|e| CodecError::Encoding {
            location: self.name.clone(),
            detail: format!("non-UTF8 XML output: {e}"),
        })
    }

    fn write_xml(&self, writer: &mut Writer<Vec<u8>>) -> Result<(), CodecError> {
        let xml_err = |e: quick_xml::Error| CodecError::Encoding {
            location: self.name.clone(),
            detail: format!("XML write failed: {e}"),
        };

        let mut start = BytesStart::new(self.name.as_str());
        for (k, v) in &self.attributes {
            start.push_attribute((k.as_str(), v.as_str()));
        }
        if let Some(reason) = &self.nil_reason {
            start.push_attribute(("nilReason", reason.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return writer.write_event(Event::Empty(start)).map_err(xml_err);
        }

        writer.write_event(Event::Start(start)).map_err(xml_err)?;
        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(xml_err)?;
        }
        for child in &self.children {
            child.write_xml(writer)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(self.name.as_str())))
            .map_err(xml_err)
    }
}

/// Consuming builder for [`WireFragment`].
#[derive(Debug)]
pub struct FragmentBuilder {
    fragment: WireFragment,
}

impl FragmentBuilder {
    /// Start an element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fragment: WireFragment {
                name: name.into(),
                attributes: Vec::new(),
                nil_reason: None,
                text: None,
                children: Vec::new(),
            },
        }
    }

    /// Add an attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fragment.attributes.push((name.into(), value.into()));
        self
    }

    /// Set text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.fragment.text = Some(text.into());
        self
    }

    /// Mark the element explicitly nil with a reason token.
    ///
    /// The slot stays present on the wire; only its value is absent.
    pub fn nil_with_reason(mut self, reason: impl Into<String>) -> Self {
        self.fragment.nil_reason = Some(reason.into());
        self
    }

    /// Embed a child fragment, preserving insertion order.
    pub fn child(mut self, child: WireFragment) -> Self {
        self.fragment.children.push(child);
        self
    }

    /// Embed a fragment inside a named wrapper element — the slot form
    /// used when a delegated sub-encode lands at a named position.
    pub fn slot(self, name: impl Into<String>, inner: WireFragment) -> Self {
        self.child(FragmentBuilder::new(name).child(inner).build())
    }

    /// Finish the element.
    pub fn build(self) -> WireFragment {
        self.fragment
    }
}
