//! Minimal read-only element tree built with quick-xml
//!
//! POM lookups are "all descendants named X" queries, so the document is
//! loaded once into a small owned tree instead of being streamed.
//! Element names are local names; namespace prefixes are dropped.

use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// An XML element with its children and direct text content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub children: Vec<Element>,
    text: String,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            children: Vec::new(),
            text: String::new(),
        }
    }

    /// Concatenated text of this element and all its descendants, trimmed
    pub fn value(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out.trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All elements with the given name in pre-order, this element included
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect_descendants(name, found);
        }
    }
}

/// Parse a document into its root element
pub fn parse_document(content: &str) -> Result<Element, String> {
    // Text is kept untrimmed: quick-xml splits it around entity references.
    let mut reader = Reader::from_str(content);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| format!("at position {}: {}", reader.error_position(), e))?;

        match event {
            Event::Start(ref e) => stack.push(Element::from_start(e)),
            Event::Empty(ref e) => {
                let element = Element::from_start(e);
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| "unexpected closing tag".to_string())?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                let raw = e.decode().map_err(|e| e.to_string())?;
                let text = unescape(&raw)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| raw.into_owned());
                push_text(&mut stack, &text);
            }
            Event::CData(ref e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                push_text(&mut stack, &text);
            }
            Event::GeneralRef(ref e) => {
                let name = e.decode().map_err(|e| e.to_string())?;
                let resolved = resolve_reference(&name)
                    .ok_or_else(|| format!("unknown entity reference '&{};'", name))?;
                push_text(&mut stack, &resolved);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err("unexpected end of document: unclosed elements".to_string());
    }

    root.ok_or_else(|| "document has no root element".to_string())
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), String> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err("multiple root elements".to_string()),
    }
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) {
    if let Some(current) = stack.last_mut() {
        current.text.push_str(text);
    }
}

fn resolve_reference(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }
    resolve_predefined_entity(name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_elements() {
        let root = parse_document("<a><b>one</b><c><b>two</b></c></a>").unwrap();
        assert_eq!(root.name, "a");
        assert_eq!(root.children.len(), 2);
        let bs: Vec<String> = root.descendants("b").iter().map(|b| b.value()).collect();
        assert_eq!(bs, vec!["one", "two"]);
    }

    #[test]
    fn test_descendants_include_self() {
        let root = parse_document("<b><b>inner</b></b>").unwrap();
        assert_eq!(root.descendants("b").len(), 2);
    }

    #[test]
    fn test_local_names_drop_prefix() {
        let root =
            parse_document(r#"<p:project xmlns:p="urn:x"><p:version>1</p:version></p:project>"#)
                .unwrap();
        assert_eq!(root.name, "project");
        assert_eq!(root.child("version").unwrap().value(), "1");
    }

    #[test]
    fn test_value_concatenates_descendant_text() {
        let root = parse_document("<a>x<b>y</b></a>").unwrap();
        assert_eq!(root.value(), "xy");
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = parse_document("<a><b>A&amp;B&#33;</b><c><![CDATA[<raw>]]></c></a>").unwrap();
        assert_eq!(root.child("b").unwrap().value(), "A&B!");
        assert_eq!(root.child("c").unwrap().value(), "<raw>");
    }

    #[test]
    fn test_entity_keeps_surrounding_spaces() {
        let root = parse_document("<a><b>\n   A &amp; B  \n</b><c>x &lt; &gt; y</c></a>").unwrap();
        assert_eq!(root.child("b").unwrap().value(), "A & B");
        assert_eq!(root.child("c").unwrap().value(), "x < > y");
    }

    #[test]
    fn test_indented_value_is_trimmed() {
        let root = parse_document("<a>\n  <version>\n    1.2.3\n  </version>\n</a>").unwrap();
        assert_eq!(root.child("version").unwrap().value(), "1.2.3");
    }

    #[test]
    fn test_empty_element() {
        let root = parse_document("<a><version/></a>").unwrap();
        assert_eq!(root.child("version").unwrap().value(), "");
    }

    #[test]
    fn test_children_named() {
        let root = parse_document("<m><module>a</module><x/><module>b</module></m>").unwrap();
        let names: Vec<String> = root.children_named("module").map(|m| m.value()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_document("<a><b></a>").is_err());
        assert!(parse_document("<a>").is_err());
        assert!(parse_document("").is_err());
    }
}
