use xmltree::{Element, XMLNode};

/// Parses a response document into an element tree.
pub(crate) fn parse_xml(xml: &[u8]) -> eyre::Result<Element> {
    Ok(Element::parse(xml)?)
}

/// Writes an element tree as a UTF-8 XML document, declaration included.
pub(crate) fn write_xml(root: &Element) -> eyre::Result<Vec<u8>> {
    let mut buf = Vec::new();
    root.write(&mut buf)?;
    Ok(buf)
}

/// Follows `path` one child tag at a time.
pub(crate) fn find_path<'a>(root: &'a Element, path: &[&str]) -> Option<&'a Element> {
    path.iter().try_fold(root, |el, name| el.get_child(*name))
}

/// Text content of an element; `None` for `<Empty/>`.
///
/// Non-blank text is returned exactly as sent, surrounding whitespace included. The parser drops
/// whitespace-only text, so `<Blank>   </Blank>` also reads as `None`.
pub(crate) fn element_text(el: &Element) -> Option<String> {
    el.get_text().map(|text| text.into_owned())
}

/// Appends `child` to `parent`.
pub(crate) fn push(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}

/// Leaf element whose text is `text`, or an empty element when there is none.
pub(crate) fn text_element(name: &str, text: Option<&str>) -> Element {
    let mut el = Element::new(name);
    if let Some(text) = text {
        el.children.push(XMLNode::Text(text.to_owned()));
    }
    el
}

/// Appends [`text_element`] to `parent`.
pub(crate) fn push_text(parent: &mut Element, name: &str, text: Option<&str>) {
    push(parent, text_element(name, text));
}

/// Appends a leaf element carrying the literal `true`/`false`.
pub(crate) fn push_bool(parent: &mut Element, name: &str, value: bool) {
    push_text(parent, name, Some(if value { "true" } else { "false" }));
}
