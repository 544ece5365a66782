//! HTML tag construction.
use super::attributes::Attributes;

/// Elements that never carry content or a closing tag.
static VOID_ELEMENTS: phf::Set<&'static str> = phf::phf_set! {
    "area", "base", "br", "col", "command", "embed", "hr", "img",
    "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
};

/// Whether `name` is a void element (`<br>`, `<img>`, ...).
#[inline]
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(name)
}

/// Render a complete element: `<name attrs>content</name>`.
///
/// Content is emitted verbatim; attribute values are escaped. Void elements
/// render without content or a closing tag.
///
/// # Examples
///
/// ```rust
/// use tilework::html::tag;
/// use tilework::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("class", "slides");
/// assert_eq!(tag("div", "…", &attrs), "<div class=\"slides\">…</div>");
/// ```
pub fn tag(name: &str, content: &str, attributes: &Attributes) -> String {
    let mut buffer = String::with_capacity(2 * name.len() + content.len() + 5);
    write_tag(&mut buffer, name, content, attributes);
    buffer
}

/// Render an opening tag: `<name attrs>`.
pub fn begin_tag(name: &str, attributes: &Attributes) -> String {
    let mut buffer = String::with_capacity(name.len() + 2);
    write_begin_tag(&mut buffer, name, attributes);
    buffer
}

/// Render a closing tag: `</name>`.
pub fn end_tag(name: &str) -> String {
    let mut buffer = String::with_capacity(name.len() + 3);
    write_end_tag(&mut buffer, name);
    buffer
}

/// Append a complete element to `buffer`.
pub fn write_tag(buffer: &mut String, name: &str, content: &str, attributes: &Attributes) {
    write_begin_tag(buffer, name, attributes);
    if is_void_element(name) {
        return;
    }
    buffer.push_str(content);
    write_end_tag(buffer, name);
}

/// Append an opening tag to `buffer`.
pub fn write_begin_tag(buffer: &mut String, name: &str, attributes: &Attributes) {
    buffer.push('<');
    buffer.push_str(name);
    attributes.write_to(buffer);
    buffer.push('>');
}

/// Append a closing tag to `buffer`.
pub fn write_end_tag(buffer: &mut String, name: &str) {
    buffer.push_str("</");
    buffer.push_str(name);
    buffer.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_with_attributes() {
        let mut attrs = Attributes::new();
        attrs.set("class", "description");
        assert_eq!(
            tag("div", "<h4>Title</h4>", &attrs),
            "<div class=\"description\"><h4>Title</h4></div>"
        );
    }

    #[test]
    fn test_tag_without_attributes() {
        assert_eq!(tag("span", "x", &Attributes::new()), "<span>x</span>");
    }

    #[test]
    fn test_void_element_ignores_content() {
        let mut attrs = Attributes::new();
        attrs.set("src", "/img/one.jpg");
        assert_eq!(tag("img", "ignored", &attrs), "<img src=\"/img/one.jpg\">");
    }

    #[test]
    fn test_begin_and_end_tag() {
        let attrs: Attributes = [("id", "w0")].into_iter().collect();
        assert_eq!(begin_tag("div", &attrs), "<div id=\"w0\">");
        assert_eq!(end_tag("div"), "</div>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let attrs: Attributes = [("title", "a<b>")].into_iter().collect();
        assert_eq!(begin_tag("div", &attrs), "<div title=\"a&lt;b&gt;\">");
    }
}
