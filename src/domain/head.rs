// SPDX-License-Identifier: MPL-2.0
//! Document head tags.

use std::fmt;

/// One assertion about the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<title>`
    Title(String),
    /// `<meta name=".." content="..">` (standard and Twitter Card tags)
    Meta { name: String, content: String },
    /// `<meta property=".." content="..">` (Open Graph tags)
    Property { property: String, content: String },
}

impl HeadTag {
    pub fn meta(name: impl Into<String>, content: impl Into<String>) -> Self {
        HeadTag::Meta {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn property(property: impl Into<String>, content: impl Into<String>) -> Self {
        HeadTag::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    /// Identity used when reconciling: a newer tag with the same key replaces
    /// the older one.
    #[must_use]
    pub fn key(&self) -> String {
        match self {
            HeadTag::Title(_) => "title".to_string(),
            HeadTag::Meta { name, .. } => format!("name:{name}"),
            HeadTag::Property { property, .. } => format!("property:{property}"),
        }
    }

    /// The tag's text or `content` attribute.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            HeadTag::Title(text) => text,
            HeadTag::Meta { content, .. } | HeadTag::Property { content, .. } => content,
        }
    }
}

impl fmt::Display for HeadTag {
    /// Renders the tag as HTML with escaped text and attribute values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadTag::Title(text) => write!(f, "<title>{}</title>", escape_html(text)),
            HeadTag::Meta { name, content } => write!(
                f,
                r#"<meta name="{}" content="{}" />"#,
                escape_html(name),
                escape_html(content)
            ),
            HeadTag::Property { property, content } => write!(
                f,
                r#"<meta property="{}" content="{}" />"#,
                escape_html(property),
                escape_html(content)
            ),
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_distinguish_name_and_property() {
        assert_eq!(HeadTag::meta("title", "x").key(), "name:title");
        assert_eq!(HeadTag::property("og:title", "x").key(), "property:og:title");
        assert_eq!(HeadTag::Title("x".into()).key(), "title");
    }

    #[test]
    fn display_escapes_attribute_values() {
        let tag = HeadTag::meta("description", r#"Fix "pipes" & <drains>"#);
        assert_eq!(
            tag.to_string(),
            r#"<meta name="description" content="Fix &quot;pipes&quot; &amp; &lt;drains&gt;" />"#
        );
    }

    #[test]
    fn title_renders_as_element() {
        assert_eq!(
            HeadTag::Title("Home & Garden".into()).to_string(),
            "<title>Home &amp; Garden</title>"
        );
    }
}
