//! Insertion-ordered HTML attribute maps.
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::escape::escape_html;

/// Ordered `name -> value` attribute mapping for a single element.
///
/// Attributes render in insertion order, so identical construction sequences
/// produce identical markup. Setting an existing attribute replaces its value
/// in place and keeps its position.
///
/// # Examples
///
/// ```rust
/// use tilework::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.set("class", "control left");
/// attrs.set("id", "#gallery");
/// assert_eq!(attrs.get("id"), Some("#gallery"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty attribute map with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no attributes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value of the attribute `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the attribute `name` is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set `name` to `value`, replacing in place if already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Remove the attribute `name`, returning its value if it was present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Merge `overrides` into this map with override semantics: values from
    /// `overrides` win, existing attributes keep their position, new ones
    /// append in `overrides` order.
    pub fn merge(&mut self, overrides: &Attributes) {
        for (name, value) in overrides.iter() {
            self.set(name, value);
        }
    }

    /// Add one or more whitespace-separated CSS classes to the `class`
    /// attribute, skipping tokens already present. Idempotent.
    pub fn add_class(&mut self, classes: &str) {
        let mut value = self.get("class").unwrap_or_default().to_string();
        let mut added = String::new();
        {
            let present: SmallVec<[&str; 8]> = value.split_whitespace().collect();
            for token in classes.split_whitespace() {
                if present.contains(&token) {
                    continue;
                }
                if added.split_whitespace().any(|seen| seen == token) {
                    continue;
                }
                if !added.is_empty() {
                    added.push(' ');
                }
                added.push_str(token);
            }
        }
        if added.is_empty() {
            return;
        }
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(&added);
        self.set("class", value);
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Append ` name="value"` pairs to `buffer`, escaping values.
    pub(crate) fn write_to(&self, buffer: &mut String) {
        for (name, value) in self.iter() {
            buffer.push(' ');
            buffer.push_str(name);
            buffer.push_str("=\"");
            buffer.push_str(&escape_html(value));
            buffer.push('"');
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of attribute names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut attributes =
                    Attributes::with_capacity(access.size_hint().unwrap_or_default());
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    attributes.set(name, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut attrs = Attributes::new();
        attrs.set("class", "carousel");
        attrs.set("id", "w0");
        attrs.set("class", "slides");

        let order: Vec<_> = attrs.iter().collect();
        assert_eq!(order, vec![("class", "slides"), ("id", "w0")]);
    }

    #[test]
    fn test_merge_overrides_and_appends() {
        let mut base: Attributes =
            [("data-role", "tile"), ("class", "old")].into_iter().collect();
        let overrides: Attributes =
            [("data-role", "carousel"), ("id", "w1")].into_iter().collect();
        base.merge(&overrides);

        let order: Vec<_> = base.iter().collect();
        assert_eq!(
            order,
            vec![("data-role", "carousel"), ("class", "old"), ("id", "w1")]
        );
    }

    #[test]
    fn test_add_class_creates_attribute() {
        let mut attrs = Attributes::new();
        attrs.add_class("carousel");
        assert_eq!(attrs.get("class"), Some("carousel"));
    }

    #[test]
    fn test_add_class_appends_without_duplicates() {
        let mut attrs = Attributes::new();
        attrs.set("class", "slide themed");
        attrs.add_class("slide image");
        assert_eq!(attrs.get("class"), Some("slide themed image"));
    }

    #[test]
    fn test_add_class_is_idempotent() {
        let mut attrs = Attributes::new();
        attrs.add_class("slide image");
        attrs.add_class("slide image");
        assert_eq!(attrs.get("class"), Some("slide image"));
    }

    #[test]
    fn test_add_class_ignores_empty_input() {
        let mut attrs = Attributes::new();
        attrs.add_class("  ");
        assert!(!attrs.contains("class"));
    }

    #[test]
    fn test_remove() {
        let mut attrs: Attributes = [("id", "w0")].into_iter().collect();
        assert_eq!(attrs.remove("id"), Some("w0".to_string()));
        assert!(attrs.is_empty());
        assert_eq!(attrs.remove("id"), None);
    }

    #[test]
    fn test_write_to_escapes_values() {
        let mut attrs = Attributes::new();
        attrs.set("title", "Tom & \"Jerry\"");
        let mut buffer = String::new();
        attrs.write_to(&mut buffer);
        assert_eq!(buffer, " title=\"Tom &amp; &quot;Jerry&quot;\"");
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let attrs: Attributes = [("data-role", "carousel"), ("class", "carousel")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, "{\"data-role\":\"carousel\",\"class\":\"carousel\"}");

        let parsed: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, attrs);
    }
}
