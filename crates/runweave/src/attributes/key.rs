//! Attribute names.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a style attribute.
///
/// Well-known names are available as associated constants, but any string is
/// a valid key. Keys compare and order by their string value, so a constant
/// and a runtime string with the same text are the same key.
///
/// # Example
///
/// ```rust
/// use runweave::AttributeKey;
///
/// assert_eq!(AttributeKey::FONT, AttributeKey::new("font"));
/// assert_eq!(AttributeKey::new(String::from("kerning")).as_str(), "kerning");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(Cow<'static, str>);

impl AttributeKey {
    pub const FONT: AttributeKey = AttributeKey::from_static("font");
    pub const FONT_SIZE: AttributeKey = AttributeKey::from_static("font-size");
    pub const FOREGROUND_COLOR: AttributeKey = AttributeKey::from_static("foreground-color");
    pub const BACKGROUND_COLOR: AttributeKey = AttributeKey::from_static("background-color");
    pub const WEIGHT: AttributeKey = AttributeKey::from_static("weight");
    pub const ITALIC: AttributeKey = AttributeKey::from_static("italic");
    pub const UNDERLINE: AttributeKey = AttributeKey::from_static("underline");

    /// Creates a key from any string.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Creates a key from a static string without allocating.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Returns the key's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for AttributeKey {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for AttributeKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}
