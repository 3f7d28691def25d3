//! The ambient attribute context threaded through evaluation.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeKey, AttributeValue, Attributes};
use crate::error::ConfigError;

static EMPTY_ATTRIBUTES: Lazy<Arc<Attributes>> = Lazy::new(|| Arc::new(Attributes::new()));

/// The ambient style attributes applied to plain text.
///
/// An `Environment` is passed explicitly to every evaluation. It is never
/// mutated: the `with_*` methods return a modified copy and leave the
/// original (and anything already evaluated against it) untouched.
///
/// The attribute map is reference counted, so every run produced from the
/// same environment shares a single allocation.
///
/// # Example
///
/// ```rust
/// use runweave::{AttributeKey, Environment};
///
/// let base = Environment::default().with_attribute(AttributeKey::FONT, "Tiempos Text");
/// let bold = base.with_attribute(AttributeKey::WEIGHT, "bold");
///
/// assert_eq!(base.attributes().len(), 1);
/// assert_eq!(bold.attributes().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment {
    attributes: Arc<Attributes>,
}

impl Environment {
    /// Creates an environment holding `attributes`.
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes: Arc::new(attributes),
        }
    }

    /// Returns the ambient attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns a shared handle to the ambient attributes.
    pub(crate) fn shared_attributes(&self) -> Arc<Attributes> {
        Arc::clone(&self.attributes)
    }

    /// Returns a copy of this environment with `key` set to `value`.
    pub fn with_attribute(
        &self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        let mut attributes = Arc::clone(&self.attributes);
        Arc::make_mut(&mut attributes).insert(key, value);
        Self { attributes }
    }

    /// Returns a copy of this environment with `overrides` applied on top.
    ///
    /// When `overrides` is empty the copy shares this environment's map.
    pub fn with_attributes(&self, overrides: &Attributes) -> Self {
        let mut attributes = Arc::clone(&self.attributes);
        if !overrides.is_empty() {
            Arc::make_mut(&mut attributes).extend_from(overrides);
        }
        Self { attributes }
    }

    /// Loads an environment from a flat JSON object of attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the input is not a JSON object whose
    /// values are valid attribute values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use runweave::{AttributeKey, AttributeValue, Environment};
    ///
    /// let env = Environment::from_json_str(r#"{ "font": "Tiempos Text", "font-size": 14 }"#)?;
    /// assert_eq!(
    ///     env.attributes().get(&AttributeKey::FONT_SIZE),
    ///     Some(&AttributeValue::Integer(14))
    /// );
    /// # Ok::<(), runweave::ConfigError>(())
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let attributes: Attributes = serde_json::from_str(source)?;
        tracing::debug!(count = attributes.len(), "loaded environment from JSON");
        Ok(Self::new(attributes))
    }

    /// Loads an environment from a flat YAML mapping of attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the input is not a YAML mapping whose
    /// values are valid attribute values.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let attributes: Attributes = serde_yaml::from_str(source)?;
        tracing::debug!(count = attributes.len(), "loaded environment from YAML");
        Ok(Self::new(attributes))
    }
}

impl Default for Environment {
    /// An environment with no attributes.
    fn default() -> Self {
        Self {
            attributes: Arc::clone(&EMPTY_ATTRIBUTES),
        }
    }
}

impl From<Attributes> for Environment {
    fn from(attributes: Attributes) -> Self {
        Self::new(attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_environments_share_one_map() {
        let a = Environment::default();
        let b = Environment::default();
        assert!(Arc::ptr_eq(&a.attributes, &b.attributes));
        assert!(a.attributes().is_empty());
    }

    #[test]
    fn test_with_attribute_leaves_original_untouched() {
        let base = Environment::new(Attributes::new().with(AttributeKey::FONT, "Tiempos Text"));
        let branched = base.with_attribute(AttributeKey::FONT, "Inter");

        assert_eq!(
            base.attributes().get(&AttributeKey::FONT),
            Some(&AttributeValue::Text("Tiempos Text".into()))
        );
        assert_eq!(
            branched.attributes().get(&AttributeKey::FONT),
            Some(&AttributeValue::Text("Inter".into()))
        );
    }

    #[test]
    fn test_with_empty_overrides_shares_map() {
        let base = Environment::new(Attributes::new().with(AttributeKey::WEIGHT, 700));
        let same = base.with_attributes(&Attributes::new());
        assert!(Arc::ptr_eq(&base.attributes, &same.attributes));
    }

    #[test]
    fn test_from_json_str() {
        let env = Environment::from_json_str(r#"{"foreground-color": [255, 0, 0], "italic": true}"#)
            .unwrap();
        assert_eq!(
            env.attributes().get(&AttributeKey::FOREGROUND_COLOR),
            Some(&AttributeValue::Rgb([255, 0, 0]))
        );
        assert_eq!(
            env.attributes().get(&AttributeKey::ITALIC),
            Some(&AttributeValue::Bool(true))
        );
    }

    #[test]
    fn test_from_yaml_str() {
        let env = Environment::from_yaml_str("font: Tiempos Text\nfont-size: 14\n").unwrap();
        assert_eq!(
            env.attributes().get(&AttributeKey::FONT),
            Some(&AttributeValue::Text("Tiempos Text".into()))
        );
        assert_eq!(
            env.attributes().get(&AttributeKey::FONT_SIZE),
            Some(&AttributeValue::Integer(14))
        );
    }

    #[test]
    fn test_from_json_str_rejects_non_object() {
        let err = Environment::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_from_yaml_str_rejects_malformed_input() {
        let err = Environment::from_yaml_str("font: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
