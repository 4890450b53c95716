//! Options for markup synthesis.

use serde::Deserialize;
use trellis_core::ConstructionError;
use trellis_core::types::attribute::validate_attribute_name;
use trellis_core::types::node::validate_tag_name;

use super::markers::{DEFAULT_IDENTIFIER_ATTR, IdStrategy};

/// Error loading synthesis options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Failed to parse synthesis options: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("Invalid fallback tag {tag:?}")]
	InvalidFallbackTag { tag: String },
	#[error("Identifier attribute must not be empty")]
	EmptyIdentifierAttribute,
	#[error("Invalid identifier attribute {attribute:?}")]
	InvalidIdentifierAttribute { attribute: String },
}

/// Options for one synthesis cycle.
///
/// Loaded from TOML with [`SynthesisOptions::from_toml_str`]; every field is
/// optional there and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SynthesisOptions {
	/// Attribute carrying a managed component's identifier.
	pub identifier_attribute: String,
	/// Tag used for managed components with neither an explicit tag nor an
	/// inferred one.
	pub fallback_tag: String,
	/// Identifier generation for components without a chosen identifier.
	pub id_strategy: IdStrategy,
	/// Whether attribute values are escaped. Text leaves are never escaped.
	pub escape_attribute_values: bool,
}

impl Default for SynthesisOptions {
	fn default() -> Self {
		Self {
			identifier_attribute: DEFAULT_IDENTIFIER_ATTR.to_string(),
			fallback_tag: "div".to_string(),
			id_strategy: IdStrategy::default(),
			escape_attribute_values: true,
		}
	}
}

impl SynthesisOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses options from a TOML document.
	///
	/// # Example
	///
	/// ```ignore
	/// let options = SynthesisOptions::from_toml_str(r#"
	///     fallback_tag = "span"
	///     [id_strategy]
	///     kind = "uuid"
	/// "#)?;
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let options: Self = toml::from_str(source)?;
		options.validate()?;
		Ok(options)
	}

	/// Checks the fallback tag and identifier attribute.
	///
	/// Both are written into markup unescaped, so they follow the same rules
	/// as element tag and attribute names.
	pub fn validate(&self) -> Result<(), ConfigError> {
		match validate_attribute_name(&self.identifier_attribute) {
			Ok(()) => {}
			Err(ConstructionError::EmptyAttributeName) => {
				return Err(ConfigError::EmptyIdentifierAttribute);
			}
			Err(_) => {
				return Err(ConfigError::InvalidIdentifierAttribute {
					attribute: self.identifier_attribute.clone(),
				});
			}
		}
		if validate_tag_name(&self.fallback_tag).is_err() {
			return Err(ConfigError::InvalidFallbackTag {
				tag: self.fallback_tag.clone(),
			});
		}
		Ok(())
	}

	/// Sets the identifier attribute.
	pub fn identifier_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.identifier_attribute = attribute.into();
		self
	}

	/// Sets the fallback tag.
	pub fn fallback_tag(mut self, tag: impl Into<String>) -> Self {
		self.fallback_tag = tag.into();
		self
	}

	/// Sets the identifier strategy.
	pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
		self.id_strategy = strategy;
		self
	}

	/// Uses random UUID identifiers.
	pub fn uuid_ids(self) -> Self {
		self.id_strategy(IdStrategy::Uuid)
	}

	/// Emits attribute values verbatim.
	pub fn raw_attribute_values(mut self) -> Self {
		self.escape_attribute_values = false;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let options = SynthesisOptions::default();
		assert_eq!(options.identifier_attribute, "wicket:id");
		assert_eq!(options.fallback_tag, "div");
		assert_eq!(options.id_strategy, IdStrategy::default());
		assert!(options.escape_attribute_values);
	}

	#[rstest]
	fn test_from_empty_toml_uses_defaults() {
		let options = SynthesisOptions::from_toml_str("").unwrap();
		assert_eq!(options, SynthesisOptions::default());
	}

	#[rstest]
	fn test_from_toml() {
		let options = SynthesisOptions::from_toml_str(
			r#"
identifier_attribute = "data-cid"
fallback_tag = "span"
escape_attribute_values = false

[id_strategy]
kind = "sequential"
prefix = "node-"
"#,
		)
		.unwrap();
		assert_eq!(options.identifier_attribute, "data-cid");
		assert_eq!(options.fallback_tag, "span");
		assert!(!options.escape_attribute_values);
		assert_eq!(
			options.id_strategy,
			IdStrategy::Sequential {
				prefix: "node-".to_string()
			}
		);
	}

	#[rstest]
	fn test_from_toml_uuid_strategy() {
		let options = SynthesisOptions::from_toml_str("[id_strategy]\nkind = \"uuid\"\n").unwrap();
		assert_eq!(options.id_strategy, IdStrategy::Uuid);
	}

	#[rstest]
	fn test_from_toml_sequential_default_prefix() {
		let options =
			SynthesisOptions::from_toml_str("[id_strategy]\nkind = \"sequential\"\n").unwrap();
		assert_eq!(options.id_strategy, IdStrategy::default());
	}

	#[rstest]
	#[case("fallback_tag = \"\"")]
	#[case("fallback_tag = \"no good\"")]
	fn test_invalid_fallback_tag(#[case] source: &str) {
		let err = SynthesisOptions::from_toml_str(source).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidFallbackTag { .. }));
	}

	#[rstest]
	fn test_empty_identifier_attribute() {
		let err = SynthesisOptions::from_toml_str("identifier_attribute = \"\"").unwrap_err();
		assert!(matches!(err, ConfigError::EmptyIdentifierAttribute));
	}

	#[rstest]
	#[case("identifier_attribute = \"x' onclick='evil\"")]
	#[case("identifier_attribute = \"data id\"")]
	#[case("identifier_attribute = \"a><script\"")]
	fn test_markup_breaking_identifier_attribute(#[case] source: &str) {
		let err = SynthesisOptions::from_toml_str(source).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidIdentifierAttribute { .. }));
	}

	#[rstest]
	fn test_parse_error() {
		let err = SynthesisOptions::from_toml_str("fallback_tag = ").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[rstest]
	fn test_fluent_setters() {
		let options = SynthesisOptions::new()
			.identifier_attribute("data-id")
			.fallback_tag("span")
			.uuid_ids()
			.raw_attribute_values();
		assert_eq!(options.identifier_attribute, "data-id");
		assert_eq!(options.fallback_tag, "span");
		assert_eq!(options.id_strategy, IdStrategy::Uuid);
		assert!(!options.escape_attribute_values);
	}
}
