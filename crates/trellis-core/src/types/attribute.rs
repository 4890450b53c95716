//! Attributes of plain elements and attribute modifiers of managed components.

use std::borrow::Cow;

use crate::exception::ConstructionError;

/// Validates an attribute name.
///
/// Names must be non-empty and free of whitespace and the characters that
/// would break out of an open tag or a quoted value.
pub fn validate_attribute_name(name: &str) -> Result<(), ConstructionError> {
	if name.is_empty() {
		return Err(ConstructionError::EmptyAttributeName);
	}
	let invalid = name
		.chars()
		.any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='));
	if invalid {
		return Err(ConstructionError::InvalidAttributeName {
			name: name.to_string(),
		});
	}
	Ok(())
}

/// A literal `name='value'` pair emitted on a plain element's open tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	name: Cow<'static, str>,
	value: Cow<'static, str>,
}

impl Attribute {
	/// Creates a new attribute.
	pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	/// Creates a `class` attribute.
	pub fn class(value: impl Into<Cow<'static, str>>) -> Self {
		Self::new("class", value)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub(crate) fn validate(&self) -> Result<(), ConstructionError> {
		validate_attribute_name(&self.name)
	}
}

impl<N, V> From<(N, V)> for Attribute
where
	N: Into<Cow<'static, str>>,
	V: Into<Cow<'static, str>>,
{
	fn from((name, value): (N, V)) -> Self {
		Self::new(name, value)
	}
}

/// How a modifier combines its value with the attribute already on the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierMode {
	/// Overwrite the current value.
	Replace,
	/// Add after the current value, joined by the separator.
	Append { separator: Cow<'static, str> },
	/// Add before the current value, joined by the separator.
	Prepend { separator: Cow<'static, str> },
}

/// An attribute change that the hosting framework applies to a managed
/// component's tag at render time.
///
/// Modifiers are carried along with the attachment plan and handed to their
/// component; they never appear in the synthesized markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeModifier {
	name: Cow<'static, str>,
	value: Cow<'static, str>,
	mode: ModifierMode,
}

impl AttributeModifier {
	pub fn replace(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			mode: ModifierMode::Replace,
		}
	}

	/// Appends `value` separated by a single space.
	pub fn append(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			mode: ModifierMode::Append {
				separator: Cow::Borrowed(" "),
			},
		}
	}

	/// Prepends `value` separated by a single space.
	pub fn prepend(name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			mode: ModifierMode::Prepend {
				separator: Cow::Borrowed(" "),
			},
		}
	}

	/// Replaces the separator of an append/prepend modifier.
	pub fn with_separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
		match &mut self.mode {
			ModifierMode::Append { separator: s } | ModifierMode::Prepend { separator: s } => {
				*s = separator.into();
			}
			ModifierMode::Replace => {}
		}
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value(&self) -> &str {
		&self.value
	}

	pub fn mode(&self) -> &ModifierMode {
		&self.mode
	}

	/// Computes the attribute value after applying this modifier to `current`.
	///
	/// An empty modifier value leaves an existing value untouched for the
	/// append and prepend modes.
	pub fn apply(&self, current: Option<&str>) -> String {
		let value = self.value.as_ref();
		match (&self.mode, current) {
			(ModifierMode::Replace, _) => value.to_string(),
			(_, None) => value.to_string(),
			(_, Some(current)) if current.is_empty() => value.to_string(),
			(_, Some(current)) if value.is_empty() => current.to_string(),
			(ModifierMode::Append { separator }, Some(current)) => {
				format!("{current}{separator}{value}")
			}
			(ModifierMode::Prepend { separator }, Some(current)) => {
				format!("{value}{separator}{current}")
			}
		}
	}

	pub(crate) fn validate(&self) -> Result<(), ConstructionError> {
		validate_attribute_name(&self.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_attribute_from_tuple() {
		let attr: Attribute = ("data-x", "1").into();
		assert_eq!(attr.name(), "data-x");
		assert_eq!(attr.value(), "1");
	}

	#[rstest]
	fn test_empty_attribute_name_is_rejected() {
		assert_eq!(
			Attribute::new("", "x").validate(),
			Err(ConstructionError::EmptyAttributeName)
		);
	}

	#[rstest]
	#[case("a><script")]
	#[case("on click")]
	#[case("x' onclick='evil")]
	#[case("data=1")]
	fn test_markup_breaking_attribute_names_are_rejected(#[case] name: &'static str) {
		assert_eq!(
			Attribute::new(name, "v").validate(),
			Err(ConstructionError::InvalidAttributeName {
				name: name.to_string()
			})
		);
		assert!(AttributeModifier::append(name, "v").validate().is_err());
	}

	#[rstest]
	#[case("class")]
	#[case("wicket:for")]
	#[case("data-row-id")]
	fn test_valid_attribute_names(#[case] name: &str) {
		assert!(validate_attribute_name(name).is_ok());
	}

	#[rstest]
	#[case::replace(AttributeModifier::replace("class", "b"), Some("a"), "b")]
	#[case::append(AttributeModifier::append("class", "b"), Some("a"), "a b")]
	#[case::prepend(AttributeModifier::prepend("class", "b"), Some("a"), "b a")]
	#[case::append_to_missing(AttributeModifier::append("class", "b"), None, "b")]
	#[case::append_empty(AttributeModifier::append("class", ""), Some("a"), "a")]
	#[case::custom_separator(
		AttributeModifier::append("style", "color: red").with_separator("; "),
		Some("margin: 0"),
		"margin: 0; color: red"
	)]
	fn test_modifier_apply(
		#[case] modifier: AttributeModifier,
		#[case] current: Option<&str>,
		#[case] expected: &str,
	) {
		assert_eq!(modifier.apply(current), expected);
	}
}
