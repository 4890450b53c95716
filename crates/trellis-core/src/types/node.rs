//! The Html tree produced by the builder.
//!
//! `Html` is a closed union of three node kinds. Trees are immutable once
//! built: constructors validate their arguments and nodes expose read-only
//! accessors only. Children order is preserved verbatim.

use std::borrow::Cow;

use crate::exception::ConstructionError;
use crate::types::attribute::{Attribute, AttributeModifier};
use crate::types::component::ComponentRef;

/// A node of the Html tree.
#[derive(Debug, Clone)]
pub enum Html {
	/// A plain structural tag.
	Element(Element),
	/// Literal text, emitted verbatim without escaping.
	Text(Text),
	/// A markup position bound to an externally owned component.
	Managed(Managed),
}

impl Html {
	/// Creates a text leaf.
	pub fn text(content: impl Into<String>) -> Self {
		Html::Text(Text {
			content: content.into(),
		})
	}

	pub fn is_managed(&self) -> bool {
		matches!(self, Html::Managed(_))
	}

	/// Child nodes; empty for text leaves.
	pub fn children(&self) -> &[Html] {
		match self {
			Html::Element(el) => el.children(),
			Html::Text(_) => &[],
			Html::Managed(managed) => managed.children(),
		}
	}

	/// Number of nodes in this subtree, including this one.
	pub fn node_count(&self) -> usize {
		1 + self.children().iter().map(Html::node_count).sum::<usize>()
	}

	/// Visits every managed node of this subtree in document order.
	pub fn for_each_managed<'a>(&'a self, f: &mut impl FnMut(&'a Managed)) {
		if let Html::Managed(managed) = self {
			f(managed);
		}
		for child in self.children() {
			child.for_each_managed(f);
		}
	}
}

impl From<Element> for Html {
	fn from(element: Element) -> Self {
		Html::Element(element)
	}
}

impl From<Managed> for Html {
	fn from(managed: Managed) -> Self {
		Html::Managed(managed)
	}
}

/// Returns whether any node of `nodes` (at any depth) is managed.
pub fn contains_managed(nodes: &[Html]) -> bool {
	nodes
		.iter()
		.any(|node| node.is_managed() || contains_managed(node.children()))
}

/// Validates a tag name.
///
/// Tag names must be non-empty and free of whitespace and the characters
/// that would break out of an open tag.
pub fn validate_tag_name(name: &str) -> Result<(), ConstructionError> {
	if name.is_empty() {
		return Err(ConstructionError::EmptyTagName);
	}
	let invalid = name
		.chars()
		.any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='));
	if invalid {
		return Err(ConstructionError::InvalidTagName {
			name: name.to_string(),
		});
	}
	Ok(())
}

/// A plain structural tag.
#[derive(Debug, Clone)]
pub struct Element {
	name: Cow<'static, str>,
	attributes: Vec<Attribute>,
	children: Vec<Html>,
}

impl Element {
	/// Creates an element after validating its tag and attribute names.
	pub fn new(
		name: impl Into<Cow<'static, str>>,
		attributes: Vec<Attribute>,
		children: Vec<Html>,
	) -> Result<Self, ConstructionError> {
		let name = name.into();
		validate_tag_name(&name)?;
		for attribute in &attributes {
			attribute.validate()?;
		}
		Ok(Self {
			name,
			attributes,
			children,
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn attributes(&self) -> &[Attribute] {
		&self.attributes
	}

	pub fn children(&self) -> &[Html] {
		&self.children
	}
}

/// Literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
	content: String,
}

impl Text {
	pub fn content(&self) -> &str {
		&self.content
	}
}

/// A managed component leaf or subtree.
#[derive(Debug, Clone)]
pub struct Managed {
	tag: Option<Cow<'static, str>>,
	handle: ComponentRef,
	modifiers: Vec<AttributeModifier>,
	children: Vec<Html>,
}

impl Managed {
	/// Creates a managed node.
	///
	/// The handle must already carry its markup identifier. A handle whose
	/// kind cannot hold children is rejected when `children` contains
	/// managed nodes.
	pub fn new(
		tag: Option<Cow<'static, str>>,
		handle: ComponentRef,
		modifiers: Vec<AttributeModifier>,
		children: Vec<Html>,
	) -> Result<Self, ConstructionError> {
		if let Some(tag) = &tag {
			validate_tag_name(tag)?;
		}
		for modifier in &modifiers {
			modifier.validate()?;
		}
		let id = match handle.markup_id() {
			Some(id) if !id.is_empty() => id,
			_ => return Err(ConstructionError::EmptyIdentifier),
		};
		if !handle.kind().accepts_children() && contains_managed(&children) {
			return Err(ConstructionError::ChildrenOnLeafComponent { id });
		}
		Ok(Self {
			tag,
			handle,
			modifiers,
			children,
		})
	}

	/// Explicit tag, overriding inference when set.
	pub fn explicit_tag(&self) -> Option<&str> {
		self.tag.as_deref()
	}

	pub fn handle(&self) -> &ComponentRef {
		&self.handle
	}

	pub fn modifiers(&self) -> &[AttributeModifier] {
		&self.modifiers
	}

	pub fn children(&self) -> &[Html] {
		&self.children
	}
}
