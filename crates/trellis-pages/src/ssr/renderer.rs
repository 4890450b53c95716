//! Markup synthesizer.
//!
//! Walks a built [`Tree`] once, depth first, emitting the markup template and
//! collecting an [`AttachmentPlan`]. Synthesis only computes the plan; the
//! plan is executed later against live components with
//! [`AttachmentPlan::apply`].

use std::collections::HashSet;

use trellis_core::types::node::{Element, Html, Managed};
use trellis_core::{AttachError, AttributeModifier, ComponentRef};

use super::options::{ConfigError, SynthesisOptions};
use crate::builder::Tree;
use crate::page::PageRoot;

/// One managed component and where it belongs.
#[derive(Debug, Clone)]
pub struct Attachment {
	handle: ComponentRef,
	parent: Option<ComponentRef>,
	markup_id: String,
	tag: String,
	modifiers: Vec<AttributeModifier>,
}

impl Attachment {
	pub fn handle(&self) -> &ComponentRef {
		&self.handle
	}

	/// Nearest managed ancestor; `None` for components attached to the page root.
	pub fn parent(&self) -> Option<&ComponentRef> {
		self.parent.as_ref()
	}

	pub fn markup_id(&self) -> &str {
		&self.markup_id
	}

	/// Tag the component was emitted with.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn modifiers(&self) -> &[AttributeModifier] {
		&self.modifiers
	}
}

/// Ordered list of every managed component with its structural parent.
///
/// Each handle appears exactly once. Children precede their parent, and
/// siblings under one parent keep their source order.
#[derive(Debug, Clone, Default)]
pub struct AttachmentPlan {
	entries: Vec<Attachment>,
}

impl AttachmentPlan {
	pub fn entries(&self) -> &[Attachment] {
		&self.entries
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Attachment> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Looks up the entry of a component.
	pub fn get(&self, handle: &ComponentRef) -> Option<&Attachment> {
		self.entries.iter().find(|entry| entry.handle.ptr_eq(handle))
	}

	/// Looks up the entry bound to a markup identifier.
	pub fn find(&self, markup_id: &str) -> Option<&Attachment> {
		self.entries
			.iter()
			.find(|entry| entry.markup_id == markup_id)
	}

	/// Components attached directly to the page root, in source order.
	pub fn roots(&self) -> impl Iterator<Item = &ComponentRef> {
		self.entries
			.iter()
			.filter(|entry| entry.parent.is_none())
			.map(|entry| &entry.handle)
	}

	/// Direct managed children of `parent`, in source order.
	pub fn children_of<'a>(
		&'a self,
		parent: &'a ComponentRef,
	) -> impl Iterator<Item = &'a ComponentRef> + 'a {
		self.entries
			.iter()
			.filter(move |entry| entry.parent.as_ref().is_some_and(|p| p.ptr_eq(parent)))
			.map(|entry| &entry.handle)
	}

	/// Executes the plan against live components.
	///
	/// Root-level components are added to `root`, nested ones are attached to
	/// their parent component, and every component receives its attribute
	/// modifiers.
	///
	/// Every planned component is reset first, dropping the children and
	/// modifiers a previous execution handed to it, so applying a plan over
	/// kept handles never duplicates state. Parents are checked before
	/// anything is touched. If a parent refuses a child, every planned
	/// component is reset again and `root` is left as it was.
	pub fn apply(&self, root: &mut PageRoot) -> Result<(), AttachError> {
		let planned: HashSet<usize> = self.entries.iter().map(|e| e.handle.addr()).collect();
		if let Some(parent) = self
			.entries
			.iter()
			.filter_map(|entry| entry.parent.as_ref())
			.find(|parent| !planned.contains(&parent.addr()))
		{
			return Err(AttachError::UnknownParent {
				id: parent.markup_id().unwrap_or_default(),
			});
		}

		self.reset();
		let mut added = Vec::new();
		for entry in &self.entries {
			{
				let mut component = entry.handle.borrow_mut();
				for modifier in &entry.modifiers {
					component.add_modifier(modifier.clone());
				}
			}
			match &entry.parent {
				Some(parent) => {
					if let Err(error) = parent.borrow_mut().attach_child(entry.handle.clone()) {
						self.reset();
						tracing::warn!(%error, "attachment plan rolled back");
						return Err(error);
					}
				}
				None => added.push(entry.handle.clone()),
			}
		}
		for handle in added {
			root.add(handle);
		}
		tracing::debug!(
			components = self.entries.len(),
			roots = root.children().len(),
			"applied attachment plan"
		);
		Ok(())
	}

	fn reset(&self) {
		for entry in &self.entries {
			let mut component = entry.handle.borrow_mut();
			component.detach_children();
			component.clear_modifiers();
		}
	}
}

impl<'a> IntoIterator for &'a AttachmentPlan {
	type Item = &'a Attachment;
	type IntoIter = std::slice::Iter<'a, Attachment>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Output of one synthesis: the markup template and the attachment plan.
#[derive(Debug, Clone)]
pub struct Synthesis {
	markup: String,
	plan: AttachmentPlan,
}

impl Synthesis {
	pub fn markup(&self) -> &str {
		&self.markup
	}

	pub fn plan(&self) -> &AttachmentPlan {
		&self.plan
	}

	pub fn into_parts(self) -> (String, AttachmentPlan) {
		(self.markup, self.plan)
	}
}

/// Serializes trees into markup and attachment plans.
#[derive(Debug, Clone, Default)]
pub struct MarkupSynthesizer {
	options: SynthesisOptions,
}

impl MarkupSynthesizer {
	/// Creates a synthesizer after validating `options`.
	pub fn new(options: SynthesisOptions) -> Result<Self, ConfigError> {
		options.validate()?;
		Ok(Self { options })
	}

	pub fn options(&self) -> &SynthesisOptions {
		&self.options
	}

	/// Synthesizes a whole tree.
	pub fn synthesize(&self, tree: &Tree) -> Synthesis {
		self.synthesize_nodes(tree.nodes())
	}

	/// Synthesizes a sequence of sibling nodes.
	pub fn synthesize_nodes(&self, nodes: &[Html]) -> Synthesis {
		let mut markup = String::new();
		let mut entries = Vec::new();
		for node in nodes {
			entries.extend(self.render_node(node, None, &mut markup));
		}
		tracing::debug!(
			nodes = nodes.iter().map(Html::node_count).sum::<usize>(),
			attachments = entries.len(),
			bytes = markup.len(),
			"synthesized markup"
		);
		Synthesis {
			markup,
			plan: AttachmentPlan { entries },
		}
	}

	/// Tag a managed node is emitted with.
	///
	/// An explicit tag always wins. Otherwise the component kind's decision
	/// table entry is used, and unmatched kinds fall back to the configured
	/// fallback tag.
	pub fn effective_tag<'a>(&'a self, managed: &'a Managed) -> &'a str {
		managed
			.explicit_tag()
			.or_else(|| managed.handle().kind().default_tag())
			.unwrap_or(self.options.fallback_tag.as_str())
	}

	fn render_node(
		&self,
		node: &Html,
		parent: Option<&ComponentRef>,
		out: &mut String,
	) -> Vec<Attachment> {
		match node {
			Html::Element(el) => self.render_element(el, parent, out),
			Html::Text(text) => {
				out.push_str(text.content());
				Vec::new()
			}
			Html::Managed(managed) => self.render_managed(managed, parent, out),
		}
	}

	fn render_element(
		&self,
		el: &Element,
		parent: Option<&ComponentRef>,
		out: &mut String,
	) -> Vec<Attachment> {
		out.push('<');
		out.push_str(el.name());
		for attribute in el.attributes() {
			self.push_attribute(out, attribute.name(), attribute.value());
		}
		out.push('>');
		let mut entries = Vec::new();
		for child in el.children() {
			entries.extend(self.render_node(child, parent, out));
		}
		out.push_str("</");
		out.push_str(el.name());
		out.push('>');
		entries
	}

	fn render_managed(
		&self,
		managed: &Managed,
		parent: Option<&ComponentRef>,
		out: &mut String,
	) -> Vec<Attachment> {
		let handle = managed.handle();
		let markup_id = handle.markup_id().unwrap_or_default();
		let tag = self.effective_tag(managed);

		// Never self-closed: the host scans open/close pairs for identifiers.
		out.push('<');
		out.push_str(tag);
		self.push_attribute(out, &self.options.identifier_attribute, &markup_id);
		out.push('>');
		let mut entries = Vec::new();
		for child in managed.children() {
			entries.extend(self.render_node(child, Some(handle), out));
		}
		out.push_str("</");
		out.push_str(tag);
		out.push('>');

		entries.push(Attachment {
			handle: handle.clone(),
			parent: parent.cloned(),
			markup_id,
			tag: tag.to_string(),
			modifiers: managed.modifiers().to_vec(),
		});
		entries
	}

	fn push_attribute(&self, out: &mut String, name: &str, value: &str) {
		out.push(' ');
		out.push_str(name);
		out.push_str("='");
		if self.options.escape_attribute_values {
			escape_attr_into(out, value);
		} else {
			out.push_str(value);
		}
		out.push('\'');
	}
}

/// Escapes a string for use in a single-quoted attribute value.
fn escape_attr_into(out: &mut String, value: &str) {
	for c in value.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'\'' => out.push_str("&#39;"),
			'"' => out.push_str("&quot;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(c),
		}
	}
}
