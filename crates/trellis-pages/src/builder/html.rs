//! Tree builder
//!
//! ## Design Pattern
//!
//! - **Scoped accumulation**: every nested body runs against a fresh child
//!   accumulator sharing the cycle's [`BuildContext`]
//! - **First error wins**: the first construction or identity error is
//!   recorded, later calls become no-ops and [`Tree::build`] returns it
//! - **Cycle-owned identifiers**: the identifier allocator and the registry
//!   of seen handles live in the context, never in shared state

use std::borrow::Cow;
use std::collections::HashMap;

use trellis_core::types::node::{Element, Html, Managed, validate_tag_name};
use trellis_core::{
	Attribute, AttributeModifier, BuildError, ComponentRef, ConstructionError, Handle,
	IdentityConflictError, ManagedComponent,
};

use crate::ssr::markers::{IdAllocator, IdStrategy};

/// State shared by all scopes of one build cycle.
#[derive(Debug)]
pub(crate) struct BuildContext {
	allocator: IdAllocator,
	/// Registered handles keyed by address. Holding the refs keeps addresses
	/// from being reused within the cycle.
	registered: HashMap<usize, ComponentRef>,
	error: Option<BuildError>,
}

impl BuildContext {
	fn new(strategy: IdStrategy) -> Self {
		Self {
			allocator: IdAllocator::new(strategy),
			registered: HashMap::new(),
			error: None,
		}
	}

	fn failed(&self) -> bool {
		self.error.is_some()
	}

	fn fail(&mut self, error: BuildError) {
		if self.error.is_none() {
			self.error = Some(error);
		}
	}

	/// Binds the markup identifier of a handle, exactly once per cycle.
	fn register(&mut self, handle: &ComponentRef) -> Result<String, BuildError> {
		let addr = handle.addr();
		let current = handle.markup_id();
		if self.registered.contains_key(&addr) {
			return Err(IdentityConflictError::DuplicateHandle {
				id: current.unwrap_or_default(),
			}
			.into());
		}

		let id = match current {
			Some(id) if id.is_empty() => return Err(ConstructionError::EmptyIdentifier.into()),
			Some(id) => {
				if !self.allocator.claim(&id) {
					return Err(IdentityConflictError::DuplicateIdentifier { id }.into());
				}
				id
			}
			None => self.allocator.allocate(),
		};

		handle.borrow_mut().assign_markup_id(id.clone());
		self.registered.insert(addr, handle.clone());
		tracing::trace!(markup_id = %id, kind = %handle.kind(), "registered managed component");
		Ok(id)
	}
}

/// An immutable tree produced by one build cycle.
#[derive(Debug, Clone)]
pub struct Tree {
	nodes: Vec<Html>,
	component_count: usize,
}

impl Tree {
	/// Evaluates `f` against a fresh builder and returns the accumulated tree.
	///
	/// Each call owns its identifier namespace; two builds never share
	/// identifiers or registrations.
	///
	/// # Errors
	///
	/// Returns the first [`BuildError`] raised while evaluating `f`.
	pub fn build(
		strategy: IdStrategy,
		f: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Result<Tree, BuildError> {
		let mut cx = BuildContext::new(strategy);
		let nodes = {
			let mut builder = HtmlBuilder::new(&mut cx);
			f(&mut builder);
			builder.children
		};
		if let Some(error) = cx.error.take() {
			tracing::warn!(%error, "html build failed");
			return Err(error);
		}
		Ok(Tree {
			nodes,
			component_count: cx.registered.len(),
		})
	}

	/// Top-level nodes in source order.
	pub fn nodes(&self) -> &[Html] {
		&self.nodes
	}

	pub fn into_nodes(self) -> Vec<Html> {
		self.nodes
	}

	/// Number of managed components registered while building.
	pub fn component_count(&self) -> usize {
		self.component_count
	}
}

/// Accumulates the children of one scope.
///
/// Obtained only through [`Tree::build`] and nested bodies.
#[derive(Debug)]
pub struct HtmlBuilder<'cx> {
	children: Vec<Html>,
	cx: &'cx mut BuildContext,
}

impl<'cx> HtmlBuilder<'cx> {
	fn new(cx: &'cx mut BuildContext) -> Self {
		Self {
			children: Vec::new(),
			cx,
		}
	}

	/// Runs `body` against a fresh child accumulator and returns its children.
	fn scope(&mut self, body: impl FnOnce(&mut HtmlBuilder<'_>)) -> Vec<Html> {
		let mut nested = HtmlBuilder::new(&mut *self.cx);
		body(&mut nested);
		nested.children
	}

	/// Whether an error has been recorded in this cycle.
	pub fn has_failed(&self) -> bool {
		self.cx.failed()
	}

	/// Number of nodes appended to this scope so far.
	pub fn len(&self) -> usize {
		self.children.len()
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	/// Appends a plain element whose children are declared by `body`.
	///
	/// ## Example
	///
	/// ```ignore
	/// b.element("label", [Attribute::new("wicket:for", "name")], |b| b.text("Name"));
	/// ```
	pub fn element(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		attributes: impl IntoIterator<Item = Attribute>,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) {
		if self.cx.failed() {
			return;
		}
		let name = name.into();
		if let Err(error) = validate_tag_name(&name) {
			self.cx.fail(error.into());
			return;
		}
		let attributes = attributes.into_iter().collect();
		let children = self.scope(body);
		if self.cx.failed() {
			return;
		}
		match Element::new(name, attributes, children) {
			Ok(element) => self.children.push(element.into()),
			Err(error) => self.cx.fail(error.into()),
		}
	}

	/// Appends a text leaf. The content is emitted verbatim.
	pub fn text(&mut self, content: impl Into<String>) {
		if self.cx.failed() {
			return;
		}
		self.children.push(Html::text(content));
	}

	/// Registers a managed component and appends it.
	///
	/// The component receives its markup identifier before `body` runs; the
	/// returned handle can be referenced later, for example as a partial
	/// update target. `tag` overrides the tag inferred from the component
	/// kind.
	///
	/// # Errors
	///
	/// Records [`IdentityConflictError`] when the component's identifier is
	/// already claimed, and [`ConstructionError`] for an invalid tag or managed
	/// children under a component that cannot hold them.
	pub fn managed<C: ManagedComponent + 'static>(
		&mut self,
		component: C,
		tag: Option<Cow<'static, str>>,
		modifiers: impl IntoIterator<Item = AttributeModifier>,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Handle<C> {
		let handle = Handle::new(component);
		self.managed_ref(&handle, tag, modifiers, body);
		handle
	}

	/// Registers a component the caller already holds a handle to.
	///
	/// Passing the same handle twice in one cycle is an identity conflict.
	pub fn managed_ref<C: ManagedComponent + 'static>(
		&mut self,
		handle: &Handle<C>,
		tag: Option<Cow<'static, str>>,
		modifiers: impl IntoIterator<Item = AttributeModifier>,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) {
		if self.cx.failed() {
			return;
		}
		let erased = handle.to_ref();
		if let Err(error) = self.cx.register(&erased) {
			self.cx.fail(error);
			return;
		}
		let modifiers = modifiers.into_iter().collect();
		let children = self.scope(body);
		if self.cx.failed() {
			return;
		}
		match Managed::new(tag, erased, modifiers, children) {
			Ok(managed) => self.children.push(managed.into()),
			Err(error) => self.cx.fail(error.into()),
		}
	}

	/// Appends a managed leaf with an inferred tag.
	pub fn component<C: ManagedComponent + 'static>(&mut self, component: C) -> Handle<C> {
		self.managed(component, None, [], |_| {})
	}

	/// Appends a managed leaf with an explicit tag.
	pub fn component_with_tag<C: ManagedComponent + 'static>(
		&mut self,
		tag: impl Into<Cow<'static, str>>,
		component: C,
	) -> Handle<C> {
		self.managed(component, Some(tag.into()), [], |_| {})
	}

	/// Appends an already created component as a leaf with an inferred tag.
	pub fn component_ref<C: ManagedComponent + 'static>(&mut self, handle: &Handle<C>) {
		self.managed_ref(handle, None, [], |_| {});
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::{Label, WebMarkupContainer};
	use rstest::rstest;

	#[rstest]
	fn test_children_order_preserved() {
		let tree = Tree::build(IdStrategy::default(), |b| {
			b.text("a");
			b.element("b", [], |_| {});
			b.text("c");
		})
		.unwrap();
		let kinds: Vec<_> = tree
			.nodes()
			.iter()
			.map(|n| match n {
				Html::Text(t) => t.content().to_string(),
				Html::Element(e) => e.name().to_string(),
				Html::Managed(_) => "managed".to_string(),
			})
			.collect();
		assert_eq!(kinds, vec!["a", "b", "c"]);
	}

	#[rstest]
	fn test_identifier_assigned_before_body() {
		let tree = Tree::build(IdStrategy::default(), |b| {
			let outer = b.managed(WebMarkupContainer::new(), None, [], |b| {
				b.component(Label::new("inner", "x"));
			});
			assert_eq!(outer.markup_id().as_deref(), Some("c0"));
		})
		.unwrap();
		assert_eq!(tree.component_count(), 2);
	}

	#[rstest]
	fn test_chosen_identifier_is_kept() {
		let mut handle = None;
		Tree::build(IdStrategy::default(), |b| {
			handle = Some(b.component(Label::new("greeting", "hi")));
		})
		.unwrap();
		assert_eq!(handle.unwrap().markup_id().as_deref(), Some("greeting"));
	}

	#[rstest]
	fn test_empty_tag_name_fails() {
		let result = Tree::build(IdStrategy::default(), |b| {
			b.element("", [], |_| {});
		});
		assert_eq!(
			result.unwrap_err(),
			BuildError::Construction(ConstructionError::EmptyTagName)
		);
	}

	#[rstest]
	fn test_first_error_wins_and_stops_evaluation() {
		let mut evaluated_after_error = false;
		let result = Tree::build(IdStrategy::default(), |b| {
			b.element("bad tag", [], |_| {});
			b.element("div", [], |_| evaluated_after_error = true);
			b.element("", [], |_| {});
		});
		assert!(!evaluated_after_error);
		assert_eq!(
			result.unwrap_err(),
			BuildError::Construction(ConstructionError::InvalidTagName {
				name: "bad tag".to_string()
			})
		);
	}

	#[rstest]
	fn test_error_in_nested_body_propagates() {
		let result = Tree::build(IdStrategy::default(), |b| {
			b.div([], |b| {
				b.span([], |b| {
					b.element("a b", [], |_| {});
				});
			});
		});
		assert!(matches!(result, Err(BuildError::Construction(_))));
	}

	#[rstest]
	fn test_same_handle_twice_is_conflict() {
		let result = Tree::build(IdStrategy::default(), |b| {
			let label = Handle::new(Label::new("text", "x"));
			b.component_ref(&label);
			b.component_ref(&label);
		});
		assert_eq!(
			result.unwrap_err(),
			BuildError::IdentityConflict(IdentityConflictError::DuplicateHandle {
				id: "text".to_string()
			})
		);
	}

	#[rstest]
	fn test_same_identifier_twice_is_conflict() {
		let result = Tree::build(IdStrategy::default(), |b| {
			b.component(Label::new("text", "x"));
			b.component(Label::new("text", "y"));
		});
		assert_eq!(
			result.unwrap_err(),
			BuildError::IdentityConflict(IdentityConflictError::DuplicateIdentifier {
				id: "text".to_string()
			})
		);
	}

	#[rstest]
	fn test_empty_chosen_identifier_fails() {
		let result = Tree::build(IdStrategy::default(), |b| {
			b.component(Label::new("", "x"));
		});
		assert_eq!(
			result.unwrap_err(),
			BuildError::Construction(ConstructionError::EmptyIdentifier)
		);
	}

	#[rstest]
	fn test_managed_children_under_leaf_component_fail() {
		let result = Tree::build(IdStrategy::default(), |b| {
			b.managed(Label::new("outer", "x"), None, [], |b| {
				b.component(Label::new("inner", "y"));
			});
		});
		assert_eq!(
			result.unwrap_err(),
			BuildError::Construction(ConstructionError::ChildrenOnLeafComponent {
				id: "outer".to_string()
			})
		);
	}

	#[rstest]
	fn test_builds_do_not_share_identifiers() {
		let first = Tree::build(IdStrategy::default(), |b| {
			b.component(WebMarkupContainer::new());
		})
		.unwrap();
		let second = Tree::build(IdStrategy::default(), |b| {
			b.component(WebMarkupContainer::new());
		})
		.unwrap();
		let id = |tree: &Tree| match &tree.nodes()[0] {
			Html::Managed(m) => m.handle().markup_id(),
			_ => None,
		};
		assert_eq!(id(&first), Some("c0".to_string()));
		assert_eq!(id(&second), Some("c0".to_string()));
	}
}
