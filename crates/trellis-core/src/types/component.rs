//! The capability a managed component exposes to the builder and synthesizer.
//!
//! A managed component is a stateful UI object owned by the hosting
//! framework. The tree only correlates a markup position with it; the
//! framework instantiates, attaches and drives it.
//!
//! Three capabilities make up the seam:
//!
//! - [`ManagedComponent::assign_markup_id`]: called exactly once per handle by
//!   the builder to bind the identifier emitted in the markup
//! - [`ManagedComponent::kind`]: the declared kind used for tag inference
//! - [`ManagedComponent::attach_child`]: invoked while executing an attachment
//!   plan, never during synthesis

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use crate::exception::AttachError;
use crate::types::attribute::AttributeModifier;

/// Declared kind of a managed component.
///
/// The kind replaces runtime type checks against framework base classes and
/// keys the closed tag inference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
	/// Links of any flavour; rendered as `<a>`.
	Hyperlink,
	/// Single or multiple choice selection; rendered as `<select>`.
	Choice,
	/// Generic markup container; rendered as `<div>`.
	Container,
	/// Anything else. No inferred tag, cannot hold children.
	Other,
}

impl ComponentKind {
	/// All kinds in decision table order.
	pub const ALL: [ComponentKind; 4] = [
		ComponentKind::Hyperlink,
		ComponentKind::Choice,
		ComponentKind::Container,
		ComponentKind::Other,
	];

	/// Tag inferred for this kind when no explicit tag is supplied.
	///
	/// `None` means the synthesizer falls back to its configured default tag.
	pub const fn default_tag(self) -> Option<&'static str> {
		match self {
			ComponentKind::Hyperlink => Some("a"),
			ComponentKind::Choice => Some("select"),
			ComponentKind::Container => Some("div"),
			ComponentKind::Other => None,
		}
	}

	/// Whether managed children may be attached to components of this kind.
	pub const fn accepts_children(self) -> bool {
		!matches!(self, ComponentKind::Other)
	}
}

impl fmt::Display for ComponentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			ComponentKind::Hyperlink => "hyperlink",
			ComponentKind::Choice => "choice",
			ComponentKind::Container => "container",
			ComponentKind::Other => "other",
		};
		f.write_str(name)
	}
}

/// Capability every managed component must implement.
pub trait ManagedComponent: fmt::Debug {
	/// Declared kind used for tag inference.
	fn kind(&self) -> ComponentKind;

	/// Identifier bound to this component, if any.
	///
	/// Components constructed with a caller-chosen identifier report it here
	/// before registration; the builder keeps it instead of allocating one.
	fn markup_id(&self) -> Option<&str>;

	/// Binds the identifier emitted in the markup for this component.
	///
	/// Called exactly once per handle per build cycle. Registering the same
	/// handle twice is an identity conflict and is rejected by the builder.
	fn assign_markup_id(&mut self, id: String);

	/// Attaches a managed child below this component.
	fn attach_child(&mut self, child: ComponentRef) -> Result<(), AttachError> {
		let _ = child;
		Err(AttachError::NotAContainer {
			parent: self.markup_id().unwrap_or_default().to_string(),
		})
	}

	/// Children attached so far.
	fn children(&self) -> &[ComponentRef] {
		&[]
	}

	/// Drops every attached child.
	///
	/// Containers overriding [`attach_child`](Self::attach_child) must
	/// override this too, so a re-executed plan starts from an empty list.
	fn detach_children(&mut self) {}

	/// Hands an attribute modifier to the component.
	fn add_modifier(&mut self, modifier: AttributeModifier);

	/// Attribute modifiers handed to the component so far.
	fn modifiers(&self) -> &[AttributeModifier];

	/// Drops every modifier handed to the component.
	fn clear_modifiers(&mut self);

	/// Re-evaluates render-time state such as visibility.
	fn configure(&mut self) {}

	fn is_visible(&self) -> bool {
		true
	}
}

/// State shared by most component implementations.
///
/// Embedding this struct covers the identifier, modifier and visibility parts
/// of [`ManagedComponent`].
#[derive(Debug, Clone)]
pub struct ComponentBase {
	markup_id: Option<String>,
	modifiers: Vec<AttributeModifier>,
	visible: bool,
}

impl ComponentBase {
	/// Creates state with no identifier; the builder allocates one.
	pub fn anonymous() -> Self {
		Self {
			markup_id: None,
			modifiers: Vec::new(),
			visible: true,
		}
	}

	/// Creates state with a caller-chosen identifier.
	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			markup_id: Some(id.into()),
			..Self::anonymous()
		}
	}

	pub fn markup_id(&self) -> Option<&str> {
		self.markup_id.as_deref()
	}

	pub fn assign_markup_id(&mut self, id: String) {
		self.markup_id = Some(id);
	}

	pub fn add_modifier(&mut self, modifier: AttributeModifier) {
		self.modifiers.push(modifier);
	}

	pub fn modifiers(&self) -> &[AttributeModifier] {
		&self.modifiers
	}

	pub fn clear_modifiers(&mut self) {
		self.modifiers.clear();
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}
}

impl Default for ComponentBase {
	fn default() -> Self {
		Self::anonymous()
	}
}

/// Typed, shared handle to a managed component.
///
/// The builder hands the same handle back to the caller so it can be
/// referenced later, for example as a partial update target.
pub struct Handle<C: ?Sized> {
	inner: Rc<RefCell<C>>,
}

impl<C> Handle<C> {
	pub fn new(component: C) -> Self {
		Self {
			inner: Rc::new(RefCell::new(component)),
		}
	}
}

impl<C: ?Sized> Handle<C> {
	pub fn borrow(&self) -> Ref<'_, C> {
		self.inner.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, C> {
		self.inner.borrow_mut()
	}
}

impl<C: ManagedComponent + 'static> Handle<C> {
	/// Erases the concrete component type.
	pub fn to_ref(&self) -> ComponentRef {
		let inner: Rc<RefCell<dyn ManagedComponent>> = self.inner.clone();
		ComponentRef { inner }
	}

	/// Identifier currently bound to the component.
	pub fn markup_id(&self) -> Option<String> {
		self.inner.borrow().markup_id().map(str::to_string)
	}
}

impl<C: ?Sized> Clone for Handle<C> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<C: fmt::Debug + ?Sized> fmt::Debug for Handle<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.inner.try_borrow() {
			Ok(component) => f.debug_tuple("Handle").field(&&*component).finish(),
			Err(_) => f.write_str("Handle(<borrowed>)"),
		}
	}
}

/// Type-erased handle stored in the tree and in attachment plans.
///
/// Equality is identity: two refs are equal when they point at the same
/// component instance.
#[derive(Clone)]
pub struct ComponentRef {
	inner: Rc<RefCell<dyn ManagedComponent>>,
}

impl ComponentRef {
	pub fn borrow(&self) -> Ref<'_, dyn ManagedComponent + 'static> {
		self.inner.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, dyn ManagedComponent + 'static> {
		self.inner.borrow_mut()
	}

	pub fn kind(&self) -> ComponentKind {
		self.inner.borrow().kind()
	}

	pub fn markup_id(&self) -> Option<String> {
		self.inner.borrow().markup_id().map(str::to_string)
	}

	/// Whether both refs point at the same component instance.
	pub fn ptr_eq(&self, other: &ComponentRef) -> bool {
		std::ptr::addr_eq(Rc::as_ptr(&self.inner), Rc::as_ptr(&other.inner))
	}

	/// Thin address of the component, stable for the component's lifetime.
	pub fn addr(&self) -> usize {
		Rc::as_ptr(&self.inner) as *const () as usize
	}
}

impl PartialEq for ComponentRef {
	fn eq(&self, other: &Self) -> bool {
		self.ptr_eq(other)
	}
}

impl Eq for ComponentRef {}

impl<C: ManagedComponent + 'static> From<&Handle<C>> for ComponentRef {
	fn from(handle: &Handle<C>) -> Self {
		handle.to_ref()
	}
}

impl fmt::Debug for ComponentRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.inner.try_borrow() {
			Ok(component) => f
				.debug_struct("ComponentRef")
				.field("markup_id", &component.markup_id())
				.field("kind", &component.kind())
				.finish(),
			Err(_) => f
				.debug_struct("ComponentRef")
				.field("addr", &self.addr())
				.finish_non_exhaustive(),
		}
	}
}
