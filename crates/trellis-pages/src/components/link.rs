//! Hyperlinks, synchronous and partial-update.

use std::fmt;

use trellis_core::{ComponentBase, ComponentKind, ComponentRef, ManagedComponent};

use super::{Callback, Predicate};

/// Link invoking a server-side callback on click.
#[derive(Default)]
pub struct Link {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	on_click: Option<Callback>,
	visible: Option<Predicate>,
}

impl Link {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			..Self::default()
		}
	}

	pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
		self.on_click = Some(Box::new(f));
		self
	}

	/// Shows the link only while `predicate` holds; evaluated on each
	/// configure pass.
	pub fn visible_when(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
		self.visible = Some(Box::new(predicate));
		self
	}

	/// Runs the click handler. Returns `false` when none is set.
	pub fn click(&mut self) -> bool {
		match self.on_click.as_mut() {
			Some(f) => {
				f();
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for Link {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Link")
			.field("base", &self.base)
			.field("children", &self.children.len())
			.finish_non_exhaustive()
	}
}

impl ManagedComponent for Link {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Hyperlink
	}

	delegate_base!();
	delegate_children!();
	configure_visibility!();
}

/// Collects the components to re-render in a partial page update.
#[derive(Debug, Default)]
pub struct AjaxRequestTarget {
	components: Vec<ComponentRef>,
}

impl AjaxRequestTarget {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks a component for re-rendering. Adding the same component twice
	/// has no further effect.
	pub fn add(&mut self, component: impl Into<ComponentRef>) {
		let component = component.into();
		if !self.components.contains(&component) {
			self.components.push(component);
		}
	}

	pub fn components(&self) -> &[ComponentRef] {
		&self.components
	}

	pub fn markup_ids(&self) -> Vec<String> {
		self.components.iter().filter_map(ComponentRef::markup_id).collect()
	}
}

type AjaxCallback = Box<dyn FnMut(&mut AjaxRequestTarget)>;

/// Link whose click handler receives a partial-update target.
#[derive(Default)]
pub struct AjaxLink {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	on_click: Option<AjaxCallback>,
	visible: Option<Predicate>,
}

impl AjaxLink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			..Self::default()
		}
	}

	pub fn on_click(mut self, f: impl FnMut(&mut AjaxRequestTarget) + 'static) -> Self {
		self.on_click = Some(Box::new(f));
		self
	}

	pub fn visible_when(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
		self.visible = Some(Box::new(predicate));
		self
	}

	pub fn click(&mut self, target: &mut AjaxRequestTarget) -> bool {
		match self.on_click.as_mut() {
			Some(f) => {
				f(target);
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for AjaxLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AjaxLink")
			.field("base", &self.base)
			.field("children", &self.children.len())
			.finish_non_exhaustive()
	}
}

impl ManagedComponent for AjaxLink {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Hyperlink
	}

	delegate_base!();
	delegate_children!();
	configure_visibility!();
}
