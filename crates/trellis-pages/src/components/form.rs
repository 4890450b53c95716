//! Forms and their submit controls.

use std::fmt;

use trellis_core::{ComponentBase, ComponentKind, ComponentRef, ManagedComponent};

use super::{Callback, Predicate};

/// Groups form controls and runs a callback on submission.
pub struct Form {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	on_submit: Option<Callback>,
	visible: Option<Predicate>,
}

impl Form {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			children: Vec::new(),
			on_submit: None,
			visible: None,
		}
	}

	pub fn on_submit(mut self, f: impl FnMut() + 'static) -> Self {
		self.on_submit = Some(Box::new(f));
		self
	}

	pub fn visible_when(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
		self.visible = Some(Box::new(predicate));
		self
	}

	/// Runs the submit handler. Returns `false` when none is set.
	pub fn submit(&mut self) -> bool {
		match self.on_submit.as_mut() {
			Some(f) => {
				f();
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for Form {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Form")
			.field("base", &self.base)
			.field("children", &self.children.len())
			.finish_non_exhaustive()
	}
}

impl ManagedComponent for Form {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Container
	}

	delegate_base!();
	delegate_children!();
	configure_visibility!();
}

/// Submits its enclosing form.
///
/// Rendered as a `<button>`, so its body may hold components such as an
/// icon or a counter label.
#[derive(Default)]
pub struct SubmitLink {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	on_submit: Option<Callback>,
	visible: Option<Predicate>,
}

impl SubmitLink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			..Self::default()
		}
	}

	pub fn on_submit(mut self, f: impl FnMut() + 'static) -> Self {
		self.on_submit = Some(Box::new(f));
		self
	}

	pub fn visible_when(mut self, predicate: impl Fn() -> bool + 'static) -> Self {
		self.visible = Some(Box::new(predicate));
		self
	}

	pub fn submit(&mut self) -> bool {
		match self.on_submit.as_mut() {
			Some(f) => {
				f();
				true
			}
			None => false,
		}
	}
}

impl fmt::Debug for SubmitLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SubmitLink")
			.field("base", &self.base)
			.field("children", &self.children.len())
			.finish_non_exhaustive()
	}
}

impl ManagedComponent for SubmitLink {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Container
	}

	delegate_base!();
	delegate_children!();
	configure_visibility!();
}
