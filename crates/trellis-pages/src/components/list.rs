//! Repeated markup over a list model.

use std::fmt;

use trellis_core::{ComponentBase, ComponentKind, ComponentRef, ManagedComponent};

use super::model::Model;

/// Repeats its item markup once per element of a list model.
pub struct ListView<T> {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	model: Model<Vec<T>>,
}

impl<T> ListView<T> {
	pub fn new(id: impl Into<String>, model: Model<Vec<T>>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			children: Vec::new(),
			model,
		}
	}

	/// An anonymous list view; the builder allocates its identifier.
	pub fn anonymous(model: Model<Vec<T>>) -> Self {
		Self {
			base: ComponentBase::anonymous(),
			children: Vec::new(),
			model,
		}
	}

	pub fn model(&self) -> &Model<Vec<T>> {
		&self.model
	}

	/// Number of items in the current model value.
	pub fn item_count(&self) -> usize {
		self.model.with(Vec::len)
	}
}

impl<T: fmt::Debug> fmt::Debug for ListView<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListView")
			.field("base", &self.base)
			.field("model", &self.model)
			.field("children", &self.children.len())
			.finish()
	}
}

impl<T: fmt::Debug + 'static> ManagedComponent for ListView<T> {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Container
	}

	delegate_base!();
	delegate_children!();
}

/// One repetition of a [`ListView`], holding the item's model.
pub struct ListItem<T> {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	index: usize,
	model: Model<T>,
}

impl<T> ListItem<T> {
	pub fn new(index: usize, model: Model<T>) -> Self {
		Self {
			base: ComponentBase::anonymous(),
			children: Vec::new(),
			index,
			model,
		}
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn model(&self) -> &Model<T> {
		&self.model
	}
}

impl<T: fmt::Debug> fmt::Debug for ListItem<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListItem")
			.field("base", &self.base)
			.field("index", &self.index)
			.field("model", &self.model)
			.finish_non_exhaustive()
	}
}

impl<T: fmt::Debug + 'static> ManagedComponent for ListItem<T> {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Container
	}

	delegate_base!();
	delegate_children!();
}
