//! Single-selection drop-down.

use std::fmt;

use trellis_core::{ComponentBase, ComponentKind, ComponentRef, ManagedComponent};

use super::model::Model;

/// Lets the user pick one of `choices`; the selection is written to the model.
pub struct DropDownChoice<T> {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	model: Model<T>,
	choices: Vec<T>,
}

impl<T: Clone> DropDownChoice<T> {
	pub fn new(id: impl Into<String>, model: Model<T>, choices: Vec<T>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			children: Vec::new(),
			model,
			choices,
		}
	}

	pub fn choices(&self) -> &[T] {
		&self.choices
	}

	pub fn model(&self) -> &Model<T> {
		&self.model
	}

	/// Selects the choice at `index`, returning `false` when it is out of range.
	pub fn select(&self, index: usize) -> bool {
		match self.choices.get(index) {
			Some(choice) => {
				self.model.set(choice.clone());
				true
			}
			None => false,
		}
	}
}

impl<T: PartialEq> DropDownChoice<T> {
	/// Position of the model's current value among the choices.
	pub fn selected_index(&self) -> Option<usize> {
		self.model
			.with(|current| self.choices.iter().position(|c| c == current))
	}
}

impl<T: fmt::Debug> fmt::Debug for DropDownChoice<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DropDownChoice")
			.field("base", &self.base)
			.field("model", &self.model)
			.field("choices", &self.choices)
			.finish_non_exhaustive()
	}
}

impl<T: fmt::Debug + 'static> ManagedComponent for DropDownChoice<T> {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Choice
	}

	delegate_base!();
	delegate_children!();
}
