//! Stock managed components
//!
//! Components the derived builder wrappers construct. Each one declares its
//! [`ComponentKind`](trellis_core::ComponentKind) explicitly and carries the
//! callbacks the hosting framework invokes (click, submit, visibility).
//!
//! | Component | Kind | Tag |
//! |-----------|------|-----|
//! | [`Label`] | Other | fallback |
//! | [`WebMarkupContainer`] | Container | `div` |
//! | [`Link`], [`AjaxLink`] | Hyperlink | `a` |
//! | [`SubmitLink`] | Container | `button` (explicit) |
//! | [`Form`] | Container | `form` (explicit) |
//! | [`DropDownChoice`] | Choice | `select` |
//! | [`FeedbackPanel`] | Container | `div` |
//! | [`ListView`] | Container | caller-chosen |
//! | [`ListItem`] | Container | inferred from the list tag (`li`, `tr`, `option`, `div`) |

type Callback = Box<dyn FnMut()>;
type Predicate = Box<dyn Fn() -> bool>;

/// Implements the identifier, modifier and visibility parts of
/// `ManagedComponent` by delegating to a `base: ComponentBase` field.
macro_rules! delegate_base {
	() => {
		fn markup_id(&self) -> Option<&str> {
			self.base.markup_id()
		}

		fn assign_markup_id(&mut self, id: String) {
			self.base.assign_markup_id(id);
		}

		fn add_modifier(&mut self, modifier: trellis_core::AttributeModifier) {
			self.base.add_modifier(modifier);
		}

		fn modifiers(&self) -> &[trellis_core::AttributeModifier] {
			self.base.modifiers()
		}

		fn clear_modifiers(&mut self) {
			self.base.clear_modifiers();
		}

		fn is_visible(&self) -> bool {
			self.base.is_visible()
		}
	};
}

/// Implements child attachment by pushing onto a `children` field.
macro_rules! delegate_children {
	() => {
		fn attach_child(
			&mut self,
			child: trellis_core::ComponentRef,
		) -> Result<(), trellis_core::AttachError> {
			self.children.push(child);
			Ok(())
		}

		fn children(&self) -> &[trellis_core::ComponentRef] {
			&self.children
		}

		fn detach_children(&mut self) {
			self.children.clear();
		}
	};
}

/// Implements `configure` by evaluating an optional `visible` predicate.
macro_rules! configure_visibility {
	() => {
		fn configure(&mut self) {
			if let Some(visible) = &self.visible {
				let visible = visible();
				self.base.set_visible(visible);
			}
		}
	};
}

mod basic;
mod choice;
mod form;
mod link;
mod list;
mod model;

pub use basic::{FeedbackPanel, Label, WebMarkupContainer};
pub use choice::DropDownChoice;
pub use form::{Form, SubmitLink};
pub use link::{AjaxLink, AjaxRequestTarget, Link};
pub use list::{ListItem, ListView};
pub use model::Model;
