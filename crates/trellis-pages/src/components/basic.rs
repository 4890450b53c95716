//! Labels, containers and feedback panels.

use std::fmt;
use std::rc::Rc;

use trellis_core::{ComponentBase, ComponentKind, ComponentRef, ManagedComponent};

use super::model::Model;

/// Displays text produced by a model or getter.
pub struct Label {
	base: ComponentBase,
	text: Rc<dyn Fn() -> String>,
	placeholder: bool,
}

impl Label {
	/// Creates a label with fixed text.
	pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
		let text = text.into();
		Self::from_fn(id, move || text.clone())
	}

	/// Creates a label whose text is re-read on every render.
	pub fn from_fn(id: impl Into<String>, text: impl Fn() -> String + 'static) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			text: Rc::new(text),
			placeholder: false,
		}
	}

	/// Creates a label bound to a string model.
	pub fn for_model(id: impl Into<String>, model: &Model<String>) -> Self {
		let model = model.clone();
		Self::from_fn(id, move || model.get())
	}

	/// Keeps a placeholder tag in the page while hidden, so partial updates
	/// can find it again.
	pub fn with_placeholder_tag(mut self) -> Self {
		self.placeholder = true;
		self
	}

	pub fn text(&self) -> String {
		(self.text)()
	}

	pub fn outputs_placeholder(&self) -> bool {
		self.placeholder
	}
}

impl fmt::Debug for Label {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Label")
			.field("markup_id", &self.base.markup_id())
			.field("placeholder", &self.placeholder)
			.finish_non_exhaustive()
	}
}

impl ManagedComponent for Label {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Other
	}

	delegate_base!();
}

/// Generic container grouping other components.
#[derive(Debug, Default)]
pub struct WebMarkupContainer {
	base: ComponentBase,
	children: Vec<ComponentRef>,
}

impl WebMarkupContainer {
	/// Creates a container; the builder allocates its identifier.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_id(id: impl Into<String>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			children: Vec::new(),
		}
	}
}

impl ManagedComponent for WebMarkupContainer {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Container
	}

	delegate_base!();
	delegate_children!();
}

/// Displays feedback messages, optionally filtered to one reporting component.
#[derive(Debug)]
pub struct FeedbackPanel {
	base: ComponentBase,
	children: Vec<ComponentRef>,
	reporter: Option<String>,
	messages: Vec<String>,
}

impl FeedbackPanel {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ComponentBase::with_id(id),
			children: Vec::new(),
			reporter: None,
			messages: Vec::new(),
		}
	}

	/// Creates a panel named `<reporter>.feedback` that only shows messages
	/// reported by the component with identifier `reporter`.
	pub fn for_component(reporter: impl Into<String>) -> Self {
		let reporter = reporter.into();
		let mut panel = Self::new(format!("{reporter}.feedback"));
		panel.reporter = Some(reporter);
		panel
	}

	pub fn reporter(&self) -> Option<&str> {
		self.reporter.as_deref()
	}

	/// Records a message reported by `source`, dropping it when it does not
	/// pass the panel's filter.
	pub fn report(&mut self, source: &str, message: impl Into<String>) -> bool {
		if self.reporter.as_deref().is_some_and(|r| r != source) {
			return false;
		}
		self.messages.push(message.into());
		true
	}

	pub fn messages(&self) -> &[String] {
		&self.messages
	}
}

impl ManagedComponent for FeedbackPanel {
	fn kind(&self) -> ComponentKind {
		ComponentKind::Container
	}

	delegate_base!();
	delegate_children!();
}
