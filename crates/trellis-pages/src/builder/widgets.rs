//! Component wrappers.
//!
//! Each wrapper constructs a stock component, binds the given callback and
//! delegates to [`HtmlBuilder::managed`]. None of them adds structure of
//! its own.

use std::borrow::Cow;
use std::fmt;

use trellis_core::{AttributeModifier, Handle};

use super::html::HtmlBuilder;
use crate::components::{
	AjaxLink, AjaxRequestTarget, DropDownChoice, FeedbackPanel, Form, Label, Link, ListItem,
	ListView, Model, SubmitLink, WebMarkupContainer,
};

impl HtmlBuilder<'_> {
	/// Appends a `<a>` link running `on_click` when followed.
	pub fn link(
		&mut self,
		on_click: impl FnMut() + 'static,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Handle<Link> {
		self.managed(Link::new().on_click(on_click), None, [], body)
	}

	/// Appends a partial-update link. `on_click` adds the components to
	/// re-render to the request target.
	///
	/// ## Example
	///
	/// ```ignore
	/// let label = b.label("text", greeting);
	/// b.ajax_link(move |target| target.add(&label), |b| b.text("Refresh"));
	/// ```
	pub fn ajax_link(
		&mut self,
		on_click: impl FnMut(&mut AjaxRequestTarget) + 'static,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Handle<AjaxLink> {
		self.managed(AjaxLink::new().on_click(on_click), None, [], body)
	}

	/// Appends a submit control rendered as `<button>`.
	pub fn submit_link(
		&mut self,
		on_submit: impl FnMut() + 'static,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Handle<SubmitLink> {
		self.managed(
			SubmitLink::new().on_submit(on_submit),
			Some(Cow::Borrowed("button")),
			[],
			body,
		)
	}

	/// Appends a `<form>` with the given identifier.
	pub fn form(
		&mut self,
		id: impl Into<String>,
		modifiers: impl IntoIterator<Item = AttributeModifier>,
		on_submit: impl FnMut() + 'static,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Handle<Form> {
		self.managed(
			Form::new(id).on_submit(on_submit),
			Some(Cow::Borrowed("form")),
			modifiers,
			body,
		)
	}

	/// Appends an anonymous container holding whatever `body` declares.
	pub fn container(
		&mut self,
		modifiers: impl IntoIterator<Item = AttributeModifier>,
		body: impl FnOnce(&mut HtmlBuilder<'_>),
	) -> Handle<WebMarkupContainer> {
		self.managed(WebMarkupContainer::new(), None, modifiers, body)
	}

	/// Appends a label whose text is computed by `text`.
	pub fn label(
		&mut self,
		id: impl Into<String>,
		text: impl Fn() -> String + 'static,
	) -> Handle<Label> {
		self.component(Label::from_fn(id, text))
	}

	/// Appends a `<select>` bound to `model`.
	pub fn drop_down_choice<T: Clone + fmt::Debug + 'static>(
		&mut self,
		id: impl Into<String>,
		model: &Model<T>,
		choices: Vec<T>,
	) -> Handle<DropDownChoice<T>> {
		self.component(DropDownChoice::new(id, model.clone(), choices))
	}

	/// Appends a feedback panel showing messages reported by `reporter`.
	pub fn feedback_panel(&mut self, reporter: impl Into<String>) -> Handle<FeedbackPanel> {
		self.component(FeedbackPanel::for_component(reporter))
	}

	/// Appends a list view rendered as `tag`, running `item` once per
	/// element of the model.
	///
	/// Every repetition is wrapped in its own [`ListItem`] container holding
	/// a snapshot of the element, so components declared by `item` attach
	/// under that item. Items are emitted with the tag [`item_tag`] picks
	/// for `tag`, e.g. `<li>` inside `<ul>`.
	pub fn list_view<T: Clone + fmt::Debug + 'static>(
		&mut self,
		tag: impl Into<Cow<'static, str>>,
		model: &Model<Vec<T>>,
		item: impl Fn(&mut HtmlBuilder<'_>, &Model<T>),
	) -> Handle<ListView<T>> {
		let tag = tag.into();
		let row = item_tag(&tag);
		let items = model.get();
		self.managed(ListView::anonymous(model.clone()), Some(tag), [], |b| {
			for (index, value) in items.into_iter().enumerate() {
				let item_model = Model::of(value);
				b.managed(
					ListItem::new(index, item_model.clone()),
					Some(Cow::Borrowed(row)),
					[],
					|b| item(b, &item_model),
				);
			}
		})
	}
}

/// Tag of one repetition inside a list rendered as `list_tag`.
pub fn item_tag(list_tag: &str) -> &'static str {
	match list_tag.to_ascii_lowercase().as_str() {
		"ul" | "ol" | "menu" => "li",
		"table" | "thead" | "tbody" | "tfoot" => "tr",
		"select" | "datalist" | "optgroup" => "option",
		_ => "div",
	}
}
