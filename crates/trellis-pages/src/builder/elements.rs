//! Plain element shortcuts.
//!
//! Each shortcut is [`HtmlBuilder::element`] with a fixed tag name.

use trellis_core::Attribute;

use super::html::HtmlBuilder;

/// Macro for defining plain element shortcuts
macro_rules! define_element {
	($(#[$meta:meta])* $name:ident, $tag:literal) => {
		$(#[$meta])*
		pub fn $name(
			&mut self,
			attributes: impl IntoIterator<Item = Attribute>,
			body: impl FnOnce(&mut HtmlBuilder<'_>),
		) {
			self.element($tag, attributes, body)
		}
	};
}

impl HtmlBuilder<'_> {
	define_element!(
		/// Appends an `<html>` element
		html, "html"
	);

	define_element!(
		/// Appends a `<head>` element
		head, "head"
	);

	define_element!(
		/// Appends a `<body>` element
		body, "body"
	);

	define_element!(
		/// Appends a `<div>` element
		///
		/// ## Example
		///
		/// ```ignore
		/// b.div([Attribute::class("row")], |b| b.text("Content"));
		/// ```
		div, "div"
	);

	define_element!(
		/// Appends a `<span>` element
		span, "span"
	);

	define_element!(
		/// Appends a `<p>` element
		p, "p"
	);

	define_element!(
		/// Appends an `<h1>` element
		h1, "h1"
	);

	define_element!(
		/// Appends an `<h2>` element
		h2, "h2"
	);

	define_element!(
		/// Appends a plain `<button>` element
		button, "button"
	);

	define_element!(
		/// Appends a `<ul>` element
		ul, "ul"
	);

	define_element!(
		/// Appends an `<li>` element
		li, "li"
	);

	define_element!(
		/// Appends a plain `<label>` element
		///
		/// Named `label_tag` to keep `label` for the managed [`Label`] component.
		///
		/// [`Label`]: crate::components::Label
		label_tag, "label"
	);

	/// Appends a `<title>` element holding `content`.
	pub fn title(&mut self, content: impl Into<String>) {
		let content = content.into();
		self.element("title", [], |b| b.text(content));
	}
}

#[cfg(test)]
mod tests {
	use crate::builder::Tree;
	use crate::ssr::{IdStrategy, MarkupSynthesizer};
	use rstest::rstest;
	use trellis_core::Attribute;

	#[rstest]
	fn test_document_skeleton() {
		let tree = Tree::build(IdStrategy::default(), |b| {
			b.html([], |b| {
				b.head([], |b| b.title("Hello World!"));
				b.body([], |b| {
					b.h1([], |b| b.text("Greeting"));
					b.label_tag([Attribute::new("wicket:for", "name")], |b| b.text("Name"));
				});
			});
		})
		.unwrap();
		assert_eq!(
			MarkupSynthesizer::default().synthesize(&tree).markup(),
			"<html><head><title>Hello World!</title></head><body><h1>Greeting</h1>\
			 <label wicket:for='name'>Name</label></body></html>"
		);
	}

	#[rstest]
	fn test_empty_element_keeps_close_tag() {
		let tree = Tree::build(IdStrategy::default(), |b| b.div([], |_| {})).unwrap();
		assert_eq!(
			MarkupSynthesizer::default().synthesize(&tree).markup(),
			"<div></div>"
		);
	}
}
