//! Example page integration tests
//!
//! A greeting page with a label, a plain link, a partial-update link and a
//! form holding a drop-down field, declared through small reusable helpers.
//!
//! Success Criteria:
//! 1. The page renders the expected template
//! 2. Every component lands under the right parent
//! 3. Callbacks mutate the shared model
//!
//! Test Categories:
//! - Use Cases: 5 tests

use std::fmt::Debug;

use rstest::*;
use trellis_pages::components::{AjaxRequestTarget, DropDownChoice, Label, Model};
use trellis_pages::prelude::*;

/// Wraps `f` in an html document with the given title.
fn frame(b: &mut HtmlBuilder<'_>, title: &str, f: impl FnOnce(&mut HtmlBuilder<'_>)) {
	b.html([], |b| {
		b.head([], |b| b.title(title));
		b.body([], f);
	});
}

/// A labelled form row: the label, the field and the field's feedback panel.
fn form_field<T: Clone + Debug + 'static>(
	b: &mut HtmlBuilder<'_>,
	label: &str,
	tag: Option<&'static str>,
	field: DropDownChoice<T>,
) -> Option<Handle<DropDownChoice<T>>> {
	let id = field.markup_id().unwrap_or_default().to_string();
	let mut handle = None;
	b.div([Attribute::class("row")], |b| {
		b.label_tag([Attribute::new("wicket:for", id.clone())], |b| b.text(label));
		handle = Some(match tag {
			Some(tag) => b.component_with_tag(tag, field),
			None => b.component(field),
		});
		b.feedback_panel(id);
	});
	handle
}

struct ExamplePage {
	name: Model<String>,
}

impl ExamplePage {
	fn change_name(name: &Model<String>) {
		name.set("Matthias".to_string());
	}
}

impl HtmlPage for ExamplePage {
	fn render(&self, b: &mut HtmlBuilder<'_>) {
		frame(b, "Hello World!", |b| {
			b.div([], |b| {
				let label = b.component(
					Label::from_fn("text", self.name.map(|n| format!("Hello {n}!")))
						.with_placeholder_tag(),
				);

				let name = self.name.clone();
				b.link(move || Self::change_name(&name), |b| b.text("Update this"));

				let name = self.name.clone();
				b.ajax_link(
					move |target| {
						Self::change_name(&name);
						target.add(&label);
					},
					|b| b.text("Update with Ajax"),
				);

				b.form(
					"myForm",
					[AttributeModifier::append("class", "")],
					|| {},
					|b| {
						form_field(
							b,
							"Name",
							Some("select"),
							DropDownChoice::new(
								"newName",
								self.name.clone(),
								vec!["Matthias".to_string(), "World".to_string()],
							),
						);
						b.submit_link(|| {}, |b| b.text("Submit this"));
					},
				);
			});
		});
	}
}

#[fixture]
fn page() -> ExamplePage {
	ExamplePage {
		name: Model::of("World".to_string()),
	}
}

const EXPECTED: &str = "<html><head><title>Hello World!</title></head><body><div>\
	<div wicket:id='text'></div>\
	<a wicket:id='c0'>Update this</a>\
	<a wicket:id='c1'>Update with Ajax</a>\
	<form wicket:id='myForm'>\
	<div class='row'><label wicket:for='newName'>Name</label>\
	<select wicket:id='newName'></select>\
	<div wicket:id='newName.feedback'></div></div>\
	<button wicket:id='c2'>Submit this</button>\
	</form></div></body></html>";

// ============================================================================
// Use Cases (5 tests)
// ============================================================================

/// Tests the rendered template
#[rstest]
fn test_example_page_markup(page: ExamplePage) {
	let mut instance = PageInstance::new(page);
	assert_eq!(instance.render().unwrap(), EXPECTED);
}

/// Tests the attachment plan of the page
#[rstest]
fn test_example_page_plan(page: ExamplePage) {
	let rendered = page.render_page(&SynthesisOptions::default()).unwrap();
	let plan = rendered.plan();
	assert_eq!(plan.len(), 7);

	let roots: Vec<_> = plan.roots().filter_map(|r| r.markup_id()).collect();
	assert_eq!(roots, vec!["text", "c0", "c1", "myForm"]);

	let form = plan.find("myForm").unwrap();
	assert_eq!(form.tag(), "form");
	assert_eq!(form.modifiers().len(), 1);
	let in_form: Vec<_> = plan
		.children_of(form.handle())
		.filter_map(|c| c.markup_id())
		.collect();
	assert_eq!(in_form, vec!["newName", "newName.feedback", "c2"]);
}

/// Tests that hosting attaches the form fields under the form
#[rstest]
fn test_example_page_attach(page: ExamplePage) {
	let mut instance = PageInstance::new(page);
	instance.render().unwrap();
	let root = instance.root();
	assert_eq!(root.children().len(), 4);
	let form = root.find("myForm").unwrap();
	assert_eq!(form.kind(), ComponentKind::Container);
	assert_eq!(form.borrow().children().len(), 3);
	assert_eq!(form.borrow().modifiers().len(), 1);
	assert!(root.find("newName.feedback").is_some());
}

/// Tests the partial-update link callback
#[rstest]
fn test_ajax_link_updates_label() {
	let name = Model::of("World".to_string());
	let mut label = None;
	let mut ajax = None;
	render(&SynthesisOptions::default(), |b| {
		let text = b.label("text", name.map(|n| format!("Hello {n}!")));
		label = Some(text.clone());
		let model = name.clone();
		ajax = Some(b.ajax_link(
			move |target| {
				model.set("Matthias".to_string());
				target.add(&text);
			},
			|b| b.text("Update with Ajax"),
		));
	})
	.unwrap();

	let mut target = AjaxRequestTarget::new();
	assert!(ajax.unwrap().borrow_mut().click(&mut target));
	assert_eq!(target.markup_ids(), vec!["text".to_string()]);
	assert_eq!(label.unwrap().borrow().text(), "Hello Matthias!");
}

/// Tests that two hosted instances use distinct cache keys and fresh ids
#[rstest]
fn test_instances_render_independently() {
	let mut first = PageInstance::new(page());
	let mut second = PageInstance::new(page());
	assert_ne!(first.cache_key(), second.cache_key());
	let a = first.render().unwrap().to_string();
	let b = second.render().unwrap().to_string();
	assert_eq!(a, b);
	assert_eq!(first.render().unwrap(), EXPECTED);
}
