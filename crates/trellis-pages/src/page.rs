//! Page host
//!
//! A page declares its structure by implementing [`HtmlPage`]. Hosting it
//! runs one cycle: build a fresh tree, synthesize the markup and attachment
//! plan, then execute the plan against a fresh [`PageRoot`].
//!
//! ## Example
//!
//! ```ignore
//! struct Hello;
//!
//! impl HtmlPage for Hello {
//! 	fn render(&self, b: &mut HtmlBuilder<'_>) {
//! 		b.div([], |b| b.text("Hello"));
//! 	}
//! }
//!
//! let mut instance = PageInstance::new(Hello);
//! assert_eq!(instance.render()?, "<div>Hello</div>");
//! ```

use thiserror::Error;
use uuid::Uuid;

use trellis_core::{AttachError, BuildError, ComponentRef};

use crate::builder::{HtmlBuilder, Tree};
use crate::ssr::{AttachmentPlan, ConfigError, MarkupSynthesizer, RenderError, SynthesisOptions};

/// Errors raised while hosting a page.
#[derive(Debug, Error)]
pub enum PageError {
	#[error("Page options are invalid: {0}")]
	Config(#[from] ConfigError),

	#[error("Page build failed: {0}")]
	Build(#[from] BuildError),

	#[error("Page attach failed: {0}")]
	Attach(#[from] AttachError),
}

impl From<RenderError> for PageError {
	fn from(error: RenderError) -> Self {
		match error {
			RenderError::Config(error) => Self::Config(error),
			RenderError::Build(error) => Self::Build(error),
		}
	}
}

/// A page whose markup is declared by builder calls.
pub trait HtmlPage {
	/// Declares the page structure.
	fn render(&self, b: &mut HtmlBuilder<'_>);

	/// Runs one build and synthesis cycle under a fresh cache key.
	fn render_page(&self, options: &SynthesisOptions) -> Result<RenderedPage, RenderError> {
		RenderedPage::build(self, options, Uuid::new_v4())
	}
}

/// Markup and attachment plan of one page render.
#[derive(Debug, Clone)]
pub struct RenderedPage {
	markup: String,
	plan: AttachmentPlan,
	cache_key: Uuid,
}

impl RenderedPage {
	fn build<P: HtmlPage + ?Sized>(
		page: &P,
		options: &SynthesisOptions,
		cache_key: Uuid,
	) -> Result<Self, RenderError> {
		let synthesizer = MarkupSynthesizer::new(options.clone())?;
		let tree = Tree::build(options.id_strategy.clone(), |b| page.render(b))?;
		let (markup, plan) = synthesizer.synthesize(&tree).into_parts();
		Ok(Self {
			markup,
			plan,
			cache_key,
		})
	}

	pub fn markup(&self) -> &str {
		&self.markup
	}

	pub fn plan(&self) -> &AttachmentPlan {
		&self.plan
	}

	/// Key under which a host may cache this markup. Unique per page instance.
	pub fn cache_key(&self) -> Uuid {
		self.cache_key
	}
}

/// Root container receiving top-level components.
#[derive(Debug, Default)]
pub struct PageRoot {
	children: Vec<ComponentRef>,
}

impl PageRoot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add(&mut self, component: ComponentRef) {
		self.children.push(component);
	}

	pub fn children(&self) -> &[ComponentRef] {
		&self.children
	}

	/// Finds a component anywhere below the root by markup identifier.
	pub fn find(&self, markup_id: &str) -> Option<ComponentRef> {
		fn search(nodes: &[ComponentRef], markup_id: &str) -> Option<ComponentRef> {
			for node in nodes {
				if node.markup_id().as_deref() == Some(markup_id) {
					return Some(node.clone());
				}
				if let Some(found) = search(node.borrow().children(), markup_id) {
					return Some(found);
				}
			}
			None
		}
		search(&self.children, markup_id)
	}

	/// Runs the configure hook of every component, parents first.
	pub fn configure(&self) {
		fn visit(nodes: &[ComponentRef]) {
			for node in nodes {
				node.borrow_mut().configure();
				let children = node.borrow().children().to_vec();
				visit(&children);
			}
		}
		visit(&self.children);
	}

	/// Markup identifiers of all components that are currently visible,
	/// depth first. Children of a hidden component are skipped.
	pub fn visible_ids(&self) -> Vec<String> {
		fn collect(nodes: &[ComponentRef], out: &mut Vec<String>) {
			for node in nodes {
				let component = node.borrow();
				if !component.is_visible() {
					continue;
				}
				if let Some(id) = component.markup_id() {
					out.push(id.to_string());
				}
				collect(component.children(), out);
			}
		}
		let mut out = Vec::new();
		collect(&self.children, &mut out);
		out
	}
}

/// A hosted page: the page value, its cache key and its live components.
///
/// Every [`render`](Self::render) rebuilds the tree and replaces the root.
/// Components the page keeps across renders are reset by the plan before
/// they are attached again, so their children and modifiers never pile up.
#[derive(Debug)]
pub struct PageInstance<P> {
	page: P,
	cache_key: Uuid,
	options: SynthesisOptions,
	root: PageRoot,
	rendered: Option<RenderedPage>,
}

impl<P: HtmlPage> PageInstance<P> {
	pub fn new(page: P) -> Self {
		Self::with_options(page, SynthesisOptions::default())
	}

	pub fn with_options(page: P, options: SynthesisOptions) -> Self {
		Self {
			page,
			cache_key: Uuid::new_v4(),
			options,
			root: PageRoot::new(),
			rendered: None,
		}
	}

	/// Builds, synthesizes and attaches the page, returning its markup.
	///
	/// # Errors
	///
	/// Returns [`PageError::Config`] when the options are invalid,
	/// [`PageError::Build`] when the page declaration is invalid and
	/// [`PageError::Attach`] when a component rejects a planned child. A
	/// failed attach leaves the instance without a root or rendered output.
	pub fn render(&mut self) -> Result<&str, PageError> {
		let rendered = RenderedPage::build(&self.page, &self.options, self.cache_key)?;
		let mut root = PageRoot::new();
		if let Err(error) = rendered.plan().apply(&mut root) {
			self.root = PageRoot::new();
			self.rendered = None;
			return Err(error.into());
		}
		root.configure();
		tracing::info!(
			cache_key = %self.cache_key,
			components = rendered.plan().len(),
			"rendered page"
		);
		self.root = root;
		Ok(self.rendered.insert(rendered).markup())
	}

	pub fn cache_key(&self) -> Uuid {
		self.cache_key
	}

	pub fn page(&self) -> &P {
		&self.page
	}

	pub fn options(&self) -> &SynthesisOptions {
		&self.options
	}

	pub fn root(&self) -> &PageRoot {
		&self.root
	}

	/// Output of the last successful render.
	pub fn rendered(&self) -> Option<&RenderedPage> {
		self.rendered.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::{Label, Link, Model, WebMarkupContainer};
	use rstest::{fixture, rstest};
	use trellis_core::{AttributeModifier, Handle, ManagedComponent};

	struct Greeting {
		shown: Model<bool>,
	}

	impl HtmlPage for Greeting {
		fn render(&self, b: &mut HtmlBuilder<'_>) {
			b.managed(WebMarkupContainer::with_id("box"), None, [], |b| {
				b.component(Label::new("text", "Hello"));
				b.managed(
					Link::with_id("more").visible_when(self.shown.map(|s| *s)),
					None,
					[],
					|b| b.text("More"),
				);
			});
		}
	}

	#[fixture]
	fn greeting() -> Greeting {
		Greeting {
			shown: Model::of(false),
		}
	}

	#[rstest]
	fn test_render_attaches_nested_components(greeting: Greeting) {
		let mut instance = PageInstance::new(greeting);
		let markup = instance.render().unwrap().to_string();
		assert_eq!(
			markup,
			"<div wicket:id='box'><div wicket:id='text'></div>\
			 <a wicket:id='more'>More</a></div>"
		);
		let root = instance.root();
		assert_eq!(root.children().len(), 1);
		let container = root.find("box").unwrap();
		assert_eq!(container.borrow().children().len(), 2);
		assert!(root.find("more").is_some());
	}

	#[rstest]
	fn test_configure_applies_visibility(greeting: Greeting) {
		let shown = greeting.shown.clone();
		let mut instance = PageInstance::new(greeting);
		instance.render().unwrap();
		assert_eq!(instance.root().visible_ids(), vec!["box", "text"]);
		shown.set(true);
		instance.render().unwrap();
		assert_eq!(instance.root().visible_ids(), vec!["box", "text", "more"]);
	}

	#[rstest]
	fn test_cache_key_is_per_instance() {
		let mut first = PageInstance::new(greeting());
		let mut second = PageInstance::new(greeting());
		assert_ne!(first.cache_key(), second.cache_key());
		let key = first.cache_key();
		first.render().unwrap();
		assert_eq!(first.rendered().unwrap().cache_key(), key);
		second.render().unwrap();
		assert_eq!(second.rendered().unwrap().cache_key(), second.cache_key());
	}

	#[rstest]
	fn test_rerender_starts_fresh(greeting: Greeting) {
		let mut instance = PageInstance::new(greeting);
		instance.render().unwrap();
		instance.render().unwrap();
		assert_eq!(instance.root().children().len(), 1);
	}

	struct Clash;

	impl HtmlPage for Clash {
		fn render(&self, b: &mut HtmlBuilder<'_>) {
			b.component(Label::new("x", "a"));
			b.component(Label::new("x", "b"));
		}
	}

	#[rstest]
	fn test_build_error_surfaces() {
		let mut instance = PageInstance::new(Clash);
		let error = instance.render().unwrap_err();
		assert!(matches!(error, PageError::Build(BuildError::IdentityConflict(_))));
		assert!(instance.rendered().is_none());
	}

	/// Holds its components across renders and registers them again each time.
	struct Kept {
		panel: Handle<WebMarkupContainer>,
		more: Handle<Link>,
	}

	impl HtmlPage for Kept {
		fn render(&self, b: &mut HtmlBuilder<'_>) {
			b.managed_ref(
				&self.panel,
				None,
				[AttributeModifier::append("class", "wide")],
				|b| b.managed_ref(&self.more, None, [], |_| {}),
			);
		}
	}

	#[rstest]
	fn test_kept_handles_rendered_twice() {
		let panel = Handle::new(WebMarkupContainer::new());
		let more = Handle::new(Link::new());
		let mut instance = PageInstance::new(Kept {
			panel: panel.clone(),
			more: more.clone(),
		});

		for _ in 0..2 {
			assert_eq!(
				instance.render().unwrap(),
				"<div wicket:id='c0'><a wicket:id='c1'></a></div>"
			);
			assert_eq!(panel.borrow().children(), &[more.to_ref()]);
			assert_eq!(panel.borrow().modifiers().len(), 1);
			assert_eq!(instance.root().children().len(), 1);
			assert_eq!(instance.root().visible_ids(), vec!["c0", "c1"]);
		}
	}

	#[rstest]
	fn test_invalid_options_surface() {
		let mut instance = PageInstance::with_options(
			greeting(),
			SynthesisOptions::new().fallback_tag("a><b"),
		);
		let error = instance.render().unwrap_err();
		assert!(matches!(
			error,
			PageError::Config(ConfigError::InvalidFallbackTag { .. })
		));
	}

	#[rstest]
	fn test_standalone_render_page() {
		let rendered = Clash.render_page(&SynthesisOptions::default());
		assert!(rendered.is_err());
		let rendered = greeting().render_page(&SynthesisOptions::default()).unwrap();
		assert_eq!(rendered.plan().len(), 3);
	}
}
