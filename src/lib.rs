//! # Trellis
//!
//! A type-safe HTML builder for pages made of managed server-side components.
//!
//! Pages declare their structure with nested builder calls. The result is a
//! markup template where every managed component is tagged with a
//! `wicket:id='...'` attribute, plus an attachment plan telling the hosting
//! framework which component belongs under which parent.
//!
//! ## Feature Flags
//!
//! - `core` - Html tree, attributes, component capability and errors
//! - `pages` (default) - Tree builder, stock components, synthesizer and page host
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use trellis::prelude::*;
//!
//! struct ExamplePage {
//!     name: Model<String>,
//! }
//!
//! impl HtmlPage for ExamplePage {
//!     fn render(&self, b: &mut HtmlBuilder<'_>) {
//!         b.div([], |b| {
//!             b.label("text", self.name.map(|n| format!("Hello {n}!")));
//!             let name = self.name.clone();
//!             b.link(move || name.set("Matthias".into()), |b| b.text("Update this"));
//!         });
//!     }
//! }
//!
//! let mut page = PageInstance::new(ExamplePage { name: Model::of("World".into()) });
//! let markup = page.render()?;
//! ```

#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "core")]
pub use trellis_core::{
	AttachError, Attribute, AttributeModifier, BuildError, ComponentBase, ComponentKind,
	ComponentRef, ConstructionError, Handle, Html, IdentityConflictError, ManagedComponent,
};

#[cfg(feature = "pages")]
pub use trellis_pages::{
	HtmlBuilder, HtmlPage, MarkupSynthesizer, PageError, PageInstance, PageRoot, RenderedPage,
	SynthesisOptions, Tree, render,
};

/// Prelude module for convenient imports
#[cfg(feature = "pages")]
pub mod prelude {
	pub use trellis_pages::prelude::*;
}
