//! # Trellis Pages
//!
//! Declarative page building on top of a managed component framework.
//!
//! A page describes its structure with nested builder calls. The builder
//! accumulates an immutable [`Tree`] of plain tags, text leaves and managed
//! component leaves. The [`MarkupSynthesizer`] walks that tree once and
//! produces the markup template plus an [`AttachmentPlan`] telling the
//! hosting framework where every managed component belongs.
//!
//! ## Modules
//!
//! - [`builder`]: the tree builder and its derived wrappers
//! - [`components`]: stock managed components and shared models
//! - [`ssr`]: identifier allocation, options and the markup synthesizer
//! - [`page`]: page host running one build, synthesis and attach cycle
//!
//! ## Example
//!
//! ```ignore
//! use trellis_pages::prelude::*;
//!
//! let synthesis = render(&SynthesisOptions::default(), |b| {
//! 	b.div([], |b| {
//! 		b.text("Hello ");
//! 		b.link(|| {}, |_| {});
//! 	});
//! })?;
//! assert_eq!(synthesis.markup(), "<div>Hello <a wicket:id='c0'></a></div>");
//! ```

pub mod builder;
pub mod components;
pub mod page;
pub mod ssr;

pub use builder::{HtmlBuilder, Tree};
pub use page::{HtmlPage, PageError, PageInstance, PageRoot, RenderedPage};
pub use ssr::{
	Attachment, AttachmentPlan, ConfigError, IdAllocator, IdStrategy, MarkupSynthesizer,
	RenderError, Synthesis, SynthesisOptions, render,
};

pub use trellis_core::{
	AttachError, Attribute, AttributeModifier, BuildError, ComponentBase, ComponentKind,
	ComponentRef, ConstructionError, Handle, Html, IdentityConflictError, ManagedComponent,
};

/// Commonly used items for page authors.
pub mod prelude {
	pub use crate::builder::{HtmlBuilder, Tree};
	pub use crate::components::{
		AjaxLink, AjaxRequestTarget, DropDownChoice, FeedbackPanel, Form, Label, Link, ListItem,
		ListView, Model, SubmitLink, WebMarkupContainer,
	};
	pub use crate::page::{HtmlPage, PageInstance, PageRoot, RenderedPage};
	pub use crate::ssr::{IdStrategy, MarkupSynthesizer, RenderError, SynthesisOptions, render};
	pub use trellis_core::{
		Attribute, AttributeModifier, ComponentKind, ComponentRef, Handle, ManagedComponent,
	};
}
