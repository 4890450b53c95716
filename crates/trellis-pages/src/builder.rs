//! Html Builder API
//!
//! A nested scoping API: a rendering callback declares structure
//! imperatively while the builder accumulates an immutable [`Tree`].
//!
//! ## Example
//!
//! ```ignore
//! use trellis_pages::builder::Tree;
//! use trellis_pages::ssr::IdStrategy;
//!
//! let tree = Tree::build(IdStrategy::default(), |b| {
//!     b.div([Attribute::class("greeting")], |b| {
//!         b.text("Hello ");
//!         let link = b.link(|| println!("clicked"), |b| b.text("World"));
//!     });
//! })?;
//! ```

pub mod elements;
pub mod html;
pub mod widgets;

pub use html::{HtmlBuilder, Tree};
