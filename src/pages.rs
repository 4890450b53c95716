//! Tree builder, stock components, markup synthesizer and page host.
//!
//! ## Example
//!
//! ```rust,ignore
//! use trellis::pages::{SynthesisOptions, render};
//!
//! let synthesis = render(&SynthesisOptions::default(), |b| {
//!     b.div([], |b| {
//!         b.text("Hello ");
//!         b.link(|| {}, |_| {});
//!     });
//! })?;
//! assert_eq!(synthesis.markup(), "<div>Hello <a wicket:id='c0'></a></div>");
//! assert_eq!(synthesis.plan().len(), 1);
//! ```

pub use trellis_pages::*;
