//! Markup synthesis.
//!
//! - [`markers`]: per-cycle identifier allocation
//! - [`options`]: synthesis options and their TOML loading
//! - [`renderer`]: the tree walk producing markup and the attachment plan

pub mod markers;
pub mod options;
pub mod renderer;

pub use markers::{DEFAULT_IDENTIFIER_ATTR, IdAllocator, IdStrategy};
pub use options::{ConfigError, SynthesisOptions};
pub use renderer::{Attachment, AttachmentPlan, MarkupSynthesizer, Synthesis};

use thiserror::Error;
use trellis_core::BuildError;

use crate::builder::{HtmlBuilder, Tree};

/// Error of one build and synthesis cycle.
#[derive(Debug, Error)]
pub enum RenderError {
	#[error("Invalid synthesis options: {0}")]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Build(#[from] BuildError),
}

/// Builds a fresh tree and synthesizes it in one cycle.
///
/// Nothing is shared with other cycles: the identifier allocator and the
/// tree are created here and dropped when the cycle ends. The options are
/// validated before the page is built.
pub fn render(
	options: &SynthesisOptions,
	f: impl FnOnce(&mut HtmlBuilder<'_>),
) -> Result<Synthesis, RenderError> {
	let synthesizer = MarkupSynthesizer::new(options.clone())?;
	let tree = Tree::build(options.id_strategy.clone(), f)?;
	Ok(synthesizer.synthesize(&tree))
}
