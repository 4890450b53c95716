//! # Trellis Core
//!
//! Foundational types shared by the trellis builder and synthesizer:
//!
//! - [`types::node`]: the closed `Html` tree (plain elements, text leaves,
//!   managed component leaves)
//! - [`types::attribute`]: literal attributes and attribute modifiers
//! - [`types::component`]: the capability a managed component must expose
//! - [`exception`]: construction, identity and attachment errors
//!
//! ## Example
//!
//! ```
//! use trellis_core::types::attribute::Attribute;
//! use trellis_core::types::node::{Element, Html};
//!
//! let tree = Element::new(
//! 	"div",
//! 	vec![Attribute::new("class", "row")],
//! 	vec![Html::text("Hello")],
//! )
//! .unwrap();
//! assert_eq!(tree.name(), "div");
//! ```

pub mod exception;
pub mod types;

pub use exception::{AttachError, BuildError, ConstructionError, IdentityConflictError};
pub use types::attribute::{Attribute, AttributeModifier, ModifierMode};
pub use types::component::{
	ComponentBase, ComponentKind, ComponentRef, Handle, ManagedComponent,
};
pub use types::node::{Element, Html, Managed, Text};
