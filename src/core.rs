//! Html tree, attribute modifiers, component capability and errors.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "core")]
//! use trellis::core::{ComponentKind, Html};
//! ```

pub use trellis_core::*;
