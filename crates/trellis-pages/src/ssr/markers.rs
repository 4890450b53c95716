//! Markup identifiers.
//!
//! Identifiers correlate a position in the synthesized markup with a managed
//! component. Their namespace is owned by one build cycle: every
//! [`IdAllocator`] starts empty and is dropped with its cycle.

use std::collections::HashSet;

use serde::Deserialize;
use uuid::Uuid;

/// The attribute carrying a managed component's identifier.
pub const DEFAULT_IDENTIFIER_ATTR: &str = "wicket:id";

/// Default prefix for sequential identifiers.
pub const DEFAULT_ID_PREFIX: &str = "c";

fn default_prefix() -> String {
	DEFAULT_ID_PREFIX.to_string()
}

/// How identifiers are generated for components without a chosen one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdStrategy {
	/// `<prefix>0`, `<prefix>1`, ... in registration order.
	Sequential {
		#[serde(default = "default_prefix")]
		prefix: String,
	},
	/// Random v4 UUIDs.
	Uuid,
}

impl Default for IdStrategy {
	fn default() -> Self {
		IdStrategy::Sequential {
			prefix: default_prefix(),
		}
	}
}

/// Allocates and tracks identifiers for one build cycle.
#[derive(Debug)]
pub struct IdAllocator {
	strategy: IdStrategy,
	next: u64,
	claimed: HashSet<String>,
}

impl IdAllocator {
	pub fn new(strategy: IdStrategy) -> Self {
		Self {
			strategy,
			next: 0,
			claimed: HashSet::new(),
		}
	}

	/// Claims a caller-chosen identifier.
	///
	/// Returns `false` when the identifier was already claimed in this cycle.
	pub fn claim(&mut self, id: &str) -> bool {
		self.claimed.insert(id.to_string())
	}

	pub fn is_claimed(&self, id: &str) -> bool {
		self.claimed.contains(id)
	}

	/// Generates and claims a fresh identifier, skipping claimed ones.
	pub fn allocate(&mut self) -> String {
		loop {
			let candidate = match &self.strategy {
				IdStrategy::Sequential { prefix } => {
					let id = format!("{}{}", prefix, self.next);
					self.next += 1;
					id
				}
				IdStrategy::Uuid => Uuid::new_v4().to_string(),
			};
			if self.claim(&candidate) {
				return candidate;
			}
		}
	}

	/// Number of identifiers claimed so far.
	pub fn claimed_count(&self) -> usize {
		self.claimed.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_sequential_allocation() {
		let mut allocator = IdAllocator::new(IdStrategy::default());
		assert_eq!(allocator.allocate(), "c0");
		assert_eq!(allocator.allocate(), "c1");
		assert_eq!(allocator.claimed_count(), 2);
	}

	#[rstest]
	fn test_allocation_skips_claimed_ids() {
		let mut allocator = IdAllocator::new(IdStrategy::Sequential {
			prefix: "x".to_string(),
		});
		assert!(allocator.claim("x0"));
		assert_eq!(allocator.allocate(), "x1");
	}

	#[rstest]
	fn test_claim_twice_fails() {
		let mut allocator = IdAllocator::new(IdStrategy::default());
		assert!(allocator.claim("name"));
		assert!(!allocator.claim("name"));
		assert!(allocator.is_claimed("name"));
	}

	#[rstest]
	fn test_uuid_allocation_is_unique() {
		let mut allocator = IdAllocator::new(IdStrategy::Uuid);
		let a = allocator.allocate();
		let b = allocator.allocate();
		assert_ne!(a, b);
		assert!(Uuid::parse_str(&a).is_ok());
	}

	#[rstest]
	fn test_allocators_do_not_share_state() {
		let mut first = IdAllocator::new(IdStrategy::default());
		let mut second = IdAllocator::new(IdStrategy::default());
		assert_eq!(first.allocate(), "c0");
		assert_eq!(second.allocate(), "c0");
	}
}
