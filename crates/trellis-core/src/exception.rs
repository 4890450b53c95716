//! Error taxonomy.
//!
//! Every error here is a local programmer error detected synchronously while a
//! tree is built or an attachment plan is executed. None of them is retried.

/// Invalid structural arguments passed to the builder.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
	#[error("Tag name must not be empty")]
	EmptyTagName,
	#[error("Invalid tag name: {name:?}")]
	InvalidTagName { name: String },
	#[error("Attribute name must not be empty")]
	EmptyAttributeName,
	#[error("Invalid attribute name: {name:?}")]
	InvalidAttributeName { name: String },
	#[error("Markup identifier must not be empty")]
	EmptyIdentifier,
	/// A component whose kind cannot hold children received managed descendants.
	#[error("Component {id} cannot contain managed children")]
	ChildrenOnLeafComponent { id: String },
}

/// A managed component was registered in a way that breaks the one
/// identifier per markup position binding.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityConflictError {
	#[error("Component {id} was registered twice in the same cycle")]
	DuplicateHandle { id: String },
	#[error("Markup identifier {id} is claimed by more than one component")]
	DuplicateIdentifier { id: String },
}

/// Error produced by a failed build cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
	#[error("Construction error: {0}")]
	Construction(#[from] ConstructionError),
	#[error("Identity conflict: {0}")]
	IdentityConflict(#[from] IdentityConflictError),
}

/// Failure while executing an attachment plan against live components.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
	#[error("Component {parent} is not a container")]
	NotAContainer { parent: String },
	#[error("Parent component {id} has not been attached")]
	UnknownParent { id: String },
}

pub type BuildResult<T> = Result<T, BuildError>;
