//! Built-in lints for document validation.

mod duplicate_identifier;
mod multiple_body;
mod unresolved_reference;

pub use duplicate_identifier::DuplicateIdentifierLint;
pub use multiple_body::MultipleBodyLint;
pub use unresolved_reference::UnresolvedReferenceLint;
