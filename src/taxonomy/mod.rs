//! Core taxonomy domain model.
//!
//! The module defines the in-memory taxonomy accumulated while an ontology
//! source is parsed: a union-find resolver collapsing declared equivalence
//! groups to canonical representatives, and the graph aggregate storing
//! subclass edges and equivalence display pairs. It stays free of parsing and
//! rendering concerns; those live in the `parser` and `dot` modules.

pub mod graph;
pub mod resolver;
pub mod value_objects;

pub use graph::{TaxonomyError, TaxonomyGraph};
pub use resolver::EquivalenceResolver;
pub use value_objects::ClassId;
