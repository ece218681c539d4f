//! taxograph - render OWL class taxonomies as Graphviz DOT graphs.
//!
//! The crate reads an ontology in OWL functional syntax, folds its
//! `SubClassOf` and `EquivalentClasses` axioms into an in-memory taxonomy
//! (equivalence groups are collapsed to canonical representatives by a
//! union-find resolver), and writes the result as a DOT graph description.

pub mod cli;
pub mod dot;
pub mod error;
pub mod parser;
pub mod taxonomy;

pub use error::{Error, Result};
