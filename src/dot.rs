//! Graphviz DOT rendering for a fully built [`TaxonomyGraph`].
//!
//! The taxonomy's BTree-backed stores iterate in lexical order, so the
//! rendered document is deterministic for a given accumulated state and safe
//! to snapshot-test. Rendering borrows the graph immutably; canonicalization
//! happened at insertion time and is never revisited here.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::taxonomy::TaxonomyGraph;

/// Renders the graph as a DOT document.
///
/// Every subclass edge becomes one `"sub" -> "sup";` statement. Every
/// equivalence display pair becomes two statements: an invisible edge keeping
/// the pair adjacent in layouts, and a bidirectional edge carrying the visible
/// equivalence marker. Node labels are quoted verbatim.
#[must_use]
pub fn render(graph: &TaxonomyGraph) -> String {
    let mut out = String::from("digraph Taxonomy {\n");

    for (sub, sups) in graph.subclass_edges() {
        for sup in sups {
            out.push_str(&format!("  \"{sub}\" -> \"{sup}\";\n"));
        }
    }
    for (a, b) in graph.equivalence_pairs() {
        out.push_str(&format!("  \"{a}\" -> \"{b}\" [style=invis];\n"));
        out.push_str(&format!("  \"{a}\" -> \"{b}\" [dir=both];\n"));
    }

    out.push_str("}\n");
    out
}

/// Renders the graph and writes the document to `path` in one shot.
///
/// The document is materialized in memory before the destination is touched;
/// the destination is written with a single call.
///
/// # Errors
///
/// Returns [`Error::DestinationWrite`] when the destination cannot be created
/// or written.
pub fn write_to_path(graph: &TaxonomyGraph, path: &Path) -> Result<()> {
    let rendered = render(graph);
    fs::write(path, rendered).map_err(|source| Error::DestinationWrite {
        path: path.to_path_buf(),
        source,
    })
}
