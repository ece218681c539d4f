//! Line-oriented parser for the OWL functional-syntax subset the converter
//! understands: `Prefix(...)` declarations, one `Ontology(...)` block, and
//! `SubClassOf` / `EquivalentClasses` axioms inside it.
//!
//! The parser drives the [`TaxonomyGraph`] mutation API while it consumes
//! input. Parsing is all-or-nothing: the first malformed statement aborts the
//! run with its line number, and the caller discards whatever state was
//! accumulated.

use std::io::BufRead;

use regex::Regex;
use thiserror::Error;

use crate::taxonomy::{ClassId, TaxonomyError, TaxonomyGraph};

/// Parser for ontology sources in OWL functional syntax.
#[derive(Debug)]
pub struct OntologyParser {
    prefix: Regex,
    subclass: Regex,
    equivalent: Regex,
}

impl OntologyParser {
    /// Creates a parser with its statement patterns compiled once.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: Regex::new(r"(?i)^Prefix\(([^)]+)\)$").expect("prefix pattern compiles"),
            subclass: Regex::new(r"(?i)^SubClassOf\(\s*([^\s)]+)\s+([^\s)]+)\s*\)$")
                .expect("subclass pattern compiles"),
            equivalent: Regex::new(r"(?i)^EquivalentClasses\(\s*([^)]+?)\s*\)$")
                .expect("equivalent pattern compiles"),
        }
    }

    /// Consumes `reader` to completion, feeding every axiom into `graph`.
    ///
    /// Keyword matching is ASCII-case-insensitive and blank lines are
    /// skipped. Statements before the `Ontology(` opener must be `Prefix`
    /// declarations; a lone `)` closes the ontology block.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable or unrecognized line, or when an axiom
    /// violates the taxonomy contract; every error carries the 1-based line
    /// number it was detected on.
    pub fn parse<R: BufRead>(
        &self,
        reader: R,
        graph: &mut TaxonomyGraph,
    ) -> Result<ParseSummary, ParseError> {
        let mut summary = ParseSummary::default();
        let mut in_ontology = false;

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|source| ParseError::Read {
                line: number,
                source,
            })?;
            let statement = line.trim();
            if statement.is_empty() {
                continue;
            }

            if !in_ontology {
                if self.prefix.is_match(statement) {
                    summary.prefixes += 1;
                    continue;
                }
                if statement.to_ascii_lowercase().starts_with("ontology(") {
                    in_ontology = true;
                    continue;
                }
                return Err(ParseError::unrecognized(number, statement));
            }

            if statement == ")" {
                in_ontology = false;
                continue;
            }
            if let Some(captures) = self.subclass.captures(statement) {
                graph.add_subclass_of(&captures[1], &captures[2]);
                summary.subclass_axioms += 1;
                continue;
            }
            if let Some(captures) = self.equivalent.captures(statement) {
                let group: Vec<ClassId> =
                    captures[1].split_whitespace().map(ClassId::from).collect();
                graph
                    .add_equivalent_classes(&group)
                    .map_err(|source| ParseError::Axiom {
                        line: number,
                        source,
                    })?;
                summary.equivalence_axioms += 1;
                continue;
            }
            return Err(ParseError::unrecognized(number, statement));
        }

        Ok(summary)
    }
}

impl Default for OntologyParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts of the statements a successful parse consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Number of `Prefix` declarations before the ontology block.
    pub prefixes: usize,
    /// Number of subclass axioms fed into the taxonomy.
    pub subclass_axioms: usize,
    /// Number of equivalence declarations fed into the taxonomy.
    pub equivalence_axioms: usize,
}

/// Errors aborting a parse run.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Reading the ontology source failed mid-stream.
    #[error("line {line}: failed to read ontology source: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },
    /// A non-blank line matched no known statement form.
    #[error("line {line}: unrecognized statement `{statement}`")]
    UnrecognizedStatement { line: usize, statement: String },
    /// An axiom was well-formed but violated the taxonomy contract.
    #[error("line {line}: {source}")]
    Axiom {
        line: usize,
        source: TaxonomyError,
    },
}

impl ParseError {
    fn unrecognized(line: usize, statement: &str) -> Self {
        Self::UnrecognizedStatement {
            line,
            statement: statement.to_owned(),
        }
    }
}
