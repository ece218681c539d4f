use std::fmt::{self, Display, Formatter};

/// Value object naming an ontology class.
///
/// The label is opaque: no internal structure is interpreted, so construction
/// never fails. Ordering is lexical, which keeps every store built on top of
/// it deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId {
    value: String,
}

impl ClassId {
    /// Constructs a new [`ClassId`] from any string-like label.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the underlying textual representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for ClassId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClassId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
