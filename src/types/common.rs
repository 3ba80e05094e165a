use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an ingested document.
///
/// Ids grow monotonically for the lifetime of a handle and are never handed out
/// twice, even after the corpus is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub u64);

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc-{}", self.0)
    }
}
