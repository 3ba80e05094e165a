//! Public types exposed by the `semsearch-core` crate.

pub mod common;
pub mod document;
pub mod embedding;
pub mod options;
pub mod search;

pub use common::DocumentId;
pub use document::{Document, IngestReceipt, Stats};
pub use embedding::VecEmbedder;
pub use options::{SemsearchConfig, SemsearchConfigBuilder};
pub use search::{SearchHit, SearchRequest, SearchResponse};
