#![deny(clippy::all, clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(
    test,
    allow(
        clippy::useless_vec,
        clippy::uninlined_format_args,
        clippy::cast_possible_truncation,
        clippy::float_cmp,
        clippy::cast_precision_loss
    )
)]
#![allow(clippy::module_name_repetitions)]
//
// Documentation lints: internal helpers are self-describing; public APIs carry docs.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
//
// Cast safety: dimensions, counts and timings are bounded far below the limits of
// the target types (vectors of a few thousand floats, corpora of thousands of docs).
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
//
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::unnecessary_wraps)]

//! In-memory semantic search over short text documents.
//!
//! Documents are embedded by a [`VecEmbedder`], appended to a [`DocumentStore`] and
//! indexed by an exact [`VecIndex`]; a [`Semsearch`] handle ties the three together
//! behind one lock so searches always see a store and an index that agree.
//!
//! ```
//! use semsearch_core::{HashingEmbedder, Semsearch};
//!
//! let engine = Semsearch::new(HashingEmbedder::default());
//! engine.ingest("a.txt", b"cats are small mammals")?;
//! engine.ingest("b.txt", b"dogs are loyal mammals")?;
//!
//! let hits = engine.search("small furry mammal", 2)?;
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].rank, 1);
//! # Ok::<(), semsearch_core::SemsearchError>(())
//! ```

/// The semsearch-core crate version (matches `Cargo.toml`).
pub const SEMSEARCH_CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod error;
pub mod semsearch;
pub mod simd;
pub mod store;
pub mod text;
pub mod text_embed;
pub mod types;
pub mod vec;

// API-based embedding providers (OpenAI, etc.) - requires network
#[cfg(feature = "api_embed")]
pub mod api_embed;

pub use constants::*;
pub use error::{Result, SemsearchError};
pub use semsearch::Semsearch;
pub use simd::{l2_distance_squared, l2_normalize};
pub use store::DocumentStore;
pub use text::{content_preview, normalize_text};
pub use text_embed::{HashingEmbedder, HashingEmbedderConfig};
pub use types::{
    Document, DocumentId, IngestReceipt, SearchHit, SearchRequest, SearchResponse,
    SemsearchConfig, SemsearchConfigBuilder, Stats, VecEmbedder,
};
pub use vec::{VecIndex, VecSearchHit};
#[cfg(feature = "api_embed")]
pub use api_embed::{OpenAIConfig, OpenAIEmbedder};
