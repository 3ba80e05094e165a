//! Defaults shared by the configuration, the orchestrators and the embedders.

/// Results returned when a query does not specify `top_k`.
pub const DEFAULT_TOP_K: usize = 3;
/// Characters of document text kept in a search preview.
pub const PREVIEW_CHARS: usize = 200;
/// Marker appended to a preview only when the text was cut.
pub const PREVIEW_SUFFIX: &str = "...";
/// Decimal digits kept in a similarity score.
pub const SCORE_DECIMALS: u32 = 4;
/// Upper bound accepted for `score_decimals`.
///
/// Scores are `f32`, whose spacing just below 1.0 is about 6e-8; with more digits the
/// rounded ceiling `1 - 10^-decimals` collapses to exactly 1.0.
pub const MAX_SCORE_DECIMALS: u32 = 6;
/// Upload extensions accepted at the ingestion boundary.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[".txt"];
/// Dimension of the bundled hashing embedder, matching common MiniLM sentence models.
pub const DEFAULT_HASH_EMBED_DIMENSION: usize = 384;
