//! Builder-style configuration for a [`Semsearch`](crate::Semsearch) handle.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_TOP_K, MAX_SCORE_DECIMALS, PREVIEW_CHARS, PREVIEW_SUFFIX,
    SCORE_DECIMALS,
};
use crate::{Result, SemsearchError};

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_preview_chars() -> usize {
    PREVIEW_CHARS
}

fn default_preview_suffix() -> String {
    PREVIEW_SUFFIX.to_string()
}

fn default_score_decimals() -> u32 {
    SCORE_DECIMALS
}

fn default_allowed_extensions() -> Vec<String> {
    DEFAULT_ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| (*ext).to_string())
        .collect()
}

/// Tunables for search output and the upload boundary.
///
/// Every field has a default, so a partial JSON document (or `{}`) is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemsearchConfig {
    /// `top_k` used by [`Semsearch::search_default`](crate::Semsearch::search_default).
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
    #[serde(default = "default_preview_suffix")]
    pub preview_suffix: String,
    #[serde(default = "default_score_decimals")]
    pub score_decimals: u32,
    /// Case-insensitive file name suffixes accepted by `ingest_upload`.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Pin the embedding dimension up-front instead of learning it from the first document.
    #[serde(default)]
    pub expected_dimension: Option<usize>,
}

impl Default for SemsearchConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
            preview_chars: default_preview_chars(),
            preview_suffix: default_preview_suffix(),
            score_decimals: default_score_decimals(),
            allowed_extensions: default_allowed_extensions(),
            expected_dimension: None,
        }
    }
}

impl SemsearchConfig {
    /// Start a fluent builder for `SemsearchConfig`.
    #[must_use]
    pub fn builder() -> SemsearchConfigBuilder {
        SemsearchConfigBuilder::default()
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| SemsearchError::InvalidConfig {
                reason: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| {
            Err(SemsearchError::InvalidConfig {
                reason: reason.to_string(),
            })
        };
        if self.default_top_k == 0 {
            return invalid("default_top_k must be at least 1");
        }
        if self.preview_chars == 0 {
            return invalid("preview_chars must be at least 1");
        }
        if self.score_decimals == 0 || self.score_decimals > MAX_SCORE_DECIMALS {
            return Err(SemsearchError::InvalidConfig {
                reason: format!("score_decimals must be between 1 and {MAX_SCORE_DECIMALS}"),
            });
        }
        if self.expected_dimension == Some(0) {
            return invalid("expected_dimension must be positive");
        }
        Ok(())
    }

    /// Whether `name` ends with one of the allowed extensions (case-insensitive).
    /// An empty allow-list accepts everything.
    #[must_use]
    pub fn accepts_file_name(&self, name: &str) -> bool {
        if self.allowed_extensions.is_empty() {
            return true;
        }
        let lowered = name.to_lowercase();
        self.allowed_extensions
            .iter()
            .any(|ext| lowered.ends_with(&ext.to_lowercase()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SemsearchConfigBuilder {
    inner: SemsearchConfig,
}

impl SemsearchConfigBuilder {
    #[must_use]
    pub fn default_top_k(mut self, top_k: usize) -> Self {
        self.inner.default_top_k = top_k;
        self
    }

    #[must_use]
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.inner.preview_chars = chars;
        self
    }

    pub fn preview_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.inner.preview_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn score_decimals(mut self, decimals: u32) -> Self {
        self.inner.score_decimals = decimals;
        self
    }

    pub fn allow_extension<S: Into<String>>(mut self, ext: S) -> Self {
        self.inner.allowed_extensions.push(ext.into());
        self
    }

    #[must_use]
    pub fn allow_any_extension(mut self) -> Self {
        self.inner.allowed_extensions.clear();
        self
    }

    #[must_use]
    pub fn expected_dimension(mut self, dimension: usize) -> Self {
        self.inner.expected_dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn build(self) -> SemsearchConfig {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = SemsearchConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SemsearchConfig::default());
        assert_eq!(config.default_top_k, 3);
        assert_eq!(config.preview_chars, 200);
        assert_eq!(config.preview_suffix, "...");
        assert_eq!(config.score_decimals, 4);
        assert_eq!(config.allowed_extensions, vec![".txt".to_string()]);
    }

    #[test]
    fn rejects_zero_top_k() {
        let err = SemsearchConfig::from_json_str(r#"{"default_top_k":0}"#).unwrap_err();
        assert!(matches!(err, SemsearchError::InvalidConfig { .. }));
    }

    #[test]
    fn score_decimals_range_is_enforced() {
        for decimals in [0, MAX_SCORE_DECIMALS + 1] {
            let config = SemsearchConfig::builder().score_decimals(decimals).build();
            assert!(
                matches!(config.validate(), Err(SemsearchError::InvalidConfig { .. })),
                "decimals={decimals}"
            );
        }
        for decimals in [1, MAX_SCORE_DECIMALS] {
            let config = SemsearchConfig::builder().score_decimals(decimals).build();
            assert!(config.validate().is_ok(), "decimals={decimals}");
        }
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SemsearchConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, SemsearchError::InvalidConfig { .. }));
    }

    #[test]
    fn builder_overrides() {
        let config = SemsearchConfig::builder()
            .default_top_k(5)
            .preview_chars(10)
            .allow_extension(".md")
            .expected_dimension(8)
            .build();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_top_k, 5);
        assert_eq!(config.expected_dimension, Some(8));
        assert!(config.accepts_file_name("notes.MD"));
        assert!(config.accepts_file_name("a.txt"));
        assert!(!config.accepts_file_name("a.pdf"));
    }

    #[test]
    fn empty_allow_list_accepts_everything() {
        let config = SemsearchConfig::builder().allow_any_extension().build();
        assert!(config.accepts_file_name("image.png"));
    }
}
