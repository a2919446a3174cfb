use crate::search::SearchError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters shared by all search engines. Every field has a
/// default, so an empty config file is valid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    /// Number of candidates kept between beam search iterations.
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,
    #[serde(default)]
    pub heuristic: HeuristicConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HeuristicConfig {
    /// Divisor applied to the euclidean distance between graph node
    /// positions, bringing pixel distances down to edge weight scale.
    #[serde(default = "default_graph_scale")]
    pub graph_scale: f64,
    /// Use the heuristic value stored on a graph node when it has one.
    #[serde(default = "default_use_precomputed")]
    pub use_precomputed: bool,
}

fn default_beam_width() -> usize {
    2
}

fn default_graph_scale() -> f64 {
    50.
}

fn default_use_precomputed() -> bool {
    false
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            beam_width: default_beam_width(),
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            graph_scale: default_graph_scale(),
            use_precomputed: default_use_precomputed(),
        }
    }
}

impl SearchConfig {
    pub fn from_path(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path).map_err(|source| SearchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, SearchError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.beam_width == 0 {
            return Err(SearchError::InvalidBeamWidth(self.beam_width));
        }
        let scale = self.heuristic.graph_scale;
        if !(scale.is_finite() && scale > 0.) {
            return Err(SearchError::InvalidHeuristicScale(scale));
        }
        Ok(())
    }
}
