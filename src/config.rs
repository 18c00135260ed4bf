//! Runtime configuration for the search shell.
//!
//! Every field has a default, so a config file only needs the values it
//! changes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ratings::{NoRatings, RandomRatings, RatingBounds, RatingGenerator};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid rating bounds: {0}")]
    InvalidRatingBounds(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Directory holding one book per file.
    pub book_directory: PathBuf,
    /// Seed every loaded book with random ratings.
    pub random_ratings: bool,
    pub ratings: RatingBounds,
    /// Fixed seed for reproducible ratings. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn v0() -> Self {
        Self {
            book_directory: PathBuf::from("./books"),
            random_ratings: true,
            ratings: RatingBounds::default(),
            seed: None,
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ratings.validate()
    }

    /// The generator the loader should use under this config.
    pub fn rating_generator(&self) -> Result<Box<dyn RatingGenerator>, ConfigError> {
        if !self.random_ratings {
            return Ok(Box::new(NoRatings));
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        Ok(Box::new(RandomRatings::new(self.ratings, seed)?))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::v0()
    }
}
