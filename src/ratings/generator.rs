//! Seed ratings for freshly loaded media.
//!
//! Demo catalogs look empty without ratings, so the loader can hand every
//! document to a generator before it is indexed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ConfigError;
use crate::document::{Media, MediaError};

/// Bounds for generated ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingBounds {
    pub min_rating: i32,
    pub max_rating: i32,
    /// Inclusive.
    pub min_num_ratings: u32,
    /// Exclusive.
    pub max_num_ratings: u32,
}

impl RatingBounds {
    /// Every range drawn from must be non-empty and every score non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rating < 0 {
            return Err(ConfigError::InvalidRatingBounds(format!(
                "min_rating must be non-negative, got {}",
                self.min_rating
            )));
        }
        if self.min_rating > self.max_rating {
            return Err(ConfigError::InvalidRatingBounds(format!(
                "min_rating {} exceeds max_rating {}",
                self.min_rating, self.max_rating
            )));
        }
        if self.min_num_ratings >= self.max_num_ratings {
            return Err(ConfigError::InvalidRatingBounds(format!(
                "min_num_ratings {} must be below max_num_ratings {}",
                self.min_num_ratings, self.max_num_ratings
            )));
        }
        Ok(())
    }
}

impl Default for RatingBounds {
    fn default() -> Self {
        Self {
            min_rating: 1,
            max_rating: 5,
            min_num_ratings: 1,
            max_num_ratings: 100,
        }
    }
}

pub trait RatingGenerator {
    fn seed_ratings(&mut self, media: &mut dyn Media) -> Result<(), MediaError>;
}

/// Leaves every document unrated.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRatings;

impl RatingGenerator for NoRatings {
    fn seed_ratings(&mut self, _media: &mut dyn Media) -> Result<(), MediaError> {
        Ok(())
    }
}

/// Reproducible random ratings.
///
/// Per document: a floor in `[min_rating, max_rating]`, a ceiling in
/// `[floor, max_rating]`, a count in `[min_num_ratings, max_num_ratings)`,
/// then `count` scores drawn uniformly from `[floor, ceiling]`.
#[derive(Debug, Clone)]
pub struct RandomRatings {
    bounds: RatingBounds,
    rng: ChaCha8Rng,
}

impl RandomRatings {
    pub fn new(bounds: RatingBounds, seed: u64) -> Result<Self, ConfigError> {
        bounds.validate()?;
        Ok(Self {
            bounds,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl RatingGenerator for RandomRatings {
    fn seed_ratings(&mut self, media: &mut dyn Media) -> Result<(), MediaError> {
        let b = self.bounds;
        let floor = self.rng.random_range(b.min_rating..=b.max_rating);
        let ceiling = self.rng.random_range(floor..=b.max_rating);
        let count = self.rng.random_range(b.min_num_ratings..b.max_num_ratings);

        for _ in 0..count {
            media.add_rating(self.rng.random_range(floor..=ceiling))?;
        }
        trace!(title = media.title(), count, floor, ceiling, "seeded ratings");
        Ok(())
    }
}
