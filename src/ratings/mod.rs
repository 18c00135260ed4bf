pub mod generator;

pub use generator::{NoRatings, RandomRatings, RatingBounds, RatingGenerator};
