//! Food detection on captured photos.
//!
//! There is no recognition model. [`PlaceholderDetector`] ignores the pixels
//! and picks an entry of [`FOOD_CATALOG`] at random, which is enough to drive
//! the camera screen end to end.

use std::fmt::{self, Display};

use image::RgbImage;
use rand::{Rng, rngs::ThreadRng};

/// A food the detector can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoodGuess {
    /// Emoji shown before the name.
    pub emoji: &'static str,
    /// Human readable name.
    pub name: &'static str,
    /// Energy per 100 g in kcal.
    pub kcal_per_100g: u32,
}

impl Display for FoodGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {} kcal", self.emoji, self.name, self.kcal_per_100g)
    }
}

/// Every food the placeholder detector may report.
pub const FOOD_CATALOG: [FoodGuess; 5] = [
    FoodGuess {
        emoji: "🍕",
        name: "Pizza",
        kcal_per_100g: 285,
    },
    FoodGuess {
        emoji: "🍎",
        name: "Apple",
        kcal_per_100g: 52,
    },
    FoodGuess {
        emoji: "🍔",
        name: "Burger",
        kcal_per_100g: 354,
    },
    FoodGuess {
        emoji: "🥗",
        name: "Salad",
        kcal_per_100g: 150,
    },
    FoodGuess {
        emoji: "🍩",
        name: "Donut",
        kcal_per_100g: 452,
    },
];

/// The outcome of running a detector on a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// The detected food.
    pub food: FoodGuess,
}

impl Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "✅ Detected: {}", self.food)
    }
}

/// Something that can name the food in a photo.
pub trait FoodDetector {
    /// Inspects `photo` and reports a food.
    fn detect(&mut self, photo: &RgbImage) -> Detection;
}

/// A detector that picks a random catalog entry.
///
/// # Examples
///
/// ```
/// use calorie_core::{FOOD_CATALOG, FoodDetector, PlaceholderDetector};
/// use image::RgbImage;
///
/// let mut detector = PlaceholderDetector::new();
/// let detection = detector.detect(&RgbImage::new(4, 4));
/// assert!(FOOD_CATALOG.contains(&detection.food));
/// ```
#[derive(Debug, Clone)]
pub struct PlaceholderDetector<R = ThreadRng> {
    rng: R,
}

impl PlaceholderDetector {
    /// Creates a detector backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for PlaceholderDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PlaceholderDetector<R>
where
    R: Rng,
{
    /// Creates a detector drawing from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> FoodDetector for PlaceholderDetector<R>
where
    R: Rng,
{
    fn detect(&mut self, photo: &RgbImage) -> Detection {
        let index = self.rng.random_range(0..FOOD_CATALOG.len());
        let food = FOOD_CATALOG[index];
        log::debug!(
            "placeholder detection on {}x{} photo: {}",
            photo.width(),
            photo.height(),
            food.name
        );
        Detection { food }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_detection_text() {
        let detection = Detection {
            food: FOOD_CATALOG[0],
        };
        assert_eq!(detection.to_string(), "✅ Detected: 🍕 Pizza - 285 kcal");
        assert_eq!(FOOD_CATALOG[1].to_string(), "🍎 Apple - 52 kcal");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let photo = RgbImage::new(2, 2);
        let mut a = PlaceholderDetector::with_rng(Pcg64::seed_from_u64(7));
        let mut b = PlaceholderDetector::with_rng(Pcg64::seed_from_u64(7));
        for _ in 0..10 {
            assert_eq!(a.detect(&photo), b.detect(&photo));
        }
    }

    #[test]
    fn test_every_food_is_reachable() {
        let photo = RgbImage::new(2, 2);
        let mut detector = PlaceholderDetector::with_rng(Pcg64::seed_from_u64(42));
        let mut seen = [false; FOOD_CATALOG.len()];
        for _ in 0..500 {
            let food = detector.detect(&photo).food;
            let index = FOOD_CATALOG.iter().position(|f| *f == food).unwrap();
            seen[index] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
