//! Gesture-to-rating policy
//!
//! A directional drag maps to at most one level: left = new,
//! right = known, down = unsure. Anything below the threshold, or with
//! two axes past it and no clear winner, resolves to no rating rather
//! than a default level. Concrete geometry (pixels, cells) is the
//! caller's choice; the threshold here is the reference value.

use crate::flashcards::Level;

/// Minimum drag distance before a swipe counts as a rating
pub const SWIPE_THRESHOLD: f32 = 120.0;

/// Resolve a drag offset against the default threshold
pub fn level_for_swipe(dx: f32, dy: f32) -> Option<Level> {
    level_for_swipe_with(dx, dy, SWIPE_THRESHOLD)
}

/// Resolve a drag offset against a caller-supplied threshold.
/// Positive `dx` is right, positive `dy` is down.
pub fn level_for_swipe_with(dx: f32, dy: f32, threshold: f32) -> Option<Level> {
    let horizontal = dx.abs() >= threshold;
    let vertical = dy >= threshold;

    match (horizontal, vertical) {
        (true, false) => horizontal_level(dx),
        (false, true) => Some(Level::Unsure),
        (true, true) => {
            // Both axes past the threshold: only a dominant axis rates
            if dx.abs() > dy {
                horizontal_level(dx)
            } else if dy > dx.abs() {
                Some(Level::Unsure)
            } else {
                None
            }
        }
        (false, false) => None,
    }
}

fn horizontal_level(dx: f32) -> Option<Level> {
    if dx < 0.0 {
        Some(Level::New)
    } else {
        Some(Level::Known)
    }
}
