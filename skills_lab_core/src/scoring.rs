//! Compatibility Scoring Module
//!
//! DETERMINISTIC career compatibility scores.
//!
//! Formula: score = Σ(level / 5 × weight) / Σ(weight) × 100
//! Where:
//! - level: the profile's self-rated level, 0 when the skill was never rated
//! - weight: the career's importance weight for the skill
//!
//! A career whose weights sum to zero scores 0.0 against every profile.

use crate::types::{Career, Profile, MAX_LEVEL};

/// Normalizes a raw level (0-5) into 0.0-1.0
pub fn normalize_level(level: u8) -> f64 {
    f64::from(level) / f64::from(MAX_LEVEL)
}

/// Compatibility percentage (0.0-100.0) between a career and a profile
pub fn compatibility_score(career: &Career, profile: &Profile) -> f64 {
    let total_weight = career.total_weight();
    if total_weight == 0.0 {
        return 0.0;
    }

    let total: f64 = career
        .required_skills
        .iter()
        .map(|req| normalize_level(profile.level_or_zero(&req.skill)) * req.weight)
        .sum();

    (total / total_weight) * 100.0
}
