//! Career Recommender Module
//!
//! Ranks catalog careers against a profile and suggests learning tracks for
//! the profile's weakest skills.
//!
//! All functions here are read-only: they never touch the profile store.

use crate::catalog::Catalog;
use crate::scoring::compatibility_score;
use crate::types::{Career, Profile};
use std::cmp::Ordering;
use std::fmt;

/// Configuration for the recommender
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// How many careers a ranking returns
    pub max_careers: usize,
    /// Rated skills strictly below this level get track suggestions
    pub low_level_threshold: u8,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_careers: 3,
            low_level_threshold: 3,
        }
    }
}

/// A career together with its compatibility score
#[derive(Debug, Clone)]
pub struct CareerMatch<'a> {
    pub career: &'a Career,
    pub score: f64,
}

impl fmt::Display for CareerMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Compatibilidade: {:.1}%", self.career.name, self.score)
    }
}

/// Learning resources suggested for a weak skill
#[derive(Debug, Clone)]
pub struct TrackSuggestion<'a> {
    pub skill: String,
    pub level: u8,
    pub resources: &'a [String],
}

impl fmt::Display for TrackSuggestion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Para melhorar em '{}', considere: {}",
            self.skill,
            self.resources.join(", ")
        )
    }
}

/// The recommendation engine
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    config: RecommenderConfig,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a Catalog, config: RecommenderConfig) -> Self {
        log::debug!("[RECOMMENDER] Initializing with config: {:?}", config);
        Self { catalog, config }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Every catalog career scored against the profile, best first.
    ///
    /// The sort is stable, so careers with equal scores keep catalog order.
    pub fn score_all(&self, profile: &Profile) -> Vec<CareerMatch<'a>> {
        let mut matches: Vec<CareerMatch<'a>> = self
            .catalog
            .careers()
            .iter()
            .map(|career| CareerMatch {
                career,
                score: compatibility_score(career, profile),
            })
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches
    }

    /// Top `limit` careers for the profile
    pub fn rank_careers(&self, profile: &Profile, limit: usize) -> Vec<CareerMatch<'a>> {
        let ranked: Vec<_> = self.score_all(profile).into_iter().take(limit).collect();
        log::debug!(
            "[RECOMMENDER] Ranked {} careers for '{}': {:?}",
            ranked.len(),
            profile.name,
            ranked
                .iter()
                .map(|m| (m.career.name.as_str(), m.score))
                .collect::<Vec<_>>()
        );
        ranked
    }

    /// Top careers as display lines, using the configured limit
    pub fn recommend_careers(&self, profile: &Profile) -> Vec<String> {
        self.rank_careers(profile, self.config.max_careers)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Suggestions for every rated skill below the threshold, in rating order.
    ///
    /// Skills without a learning track are skipped. Unrated skills are never
    /// considered.
    pub fn suggest_tracks(&self, profile: &Profile) -> Vec<TrackSuggestion<'a>> {
        let suggestions: Vec<_> = profile
            .skill_levels
            .iter()
            .filter(|(_, level)| level.value() < self.config.low_level_threshold)
            .filter_map(|(skill, level)| {
                self.catalog
                    .track_for(skill)
                    .filter(|resources| !resources.is_empty())
                    .map(|resources| TrackSuggestion {
                        skill: skill.to_string(),
                        level: level.value(),
                        resources,
                    })
            })
            .collect();

        log::debug!(
            "[RECOMMENDER] {} track suggestions for '{}'",
            suggestions.len(),
            profile.name
        );
        suggestions
    }

    /// Track suggestions as display lines
    pub fn recommend_tracks(&self, profile: &Profile) -> Vec<String> {
        self.suggest_tracks(profile)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
