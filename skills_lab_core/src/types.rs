//! Skills Lab Types
//!
//! Core data structures shared by the catalog, the profile store and the
//! recommendation engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lowest accepted self-assessment level
pub const MIN_LEVEL: u8 = 1;
/// Highest accepted self-assessment level
pub const MAX_LEVEL: u8 = 5;

// ============================================================
// SKILL
// ============================================================

/// A named competency. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Category: "Técnica" or "Comportamental"
    pub category: String,
    pub description: String,
}

impl Skill {
    pub fn new(name: &str, category: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        }
    }
}

// ============================================================
// LEARNING TRACK
// ============================================================

/// Ordered learning resources for a single skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTrack {
    pub skill: String,
    /// Display order
    pub resources: Vec<String>,
}

impl LearningTrack {
    pub fn new(skill: &str, resources: &[&str]) -> Self {
        Self {
            skill: skill.to_string(),
            resources: resources.iter().map(|r| r.to_string()).collect(),
        }
    }
}

// ============================================================
// CAREER
// ============================================================

/// A weighted skill requirement of a career
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub skill: String,
    /// Importance in (0, 1]
    pub weight: f64,
}

/// A profession with weighted skill requirements and its own learning track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub name: String,
    pub required_skills: Vec<RequiredSkill>,
    pub track: Vec<String>,
}

impl Career {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required_skills: Vec::new(),
            track: Vec::new(),
        }
    }

    pub fn with_skill(mut self, skill: &str, weight: f64) -> Self {
        self.required_skills.push(RequiredSkill {
            skill: skill.to_string(),
            weight,
        });
        self
    }

    pub fn with_track(mut self, track: &[&str]) -> Self {
        self.track = track.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn total_weight(&self) -> f64 {
        self.required_skills.iter().map(|r| r.weight).sum()
    }
}

// ============================================================
// SKILL LEVEL
// ============================================================

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("'{0}' is not an integer")]
    NotANumber(String),

    #[error("level {0} is outside 1-5")]
    OutOfRange(i64),
}

/// A self-assessed level, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SkillLevel {
    type Error = LevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_LEVEL as i64..=MAX_LEVEL as i64).contains(&value) {
            Ok(SkillLevel(value as u8))
        } else {
            Err(LevelError::OutOfRange(value))
        }
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

impl FromStr for SkillLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| LevelError::NotANumber(trimmed.to_string()))?;
        SkillLevel::try_from(value)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================
// PROFILE
// ============================================================

/// Insertion-ordered skill → level mapping.
///
/// Overwriting a skill keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillLevels {
    entries: Vec<(String, SkillLevel)>,
}

impl SkillLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, skill: &str, level: SkillLevel) {
        match self.entries.iter_mut().find(|(name, _)| name == skill) {
            Some(entry) => entry.1 = level,
            None => self.entries.push((skill.to_string(), level)),
        }
    }

    pub fn get(&self, skill: &str) -> Option<SkillLevel> {
        self.entries
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, level)| *level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SkillLevel)> {
        self.entries.iter().map(|(name, level)| (name.as_str(), *level))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A user's self-assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub skill_levels: SkillLevels,
    pub registered_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            skill_levels: SkillLevels::new(),
            registered_at: Utc::now(),
        }
    }

    /// Adds or overwrites the level of a skill (last write wins)
    pub fn set_level(&mut self, skill: &str, level: SkillLevel) {
        self.skill_levels.set(skill, level);
    }

    pub fn with_level(mut self, skill: &str, level: SkillLevel) -> Self {
        self.set_level(skill, level);
        self
    }

    /// Level of a skill, or 0 when it was never rated
    pub fn level_or_zero(&self, skill: &str) -> u8 {
        self.skill_levels.get(skill).map_or(0, SkillLevel::value)
    }
}
