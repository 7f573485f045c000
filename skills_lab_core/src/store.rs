//! Profile Store
//!
//! In-memory, append-only collection of registered profiles. Profiles keep
//! registration order and are addressed by 1-based position, which is what
//! the console shows. Nothing is persisted between runs.

use crate::types::Profile;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a profile number")]
    NotANumber(String),

    #[error("profile {index} does not exist ({available} registered)")]
    OutOfRange { index: i64, available: usize },
}

#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a profile and returns a reference to the stored copy
    pub fn register(&mut self, profile: Profile) -> &Profile {
        log::info!(
            "[STORE] Registered profile '{}' (id={}, at={}, {} skills rated)",
            profile.name,
            profile.id,
            profile.registered_at.to_rfc3339(),
            profile.skill_levels.len()
        );
        self.profiles.push(profile);
        &self.profiles[self.profiles.len() - 1]
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile at a 1-based position
    pub fn get(&self, index: usize) -> Option<&Profile> {
        index.checked_sub(1).and_then(|i| self.profiles.get(i))
    }

    /// Resolves user input such as `" 2 "` into a valid 1-based position.
    ///
    /// Zero and negative numbers are out of range.
    pub fn position(&self, input: &str) -> Result<usize, SelectionError> {
        let trimmed = input.trim();
        let index: i64 = trimmed
            .parse()
            .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

        match usize::try_from(index) {
            Ok(position) if (1..=self.profiles.len()).contains(&position) => Ok(position),
            _ => Err(SelectionError::OutOfRange {
                index,
                available: self.profiles.len(),
            }),
        }
    }

    /// Resolves user input into the selected profile
    pub fn select(&self, input: &str) -> Result<&Profile, SelectionError> {
        let position = self.position(input)?;
        Ok(&self.profiles[position - 1])
    }
}
