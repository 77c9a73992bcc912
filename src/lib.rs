//! SkillSwap - skill-offer/skill-want profile matching
//!
//! The core is a pure match engine: given the current profile and the stored
//! collection, it splits the other profiles into mutual matches (each side
//! wants what the other offers) and one-sided matches (the candidate wants
//! what the current user offers, without offering anything back).

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{compute_matches, filter_profiles, parse_skills, SkillSet};
pub use models::{Profile, MatchResult};
pub use services::{mailto_link, JsonFileStore, MemoryStore, ProfileStore};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let current = Profile::new("Ana", "guitar", "piano", "Lisbon");
        let result = compute_matches(&current, &[current.clone()]);
        assert!(result.is_empty());
        assert!(parse_skills("Guitar").contains("guitar"));
    }
}
