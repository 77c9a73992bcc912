// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod skills;

pub use filters::{filter_profiles, matches_query};
pub use matcher::compute_matches;
pub use skills::{parse_skills, SkillSet};
