use crate::core::skills::parse_skills;
use crate::models::{MatchResult, Profile};

/// Partition `all_profiles` into mutual and one-sided matches for `current`
///
/// # Pipeline Stages
/// 1. Self-exclusion: candidates sharing `current.name` are skipped
/// 2. Skill parsing: current skills once, candidate skills per candidate
/// 3. Mutual test: current wants something the candidate offers, and the
///    candidate wants something current offers
/// 4. One-sided test: the candidate wants something current offers, and
///    offers nothing current wants
///
/// The two tests run independently per candidate. Output keeps the order of
/// `all_profiles`; nothing is sorted or truncated.
pub fn compute_matches(current: &Profile, all_profiles: &[Profile]) -> MatchResult {
    let current_offers = parse_skills(&current.skill_offer);
    let current_wants = parse_skills(&current.skill_want);

    let mut result = MatchResult::default();

    for candidate in all_profiles
        .iter()
        .filter(|candidate| candidate.name != current.name)
    {
        let candidate_offers = parse_skills(&candidate.skill_offer);
        let candidate_wants = parse_skills(&candidate.skill_want);

        let wants_offered = current_wants.intersects(&candidate_offers);
        let offers_wanted = current_offers.intersects(&candidate_wants);

        if wants_offered && offers_wanted {
            result.mutual.push(candidate.clone());
        }

        let candidate_offers_wanted = candidate_offers.intersects(&current_wants);
        if offers_wanted && !candidate_offers_wanted {
            result.one_sided.push(candidate.clone());
        }
    }

    tracing::debug!(
        "Computed matches for {}: {} mutual, {} one-sided (from {} profiles)",
        current.name,
        result.mutual.len(),
        result.one_sided.len(),
        all_profiles.len()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Profile {
        Profile::new("Current", "guitar", "piano", "Lisbon")
    }

    fn names(profiles: &[Profile]) -> Vec<&str> {
        profiles.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_mutual_match() {
        let all = vec![current(), Profile::new("A", "piano", "guitar", "Porto")];

        let result = compute_matches(&current(), &all);

        assert_eq!(names(&result.mutual), ["A"]);
        assert!(result.one_sided.is_empty());
    }

    #[test]
    fn test_one_sided_match() {
        let all = vec![current(), Profile::new("B", "cooking", "guitar", "Faro")];

        let result = compute_matches(&current(), &all);

        assert!(result.mutual.is_empty());
        assert_eq!(names(&result.one_sided), ["B"]);
    }

    #[test]
    fn test_no_overlap() {
        let all = vec![current(), Profile::new("C", "yoga", "yoga", "Braga")];

        let result = compute_matches(&current(), &all);

        assert!(result.is_empty());
    }

    #[test]
    fn test_only_wants_offered_is_not_a_match() {
        // Candidate offers piano but wants nothing current has
        let all = vec![current(), Profile::new("D", "piano", "yoga", "Braga")];

        let result = compute_matches(&current(), &all);

        assert!(result.is_empty());
    }

    #[test]
    fn test_self_only_collection() {
        let me = Profile::new("Current", "guitar", "guitar", "Lisbon");

        let result = compute_matches(&me, &[me.clone()]);

        assert!(result.is_empty());
    }

    #[test]
    fn test_same_name_is_excluded() {
        let namesake = Profile::new("Current", "piano", "guitar", "Elsewhere");
        let all = vec![namesake, current()];

        let result = compute_matches(&current(), &all);

        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(compute_matches(&current(), &[]).is_empty());
    }

    #[test]
    fn test_order_follows_collection() {
        let all = vec![
            Profile::new("Z", "piano", "guitar", ""),
            Profile::new("Y", "cooking", "guitar", ""),
            current(),
            Profile::new("X", "Piano, drums", "GUITAR", ""),
            Profile::new("W", "", "guitar , bass", ""),
        ];

        let result = compute_matches(&current(), &all);

        assert_eq!(names(&result.mutual), ["Z", "X"]);
        assert_eq!(names(&result.one_sided), ["Y", "W"]);
    }

    #[test]
    fn test_empty_skills_never_match() {
        let me = Profile::new("Current", "", "", "");
        let all = vec![Profile::new("A", "piano", "guitar", "")];

        assert!(compute_matches(&me, &all).is_empty());
    }
}
