use crate::models::Profile;

/// Check if a profile matches a free-text listing query
///
/// Case-insensitive substring test against name and both skill strings.
#[inline]
pub fn matches_query(profile: &Profile, query: &str) -> bool {
    let query = query.to_lowercase();

    profile.name.to_lowercase().contains(&query)
        || profile.skill_offer.to_lowercase().contains(&query)
        || profile.skill_want.to_lowercase().contains(&query)
}

/// Filter a profile listing, keeping input order
///
/// An empty query keeps every profile.
pub fn filter_profiles(query: &str, profiles: &[Profile]) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| matches_query(profile, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_profiles() -> Vec<Profile> {
        vec![
            Profile::new("Ana", "Guitar", "Piano", "Lisbon"),
            Profile::new("Ben", "Cooking", "Guitar lessons", "Porto"),
            Profile::new("Carla", "Yoga", "Spanish", "Lisbon"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_all() {
        let profiles = create_test_profiles();
        assert_eq!(filter_profiles("", &profiles), profiles);
    }

    #[test]
    fn test_query_matches_skills_case_insensitively() {
        let profiles = create_test_profiles();

        let filtered = filter_profiles("GUITAR", &profiles);

        let names: Vec<_> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Ben"]);
    }

    #[test]
    fn test_query_matches_name() {
        let profiles = create_test_profiles();
        let filtered = filter_profiles("carl", &profiles);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Carla");
    }

    #[test]
    fn test_location_is_not_searched() {
        let profiles = create_test_profiles();
        assert!(filter_profiles("lisbon", &profiles).is_empty());
    }
}
