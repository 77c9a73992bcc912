/// Normalized skill tokens parsed from a comma-separated skill string
///
/// Order follows the source string and duplicates are kept; every query on
/// the set is a membership test, so repeated tokens never change an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    tokens: Vec<String>,
}

impl SkillSet {
    #[inline]
    pub fn contains(&self, skill: &str) -> bool {
        self.tokens.iter().any(|token| token == skill)
    }

    /// True when any token of `self` is also present in `other`
    #[inline]
    pub fn intersects(&self, other: &SkillSet) -> bool {
        self.tokens.iter().any(|token| other.contains(token))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Parse a free-text skill list
///
/// Lowercases the whole string, splits on commas, trims each segment and
/// drops the ones left empty. Never fails: `""` yields an empty set.
pub fn parse_skills(raw: &str) -> SkillSet {
    let tokens = raw
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();

    SkillSet { tokens }
}
