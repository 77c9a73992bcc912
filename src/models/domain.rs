use serde::{Deserialize, Deserializer, Serialize};

/// A submitted skill-swap profile
///
/// Profiles are immutable once stored. `name` doubles as the identity key
/// for matching; two profiles sharing a name are treated as the same person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(rename = "skillOffer", default, deserialize_with = "null_as_empty")]
    pub skill_offer: String,
    #[serde(rename = "skillWant", default, deserialize_with = "null_as_empty")]
    pub skill_want: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Deserialize an optional string, reading `null` as `""`
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        skill_offer: impl Into<String>,
        skill_want: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            skill_offer: skill_offer.into(),
            skill_want: skill_want.into(),
            location: location.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Email usable for contact, treating an empty string as absent
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

/// Partition of the other profiles relative to one current profile
///
/// Both lists keep the order of the source collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub mutual: Vec<Profile>,
    #[serde(rename = "oneSided")]
    pub one_sided: Vec<Profile>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.mutual.is_empty() && self.one_sided.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_email_treats_blank_as_absent() {
        let profile = Profile::new("Ana", "guitar", "piano", "Lisbon");
        assert_eq!(profile.contact_email(), None);

        let profile = profile.with_email("  ");
        assert_eq!(profile.contact_email(), None);

        let profile = Profile::new("Ana", "guitar", "piano", "Lisbon").with_email("ana@example.com");
        assert_eq!(profile.contact_email(), Some("ana@example.com"));
    }

    #[test]
    fn test_profile_wire_format() {
        let json = r#"{"name":"Ben","skillOffer":"Cooking","skillWant":"Guitar","location":"Porto"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.skill_offer, "Cooking");
        assert_eq!(profile.email, None);

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["skillWant"], "Guitar");
        assert!(value.get("email").is_none());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{"name":"Ben","skillOffer":null,"skillWant":null,"location":null,"email":null}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.skill_offer, "");
        assert_eq!(profile.skill_want, "");
        assert_eq!(profile.location, "");
        assert_eq!(profile.email, None);
    }
}
