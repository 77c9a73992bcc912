use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{null_as_empty, Profile};

/// Request to submit a new profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitProfileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(alias = "skill_offer", rename = "skillOffer", default, deserialize_with = "null_as_empty")]
    pub skill_offer: String,
    #[serde(alias = "skill_want", rename = "skillWant", default, deserialize_with = "null_as_empty")]
    pub skill_want: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl SubmitProfileRequest {
    /// Trim every field before validation, mirroring what the form captured
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            skill_offer: self.skill_offer.trim().to_string(),
            skill_want: self.skill_want.trim().to_string(),
            location: self.location.trim().to_string(),
            email: self
                .email
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        }
    }

    pub fn into_profile(self) -> Profile {
        Profile {
            name: self.name,
            skill_offer: self.skill_offer,
            skill_want: self.skill_want,
            location: self.location,
            email: self.email,
        }
    }
}

/// Query for the profile listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProfilesQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Query for match computation; without a name the latest profile is used
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FindMatchesQuery {
    #[serde(default)]
    pub name: Option<String>,
}

/// Query for building a contact link between two named profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactQuery {
    pub from: String,
    pub to: String,
}
