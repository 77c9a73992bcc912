use serde::{Deserialize, Serialize};
use crate::models::domain::Profile;

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "currentUser")]
    pub current_user: Profile,
    pub mutual: Vec<Profile>,
    #[serde(rename = "oneSided")]
    pub one_sided: Vec<Profile>,
    #[serde(rename = "mutualMessage", skip_serializing_if = "Option::is_none")]
    pub mutual_message: Option<String>,
    #[serde(rename = "oneSidedMessage", skip_serializing_if = "Option::is_none")]
    pub one_sided_message: Option<String>,
}

/// Response for the profile listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProfilesResponse {
    pub profiles: Vec<Profile>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response carrying a ready-to-open mailto link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub mailto: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
