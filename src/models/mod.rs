// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, MatchResult};
pub use requests::{SubmitProfileRequest, ListProfilesQuery, FindMatchesQuery, ContactQuery};
pub use responses::{FindMatchesResponse, ListProfilesResponse, ContactResponse, HealthResponse, ErrorResponse};
