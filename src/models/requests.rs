use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, JobPosting};

/// Request to score one job against one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatchRequest {
    pub job: JobPosting,
    pub profile: CandidateProfile,
}

/// Request to rank a batch of jobs for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankJobsRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Query for the experience level classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceLevelQuery {
    pub years: f64,
}

/// Registration request
///
/// Fields are optional on the wire so that a missing field is reported as a
/// validation failure instead of a JSON error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required(message = "name is required"), length(min = 1, message = "name is required"))]
    pub name: Option<String>,
    #[validate(required(message = "email is required"), email(message = "email is not a valid address"))]
    pub email: Option<String>,
    #[validate(required(message = "password is required"), length(min = 1, message = "password is required"))]
    pub password: Option<String>,
    #[validate(required(message = "role is required"), length(min = 1, message = "role is required"))]
    pub role: Option<String>,
}
