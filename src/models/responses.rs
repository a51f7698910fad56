use serde::{Deserialize, Serialize};
use crate::models::domain::{ExperienceLevel, JobMatch, User, UserRole};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankJobsResponse {
    pub matches: Vec<JobMatch>,
    pub total_jobs: usize,
}

/// Response for the experience level classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceLevelResponse {
    pub years: f64,
    pub level: ExperienceLevel,
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
    pub status_code: u16,
}

/// Public view of a freshly registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}
