// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, ExperienceEntry, ExperienceLevel, JobMatch, JobPosting, MatchBreakdown,
    SalaryParseError, SalaryRange, ScoringWeights, User, UserRole,
};
pub use requests::{ExperienceLevelQuery, RankJobsRequest, RegisterRequest, ScoreMatchRequest};
pub use responses::{
    ErrorResponse, ExperienceLevelResponse, HealthResponse, RankJobsResponse, RegisterResponse,
    RegisteredUser,
};
