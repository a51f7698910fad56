//! Job Match - candidate/job matching service for the job board
//!
//! This library provides the scoring functions used to match job postings
//! against candidate profiles, plus the thin HTTP layer and user store around them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    calculate_match_score, calculate_salary_match, calculate_skills_relevance,
    get_experience_level, Matcher,
};
pub use models::{CandidateProfile, ExperienceLevel, JobMatch, JobPosting, SalaryRange, ScoringWeights};
