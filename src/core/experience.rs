use crate::models::{ExperienceEntry, ExperienceLevel};

/// Ordinal used when a job's experience label is not one of the known levels
pub const UNRECOGNIZED_LEVEL: i32 = -1;

/// Highest candidate ordinal (lead)
const MAX_PROFILE_LEVEL: usize = 4;

/// Classify years of experience into a level label
///
/// Boundaries are half-open: `[0,1)` entry, `[1,3)` junior, `[3,5)` mid,
/// `[5,8)` senior, `[8,inf)` lead. Negative years are entry.
pub fn get_experience_level(years: f64) -> ExperienceLevel {
    if years < 1.0 {
        ExperienceLevel::Entry
    } else if years < 3.0 {
        ExperienceLevel::Junior
    } else if years < 5.0 {
        ExperienceLevel::Mid
    } else if years < 8.0 {
        ExperienceLevel::Senior
    } else {
        ExperienceLevel::Lead
    }
}

/// Ordinal of a job's experience label, or [`UNRECOGNIZED_LEVEL`]
#[inline]
pub fn job_level_ordinal(label: &str) -> i32 {
    ExperienceLevel::from_label(label)
        .map(|level| level.ordinal())
        .unwrap_or(UNRECOGNIZED_LEVEL)
}

/// Candidate ordinal derived from the number of prior roles
///
/// Every two roles count as one level, capped at lead.
#[inline]
pub fn profile_level_ordinal(experience: &[ExperienceEntry]) -> i32 {
    (experience.len() / 2).min(MAX_PROFILE_LEVEL) as i32
}

/// Unweighted experience similarity, `1 - |job - profile| / 4`
///
/// Goes negative when the job level is unrecognized and the candidate is
/// above mid.
#[inline]
pub fn experience_similarity(job_level: i32, profile_level: i32) -> f64 {
    1.0 - f64::from((job_level - profile_level).abs()) / MAX_PROFILE_LEVEL as f64
}
