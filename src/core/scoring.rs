use crate::models::{CandidateProfile, JobPosting, MatchBreakdown, ScoringWeights};
use crate::core::{
    experience::{experience_similarity, job_level_ordinal, profile_level_ordinal},
    skills::skills_ratio,
};

/// Calculate a match score (0-1) for a job and candidate with the default weights
///
/// Scoring formula:
/// score = clamp(
///     skills_ratio * 0.50 +           # Share of job skills the candidate has
///     location_match * 0.20 +         # Preferred location inside job location
///     job_type_match * 0.15 +         # Job type among preferred types
///     experience_similarity * 0.15    # 1 - |job level - candidate level| / 4
/// , 0, 1)
pub fn calculate_match_score(job: &JobPosting, profile: &CandidateProfile) -> f64 {
    score_components(job, profile, &ScoringWeights::default()).total
}

/// Weighted per-dimension contributions and clamped total
///
/// A dimension contributes nothing when either side of it is absent.
pub fn score_components(
    job: &JobPosting,
    profile: &CandidateProfile,
    weights: &ScoringWeights,
) -> MatchBreakdown {
    // Skills: fraction of job skills found on the profile
    let skills = match (&job.skills, &profile.skills) {
        (Some(job_skills), Some(profile_skills)) => {
            skills_ratio(job_skills, profile_skills) * weights.skills
        }
        _ => 0.0,
    };

    // Location: any preferred location contained in the job location
    let location = match (non_empty(&job.location), &profile.preferred_locations) {
        (Some(job_location), Some(preferred)) if location_matches(job_location, preferred) => {
            weights.location
        }
        _ => 0.0,
    };

    // Job type: job type among the preferred types
    let job_type = match (non_empty(&job.job_type), &profile.preferred_job_types) {
        (Some(job_type), Some(preferred)) if job_type_matches(job_type, preferred) => {
            weights.job_type
        }
        _ => 0.0,
    };

    // Experience: distance between level ordinals, may be negative
    let experience = match (non_empty(&job.experience_level), &profile.experience) {
        (Some(label), Some(roles)) => {
            experience_similarity(job_level_ordinal(label), profile_level_ordinal(roles))
                * weights.experience
        }
        _ => 0.0,
    };

    let total = (skills + location + job_type + experience).clamp(0.0, 1.0);

    MatchBreakdown {
        skills,
        location,
        job_type,
        experience,
        total,
    }
}

#[inline]
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[inline]
fn location_matches(job_location: &str, preferred: &[String]) -> bool {
    let job_location = job_location.to_lowercase();
    preferred
        .iter()
        .any(|location| job_location.contains(&location.to_lowercase()))
}

#[inline]
fn job_type_matches(job_type: &str, preferred: &[String]) -> bool {
    // Exact, case-sensitive comparison
    preferred.iter().any(|candidate| candidate == job_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceEntry;

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    fn create_test_job() -> JobPosting {
        JobPosting {
            id: Some("job-1".to_string()),
            title: Some("Backend Engineer".to_string()),
            skills: strings(&["Rust", "PostgreSQL"]),
            location: Some("Berlin, Germany".to_string()),
            job_type: Some("full-time".to_string()),
            experience_level: Some("mid".to_string()),
            salary: None,
        }
    }

    fn create_test_profile(roles: usize) -> CandidateProfile {
        CandidateProfile {
            skills: strings(&["rust", "postgresql", "docker"]),
            preferred_locations: strings(&["berlin"]),
            preferred_job_types: strings(&["full-time"]),
            experience: Some(vec![ExperienceEntry::default(); roles]),
            expected_salary: None,
        }
    }

    #[test]
    fn test_full_match_scores_one() {
        let score = calculate_match_score(&create_test_job(), &create_test_profile(4));
        assert!((score - 1.0).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn test_breakdown_components() {
        let mut job = create_test_job();
        job.skills = strings(&["Rust", "Kubernetes"]);
        job.experience_level = Some("senior".to_string());

        let breakdown =
            score_components(&job, &create_test_profile(4), &ScoringWeights::default());

        assert!((breakdown.skills - 0.25).abs() < 1e-9);
        assert_eq!(breakdown.location, 0.20);
        assert_eq!(breakdown.job_type, 0.15);
        assert!((breakdown.experience - 0.75 * 0.15).abs() < 1e-9);
        assert!((breakdown.total - (0.25 + 0.20 + 0.15 + 0.1125)).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let score = calculate_match_score(&JobPosting::default(), &create_test_profile(4));
        assert_eq!(score, 0.0);

        let score = calculate_match_score(&create_test_job(), &CandidateProfile::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_empty_job_skills_guarded() {
        let mut job = create_test_job();
        job.skills = Some(vec![]);

        let breakdown =
            score_components(&job, &create_test_profile(4), &ScoringWeights::default());
        assert_eq!(breakdown.skills, 0.0);
        assert!(breakdown.total.is_finite());
    }

    #[test]
    fn test_empty_experience_list_is_entry_level() {
        let mut job = create_test_job();
        job.experience_level = Some("entry".to_string());

        let breakdown =
            score_components(&job, &create_test_profile(0), &ScoringWeights::default());
        assert_eq!(breakdown.experience, 0.15);
    }

    #[test]
    fn test_unrecognized_level_is_penalized_then_clamped() {
        let mut job = create_test_job();
        job.skills = strings(&["COBOL"]);
        job.location = Some("Lisbon".to_string());
        job.job_type = Some("contract".to_string());
        job.experience_level = Some("principal".to_string());

        let breakdown =
            score_components(&job, &create_test_profile(10), &ScoringWeights::default());

        assert!((breakdown.experience - (-0.0375)).abs() < 1e-9);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn test_job_type_is_case_sensitive() {
        let mut job = create_test_job();
        job.job_type = Some("Full-Time".to_string());

        let breakdown =
            score_components(&job, &create_test_profile(4), &ScoringWeights::default());
        assert_eq!(breakdown.job_type, 0.0);
    }

    #[test]
    fn test_empty_job_location_never_matches() {
        let mut job = create_test_job();
        job.location = Some(String::new());

        let breakdown =
            score_components(&job, &create_test_profile(4), &ScoringWeights::default());
        assert_eq!(breakdown.location, 0.0);
    }
}
