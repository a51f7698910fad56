use std::collections::HashSet;

/// Job skills the candidate has, in the job's order and spelling
///
/// Matching is exact after lower-casing both sides. A skill listed twice on
/// the job counts twice.
pub fn matching_skills<'a>(job_skills: &'a [String], profile_skills: &[String]) -> Vec<&'a str> {
    let normalized: HashSet<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();

    job_skills
        .iter()
        .filter(|skill| normalized.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Fraction of job skills present on the profile, 0 when the job lists none
#[inline]
pub fn skills_ratio(job_skills: &[String], profile_skills: &[String]) -> f64 {
    if job_skills.is_empty() {
        return 0.0;
    }

    matching_skills(job_skills, profile_skills).len() as f64 / job_skills.len() as f64
}

/// Skills relevance score (0-1)
///
/// Returns 0 when either list is absent or empty.
pub fn calculate_skills_relevance(
    job_skills: Option<&[String]>,
    profile_skills: Option<&[String]>,
) -> f64 {
    match (job_skills, profile_skills) {
        (Some(job), Some(profile)) if !job.is_empty() && !profile.is_empty() => {
            skills_ratio(job, profile)
        }
        _ => 0.0,
    }
}
