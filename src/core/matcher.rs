use crate::models::{CandidateProfile, JobMatch, JobPosting, ScoringWeights};
use crate::core::{
    salary::calculate_salary_match,
    scoring::score_components,
    skills::{calculate_skills_relevance, matching_skills},
};

/// Result of ranking a batch of jobs
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<JobMatch>,
    pub total_jobs: usize,
}

/// Scores jobs for candidates with a fixed set of weights
///
/// # Ranking Stages
/// 1. Score every job against the profile
/// 2. Drop jobs under the minimum score
/// 3. Order by score, then salary compatibility
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score one job for one candidate, with the auxiliary salary and skills scores
    pub fn score(&self, job: &JobPosting, profile: &CandidateProfile) -> JobMatch {
        let breakdown = score_components(job, profile, &self.weights);

        let matched_skills = match (&job.skills, &profile.skills) {
            (Some(job_skills), Some(profile_skills)) => matching_skills(job_skills, profile_skills)
                .into_iter()
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        JobMatch {
            job_id: job.id.clone(),
            title: job.title.clone(),
            match_score: breakdown.total,
            breakdown,
            matched_skills,
            salary_match: calculate_salary_match(
                job.salary.as_ref(),
                profile.expected_salary.as_ref(),
            ),
            skills_relevance: calculate_skills_relevance(
                job.skills.as_deref(),
                profile.skills.as_deref(),
            ),
        }
    }

    /// Rank jobs for a candidate
    ///
    /// # Arguments
    /// * `profile` - The candidate being matched
    /// * `jobs` - Postings supplied by the caller
    /// * `limit` - Maximum number of matches to return
    /// * `min_score` - Jobs scoring below this are dropped
    pub fn rank_jobs(
        &self,
        profile: &CandidateProfile,
        jobs: &[JobPosting],
        limit: usize,
        min_score: f64,
    ) -> RankResult {
        let total_jobs = jobs.len();

        let mut matches: Vec<JobMatch> = jobs
            .iter()
            .map(|job| self.score(job, profile))
            .filter(|m| m.match_score >= min_score)
            .collect();

        // Sort by score (descending) and then by salary match (descending)
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.salary_match
                        .partial_cmp(&a.salary_match)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        matches.truncate(limit);

        RankResult {
            matches,
            total_jobs,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
