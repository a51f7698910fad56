use crate::models::SalaryRange;

/// Calculate salary compatibility (0-1)
///
/// Score is the overlap of the two ranges divided by the narrower range's
/// width, capped at 1. Disjoint ranges and absent ranges score 0. When the
/// narrower range has zero width, it scores 1 if it lies inside the other
/// range and 0 otherwise. An inverted range (`min > max`) scores 0.
pub fn calculate_salary_match(
    job_salary: Option<&SalaryRange>,
    profile_salary: Option<&SalaryRange>,
) -> f64 {
    let (job, profile) = match (job_salary, profile_salary) {
        (Some(job), Some(profile)) => (job, profile),
        _ => return 0.0,
    };

    if job.is_inverted() || profile.is_inverted() {
        return 0.0;
    }

    let overlap =
        i128::from(job.max().min(profile.max())) - i128::from(job.min().max(profile.min()));
    if overlap < 0 {
        return 0.0;
    }

    let narrower = job.span().min(profile.span());
    if narrower == 0 {
        return 1.0;
    }

    (overlap as f64 / narrower as f64).min(1.0)
}
