use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::get_experience_level;
use crate::models::{
    ExperienceLevelQuery, ExperienceLevelResponse, HealthResponse, RankJobsRequest,
    RankJobsResponse, ScoreMatchRequest,
};
use crate::routes::{error_response, AppState};

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/rank", web::post().to(rank_jobs))
        .route("/experience-level", web::get().to(experience_level));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = match state.postgres.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            false
        }
    };

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score one job against one candidate profile
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "job": { "skills": ["Rust"], "location": "Berlin", "jobType": "full-time",
///            "experienceLevel": "mid", "salary": { "min": 50000, "max": 80000 } },
///   "profile": { "skills": ["rust"], "preferredLocations": ["berlin"],
///                "preferredJobTypes": ["full-time"], "experience": [{}, {}],
///                "expectedSalary": { "min": "60000", "max": "90000" } }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    let result = state.matcher.score(&req.job, &req.profile);

    tracing::info!(
        "Scored job {:?}: {:.3} (salary {:.3}, skills {:.3})",
        result.job_id,
        result.match_score,
        result.salary_match,
        result.skills_relevance
    );

    HttpResponse::Ok().json(result)
}

/// Rank a batch of jobs for one candidate profile
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { ... },
///   "jobs": [ { ... }, { ... } ],
///   "limit": 20
/// }
/// ```
async fn rank_jobs(
    state: web::Data<AppState>,
    req: web::Json<RankJobsRequest>,
) -> impl Responder {
    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::debug!("Ranking {} jobs, limit: {}", req.jobs.len(), limit);

    let result = state
        .matcher
        .rank_jobs(&req.profile, &req.jobs, limit, state.matching.min_score);

    tracing::info!(
        "Returning {} matches (from {} jobs)",
        result.matches.len(),
        result.total_jobs
    );

    HttpResponse::Ok().json(RankJobsResponse {
        matches: result.matches,
        total_jobs: result.total_jobs,
    })
}

/// Classify years of experience
///
/// GET /api/v1/experience-level?years={years}
async fn experience_level(query: web::Query<ExperienceLevelQuery>) -> impl Responder {
    let years = query.years;

    if !years.is_finite() || years < 0.0 {
        return error_response(
            StatusCode::BAD_REQUEST,
            "invalid_years",
            "years must be a non-negative number",
        );
    }

    HttpResponse::Ok().json(ExperienceLevelResponse {
        years,
        level: get_experience_level(years),
    })
}
