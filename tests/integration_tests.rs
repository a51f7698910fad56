// Integration tests for Job Match

use actix_web::{http::StatusCode, test, web, App};
use job_match::config::MatchingSettings;
use job_match::core::Matcher;
use job_match::models::{ErrorResponse, HealthResponse, JobMatch, RankJobsResponse};
use job_match::routes::{configure_routes, handle_json_payload_error, handle_query_payload_error, AppState};
use job_match::services::PostgresClient;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Nothing listens on this port, so any query fails as unavailable
const UNREACHABLE_DATABASE: &str = "postgres://jobmatch@127.0.0.1:1/job_match";

fn create_state(matching: MatchingSettings) -> AppState {
    let postgres = PostgresClient::connect_lazy(UNREACHABLE_DATABASE, Duration::from_millis(300))
        .expect("lazy pool");

    AppState {
        postgres: Arc::new(postgres),
        matcher: Matcher::with_default_weights(),
        matching,
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

fn job(id: &str, skills: &[&str], location: &str) -> serde_json::Value {
    json!({
        "id": id,
        "skills": skills,
        "location": location,
        "jobType": "full-time",
        "experienceLevel": "mid",
        "salary": { "min": 50000, "max": 80000 }
    })
}

fn profile() -> serde_json::Value {
    json!({
        "skills": ["rust", "sql"],
        "preferredLocations": ["berlin"],
        "preferredJobTypes": ["full-time"],
        "experience": [{ "title": "Developer" }, {}, {}, {}],
        "expectedSalary": { "min": "60000", "max": "90000" }
    })
}

#[actix_web::test]
async fn test_score_endpoint_end_to_end() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "job": job("1", &["Rust", "SQL"], "Berlin"), "profile": profile() }))
        .to_request();

    let body: JobMatch = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.job_id.as_deref(), Some("1"));
    assert!((body.match_score - 1.0).abs() < 1e-9, "got {}", body.match_score);
    assert!((body.salary_match - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(body.skills_relevance, 1.0);
    assert_eq!(body.matched_skills, vec!["Rust", "SQL"]);
}

#[actix_web::test]
async fn test_score_endpoint_rejects_bad_salary() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let mut bad_job = job("1", &["Rust"], "Berlin");
    bad_job["salary"] = json!({ "min": "plenty", "max": 80000 });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "job": bad_job, "profile": profile() }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_score_endpoint_inverted_salary_scores_zero() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let mut job = job("1", &["Rust", "SQL"], "Berlin");
    job["salary"] = json!({ "min": 90000, "max": 80000 });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({ "job": job, "profile": profile() }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: JobMatch = test::read_body_json(resp).await;
    assert_eq!(body.salary_match, 0.0);
    assert!((body.match_score - 1.0).abs() < 1e-9, "got {}", body.match_score);
}

#[actix_web::test]
async fn test_rank_endpoint_orders_and_limits() {
    let matching = MatchingSettings {
        default_limit: 2,
        max_limit: 3,
        min_score: 0.0,
    };
    let app = init_app!(create_state(matching));

    let jobs = vec![
        job("weak", &["Java"], "Paris"),
        job("best", &["Rust", "SQL"], "Berlin"),
        job("good", &["Rust", "Go"], "Berlin"),
        job("fair", &["Rust"], "Munich"),
    ];

    // Default limit applies
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "profile": profile(), "jobs": jobs }))
        .to_request();
    let body: RankJobsResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.total_jobs, 4);
    let ids: Vec<_> = body.matches.iter().filter_map(|m| m.job_id.clone()).collect();
    assert_eq!(ids, vec!["best", "fair"]);

    // Requested limit is capped
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/rank")
        .set_json(json!({ "profile": profile(), "jobs": jobs, "limit": 50 }))
        .to_request();
    let body: RankJobsResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.matches.len(), 3);
    for pair in body.matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score, "Matches not sorted by score");
    }
}

#[actix_web::test]
async fn test_experience_level_endpoint() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::get()
        .uri("/api/v1/experience-level?years=8")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["level"], "lead");

    let req = test::TestRequest::get()
        .uri("/api/v1/experience-level?years=lots")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_degraded_without_database() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, "degraded");
}

#[actix_web::test]
async fn test_register_missing_fields() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "validation_failed");
}

#[actix_web::test]
async fn test_register_unknown_role() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "correct horse",
            "role": "admin"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_role");
}

#[actix_web::test]
async fn test_register_invalid_json() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_database_unavailable() {
    let app = init_app!(create_state(MatchingSettings::default()));

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Ada",
            "email": "Ada@Example.com",
            "password": "correct horse",
            "role": "Candidate"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.message, "Database connection failed. Please try again later.");
}
