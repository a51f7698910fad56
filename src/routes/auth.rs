use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{RegisterRequest, RegisterResponse, UserRole};
use crate::routes::{error_response, AppState};
use crate::services::{NewUser, PostgresError};

/// Configure account routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register));
}

/// Register a new account
///
/// POST /api/auth/register
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "password": "string",
///   "role": "candidate|employer"
/// }
/// ```
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    let req = req.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Registration validation failed: {:?}", errors.field_errors().keys());
        return error_response(StatusCode::BAD_REQUEST, "validation_failed", errors.to_string());
    }

    let (Some(name), Some(email), Some(password), Some(role)) =
        (req.name, req.email, req.password, req.role)
    else {
        return error_response(StatusCode::BAD_REQUEST, "validation_failed", "All fields are required");
    };

    let role = match role.parse::<UserRole>() {
        Ok(role) => role,
        Err(_) => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "invalid_role",
                "Role must be one of: candidate, employer",
            );
        }
    };

    let email = email.to_lowercase();
    tracing::info!("Registration request for {} as {}", email, role);

    match state.postgres.find_user_by_email(&email).await {
        Ok(Some(_)) => {
            tracing::info!("User already exists: {}", email);
            return email_taken();
        }
        Ok(None) => {}
        Err(e) => return store_failure(e),
    }

    let new_user = NewUser {
        name,
        email,
        password,
        role,
    };

    match state.postgres.create_user(new_user).await {
        Ok(user) => {
            tracing::info!("User created successfully: {}", user.id);
            HttpResponse::Created().json(RegisterResponse {
                message: "User registered successfully".to_string(),
                user: user.into(),
            })
        }
        Err(PostgresError::Conflict(msg)) => {
            tracing::info!("Concurrent registration rejected: {}", msg);
            email_taken()
        }
        Err(e) => store_failure(e),
    }
}

fn email_taken() -> HttpResponse {
    error_response(
        StatusCode::CONFLICT,
        "email_taken",
        "User with this email already exists",
    )
}

fn store_failure(err: PostgresError) -> HttpResponse {
    if err.is_unavailable() {
        tracing::error!("Database unavailable during registration: {}", err);
        return error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "database_unavailable",
            "Database connection failed. Please try again later.",
        );
    }

    tracing::error!("Registration error: {}", err);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "internal_error",
        "Internal server error. Please try again later.",
    )
}
