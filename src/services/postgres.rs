use crate::config::DatabaseSettings;
use crate::models::{User, UserRole};
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

impl PostgresError {
    /// Whether the database could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            PostgresError::SqlxError(
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            )
        )
    }
}

/// Account to be created
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// PostgreSQL client for user accounts
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    ///
    /// Connects eagerly and runs pending migrations.
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(settings: &DatabaseSettings) -> Result<Self, PostgresError> {
        tracing::info!(
            "Connecting to PostgreSQL (max {} connections)",
            settings.max_connections.unwrap_or(10)
        );

        Self::new(
            &settings.url,
            settings.max_connections.unwrap_or(10),
            settings.min_connections.unwrap_or(1),
            Duration::from_secs(settings.acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(settings.idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Create a client whose pool connects on first use
    ///
    /// No migrations are run. Nothing touches the network until a query is issued.
    pub fn connect_lazy(database_url: &str, acquire_timeout: Duration) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Look up a user by (already lower-cased) email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, PostgresError> {
        let query = r#"
            SELECT id, name, email, role, created_at
            FROM users
            WHERE email = $1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(user_from_row).transpose()
    }

    /// Insert a new user
    ///
    /// The email is stored lower-cased. A duplicate email is reported as
    /// [`PostgresError::Conflict`].
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, PostgresError> {
        let query = r#"
            INSERT INTO users (id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, role, created_at
        "#;

        let email = new_user.email.to_lowercase();
        let password_hash = hash_password(&new_user.password)?;

        let result = sqlx::query(query)
            .bind(uuid::Uuid::new_v4())
            .bind(&new_user.name)
            .bind(&email)
            .bind(&password_hash)
            .bind(new_user.role.as_str())
            .fetch_one(&self.pool)
            .await;

        let row = match result {
            Ok(row) => row,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(PostgresError::Conflict(format!("email {} already registered", email)));
            }
            Err(e) => return Err(e.into()),
        };

        let user = user_from_row(&row)?;
        tracing::debug!("Inserted user {} ({})", user.id, user.role);

        Ok(user)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn user_from_row(row: &PgRow) -> Result<User, PostgresError> {
    let role: String = row.try_get("role")?;

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        role: role.parse().map_err(PostgresError::InvalidData)?,
        created_at: row.try_get("created_at")?,
    })
}

/// Argon2id hash of a password in PHC string format
///
/// The salt is random per call and embedded in the returned string.
pub fn hash_password(password: &str) -> Result<String, PostgresError> {
    let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
        .map_err(|e| PostgresError::PasswordHash(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PostgresError::PasswordHash(e.to_string()))
}
