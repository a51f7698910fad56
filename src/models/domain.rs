use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Job posting as supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    /// Free-form label; unrecognized values are kept so they can be scored as such
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
}

/// Candidate profile as supplied by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_job_types: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<ExperienceEntry>>,
    #[serde(default)]
    pub expected_salary: Option<SalaryRange>,
}

/// A prior role on a candidate profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SalaryParseError {
    #[error("salary bound is not numeric: {0:?}")]
    NotNumeric(String),

    #[error("salary bound is out of range: {0}")]
    OutOfRange(String),
}

/// Salary range in whole currency units
///
/// Bounds are kept as given. An inverted range (`min > max`) overlaps nothing
/// and scores 0 instead of failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSalaryRange")]
pub struct SalaryRange {
    min: i64,
    max: i64,
}

impl SalaryRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Build a range from string-encoded bounds such as `"50000"` or `"50000.75"`
    pub fn parse(min: &str, max: &str) -> Result<Self, SalaryParseError> {
        Ok(Self::new(parse_salary_bound(min)?, parse_salary_bound(max)?))
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Width of the range, negative when inverted
    ///
    /// Widened to `i128` so that `[i64::MIN, i64::MAX]` cannot overflow.
    pub fn span(&self) -> i128 {
        i128::from(self.max) - i128::from(self.min)
    }
}

/// Parse one salary bound, truncating any fractional part toward zero
fn parse_salary_bound(raw: &str) -> Result<i64, SalaryParseError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    match trimmed.parse::<f64>() {
        Ok(value) => float_bound(value),
        Err(_) => Err(SalaryParseError::NotNumeric(raw.to_string())),
    }
}

/// Truncate a float bound, rejecting values an `i64` cannot hold
fn float_bound(value: f64) -> Result<i64, SalaryParseError> {
    if !value.is_finite() {
        return Err(SalaryParseError::NotNumeric(value.to_string()));
    }

    let truncated = value.trunc();
    // i64::MIN as f64 is exactly -2^63; 2^63 itself is out of range
    if truncated < i64::MIN as f64 || truncated >= -(i64::MIN as f64) {
        return Err(SalaryParseError::OutOfRange(value.to_string()));
    }

    Ok(truncated as i64)
}

/// Wire form of a salary bound: JSON number or numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawSalaryBound {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawSalaryBound {
    fn into_bound(self) -> Result<i64, SalaryParseError> {
        match self {
            RawSalaryBound::Int(value) => Ok(value),
            RawSalaryBound::Float(value) => float_bound(value),
            RawSalaryBound::Text(text) => parse_salary_bound(&text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawSalaryRange {
    min: RawSalaryBound,
    max: RawSalaryBound,
}

impl TryFrom<RawSalaryRange> for SalaryRange {
    type Error = SalaryParseError;

    fn try_from(raw: RawSalaryRange) -> Result<Self, Self::Error> {
        Ok(SalaryRange::new(raw.min.into_bound()?, raw.max.into_bound()?))
    }
}

/// Ordered experience labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }

    /// Position in the ascending label sequence, 0 for entry through 4 for lead
    pub fn ordinal(&self) -> i32 {
        *self as i32
    }

    /// Case-insensitive label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        let lowered = label.to_lowercase();
        Self::ALL.into_iter().find(|level| level.as_str() == lowered)
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub job_type: f64,
    pub experience: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.job_type + self.experience
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.50,
            location: 0.20,
            job_type: 0.15,
            experience: 0.15,
        }
    }
}

/// Weighted contribution of each dimension to a match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub skills: f64,
    pub location: f64,
    pub job_type: f64,
    /// Negative when the job's experience label is unrecognized
    pub experience: f64,
    /// Sum of the contributions clamped to [0, 1]
    pub total: f64,
}

/// Scored job for one candidate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job_id: Option<String>,
    pub title: Option<String>,
    pub match_score: f64,
    pub breakdown: MatchBreakdown,
    pub matched_skills: Vec<String>,
    pub salary_match: f64,
    pub skills_relevance: f64,
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Candidate,
    Employer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Candidate => "candidate",
            UserRole::Employer => "employer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "candidate" => Ok(UserRole::Candidate),
            "employer" => Ok(UserRole::Employer),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Registered user, without credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
