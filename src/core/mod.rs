// Core algorithm exports
pub mod experience;
pub mod matcher;
pub mod salary;
pub mod scoring;
pub mod skills;

pub use experience::get_experience_level;
pub use matcher::{Matcher, RankResult};
pub use salary::calculate_salary_match;
pub use scoring::{calculate_match_score, score_components};
pub use skills::calculate_skills_relevance;
