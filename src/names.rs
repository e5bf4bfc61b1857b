pub const QUESTIONS_URL: &str = "/questions";
pub const CATEGORIES_URL: &str = "/categories";

pub fn question_url(question_id: i64) -> String {
    format!("/questions/{question_id}")
}

pub fn category_questions_url(category_id: i64) -> String {
    format!("/categories/{category_id}/questions")
}

// Listing defaults
pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 10;

/// Category filter value meaning "no filter applied".
pub const ALL_CATEGORIES: &str = "all";
pub const ALL_CATEGORIES_ID: i64 = 0;
