// Database model structs

use serde::Serialize;

/// A catalog question row. Serialized as-is in API responses.
#[derive(Clone, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}
