use serde::{Deserialize, Serialize, Serializer};

use crate::names;

/// Body of `POST /questions`: either a new record or a text search,
/// depending on whether `searchTerm` is present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
    pub search_term: Option<String>,
}

/// The category filter a question listing was produced under.
/// Serializes as the `"all"` sentinel or the raw category id.
pub enum CurrentCategory {
    All,
    Id(i64),
}

impl Serialize for CurrentCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrentCategory::All => serializer.serialize_str(names::ALL_CATEGORIES),
            CurrentCategory::Id(id) => serializer.serialize_i64(*id),
        }
    }
}
