use serde::{Serialize, Deserialize};

/// One product review, as written to `output.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    pub review: String,
    pub date: String,
    pub source: String,
}
