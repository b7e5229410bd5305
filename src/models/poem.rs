use serde::Serialize;

/// A fetched (or fallback) poem line for the status view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poem {
    pub content: String,
    pub author: String,
    pub origin: String,
}
