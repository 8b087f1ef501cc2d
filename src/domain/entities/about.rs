use serde::{Deserialize, Serialize};

/// The singleton "about" record. There is always exactly one logical
/// instance: reads of a missing store yield the default, and every save
/// overwrites the previous content wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAboutRequest {
    pub content: String,
}
