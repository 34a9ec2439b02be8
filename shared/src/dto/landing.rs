use serde::{Deserialize, Serialize};

/// One marketing feature card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub icon: String,
}

/// One pricing plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Monthly price in BDT; zero means free.
    pub price: i64,
    pub unit: String,
    pub notes: String,
    pub perks: Vec<String>,
}

/// One FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}
