//! Structured list entity records
//!
//! Plain records stored as JSON arrays under a single content key. Optional
//! fields default when absent so older overrides keep decoding.

use serde::{Deserialize, Serialize};

/// Client logo shown in the "trusted by" strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoItem {
    pub name: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Budget bracket offered on inquiry forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub value: String,
    pub label: String,
}

/// In-person / virtual / hybrid delivery choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}
