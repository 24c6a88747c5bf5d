use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Dissatisfaction-survey record from `GET /api/surveys/all`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: i64,
    pub tenant_id: i64,
    #[serde(default)]
    pub issue_id: Option<i64>,
    /// One of the [`crate::SatisfactionLevel`] slugs
    pub satisfaction_level: String,
    pub issue_category: String,
    pub description: String,
    #[serde(default)]
    pub suggestions: Option<String>,
    pub contact_preference: String,
    pub created_at: String,
    #[serde(default)]
    pub tenant: Option<SurveyTenant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyTenant {
    pub id: i64,
    pub full_name: String,
    pub email: String,
}

/// Aggregate counts from `GET /api/surveys/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyStats {
    pub total_surveys: i64,
    pub satisfaction_levels: SatisfactionCounts,
    /// Count per issue category; keys are backend category strings
    #[serde(default)]
    pub categories: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SatisfactionCounts {
    #[serde(rename = "vrlo_zadovoljan", default)]
    pub very_satisfied: i64,
    #[serde(rename = "zadovoljan", default)]
    pub satisfied: i64,
    #[serde(rename = "neutralan", default)]
    pub neutral: i64,
    #[serde(rename = "nezadovoljan", default)]
    pub dissatisfied: i64,
    #[serde(rename = "vrlo_nezadovoljan", default)]
    pub very_dissatisfied: i64,
}
