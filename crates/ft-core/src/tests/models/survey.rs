use crate::{IssueCategory, SatisfactionLevel, Survey, SurveyStats};

use std::str::FromStr;

#[test]
fn test_satisfaction_level_from_str() {
    assert_eq!(
        SatisfactionLevel::from_str("vrlo_nezadovoljan").unwrap(),
        SatisfactionLevel::VeryDissatisfied
    );
    assert!(SatisfactionLevel::from_str("very_satisfied").is_err());
}

#[test]
fn test_issue_category_label_falls_back_to_raw() {
    assert_eq!(IssueCategory::label("voda"), "Voda");
    assert_eq!(IssueCategory::label("čistoća"), "Čistoća");
    assert_eq!(IssueCategory::label("krov"), "krov");
}

#[test]
fn test_survey_deserializes_with_optional_fields_missing() {
    let survey: Survey = serde_json::from_str(
        r#"{
            "id": 7,
            "tenant_id": 3,
            "satisfaction_level": "nezadovoljan",
            "issue_category": "grijanje",
            "description": "Radijatori ne griju",
            "contact_preference": "email",
            "created_at": "2025-11-02T09:15:00"
        }"#,
    )
    .unwrap();

    assert_eq!(survey.id, 7);
    assert!(survey.issue_id.is_none());
    assert!(survey.suggestions.is_none());
    assert!(survey.tenant.is_none());
    assert_eq!(
        survey.satisfaction_level.parse::<SatisfactionLevel>().unwrap(),
        SatisfactionLevel::Dissatisfied
    );
}

#[test]
fn test_survey_stats_deserialize() {
    let stats: SurveyStats = serde_json::from_str(
        r#"{
            "total_surveys": 12,
            "satisfaction_levels": {
                "vrlo_zadovoljan": 1,
                "zadovoljan": 2,
                "neutralan": 3,
                "nezadovoljan": 4,
                "vrlo_nezadovoljan": 2
            },
            "categories": { "voda": 5, "lift": 7 }
        }"#,
    )
    .unwrap();

    assert_eq!(stats.total_surveys, 12);
    assert_eq!(stats.satisfaction_levels.dissatisfied, 4);
    assert_eq!(stats.categories.get("lift"), Some(&7));
}
