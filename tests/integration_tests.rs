// Integration tests for GovScheme

use govscheme::core::{format_matches, Matcher, NO_MATCH_TEXT};
use govscheme::models::{OccupationRequirement, SchemeConditions, SchemeRecord, UserProfile};
use govscheme::services::{CatalogError, CatalogStore, FindSchemesTool, SchemeCatalog, ValidationMode};
use std::sync::Arc;

const SAMPLE_CATALOG: &str = r#"[
    {
        "name": "Post-Matric Scholarship",
        "benefits": "Tuition fee reimbursement",
        "documents": ["Aadhaar Card", "Income Certificate", "Caste Certificate"],
        "conditions": {"min_age": 18, "max_age": 25, "max_income": 200000,
                       "occupation": ["student", "unemployed"]}
    },
    {
        "name": "Kisan Samman Nidhi",
        "benefits": "Rs 6,000 per year",
        "documents": ["Land Records"],
        "conditions": {"occupation": "farmer"}
    },
    {
        "name": "Widow Pension",
        "benefits": "Rs 1,000 per month",
        "conditions": {"gender": "female", "min_age": 40}
    },
    {
        "name": "Telangana Disability Pension",
        "benefits": "Rs 4,016 per month",
        "conditions": {"state": "Telangana", "min_disability": 40}
    },
    {
        "name": "Ayushman Bharat",
        "benefits": "Health cover up to Rs 5 lakh",
        "documents": ["Ration Card"],
        "conditions": {"max_income": 250000}
    }
]"#;

fn create_test_profile(age: u32, gender: &str, state: &str, occupation: &str) -> UserProfile {
    UserProfile {
        age,
        gender: gender.to_string(),
        income: 150_000,
        state: state.to_string(),
        occupation: occupation.to_string(),
        disability_percent: 0,
    }
}

fn sample_catalog() -> SchemeCatalog {
    SchemeCatalog::from_json_str(SAMPLE_CATALOG, ValidationMode::Strict).unwrap()
}

fn names(schemes: &[&SchemeRecord]) -> Vec<String> {
    schemes.iter().map(|s| s.name.clone()).collect()
}

#[test]
fn test_integration_student_profile() {
    let catalog = sample_catalog();
    let profile = create_test_profile(20, "female", "Uttar Pradesh", "student");

    let result = Matcher::new().find_schemes(&profile, catalog.schemes());

    assert_eq!(
        names(&result.schemes),
        vec!["Post-Matric Scholarship", "Ayushman Bharat"]
    );
    assert_eq!(result.total_schemes, 5);
}

#[test]
fn test_output_is_ordered_subset_of_catalog() {
    let catalog = sample_catalog();
    let profiles = vec![
        create_test_profile(20, "female", "Uttar Pradesh", "student"),
        create_test_profile(45, "Female", "TELANGANA", "farmer"),
        create_test_profile(70, "male", "Kerala", "retired"),
    ];

    for profile in &profiles {
        let result = Matcher::new().find_schemes(profile, catalog.schemes());
        let positions: Vec<usize> = result
            .schemes
            .iter()
            .map(|m| {
                catalog
                    .schemes()
                    .iter()
                    .position(|s| s == *m)
                    .expect("matched scheme must come from the catalog")
            })
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order not preserved");
    }
}

#[test]
fn test_unconditional_scheme_matches_everyone() {
    let catalog = vec![SchemeRecord {
        name: "Open To All".to_string(),
        benefits: "Helpline".to_string(),
        documents: vec![],
        conditions: SchemeConditions::default(),
    }];

    for age in [0, 17, 18, 60, 120] {
        let profile = create_test_profile(age, "other", "Goa", "artist");
        assert_eq!(Matcher::new().find_schemes(&profile, &catalog).schemes.len(), 1);
    }
}

#[test]
fn test_male_excluded_from_female_scheme() {
    let catalog = vec![SchemeRecord {
        name: "Men Only".to_string(),
        benefits: "x".to_string(),
        documents: vec![],
        conditions: SchemeConditions {
            gender: Some("male".to_string()),
            ..Default::default()
        },
    }];
    let profile = create_test_profile(20, "female", "Uttar Pradesh", "student");

    assert!(Matcher::new().find_schemes(&profile, &catalog).is_empty());
}

#[test]
fn test_occupation_list_and_single() {
    let list = SchemeConditions {
        occupation: Some(OccupationRequirement::AnyOf(vec![
            "student".to_string(),
            "unemployed".to_string(),
        ])),
        ..Default::default()
    };
    let single = SchemeConditions {
        occupation: Some(OccupationRequirement::Single("farmer".to_string())),
        ..Default::default()
    };
    let catalog = vec![
        SchemeRecord { name: "List".into(), benefits: "a".into(), documents: vec![], conditions: list },
        SchemeRecord { name: "Single".into(), benefits: "b".into(), documents: vec![], conditions: single },
    ];

    let unemployed = create_test_profile(30, "male", "Bihar", "Unemployed");
    let farmer = create_test_profile(30, "male", "Bihar", "FARMER");

    assert_eq!(names(&Matcher::new().find_schemes(&unemployed, &catalog).schemes), vec!["List"]);
    assert_eq!(names(&Matcher::new().find_schemes(&farmer, &catalog).schemes), vec!["Single"]);
}

#[test]
fn test_empty_catalog_is_no_match_not_error() {
    let catalog = SchemeCatalog::from_json_str("[]", ValidationMode::Strict).unwrap();
    let profile = create_test_profile(20, "female", "Uttar Pradesh", "student");

    let result = Matcher::new().find_schemes(&profile, catalog.schemes());

    assert_eq!(format_matches(&result), NO_MATCH_TEXT);
}

#[tokio::test]
async fn test_missing_catalog_distinct_from_no_match() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("schemes.json");
    let store = Arc::new(CatalogStore::open(&missing, ValidationMode::Skip).await);

    assert_eq!(store.current().await.unwrap_err(), CatalogError::NotFound(missing.clone()));

    let tool = FindSchemesTool::new(Arc::clone(&store));
    let profile = create_test_profile(20, "female", "Uttar Pradesh", "student");
    let text = tool.find(&profile).await;

    assert_eq!(
        text,
        format!("Error: schemes catalog not found at {}", missing.display())
    );
}

#[tokio::test]
async fn test_tool_end_to_end_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schemes.json");
    std::fs::write(&path, SAMPLE_CATALOG).unwrap();

    let store = Arc::new(CatalogStore::open(&path, ValidationMode::Strict).await);
    let tool = FindSchemesTool::new(store);

    let output = tool
        .execute(&serde_json::json!({
            "age": 20,
            "gender": "female",
            "income": 150000,
            "state": "Uttar Pradesh",
            "occupation": "student",
            "disability_percent": 0
        }))
        .await;

    assert_eq!(
        output,
        "- Post-Matric Scholarship (Benefit: Tuition fee reimbursement)\n  \
         Documents: Aadhaar Card, Income Certificate, Caste Certificate\n\
         - Ayushman Bharat (Benefit: Health cover up to Rs 5 lakh)\n  \
         Documents: Ration Card"
    );
}
