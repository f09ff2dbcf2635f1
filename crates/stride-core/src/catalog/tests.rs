//! Tests for the plan catalog.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::models::Stage;

fn plan(id: &str, total_weeks: u32, stage_weeks: &[u32]) -> Plan {
    Plan {
        id: id.to_string(),
        title: format!("Plan {id}"),
        description: None,
        total_weeks,
        stages: stage_weeks
            .iter()
            .map(|&week| Stage {
                week,
                title: format!("Week {week}"),
                description: String::new(),
            })
            .collect(),
    }
}

#[test]
fn test_builtin_catalog_is_valid() {
    let catalog = PlanCatalog::builtin().expect("built-in catalog should load");
    assert!(!catalog.is_empty());

    let c25k = catalog.get_plan("couch-to-5k").expect("couch-to-5k exists");
    assert_eq!(c25k.total_weeks, 9);
    assert_eq!(c25k.stages.len(), 9);

    // Sparse stages are allowed
    let strength = catalog
        .get_plan("strength-foundations")
        .expect("strength-foundations exists");
    assert!(strength.stages.len() < strength.total_weeks as usize);
    assert!(strength.stage(2).is_none());
    assert_eq!(strength.stage(4).map(|s| s.title.as_str()), Some("Deload"));
}

#[test]
fn test_get_plan_not_found() {
    let catalog = PlanCatalog::builtin().unwrap();
    let err = catalog.get_plan("marathon-in-a-week").unwrap_err();
    assert!(matches!(err, TrackerError::PlanNotFound { ref id } if id == "marathon-in-a-week"));
}

#[test]
fn test_rejects_zero_weeks() {
    let err = PlanCatalog::new(vec![plan("empty", 0, &[])]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "total_weeks"));
}

#[test]
fn test_rejects_stage_out_of_range() {
    let err = PlanCatalog::new(vec![plan("short", 2, &[1, 3])]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "stages"));

    let err = PlanCatalog::new(vec![plan("zero-stage", 2, &[0])]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[test]
fn test_rejects_duplicate_stage_weeks() {
    let err = PlanCatalog::new(vec![plan("dupe", 3, &[1, 1])]).unwrap_err();
    assert!(err.to_string().contains("more than one stage for week 1"));
}

#[test]
fn test_rejects_duplicate_plan_ids() {
    let err = PlanCatalog::new(vec![plan("same", 2, &[1]), plan("same", 3, &[])]).unwrap_err();
    assert!(err.to_string().contains("duplicate plan id 'same'"));
}

#[test]
fn test_rejects_blank_id() {
    let err = PlanCatalog::new(vec![plan("  ", 2, &[])]).unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "id"));
}

#[test]
fn test_from_json_defaults_optional_fields() {
    let catalog = PlanCatalog::from_json(
        r#"{ "plans": [ { "id": "mini", "title": "Mini", "total_weeks": 1 } ] }"#,
    )
    .expect("minimal catalog should parse");

    let mini = catalog.get_plan("mini").unwrap();
    assert_eq!(mini.description, None);
    assert!(mini.stages.is_empty());
}

#[test]
fn test_from_json_rejects_malformed() {
    let err = PlanCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, TrackerError::Serialization { .. }));
}

#[test]
fn test_from_path_reads_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"{{ "plans": [ {{ "id": "file-plan", "title": "From File", "total_weeks": 3,
              "stages": [ {{ "week": 2, "title": "Middle" }} ] }} ] }}"#
    )
    .unwrap();

    let catalog = PlanCatalog::from_path(file.path()).expect("catalog file should load");
    assert_eq!(catalog.len(), 1);
    let plan = catalog.get_plan("file-plan").unwrap();
    assert_eq!(plan.stage(2).map(|s| s.description.as_str()), Some(""));
}

#[test]
fn test_from_path_missing_file() {
    let err = PlanCatalog::from_path("/nonexistent/stride/catalog.json").unwrap_err();
    assert!(matches!(err, TrackerError::FileSystem { .. }));
}

#[test]
fn test_plans_preserve_catalog_order() {
    let catalog =
        PlanCatalog::new(vec![plan("b", 1, &[]), plan("a", 1, &[]), plan("c", 1, &[])]).unwrap();
    let ids: Vec<&str> = catalog.plans().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}
