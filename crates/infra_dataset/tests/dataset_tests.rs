//! Tests for claim dataset ingestion

use std::fs;
use std::path::PathBuf;

use domain_claims::{ClaimCatalog, ClaimError, ClaimSource, ClaimStatus};
use infra_dataset::{parse_claims, BundledDataset, ClaimRecord, DatasetError, JsonFileSource};

use test_utils::{ClaimFixtures, TestClaimBuilder};

fn temp_dataset(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fra-claims-{}-{name}.json", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn record_json(claim_id: &str, overrides: &[(&str, serde_json::Value)]) -> serde_json::Value {
    let claim = TestClaimBuilder::new(claim_id).build();
    let mut value = serde_json::to_value(ClaimRecord::from(&claim)).unwrap();
    for (key, override_value) in overrides {
        value[*key] = override_value.clone();
    }
    value
}

// ============================================================================
// Bundled Dataset Tests
// ============================================================================

mod bundled_tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_matches_sample_register() {
        let claims = BundledDataset.claims().unwrap();
        assert_eq!(claims, ClaimFixtures::sample_register());
    }

    #[test]
    fn test_bundled_dataset_loads_into_catalog() {
        let catalog = ClaimCatalog::load(&BundledDataset).unwrap();

        assert_eq!(catalog.len(), 5);
        assert_eq!(BundledDataset.name(), "bundled");
        let rejected = catalog
            .claims()
            .iter()
            .filter(|c| c.status == ClaimStatus::Rejected)
            .count();
        assert_eq!(rejected, 1);
    }

    #[test]
    fn test_bundled_ids_follow_register_format() {
        for claim in BundledDataset.claims().unwrap() {
            assert!(claim.id.is_register_format(), "{}", claim.id);
            assert_eq!(claim.id.year(), Some(2024));
        }
    }
}

// ============================================================================
// Record Conversion Tests
// ============================================================================

mod record_tests {
    use super::*;

    #[test]
    fn test_record_uses_dataset_field_names() {
        let claim = ClaimFixtures::sample_register().remove(0);
        let json = serde_json::to_value(ClaimRecord::from(&claim)).unwrap();

        assert_eq!(json["claim_id"], "FRA/MP/BTL/2024/001567");
        assert_eq!(json["father_name"], "स्वर्गीय राम सिंह वर्मा");
        assert_eq!(json["claim_type"], "IFR");
        assert_eq!(json["documents"][1]["type"], "SKETCH_MAP");
    }

    #[test]
    fn test_record_converts_back_to_claim() {
        for claim in ClaimFixtures::sample_register() {
            let record = ClaimRecord::from(&claim);
            assert_eq!(record.into_claim().unwrap(), claim);
        }
    }

    #[test]
    fn test_numeric_quantities_accepted() {
        let value = record_json(
            "X1",
            &[
                ("area_acres", serde_json::json!(2.5)),
                ("confidence_score", serde_json::json!(0.94)),
            ],
        );
        let claims = parse_claims(&serde_json::json!([value]).to_string()).unwrap();

        assert_eq!(claims[0].area_acres.to_string(), "2.5 acres");
        assert_eq!(claims[0].confidence_score.percent(), 94);
    }

    #[test]
    fn test_unknown_status_code_is_malformed() {
        let value = record_json("X1", &[("status", serde_json::json!("ARCHIVED"))]);
        let err = parse_claims(&serde_json::json!([value]).to_string()).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_oversized_area_names_record() {
        let value = record_json("HUGE-AREA", &[("area_acres", serde_json::json!(2500000.0))]);
        let err = parse_claims(&serde_json::json!([value]).to_string()).unwrap_err();

        assert!(err.is_record_error());
        assert!(err.to_string().contains("HUGE-AREA"));
    }

    #[test]
    fn test_negative_area_names_record() {
        let value = record_json("BAD-AREA", &[("area_acres", serde_json::json!(-1.0))]);
        let err = parse_claims(&serde_json::json!([value]).to_string()).unwrap_err();

        assert!(err.is_record_error());
        assert!(err.to_string().contains("BAD-AREA"));
    }

    #[test]
    fn test_blank_claim_id_rejected() {
        let value = record_json("X1", &[("claim_id", serde_json::json!("   "))]);
        let err = parse_claims(&serde_json::json!([value]).to_string()).unwrap_err();
        assert!(err.is_record_error());
    }

    #[test]
    fn test_confidence_above_one_rejected() {
        let value = record_json("X1", &[("confidence_score", serde_json::json!(1.2))]);
        assert!(parse_claims(&serde_json::json!([value]).to_string()).is_err());
    }

    #[test]
    fn test_status_date_before_filing_rejected() {
        let value = record_json("X1", &[("status_date", serde_json::json!("2020-01-01"))]);
        let err = parse_claims(&serde_json::json!([value]).to_string()).unwrap_err();

        match err {
            DatasetError::InvalidRecord { claim_id, source } => {
                assert_eq!(claim_id, "X1");
                assert!(matches!(source, ClaimError::InvalidClaim { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_out_of_order_timeline_rejected() {
        let value = record_json(
            "X1",
            &[(
                "timeline",
                serde_json::json!([
                    { "stage": "VERIFIED_BY_FRC", "date": "2024-03-15", "officer": "FRC Secretary" },
                    { "stage": "FILED_AT_GS", "date": "2024-03-16", "officer": "Sarpanch" }
                ]),
            )],
        );
        let err = parse_claims(&serde_json::json!([value]).to_string()).unwrap_err();
        assert!(err.is_record_error());
    }

    #[test]
    fn test_missing_documents_default_to_empty() {
        let mut value = record_json("X1", &[]);
        value.as_object_mut().unwrap().remove("documents");
        value.as_object_mut().unwrap().remove("timeline");

        let claims = parse_claims(&serde_json::json!([value]).to_string()).unwrap();
        assert!(claims[0].documents.is_empty());
        assert!(claims[0].timeline.is_empty());
    }

    #[test]
    fn test_not_an_array_is_malformed() {
        assert!(matches!(parse_claims("{}"), Err(DatasetError::Json(_))));
    }
}

// ============================================================================
// File Source Tests
// ============================================================================

mod file_source_tests {
    use super::*;

    #[test]
    fn test_file_source_reads_dataset() {
        let path = temp_dataset("file-source", BundledDataset::json());
        let source = JsonFileSource::new(&path);

        let claims = source.load_claims().unwrap();
        assert_eq!(claims.len(), 5);
        assert_eq!(source.name(), path.display().to_string());

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let source = JsonFileSource::new("/nonexistent/claims.json");

        assert!(matches!(source.claims(), Err(DatasetError::Io { .. })));
        assert!(matches!(source.load_claims(), Err(ClaimError::Source { .. })));
    }

    #[test]
    fn test_duplicate_ids_rejected_by_catalog() {
        let value = record_json("DUP", &[]);
        let path = temp_dataset("duplicates", &serde_json::json!([value, value]).to_string());

        let err = ClaimCatalog::load(&JsonFileSource::new(&path)).unwrap_err();
        assert!(matches!(err, ClaimError::DuplicateClaimId(_)));

        fs::remove_file(path).unwrap();
    }
}
