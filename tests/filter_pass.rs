mod common;

use billing_records::models::{EnrichedRecord, RawFilterInput, RecordKind};
use billing_records::{EnrichmentStrategy, InMemorySource, RecordFilterService};
use std::sync::Arc;

const STRATEGIES: [EnrichmentStrategy; 3] = [
    EnrichmentStrategy::Snapshot,
    EnrichmentStrategy::Bulk,
    EnrichmentStrategy::Incremental,
];

fn service(source: Arc<InMemorySource>, strategy: EnrichmentStrategy) -> RecordFilterService {
    RecordFilterService::new(source, strategy)
}

fn numbers(records: &[EnrichedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.record.number.as_str()).collect()
}

#[tokio::test]
async fn unfiltered_pass_keeps_source_order() {
    for strategy in STRATEGIES {
        let source = Arc::new(common::source());
        let results = service(source, strategy)
            .run_pass(RecordKind::Invoice, &RawFilterInput::default())
            .await
            .unwrap();

        assert_eq!(
            numbers(&results),
            vec![
                "INV-2025-001",
                "INV-2025-002",
                "INV-2025-003",
                "INV-2025-004",
                "INV-2025-005",
                "INV-2025-006",
            ],
            "strategy {:?}",
            strategy
        );
        assert_eq!(results[3].display_company(), "Unknown Client");
    }
}

#[tokio::test]
async fn strategies_agree_on_filtered_results() {
    let raw = RawFilterInput {
        company_name: Some(" a ".into()),
        start_date: Some("2025-10-01".into()),
        end_date: Some("2025-10-30".into()),
        ..Default::default()
    };

    let mut outputs = Vec::new();
    for strategy in STRATEGIES {
        let source = Arc::new(common::source());
        let results = service(source, strategy)
            .run_pass(RecordKind::Invoice, &raw)
            .await
            .unwrap();
        outputs.push(results);
    }

    assert_eq!(numbers(&outputs[0]), vec!["INV-2025-001", "INV-2025-002", "INV-2025-003"]);
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

#[tokio::test]
async fn service_reports_configured_strategy() {
    for strategy in STRATEGIES {
        let source = Arc::new(common::source());
        assert_eq!(service(source, strategy).strategy(), strategy);
    }
}

#[tokio::test]
async fn bulk_pass_looks_up_each_client_once() {
    let source = Arc::new(common::source());
    service(source.clone(), EnrichmentStrategy::Bulk)
        .run_pass(RecordKind::Invoice, &RawFilterInput::default())
        .await
        .unwrap();

    // clients 5, 6, 42, 7
    assert_eq!(source.lookup_count(), 4);
}

#[tokio::test]
async fn snapshot_pass_only_looks_up_missing_clients() {
    let source = Arc::new(common::source());
    service(source.clone(), EnrichmentStrategy::Snapshot)
        .run_pass(RecordKind::Invoice, &RawFilterInput::default())
        .await
        .unwrap();

    assert_eq!(source.lookup_count(), 1);
}

#[tokio::test]
async fn each_pass_builds_its_own_cache() {
    let source = Arc::new(common::source());
    let service = service(source.clone(), EnrichmentStrategy::Bulk);

    service.run_pass(RecordKind::Invoice, &RawFilterInput::default()).await.unwrap();
    service.run_pass(RecordKind::Invoice, &RawFilterInput::default()).await.unwrap();

    assert_eq!(source.lookup_count(), 8);
}

#[tokio::test]
async fn status_and_criteria_combine() {
    let raw = RawFilterInput {
        client_id: Some("6".into()),
        status: Some("PAID".into()),
        ..Default::default()
    };
    for strategy in STRATEGIES {
        let source = Arc::new(common::source());
        let results = service(source, strategy)
            .run_pass(RecordKind::Invoice, &raw)
            .await
            .unwrap();
        assert_eq!(numbers(&results), vec!["INV-2025-006"]);
    }
}

#[tokio::test]
async fn status_all_restores_full_set() {
    let raw = RawFilterInput {
        status: Some("All".into()),
        ..Default::default()
    };
    let source = Arc::new(common::source());
    let results = service(source, EnrichmentStrategy::Bulk)
        .run_pass(RecordKind::Invoice, &raw)
        .await
        .unwrap();
    assert_eq!(results.len(), 6);
}

#[tokio::test]
async fn malformed_input_does_not_constrain() {
    let raw = RawFilterInput {
        client_id: Some("abc".into()),
        start_date: Some("30/10/2025".into()),
        end_date: Some("yesterday".into()),
        ..Default::default()
    };
    let source = Arc::new(common::source());
    let results = service(source, EnrichmentStrategy::Incremental)
        .run_pass(RecordKind::Invoice, &raw)
        .await
        .unwrap();
    assert_eq!(results.len(), 6);
}

#[tokio::test]
async fn quotations_share_the_same_evaluator() {
    let raw = RawFilterInput {
        client_email: Some("CMCOFFEE".into()),
        ..Default::default()
    };
    let source = Arc::new(common::source());
    let results = service(source, EnrichmentStrategy::Snapshot)
        .run_pass(RecordKind::Quotation, &raw)
        .await
        .unwrap();
    assert_eq!(numbers(&results), vec!["QT-2025-001"]);
}

#[tokio::test]
async fn unavailable_source_fails_whole_pass() {
    for strategy in STRATEGIES {
        let source = Arc::new(common::source().unavailable());
        let result = service(source, strategy)
            .run_pass(RecordKind::Invoice, &RawFilterInput::default())
            .await;
        assert!(result.is_err(), "strategy {:?}", strategy);
    }
}

#[tokio::test]
async fn bulk_pass_survives_one_failing_client() {
    let source = Arc::new(common::source().with_failing_client(6));
    let results = service(source, EnrichmentStrategy::Bulk)
        .run_pass(RecordKind::Invoice, &RawFilterInput::default())
        .await
        .unwrap();

    assert_eq!(results.len(), 6);
    assert!(results[1].client.is_none());
    assert_eq!(results[0].display_company(), "Acme Trading");
}
