#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use case_view::models::{DocumentType, PolicyType};
    use case_view::store::{
        DeferredScheduler, DocumentStore, MemoryBackend, SettlementOffer, drive_until,
        submit_settlement_offer,
    };
    use case_view::utils::fixtures::sample_case;
    use case_view::EngineConfig;
    use rust_decimal_macros::dec;

    use crate::utils::{at, date};

    fn offer() -> SettlementOffer {
        SettlementOffer {
            amount: dec!(50000),
            policy_type: PolicyType::Bi,
            submitted_at: at(2025, 5, 1, 9),
            response_due: Some(date(2025, 5, 31)),
        }
    }

    fn has_crn(store: &DocumentStore, case_id: &str) -> bool {
        store
            .documents_for_case(case_id)
            .iter()
            .any(|d| d.document_type == DocumentType::Crn)
    }

    #[test]
    fn test_crn_appears_after_delay() {
        let config = EngineConfig::default();
        let case = sample_case(date(2025, 5, 1));
        let store = DocumentStore::in_memory(config.document_store_key.clone());
        let mut scheduler = DeferredScheduler::new();

        submit_settlement_offer(&case, &offer(), &mut scheduler, &store, &config);
        scheduler.advance(Duration::from_secs(29));
        assert!(!has_crn(&store, &case.id));

        scheduler.advance(Duration::from_secs(1));
        let crn: Vec<_> = store
            .documents_for_case(&case.id)
            .into_iter()
            .filter(|d| d.document_type == DocumentType::Crn)
            .collect();
        assert_eq!(crn.len(), 1);
        assert_eq!(crn[0].title, "CRN - Maria Alvarez (BI)");
        let content = crn[0].content.as_deref().unwrap();
        assert!(content.contains("Settlement Offer: $50,000.00"));
        assert!(content.contains("Response Due: May 31, 2025"));
    }

    #[test]
    fn test_cancelled_offer_produces_nothing() {
        let config = EngineConfig::default();
        let case = sample_case(date(2025, 5, 1));
        let store = DocumentStore::in_memory(config.document_store_key.clone());
        let mut scheduler = DeferredScheduler::new();

        let handle = submit_settlement_offer(&case, &offer(), &mut scheduler, &store, &config);
        scheduler.cancel(handle).unwrap();
        scheduler.run_until_idle();
        assert!(!has_crn(&store, &case.id));
    }

    #[test]
    fn test_crn_outlives_submitting_view() {
        let config = EngineConfig::default();
        let case = sample_case(date(2025, 5, 1));
        let backend = Arc::new(MemoryBackend::new());
        let observer = DocumentStore::new(backend.clone(), config.document_store_key.clone());
        let mut scheduler = DeferredScheduler::new();

        {
            let view = DocumentStore::new(backend.clone(), config.document_store_key.clone());
            submit_settlement_offer(&case, &offer(), &mut scheduler, &view, &config);
        }
        scheduler.run_until_idle();

        assert!(!has_crn(&observer, &case.id));
        observer.refresh();
        assert!(has_crn(&observer, &case.id));
    }

    #[tokio::test(start_paused = true)]
    async fn test_crn_found_by_polling_driver() {
        let config = EngineConfig::default();
        let case = sample_case(date(2025, 5, 1));
        let backend = Arc::new(MemoryBackend::new());
        let producer = DocumentStore::new(backend.clone(), config.document_store_key.clone());
        let watcher = DocumentStore::new(backend.clone(), config.document_store_key.clone());
        let scheduler = Mutex::new(DeferredScheduler::new());

        submit_settlement_offer(
            &case,
            &offer(),
            &mut scheduler.lock().unwrap(),
            &producer,
            &config,
        );

        let case_id = case.id.clone();
        let found = drive_until(
            &scheduler,
            &watcher,
            Duration::from_secs(1),
            config.refresh_interval(),
            Duration::from_secs(60),
            |store| has_crn(store, &case_id),
        )
        .await;
        assert!(found);
    }
}
