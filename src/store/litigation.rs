//! Litigation events with deferred document production

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::documents::DocumentStore;
use super::scheduler::{DeferredScheduler, JobHandle};
use crate::config::EngineConfig;
use crate::models::{Case, Document, DocumentType, Money, PolicyType};
use crate::utils::currency::format_currency;

/// A settlement offer submitted on a case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementOffer {
    pub amount: Money,
    pub policy_type: PolicyType,
    pub submitted_at: NaiveDateTime,
    /// Offer response deadline, if one was given
    #[serde(default)]
    pub response_due: Option<NaiveDate>,
}

/// Render the Civil Remedy Notice produced after a settlement offer
#[must_use]
pub fn crn_document(case: &Case, offer: &SettlementOffer, document_id: String) -> Document {
    let mut content = format!(
        "CIVIL REMEDY NOTICE\n\nClaimant: {}\nDate of Loss: {}\nCoverage: {}\nSettlement Offer: {}\nSubmitted: {}\n",
        case.name,
        case.date_of_loss.format("%B %d, %Y"),
        offer.policy_type,
        format_currency(offer.amount),
        offer.submitted_at.format("%B %d, %Y"),
    );
    if let Some(due) = offer.response_due {
        content.push_str(&format!("Response Due: {}\n", due.format("%B %d, %Y")));
    }

    let mut document = Document::new(
        document_id,
        case.id.clone(),
        format!("CRN - {} ({})", case.name, offer.policy_type),
        DocumentType::Crn,
    );
    document.content = Some(content);
    document.created_at = Some(offer.submitted_at);
    document
}

/// Submit a settlement offer, scheduling CRN production after the
/// configured delay.
///
/// The returned handle can cancel the production; if nobody does, the CRN
/// is appended to the shared store when the delay elapses.
pub fn submit_settlement_offer(
    case: &Case,
    offer: &SettlementOffer,
    scheduler: &mut DeferredScheduler,
    store: &DocumentStore,
    config: &EngineConfig,
) -> JobHandle {
    let document_id = format!("crn-{}-{}", case.id, scheduler.next_handle().id());
    let document = crn_document(case, offer, document_id);
    let store = store.clone();
    let case_id = case.id.clone();

    log::info!(
        "Settlement offer of {} submitted for case {case_id}; CRN due in {}s",
        format_currency(offer.amount),
        config.crn_delay_secs
    );

    scheduler.schedule(format!("CRN for case {case_id}"), config.crn_delay(), move || {
        let title = document.title.clone();
        if store.append(document) {
            log::info!("Produced {title} for case {case_id}");
        }
    })
}
