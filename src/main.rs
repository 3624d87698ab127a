use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use log::{info, warn};

use case_view::algorithm::tasks::upcoming_tasks;
use case_view::config::ENV_CONFIG_PATH;
use case_view::models::DocumentType;
use case_view::store::{drive_until, submit_settlement_offer};
use case_view::utils::fixtures::sample_case;
use case_view::utils::io::read_json_file;
use case_view::utils::logging::log_operation_start;
use case_view::{
    Case, CaseSummary, DeferredScheduler, DocumentStore, EngineConfig, SettlementOffer, TaskBoard,
    WorkspaceTab,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) => EngineConfig::from_json_file(Path::new(&path))
            .with_context(|| format!("failed to load configuration from {path}"))?,
        Err(_) => EngineConfig::default(),
    }
    .with_env_overrides();
    config.validate().context("invalid engine configuration")?;
    info!("{config}");

    let now = Local::now().naive_local();

    // Case file from the first argument, or the built-in sample
    let mut case: Case = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            log_operation_start("Loading case record from", &path.display().to_string());
            read_json_file(&path, "case record")
                .with_context(|| format!("failed to load case from {}", path.display()))?
        }
        None => {
            info!("No case file given, using the sample case");
            sample_case(now.date())
        }
    };

    let start = Instant::now();
    let summary = CaseSummary::build(&case, &config, now);
    info!("Built summary for case {} in {:?}", case.id, start.elapsed());
    println!("{summary}\n");

    let mut board = TaskBoard::for_case(&case, &config, now);
    board.set_active_tab(WorkspaceTab::Tasks);
    println!("Upcoming tasks ({} source):", board.source_name());
    for task in board.upcoming() {
        let marker = if board.selected_id() == Some(task.id.as_str()) { ">" } else { " " };
        let due = task
            .due_date
            .map_or_else(|| "no due date".to_string(), |d| d.format("%b %d").to_string());
        println!("  {marker} [{:?}] {} ({due}, {})", task.status, task.title, task.responsible);
    }

    let first_pending = board
        .upcoming()
        .iter()
        .find(|t| !t.is_completed())
        .map(|t| t.id.clone());
    if let Some(id) = first_pending {
        board.select(&id);
    }
    if let Some(next) = board.complete_selected().map(str::to_string) {
        info!("Completed current task; next is {next}");
    }
    let written = board.apply_to_case(&mut case);
    info!(
        "{written} completions written back; {} tasks still upcoming",
        upcoming_tasks(&case.tasks, now)
            .iter()
            .filter(|t| !t.is_completed())
            .count()
    );

    // Settlement offer on the largest policy, then wait for the CRN
    let Some(policy) = case
        .insurance_policies
        .iter()
        .max_by_key(|p| p.limit_amount())
    else {
        warn!("Case {} has no insurance policies; skipping settlement offer", case.id);
        return Ok(());
    };
    let offer = SettlementOffer {
        amount: policy.limit_amount(),
        policy_type: policy.policy_type,
        submitted_at: now,
        response_due: now.date().checked_add_days(chrono::Days::new(30)),
    };

    let store = DocumentStore::in_memory(config.document_store_key.clone());
    store.seed_from_case(&case);
    let scheduler = Mutex::new(DeferredScheduler::new());
    let handle = {
        let mut scheduler = scheduler
            .lock()
            .map_err(|_| anyhow::anyhow!("scheduler lock poisoned"))?;
        submit_settlement_offer(&case, &offer, &mut scheduler, &store, &config)
    };
    info!("Waiting for CRN ({handle})");

    let case_id = case.id.clone();
    let produced = drive_until(
        &scheduler,
        &store,
        Duration::from_millis(250),
        config.refresh_interval(),
        config
            .crn_delay()
            .saturating_add(config.refresh_interval().saturating_mul(2)),
        |store| {
            store
                .documents_for_case(&case_id)
                .iter()
                .any(|d| d.document_type == DocumentType::Crn)
        },
    )
    .await;

    if produced {
        println!("\nDocuments:");
        for doc in store.documents_for_case(&case.id) {
            println!("  [{}] {}", doc.document_type, doc.title);
        }
    } else {
        warn!("CRN was not produced for case {}", case.id);
    }

    Ok(())
}
