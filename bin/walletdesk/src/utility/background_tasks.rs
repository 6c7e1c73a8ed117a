use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};
use walletdesk_core::services::reconciliation_service::ReconciliationService;
use walletdesk_core::AppState;

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    tokio::spawn(async move {
        info!("Starting periodic settlement reconciliation task");
        reconcile_periodically(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn reconcile_periodically(state: Arc<AppState>) {
    let mut interval = interval(Duration::from_secs(state.config.reconcile_interval_secs));
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Reconciliation sweep: DB connection failed");
            continue;
        };

        match ReconciliationService::release_stale_claims(&mut conn, state.config.claim_stale_secs)
        {
            Ok(0) => debug!("No stale settlement claims"),
            Ok(n) => info!("Released {} stale settlement claims", n),
            Err(e) => error!("Stale claim sweep failed: {}", e),
        }

        match ReconciliationService::remove_settled_pending(&mut conn) {
            Ok(0) => debug!("No settled pending rows to remove"),
            Ok(n) => info!("Removed {} already-settled pending rows", n),
            Err(e) => error!("Settled pending sweep failed: {}", e),
        }
    }
}
