use crate::models::app_state::gateway_details::GatewayInfo;
use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gateway: GatewayInfo,

    /// Claims in `processing` longer than this are released back to
    /// `pending` by the maintenance sweep.
    pub claim_stale_secs: u64,

    pub reconcile_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            gateway: GatewayInfo::new()?,

            claim_stale_secs: env::var("CLAIM_STALE_SECS")
                .unwrap_or_else(|_| "600".into())
                .parse()?,

            reconcile_interval_secs: env::var("RECONCILE_INTERVAL_SECS")
                .unwrap_or_else(|_| "3600".into())
                .parse()?,
        })
    }
}
