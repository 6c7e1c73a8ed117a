use eyre::eyre;
use eyre::Report;
use secrecy::SecretString;
use std::env;

/// Connection details for the third-party transfer gateway. The secret
/// key never appears in the request; it is only a signing ingredient.
#[derive(Debug, Clone)]
pub struct GatewayInfo {
    pub operator_code: String,
    pub provider_code: String,
    pub secret_key: SecretString,
    pub api_url: String,
    pub request_timeout_secs: u64,
}

impl GatewayInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            operator_code: env::var("OPERATOR_CODE")
                .map_err(|_| eyre!("OPERATOR_CODE must be set"))?,

            provider_code: env::var("PROVIDER_CODE")
                .map_err(|_| eyre!("PROVIDER_CODE must be set"))?,

            secret_key: SecretString::new(
                env::var("TRANSFER_SECRET_KEY")
                    .map_err(|_| eyre!("TRANSFER_SECRET_KEY must be set"))?
                    .into(),
            ),

            api_url: env::var("TRANSFER_API_URL")
                .unwrap_or_else(|_| "http://gsmd.336699bet.com/makeTransfer.aspx".into()),

            request_timeout_secs: env::var("TRANSFER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()?,
        })
    }
}
