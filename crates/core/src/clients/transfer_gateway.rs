use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use walletdesk_primitives::error::ApiError;

/// Result code the gateway reports on a completed transfer.
pub const CODE_ACCEPTED: &str = "0";
/// Synthesized locally: 2xx response whose body is not the expected JSON.
pub const CODE_MALFORMED_RESPONSE: &str = "998";
/// Synthesized locally: transport failure or timeout.
pub const CODE_NETWORK_ERROR: &str = "999";

/// Codes for which the provider outcome is unknown. 997 is reported by
/// the gateway itself; 998/999 are synthesized here. None of them may be
/// treated as a definitive failure.
pub const AMBIGUOUS_CODES: [&str; 3] = ["997", CODE_MALFORMED_RESPONSE, CODE_NETWORK_ERROR];

#[derive(Debug, Clone, Copy)]
pub struct TransferRequest<'a> {
    pub operator_code: &'a str,
    pub provider_code: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub reference_id: &'a str,
    pub kind: &'a str,
    pub amount: &'a str,
    pub signature: &'a str,
}

/// Normalized gateway result. Every transfer call collapses into this
/// pair; interpretation happens only through [`GatewayReply::outcome`].
#[derive(Debug, Clone)]
pub struct GatewayReply {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Code "0": funds moved, settle locally.
    Accepted,
    /// Ambiguous codes: the gateway itself does not know whether money
    /// moved. No local state may change.
    Unknown,
    /// Any other non-zero code: the transfer definitively did not happen.
    Rejected,
}

impl GatewayReply {
    pub fn outcome(&self) -> TransferOutcome {
        if self.code == CODE_ACCEPTED {
            TransferOutcome::Accepted
        } else if AMBIGUOUS_CODES.contains(&self.code.as_str()) {
            TransferOutcome::Unknown
        } else {
            TransferOutcome::Rejected
        }
    }
}

#[derive(Deserialize)]
struct WireReply {
    #[serde(rename = "errCode")]
    err_code: String,
    #[serde(rename = "errMsg", default)]
    err_msg: String,
}

#[derive(Clone)]
pub struct TransferGatewayClient {
    http: Client,
    endpoint: Url,
    timeout: Duration,
}

impl TransferGatewayClient {
    pub fn new(http: Client, endpoint: &str, timeout: Duration) -> Result<Self, ApiError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|_| ApiError::Internal("Invalid transfer gateway URL".into()))?;
        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    /// Issues one GET to the transfer endpoint and normalizes whatever
    /// comes back. The gateway validates parameter order, so `signature`
    /// is appended after everything else.
    pub async fn make_transfer(&self, req: &TransferRequest<'_>) -> GatewayReply {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("operatorcode", req.operator_code);
            pairs.append_pair("providercode", req.provider_code);
            pairs.append_pair("username", req.username);
            pairs.append_pair("password", req.password);
            pairs.append_pair("referenceid", req.reference_id);
            pairs.append_pair("type", req.kind);
            pairs.append_pair("amount", req.amount);
            // Must stay the last parameter.
            pairs.append_pair("signature", req.signature);
        }

        debug!(reference = req.reference_id, "calling transfer gateway");

        let response = match self.http.get(url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => {
                return GatewayReply {
                    code: CODE_NETWORK_ERROR.to_string(),
                    message: format!("Network error: {}", e),
                }
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return GatewayReply {
                    code: CODE_NETWORK_ERROR.to_string(),
                    message: format!("Network error: {}", e),
                }
            }
        };

        if !status.is_success() {
            return GatewayReply {
                code: status.as_u16().to_string(),
                message: body,
            };
        }

        match serde_json::from_str::<WireReply>(&body) {
            Ok(reply) => GatewayReply {
                code: reply.err_code,
                message: reply.err_msg,
            },
            Err(_) => GatewayReply {
                code: CODE_MALFORMED_RESPONSE.to_string(),
                message: format!("Invalid JSON response: {}", body),
            },
        }
    }
}
