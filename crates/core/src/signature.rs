use md5::{Digest, Md5};

/// Inputs for the transfer signature, already in wire form. The gateway
/// recomputes the digest over the exact same concatenation server-side,
/// so field order and textual form must not drift.
#[derive(Debug, Clone, Copy)]
pub struct SignatureFields<'a> {
    pub amount: &'a str,
    pub operator_code: &'a str,
    /// The user's shared gateway credential. An empty credential still
    /// participates in the concatenation as an empty string.
    pub password: &'a str,
    pub provider_code: &'a str,
    pub reference_id: &'a str,
    pub kind: &'a str,
    pub username: &'a str,
}

/// MD5 over `amount + operatorcode + password + providercode +
/// referenceid + type + username + secret`, upper-cased hex.
pub fn transfer_signature(fields: &SignatureFields<'_>, secret: &str) -> String {
    let mut input = String::with_capacity(
        fields.amount.len()
            + fields.operator_code.len()
            + fields.password.len()
            + fields.provider_code.len()
            + fields.reference_id.len()
            + fields.kind.len()
            + fields.username.len()
            + secret.len(),
    );
    input.push_str(fields.amount);
    input.push_str(fields.operator_code);
    input.push_str(fields.password);
    input.push_str(fields.provider_code);
    input.push_str(fields.reference_id);
    input.push_str(fields.kind);
    input.push_str(fields.username);
    input.push_str(secret);

    let digest = Md5::digest(input.as_bytes());
    hex::encode(digest).to_uppercase()
}

/// Minor units rendered the way the gateway expects amounts: a plain
/// decimal with two fraction digits, no separators, no symbol.
pub fn wire_amount(minor_units: i64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}
