//! Signature verification helpers for checkout callbacks and webhooks.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Verify the checkout signature attached to a captured payment.
///
/// The signed payload is `"{order_id}|{payment_id}"`, keyed with the
/// account's `key_secret`. Returns `Ok(())` only for an exact match.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    key_secret: &str,
) -> Result<()> {
    let payload = format!("{order_id}|{payment_id}");
    verify(payload.as_bytes(), signature, key_secret)
}

/// Verify a webhook delivery against the webhook secret.
///
/// `payload` must be the raw request body, byte for byte; re-serializing the
/// JSON first will change the bytes and fail verification.
pub fn verify_webhook_signature(
    payload: &str,
    signature: &str,
    webhook_secret: &str,
) -> Result<()> {
    verify(payload.as_bytes(), signature, webhook_secret)
}

// HMAC-SHA256 over the payload, compared in constant time via verify_slice.
fn verify(payload: &[u8], signature: &str, secret: &str) -> Result<()> {
    let expected =
        hex::decode(signature).map_err(|_| Error::signature("signature is not valid hex"))?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| Error::signature("invalid signing key"))?;
    mac.update(payload);
    mac.verify_slice(&expected)
        .map_err(|_| Error::signature("signature mismatch"))
}
