//! Premium checkout and billing webhooks.
//!
//! Checkout happens on the payment provider's hosted storefront: the server
//! only builds the redirect URL with the buyer's account id as referrer.
//! Premium status is flipped by the provider's webhook, whose payload is
//! authenticated with an HMAC-SHA256 signature over the raw request body.

use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("CHECKOUT_STOREFRONT_URL is not configured")]
    MissingStorefront,
    #[error("unreadable webhook payload: {0}")]
    BadPayload(#[from] serde_json::Error),
}

/// Hosted checkout URL for the given account. The storefront reports the
/// referrer back through the webhook so the purchase can be matched to the
/// account.
pub fn checkout_url(user_id: i64) -> Result<String, BillingError> {
    let storefront =
        std::env::var("CHECKOUT_STOREFRONT_URL").map_err(|_| BillingError::MissingStorefront)?;
    Ok(format!("{storefront}?referrer={user_id}"))
}

/// Verify the base64 HMAC-SHA256 signature the provider sends with each
/// webhook. Returns false for any malformed input.
pub fn verify_signature(secret: &[u8], payload: &[u8], signature_b64: &str) -> bool {
    let Ok(signature) = base64::engine::general_purpose::STANDARD.decode(signature_b64) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&signature).is_ok()
}

/// One event from a webhook batch. `referrer` is the account id passed to
/// [`checkout_url`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub referrer: i64,
}

#[derive(Debug, Deserialize)]
struct WebhookPayload {
    events: Vec<WebhookEvent>,
}

/// Parse a verified webhook body into its events.
pub fn parse_events(body: &str) -> Result<Vec<WebhookEvent>, BillingError> {
    let payload: WebhookPayload = serde_json::from_str(body)?;
    Ok(payload.events)
}

/// Apply one event: subscription activation grants premium, deactivation
/// revokes it. Unknown event kinds are ignored.
pub async fn apply_event(pool: &sqlx::PgPool, event: &WebhookEvent) -> Result<(), sqlx::Error> {
    let premium = match event.kind.as_str() {
        "subscription.activated" => true,
        "subscription.deactivated" | "subscription.canceled" => false,
        other => {
            tracing::debug!("ignoring billing event {other}");
            return Ok(());
        }
    };

    sqlx::query("UPDATE users SET is_premium = $1 WHERE id = $2")
        .bind(premium)
        .bind(event.referrer)
        .execute(pool)
        .await?;

    tracing::info!(user_id = event.referrer, premium, "billing event applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &[u8], payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret).unwrap();
        mac.update(payload);
        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature_verifies() {
        let payload = br#"{"events":[]}"#;
        let sig = sign(b"topsecret", payload);
        assert!(verify_signature(b"topsecret", payload, &sig));
    }

    #[test]
    fn test_tampered_payload_fails() {
        let sig = sign(b"topsecret", br#"{"events":[]}"#);
        assert!(!verify_signature(b"topsecret", br#"{"events":[{}]}"#, &sig));
        assert!(!verify_signature(b"othersecret", br#"{"events":[]}"#, &sig));
    }

    #[test]
    fn test_garbage_signature_fails() {
        assert!(!verify_signature(b"topsecret", b"payload", "not base64!!"));
    }

    #[test]
    fn test_parse_events() {
        let body = r#"{"events":[
            {"type":"subscription.activated","referrer":7},
            {"type":"order.completed","referrer":7}
        ]}"#;
        let events = parse_events(body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, "subscription.activated");
        assert_eq!(events[0].referrer, 7);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_events("not json").is_err());
    }
}
