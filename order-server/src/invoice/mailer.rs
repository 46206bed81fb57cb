//! Invoice email dispatch
//!
//! Renders the invoice and hands it to a Resend-compatible email API.
//! Single attempt per call; retry policy belongs to the caller, and the
//! submission coordinator deliberately has none.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use shared::models::Order;
use shared::order::NotificationError;

use crate::core::Config;
use crate::orders::InvoiceNotifier;

use super::template;

/// Outgoing email payload (Resend wire shape)
#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Email-dispatch collaborator backed by an HTTP email provider
#[derive(Debug, Clone)]
pub struct InvoiceMailer {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl InvoiceMailer {
    /// Build a mailer from configuration
    ///
    /// The request timeout comes from `MAIL_TIMEOUT_MS`; nothing else imposes
    /// a deadline on dispatch.
    pub fn new(config: &Config) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.mail_timeout_ms))
            .build()
            .map_err(|e| NotificationError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.mail_api_url.trim_end_matches('/').to_string(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
        })
    }
}

#[async_trait]
impl InvoiceNotifier for InvoiceMailer {
    async fn send_invoice(&self, order: &Order) -> Result<(), NotificationError> {
        if self.api_key.is_empty() {
            return Err(NotificationError("MAIL_API_KEY is not configured".into()));
        }

        let subject = template::invoice_subject(order);
        let html = template::render_html(order);
        let payload = EmailRequest {
            from: &self.from,
            to: [order.customer_email.as_str()],
            subject: &subject,
            html: &html,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| NotificationError(format!("email request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotificationError(format!(
                "email provider returned {status}: {body}"
            )));
        }

        tracing::debug!(order_id = %order.id, to = %order.customer_email, "invoice dispatched");
        Ok(())
    }
}
