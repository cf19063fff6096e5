use std::future::Future;

use serde::Serialize;
use thiserror::Error;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// What the visitor typed into the contact form, as handed to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("mail relay is not configured: {0} is missing")]
    MissingConfig(&'static str),
    #[error("mail relay request failed: {0}")]
    Network(String),
    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("mail relay is only reachable from the browser")]
    Unavailable,
}

/// EmailJS credentials, baked in from the build environment.
///
/// Nothing is checked until a message is actually sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

/// Borrowed, validated view of a [`MailConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub public_key: &'a str,
}

impl MailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: Some(service_id.into()),
            template_id: Some(template_id.into()),
            public_key: Some(public_key.into()),
        }
    }

    pub fn from_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").map(str::to_string),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").map(str::to_string),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").map(str::to_string),
        }
    }

    pub fn credentials(&self) -> Result<Credentials<'_>, DeliveryError> {
        fn required<'a>(
            value: &'a Option<String>,
            name: &'static str,
        ) -> Result<&'a str, DeliveryError> {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .ok_or(DeliveryError::MissingConfig(name))
        }

        Ok(Credentials {
            service_id: required(&self.service_id, "EMAILJS_SERVICE_ID")?,
            template_id: required(&self.template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: required(&self.public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}

/// A transactional-email service that can deliver a [`ContactMessage`].
pub trait MailRelay {
    fn send(
        &self,
        config: &MailConfig,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// Body of an EmailJS `email/send` call.
#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(credentials: Credentials<'a>, message: &'a ContactMessage) -> Self {
        Self {
            service_id: credentials.service_id,
            template_id: credentials.template_id,
            user_id: credentials.public_key,
            template_params: message,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EmailJsRelay {
    endpoint: &'static str,
}

impl Default for EmailJsRelay {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT,
        }
    }
}

impl EmailJsRelay {
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }
}

impl MailRelay for EmailJsRelay {
    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        config: &MailConfig,
        message: &ContactMessage,
    ) -> Result<(), DeliveryError> {
        use gloo_net::http::Request;

        let body = EmailJsRequest::new(config.credentials()?, message);
        let resp = Request::post(self.endpoint)
            .json(&body)
            .map_err(|e| DeliveryError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected { status, body })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(
        &self,
        config: &MailConfig,
        _message: &ContactMessage,
    ) -> Result<(), DeliveryError> {
        config.credentials()?;
        Err(DeliveryError::Unavailable)
    }
}
