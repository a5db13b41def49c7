//! Contact form submission.
//!
//! Posts a short message to a third-party form endpoint. Any failure,
//! network or HTTP, becomes [`SubmissionOutcome::Failed`] rather than an
//! error, so callers only have to choose which modal to show.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !email.contains('@') {
            return Err("Email address is not valid".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("Message is required".to_string());
        }
        Ok(())
    }

    fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("message", self.message.trim()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent,
    Failed(String),
}

impl SubmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent)
    }
}

pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        if !endpoint.starts_with("https://") {
            return Err(anyhow!("Contact endpoint must use HTTPS"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build contact HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn submit(&self, message: &ContactMessage) -> SubmissionOutcome {
        if let Err(reason) = message.validate() {
            return SubmissionOutcome::Failed(reason);
        }

        match self.send(message) {
            Ok(()) => {
                log::info!("Contact message delivered");
                SubmissionOutcome::Sent
            }
            Err(err) => {
                log::warn!("Contact submission failed: {:#}", err);
                SubmissionOutcome::Failed(err.to_string())
            }
        }
    }

    fn send(&self, message: &ContactMessage) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(&message.form_fields())
            .send()
            .context("Network error during contact submission")?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Contact endpoint answered with HTTP status {}", status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            message: "The 13:30 slot is missing".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        assert!(message().validate().is_ok());
    }

    #[test_case("", "a@b.c", "hi", "Name is required"; "missing name")]
    #[test_case("Sara", "  ", "hi", "Email is required"; "missing email")]
    #[test_case("Sara", "sara.example.com", "hi", "Email address is not valid"; "bad email")]
    #[test_case("Sara", "a@b.c", "", "Message is required"; "missing message")]
    fn test_invalid_message(name: &str, email: &str, body: &str, expected: &str) {
        let msg = ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: body.to_string(),
        };
        assert_eq!(msg.validate(), Err(expected.to_string()));
    }

    #[test]
    fn test_rejects_plain_http_endpoint() {
        assert!(ContactClient::new("http://example.com/form").is_err());
    }

    #[test]
    fn test_invalid_message_fails_without_network() {
        let client = ContactClient::new("https://example.invalid/form").unwrap();
        let outcome = client.submit(&ContactMessage::default());
        assert_eq!(outcome, SubmissionOutcome::Failed("Name is required".to_string()));
        assert!(!outcome.is_sent());
    }
}
