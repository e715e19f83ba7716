use std::time::Duration;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::error::ContactError;

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Fields of the contact page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Acknowledgement of a (simulated) submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub name: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ContactError::MissingFields);
        }

        // The address is checked as typed, surrounding whitespace included.
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }

    /// Validate, then pretend to send the form. Nothing leaves the process.
    pub async fn submit(&self, delay: Duration) -> Result<ContactReceipt, ContactError> {
        self.validate()?;

        debug!("Submitting contact form for {}", self.email);
        sleep(delay).await;
        info!("Contact form from {} accepted", self.name.trim());

        Ok(ContactReceipt {
            name: self.name.trim().to_string(),
            message: THANK_YOU_MESSAGE.to_string(),
        })
    }
}
