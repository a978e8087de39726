use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::{blocking::Client, StatusCode};
use tracing::debug;

use shallenge_core::Challenge;

/// The origin of the public challenge service.
pub const DEFAULT_ORIGIN: &str = "https://shallenge.onrender.com";

/// A client of the challenge service.
pub struct ChallengeService {
    client: Client,
    origin: String,
}

impl ChallengeService {
    pub fn new(origin: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("shallenge/", env!("CARGO_PKG_VERSION")))
            // the service may need to wake up
            .timeout(Duration::from_secs(120))
            .build()
            .context("Unable to create the HTTP client")?;

        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_owned(),
        })
    }

    /// Asks the service for a new challenge.
    pub fn generate(&self) -> Result<Challenge> {
        let url = format!("{}/challenges", self.origin);
        debug!(%url, "generating a challenge");

        let response = self
            .client
            .post(&url)
            .send()
            .with_context(|| format!("Unable to reach {url}"))?;

        if response.status() != StatusCode::CREATED {
            bail!(
                "Unable to generate a challenge (status={})",
                response.status().as_u16()
            );
        }

        response
            .json()
            .context("The service sent an invalid challenge")
    }

    /// Submits the password of a challenge and returns the flag sent back.
    pub fn submit(&self, id: &str, password: &str) -> Result<String> {
        let url = format!("{}/challenges/{id}/answer", self.origin);
        debug!(%url, "submitting the answer");

        let response = self
            .client
            .post(&url)
            .json(password)
            .send()
            .with_context(|| format!("Unable to reach {url}"))?;

        if response.status() != StatusCode::OK {
            bail!(
                "The answer was rejected (status={})",
                response.status().as_u16()
            );
        }

        let body = response.text().context("Unable to read the flag")?;

        Ok(decode_flag(body))
    }
}

/// The flag is sent as a JSON string, fall back to the raw body otherwise.
fn decode_flag(body: String) -> String {
    serde_json::from_str(&body).unwrap_or(body)
}
