use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;
use validator::{Validate, ValidationErrors};

use crate::models::webhook::{SolutionRequest, WebhookRequest, WebhookResponse};
use crate::repository::SalaryRepository;
use crate::services::{seed, solver};

#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("invalid identity payload: {0}")]
    InvalidIdentity(#[from] ValidationErrors),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("invalid webhook url {url:?}: {source}")]
    InvalidWebhookUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("missing credential: {0}")]
    MissingCredential(&'static str),
}

/// How far a webhook flow got before it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Submitted,
    GenerationFailed,
    SubmissionFailed,
}

/// Credentials returned by the generation endpoint, after validation.
#[derive(Debug, Clone)]
pub struct WebhookCredential {
    pub webhook: Url,
    pub access_token: String,
}

pub struct WebhookService {
    client: Client,
    generate_url: String,
    identity: WebhookRequest,
    repository: Arc<dyn SalaryRepository>,
}

impl WebhookService {
    pub fn new(
        client: Client,
        generate_url: String,
        identity: WebhookRequest,
        repository: Arc<dyn SalaryRepository>,
    ) -> Self {
        Self {
            client,
            generate_url,
            identity,
            repository,
        }
    }

    pub async fn generate_webhook(&self) -> Result<WebhookCredential, WebhookError> {
        self.identity.validate()?;

        info!(
            "Sending webhook generation request for {} ({})",
            self.identity.name, self.identity.reg_no
        );
        let response = self
            .client
            .post(&self.generate_url)
            .json(&self.identity)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::UnexpectedStatus { status, body });
        }

        let body: WebhookResponse = response.json().await?;
        let webhook = Url::parse(&body.webhook).map_err(|source| WebhookError::InvalidWebhookUrl {
            url: body.webhook.clone(),
            source,
        })?;
        if body.access_token.is_empty() {
            return Err(WebhookError::MissingCredential("accessToken"));
        }

        info!("Webhook generated successfully: {}", webhook);
        Ok(WebhookCredential {
            webhook,
            access_token: body.access_token,
        })
    }

    /// Returns the response body on any 2xx status.
    pub async fn submit_solution(
        &self,
        credential: &WebhookCredential,
        final_query: &str,
    ) -> Result<String, WebhookError> {
        if credential.access_token.is_empty() {
            return Err(WebhookError::MissingCredential("accessToken"));
        }
        if final_query.trim().is_empty() {
            return Err(WebhookError::MissingCredential("finalQuery"));
        }

        info!("Submitting solution to webhook: {}", credential.webhook);
        info!("SQL Query: {}", final_query);
        let response = self
            .client
            .post(credential.webhook.clone())
            .bearer_auth(&credential.access_token)
            .json(&SolutionRequest {
                final_query: final_query.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(WebhookError::UnexpectedStatus { status, body })
        }
    }

    /// Generate, seed, solve, submit. Never fails; each step logs and the
    /// flow stops at the first hard failure. Seeding failures are logged and
    /// do not stop the submission.
    pub async fn process_webhook_flow(&self) -> WebhookOutcome {
        info!("Step 1: Generating webhook...");
        let credential = match self.generate_webhook().await {
            Ok(credential) => credential,
            Err(err) => {
                error!("Failed to generate webhook, exiting process: {}", err);
                return WebhookOutcome::GenerationFailed;
            }
        };

        info!("Step 2: Seeding sample data...");
        match seed::populate_sample_data(self.repository.as_ref()).await {
            Ok(summary) => info!("Seeded {:?}", summary),
            Err(err) => warn!("Error populating sample data: {}", err),
        }

        info!("Step 3: Solving and submitting SQL problem...");
        let final_query = solver::query_for(&self.identity.reg_no);
        match self.submit_solution(&credential, &final_query).await {
            Ok(body) => {
                info!("Solution submitted successfully. Response: {}", body);
                WebhookOutcome::Submitted
            }
            Err(err) => {
                error!("Failed to submit solution: {}", err);
                WebhookOutcome::SubmissionFailed
            }
        }
    }

    pub async fn run_after_delay(&self, delay: Duration) -> WebhookOutcome {
        if !delay.is_zero() {
            info!("Waiting {:?} before starting webhook process", delay);
            tokio::time::sleep(delay).await;
        }
        self.process_webhook_flow().await
    }
}
