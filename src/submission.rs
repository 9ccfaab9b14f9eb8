use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use crate::controller::form::{ContactForm, FormMachine};
use crate::controller::notify::NotificationKind;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! We'll be in touch soon to discuss your training goals.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Delivers a validated contact request somewhere.
pub trait ContactSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

pub trait Sleep {
    async fn sleep(&self, ms: u32);
}

pub struct TimerSleep;

impl Sleep for TimerSleep {
    async fn sleep(&self, ms: u32) {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}

/// Stand-in used until a backend exists: waits, then succeeds.
pub struct SimulatedSubmitter<S = TimerSleep> {
    pub latency_ms: u32,
    pub sleep: S,
}

impl<S: Sleep> ContactSubmitter for SimulatedSubmitter<S> {
    async fn submit(&self, _form: &ContactForm) -> Result<(), SubmitError> {
        self.sleep.sleep(self.latency_ms).await;
        Ok(())
    }
}

pub struct HttpSubmitter {
    pub endpoint: String,
}

impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let response = Request::post(&self.endpoint)
            .json(form)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => "Sorry, we couldn't send your message. Please try again.".to_string(),
        };
        Err(SubmitError::Rejected { status, message })
    }
}

pub enum Submitter {
    Simulated(SimulatedSubmitter),
    Http(HttpSubmitter),
}

impl Submitter {
    pub fn from_config() -> Self {
        match config::contact_endpoint() {
            Some(endpoint) => Submitter::Http(HttpSubmitter { endpoint }),
            None => Submitter::Simulated(SimulatedSubmitter {
                latency_ms: config::SIMULATED_LATENCY_MS,
                sleep: TimerSleep,
            }),
        }
    }
}

impl ContactSubmitter for Submitter {
    async fn submit(&self, form: &ContactForm) -> Result<(), SubmitError> {
        match self {
            Submitter::Simulated(s) => s.submit(form).await,
            Submitter::Http(s) => s.submit(form).await,
        }
    }
}

/// Sends `form` and returns the machine to idle once the submitter settles,
/// whatever the outcome.
pub async fn submit_contact<S: ContactSubmitter>(
    machine: Rc<RefCell<FormMachine>>,
    submitter: &S,
    form: ContactForm,
) -> Result<(), SubmitError> {
    info!("Submitting contact request for program {}", form.program);
    let outcome = submitter.submit(&form).await;
    machine.borrow_mut().finish();
    match &outcome {
        Ok(()) => info!("Contact request delivered"),
        Err(e) => warn!("Contact request failed: {}", e),
    }
    outcome
}

/// The toast to show once a submission settles, and whether the fields
/// should be cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitNotice {
    pub kind: NotificationKind,
    pub text: String,
    pub reset_fields: bool,
}

pub fn submission_notice(outcome: &Result<(), SubmitError>) -> SubmitNotice {
    match outcome {
        Ok(()) => SubmitNotice {
            kind: NotificationKind::Success,
            text: SUCCESS_MESSAGE.to_string(),
            reset_fields: true,
        },
        Err(err) => SubmitNotice {
            kind: NotificationKind::Error,
            text: err.to_string(),
            reset_fields: false,
        },
    }
}
