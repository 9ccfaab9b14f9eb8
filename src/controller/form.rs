use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// One contact request, built from the form fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Program,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Program];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Program => "program",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in the {0} field.")]
    MissingField(Field),
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("A submission is already in progress.")]
    Busy,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactForm {
    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Program => &self.program,
        }
    }

    /// First failing rule wins.
    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::REQUIRED
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Default)]
pub struct FormMachine {
    state: FormState,
}

impl FormMachine {
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Validates `form` and moves to `Submitting`, or back to `Idle` with
    /// the failing rule.
    pub fn begin(&mut self, form: &ContactForm) -> Result<(), FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::Busy);
        }
        self.state = FormState::Validating;
        match form.validate() {
            Ok(()) => {
                self.state = FormState::Submitting;
                Ok(())
            }
            Err(err) => {
                self.state = FormState::Idle;
                Err(err)
            }
        }
    }

    pub fn finish(&mut self) {
        self.state = FormState::Idle;
    }
}

/// What the submit button shows for a given form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
    pub disabled: bool,
}

const SUBMIT_LABEL: &str = "Send Message";
const BUSY_LABEL: &str = "Sending...";

pub fn submit_control(state: FormState) -> SubmitControl {
    match state {
        FormState::Submitting => SubmitControl { label: BUSY_LABEL, disabled: true },
        FormState::Idle | FormState::Validating => SubmitControl {
            label: SUBMIT_LABEL,
            disabled: false,
        },
    }
}
