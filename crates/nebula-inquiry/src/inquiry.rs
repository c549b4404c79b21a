//! Contact-form submissions and the records they produce.

use serde::{Deserialize, Serialize};

use crate::error::{RequiredField, ValidationError};

/// A recorded contact inquiry.
///
/// Plain text only; the email address is not checked beyond being present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Sender's company, empty when not given.
    pub company: String,
    /// Message body.
    pub message: String,
}

/// Raw contact-form fields as posted by the browser.
///
/// Missing inputs are empty strings, so they fail the presence check in
/// [`ContactForm::into_inquiry`] rather than the decoder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// `name` input.
    pub name: String,
    /// `email` input.
    pub email: String,
    /// `company` input (optional).
    pub company: String,
    /// `message` textarea.
    pub message: String,
}

impl ContactForm {
    /// Creates a form from its four fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: company.into(),
            message: message.into(),
        }
    }

    /// Builds a form from decoded `key=value` pairs.
    ///
    /// The first occurrence of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut name = None;
        let mut email = None;
        let mut company = None;
        let mut message = None;

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut name,
                "email" => &mut email,
                "company" => &mut company,
                "message" => &mut message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            company: company.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    /// Trims every field and checks the required ones.
    ///
    /// Fails on the first empty field in `name`, `email`, `message` order.
    pub fn into_inquiry(self) -> Result<Inquiry, ValidationError> {
        let name = required(&self.name, RequiredField::Name)?;
        let email = required(&self.email, RequiredField::Email)?;
        let message = required(&self.message, RequiredField::Message)?;

        Ok(Inquiry {
            name,
            email,
            company: self.company.trim().to_string(),
            message,
        })
    }
}

fn required(value: &str, field: RequiredField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}
