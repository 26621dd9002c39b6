use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regular expression")
});

/// A message sent through the contact form.
///
/// # Examples
/// ```
/// use tablefinder_core::{ContactError, ContactMessage};
///
/// let message = ContactMessage::new("Camille", "camille@example", "Bonjour");
/// let errors = message.validate().unwrap_err();
/// assert_eq!(errors.as_slice(), &[ContactError::EmailInvalid]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactMessage {
    /// Sender's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Body of the enquiry.
    pub message: String,
}

/// A single field-level problem with a [`ContactMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The name is blank.
    #[error("name is required")]
    NameRequired,
    /// The email is blank.
    #[error("email is required")]
    EmailRequired,
    /// The email does not look like `local@domain.tld`.
    #[error("email is not valid")]
    EmailInvalid,
    /// The message is blank.
    #[error("message is required")]
    MessageRequired,
}

/// Every field-level problem found by [`ContactMessage::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactErrors(Vec<ContactError>);

impl ContactErrors {
    /// The individual problems in field order.
    pub fn as_slice(&self) -> &[ContactError] {
        &self.0
    }
}

impl fmt::Display for ContactErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ContactErrors {}

impl ContactMessage {
    /// Construct a contact message.
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

    /// Check that every field is filled in and the email looks routable.
    ///
    /// Fields are trimmed before checking. The email only has to match
    /// `\S+@\S+\.\S+`.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so a form can flag them together.
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactError::NameRequired);
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactError::EmailRequired);
        } else if !EMAIL_SHAPE.is_match(email) {
            errors.push(ContactError::EmailInvalid);
        }
        if self.message.trim().is_empty() {
            errors.push(ContactError::MessageRequired);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ContactErrors(errors))
        }
    }
}
