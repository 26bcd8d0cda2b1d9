//! Core contact record type.
//!
//! This module defines the record stored in the directory: four free-form
//! text fields, with the email address doubling as the record's identity.

use serde::{Deserialize, Serialize};

/// A single entry in the contact directory.
///
/// There is no separate id; the email address is the unique key under which
/// the contact is stored and displayed. Field names serialize in camelCase so
/// the persisted snapshot shape is `{"name", "secondName", "phone", "email"}`.
///
/// All four fields are expected to be non-empty by the time a contact enters
/// the directory. That constraint is enforced by the submission path (see
/// [`crate::session::Form`]), not by this type or by the directory itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Given name.
    pub name: String,

    /// Family name.
    pub second_name: String,

    /// Phone number, kept exactly as entered.
    pub phone: String,

    /// Email address; the directory key.
    pub email: String,
}

impl Contact {
    /// Create a contact from its four fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        second_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            second_name: second_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Check that every field carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.second_name.is_empty()
            && !self.phone.is_empty()
            && !self.email.is_empty()
    }
}
