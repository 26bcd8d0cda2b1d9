//! Form submission and card-action controllers.
//!
//! A [`Session`] ties the directory, the card list, and the shared input
//! form together, and carries the edit mode as explicit state. Every
//! mutation surface (CLI command or shell action) drives the same session
//! operations, so the projection and the store can never disagree.

use tracing::info;

use crate::contact::Contact;
use crate::directory::{Directory, Upsert};
use crate::error::Result;
use crate::view::CardList;

/// The four shared input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    /// Given-name input.
    pub name: String,
    /// Family-name input.
    pub second_name: String,
    /// Phone input.
    pub phone: String,
    /// Email input.
    pub email: String,
}

impl Form {
    /// Check that every input carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.second_name.is_empty()
            && !self.phone.is_empty()
            && !self.email.is_empty()
    }

    /// Clear all four inputs.
    pub fn reset(&mut self) {
        self.name.clear();
        self.second_name.clear();
        self.phone.clear();
        self.email.clear();
    }

    /// Copy a contact's fields into the inputs.
    pub fn fill(&mut self, contact: &Contact) {
        self.name.clone_from(&contact.name);
        self.second_name.clone_from(&contact.second_name);
        self.phone.clone_from(&contact.phone);
        self.email.clone_from(&contact.email);
    }

    /// Snapshot the inputs into a contact record.
    #[must_use]
    pub fn to_contact(&self) -> Contact {
        Contact::new(
            self.name.clone(),
            self.second_name.clone(),
            self.phone.clone(),
            self.email.clone(),
        )
    }
}

/// Controller state: whether the form is composing a new record or editing
/// a stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    /// The form composes a new record.
    #[default]
    Idle,
    /// The form was filled from the record stored under the given email.
    Editing(String),
}

/// Outcome of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// One or more fields were empty; the form was reset and nothing was
    /// stored.
    Rejected,
    /// A new record was created and its card appended.
    Created,
    /// An existing record was overwritten and its card patched in place.
    Updated,
}

/// The directory, its card-list projection, and the input form, driven as
/// one unit.
#[derive(Debug)]
pub struct Session {
    directory: Directory,
    cards: CardList,
    form: Form,
    mode: EditMode,
}

impl Session {
    /// Build a session over a loaded directory and render the initial cards.
    #[must_use]
    pub fn new(directory: Directory) -> Self {
        let mut cards = CardList::new();
        cards.render_all(&directory);
        Self {
            directory,
            cards,
            form: Form::default(),
            mode: EditMode::Idle,
        }
    }

    /// The directory behind this session.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The current card list.
    #[must_use]
    pub fn cards(&self) -> &CardList {
        &self.cards
    }

    /// The shared input form.
    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Mutable access to the input form.
    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// The current edit mode.
    #[must_use]
    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    /// Submit the form: validate, route to create-or-update, reset.
    ///
    /// Any empty field rejects the submission; the form is cleared and
    /// nothing is stored. Otherwise the record lands under the form's email,
    /// overwriting an existing entry (card patched in place) or creating a
    /// new one (card appended). When the form was filled through
    /// [`begin_edit`](Self::begin_edit) and the email input was changed, the
    /// originally edited entry is dropped first, so the edit re-keys the
    /// record instead of leaving the old entry behind. Every submission
    /// returns the mode to [`EditMode::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if a storage write fails.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let mode = std::mem::take(&mut self.mode);

        if !self.form.is_complete() {
            self.form.reset();
            return Ok(SubmitOutcome::Rejected);
        }

        let contact = self.form.to_contact();

        if let EditMode::Editing(original) = mode {
            if original != contact.email {
                self.directory.remove(&original)?;
                self.cards.detach(&original);
                info!("re-keyed {original} to {}", contact.email);
            }
        }

        let outcome = match self.directory.upsert(contact.clone())? {
            Upsert::Updated => {
                self.cards.update(&contact.email, &contact);
                SubmitOutcome::Updated
            }
            Upsert::Inserted => {
                self.cards.append(&contact);
                SubmitOutcome::Created
            }
        };

        self.form.reset();
        Ok(outcome)
    }

    /// Load the record stored under `email` into the form for editing.
    ///
    /// Returns `false` and leaves all state untouched when the email is
    /// unknown; otherwise the form holds the record's fields and the mode
    /// becomes [`EditMode::Editing`].
    pub fn begin_edit(&mut self, email: &str) -> bool {
        match self.directory.get(email) {
            Some(contact) => {
                self.form.fill(contact);
                self.mode = EditMode::Editing(email.to_string());
                true
            }
            None => false,
        }
    }

    /// Delete the record stored under `email`, detaching its card.
    ///
    /// Returns `false` when the email is unknown. If the deleted record was
    /// being edited, the form is cleared and the mode returns to idle.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage write fails.
    pub fn delete(&mut self, email: &str) -> Result<bool> {
        if !self.directory.remove(email)? {
            return Ok(false);
        }
        self.cards.detach(email);

        if matches!(&self.mode, EditMode::Editing(editing) if editing == email) {
            self.form.reset();
            self.mode = EditMode::Idle;
        }
        Ok(true)
    }

    /// Delete every record and re-render the (now empty) card list.
    ///
    /// # Errors
    ///
    /// Returns an error if a storage write fails.
    pub fn clear(&mut self) -> Result<()> {
        self.directory.clear()?;
        self.cards.render_all(&self.directory);
        self.form.reset();
        self.mode = EditMode::Idle;
        Ok(())
    }
}
