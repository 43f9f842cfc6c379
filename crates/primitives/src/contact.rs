//! Contact-form submission log
//!
//! Stateless facade over the shared [`SubmissionStore`]: validates raw
//! payloads and appends accepted contacts to the contact table.
//!
//! # Example
//!
//! ```ignore
//! let store = Arc::new(SubmissionStore::new());
//! let contacts = ContactLog::new(store.clone());
//!
//! let contact = contacts.submit(&payload)?;
//! assert!(contacts.list()?.contains(&contact));
//! ```

use serde_json::Value;
use std::sync::Arc;
use sunrise_core::{validate_contact, Contact, IntakeResult, NewContact};
use sunrise_storage::SubmissionStore;

/// Contact-form submission log
///
/// Holds only an `Arc<SubmissionStore>`; clones share the same table.
#[derive(Clone)]
pub struct ContactLog {
    store: Arc<SubmissionStore>,
}

impl ContactLog {
    /// Create a facade over `store`
    pub fn new(store: Arc<SubmissionStore>) -> Self {
        Self { store }
    }

    /// Validate a raw payload and store it
    ///
    /// # Errors
    ///
    /// - `Validation { kind: Contact }` if the payload breaks the contract
    /// - `Storage` if the table refuses the insert
    pub fn submit(&self, payload: &Value) -> IntakeResult<Contact> {
        let input = validate_contact(payload)?;
        self.record(input)
    }

    /// Store an already validated contact
    pub fn record(&self, input: NewContact) -> IntakeResult<Contact> {
        let contact = self.store.contacts().create(input).map_err(|err| {
            tracing::warn!(entity = "contact", error = %err, "create failed");
            err
        })?;
        tracing::info!(entity = "contact", id = %contact.id, "submission accepted");
        Ok(contact)
    }

    /// Every stored contact
    pub fn list(&self) -> IntakeResult<Vec<Contact>> {
        Ok(self.store.contacts().list_all())
    }
}
