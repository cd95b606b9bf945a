//! Complaint persistence.
//!
//! [`ComplaintStore`] owns the two durable records of the kiosk, the current
//! user and the complaint list, and is the only code that reads or writes
//! them. Values are JSON documents stored through a [`KeyValueStore`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::models::{Complaint, ComplaintStatus, User};
use crate::traits::KeyValueStore;

/// Key of the current-user record.
pub const CURRENT_USER_KEY: &str = "suvidha_current_user";

/// Key of the complaint list record.
pub const COMPLAINTS_KEY: &str = "suvidha_complaints";

/// Typed access to the kiosk's persisted state.
///
/// Every call reads or writes the backing store directly; nothing is cached.
/// Writes are whole-record overwrites, so two kiosks sharing a data directory
/// race and the last write wins.
#[derive(Clone)]
pub struct ComplaintStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ComplaintStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComplaintStore").finish_non_exhaustive()
    }
}

impl ComplaintStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Corrupt {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value).map_err(|e| StorageError::Io {
            key: key.to_string(),
            operation: "encode".to_string(),
            message: e.to_string(),
        })?;
        self.backend.set(key, &json)
    }

    /// The citizen currently signed in, if any.
    pub fn get_current_user(&self) -> Result<Option<User>, StorageError> {
        self.read(CURRENT_USER_KEY)
    }

    /// Overwrite the current-user slot; `None` clears it.
    pub fn set_current_user(&self, user: Option<&User>) -> Result<(), StorageError> {
        match user {
            Some(user) => self.write(CURRENT_USER_KEY, user),
            None => self.backend.remove(CURRENT_USER_KEY),
        }
    }

    /// All complaints, oldest first. Empty when nothing has been filed.
    pub fn get_complaints(&self) -> Result<Vec<Complaint>, StorageError> {
        Ok(self.read(COMPLAINTS_KEY)?.unwrap_or_default())
    }

    /// Append a complaint to the end of the list.
    pub fn save_complaint(&self, complaint: &Complaint) -> Result<(), StorageError> {
        let mut complaints = self.get_complaints()?;
        complaints.push(complaint.clone());
        self.write(COMPLAINTS_KEY, &complaints)
    }

    /// Overwrite the status of complaint `id` in place.
    ///
    /// Position and every other field are preserved. Returns `false`, without
    /// writing, if no complaint has that id.
    pub fn update_complaint_status(
        &self,
        id: &str,
        status: ComplaintStatus,
    ) -> Result<bool, StorageError> {
        let mut complaints = self.get_complaints()?;
        let Some(complaint) = complaints.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        complaint.status = status;
        self.write(COMPLAINTS_KEY, &complaints)?;
        Ok(true)
    }

    pub fn find_complaint(&self, id: &str) -> Result<Option<Complaint>, StorageError> {
        Ok(self.get_complaints()?.into_iter().find(|c| c.id == id))
    }

    /// Complaints filed by `user_id`, in submission order.
    pub fn complaints_for_user(&self, user_id: &str) -> Result<Vec<Complaint>, StorageError> {
        Ok(self
            .get_complaints()?
            .into_iter()
            .filter(|c| c.belongs_to(user_id))
            .collect())
    }
}
