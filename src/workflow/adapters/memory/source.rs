//! In-memory task source for tests and demos.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::workflow::{
    domain::{BusinessId, TaskRecord},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory task source.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    rows: Arc<RwLock<Vec<TaskRecord>>>,
}

impl InMemoryTaskSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source seeded with the given rows.
    #[must_use]
    pub fn with_rows(rows: impl IntoIterator<Item = TaskRecord>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows.into_iter().collect())),
        }
    }

    /// Creates a source from a JSON array in the remote row shape.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Decode`] when the payload is not a valid
    /// array of task rows.
    pub fn from_json(payload: &str) -> TaskSourceResult<Self> {
        let rows: Vec<TaskRecord> = serde_json::from_str(payload)?;
        Ok(Self::with_rows(rows))
    }

    /// Replaces the stored rows with a new snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Backend`] when the row store is poisoned.
    pub fn replace(&self, rows: impl IntoIterator<Item = TaskRecord>) -> TaskSourceResult<()> {
        let mut guard = self
            .rows
            .write()
            .map_err(|err| TaskSourceError::backend(std::io::Error::other(err.to_string())))?;
        *guard = rows.into_iter().collect();
        Ok(())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn fetch_tasks(&self, scope: Option<BusinessId>) -> TaskSourceResult<Vec<TaskRecord>> {
        let guard = self
            .rows
            .read()
            .map_err(|err| TaskSourceError::backend(std::io::Error::other(err.to_string())))?;
        Ok(guard
            .iter()
            .filter(|row| scope.is_none_or(|business| row.business_id == business))
            .cloned()
            .collect())
    }
}
