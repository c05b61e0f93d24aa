//! Contacts repository.

use std::sync::Arc;

use crate::dataset::{ContactBook, Dataset};

/// Read access to the contacts page content.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    dataset: Arc<Dataset>,
}

impl ContactRepository {
    /// Create a new contact repository.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// The full contact book.
    pub fn book(&self) -> &ContactBook {
        self.dataset.contacts()
    }
}
