//! Test doubles for the driven ports used by the behaviour suites.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use backend::domain::ports::{InvoiceRepository, InvoiceRepositoryError};
use backend::domain::{InvoiceId, InvoiceRecord};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// One statement observed by [`RecordingInvoiceRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InvoiceWrite {
    Insert(InvoiceRecord),
    Update(String, InvoiceRecord),
    Delete(String),
}

/// Invoice repository that records every write and can be told to fail.
#[derive(Clone, Default)]
pub(crate) struct RecordingInvoiceRepository {
    calls: Arc<Mutex<Vec<InvoiceWrite>>>,
    failing: Arc<Mutex<bool>>,
}

impl RecordingInvoiceRepository {
    pub(crate) fn calls(&self) -> Vec<InvoiceWrite> {
        self.calls.lock().expect("invoice calls lock").clone()
    }

    pub(crate) fn fail_writes(&self) {
        *self.failing.lock().expect("invoice failing lock") = true;
    }

    fn record(&self, call: InvoiceWrite) -> Result<(), InvoiceRepositoryError> {
        self.calls.lock().expect("invoice calls lock").push(call);
        if *self.failing.lock().expect("invoice failing lock") {
            return Err(InvoiceRepositoryError::connection("database unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl InvoiceRepository for RecordingInvoiceRepository {
    async fn insert(&self, record: &InvoiceRecord) -> Result<(), InvoiceRepositoryError> {
        self.record(InvoiceWrite::Insert(record.clone()))
    }

    async fn update(
        &self,
        id: &InvoiceId,
        record: &InvoiceRecord,
    ) -> Result<(), InvoiceRepositoryError> {
        self.record(InvoiceWrite::Update(id.as_ref().to_owned(), record.clone()))
    }

    async fn delete(&self, id: &InvoiceId) -> Result<(), InvoiceRepositoryError> {
        self.record(InvoiceWrite::Delete(id.as_ref().to_owned()))
    }
}

/// Clock pinned to a single instant.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
