//! The submission store: one table per entity kind
//!
//! Constructed once at process start and shared behind an `Arc`. The three
//! tables are independent; nothing coordinates across them.

use crate::table::Table;
use sunrise_core::{
    EntityKind, NewBooking, NewCalculatorSubmission, NewContact, StorageError, StoredRecord,
    Submission, ValidatedRecord,
};

/// Options for building a [`SubmissionStore`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Maximum records per table; `None` means unbounded
    pub max_records_per_table: Option<usize>,
}

impl StoreOptions {
    /// Default options (unbounded tables)
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap every table at `limit` records
    pub fn max_records_per_table(mut self, limit: usize) -> Self {
        self.max_records_per_table = Some(limit);
        self
    }
}

/// In-process store of accepted submissions
///
/// Process-lifetime only: restarting the process empties every table.
pub struct SubmissionStore {
    contacts: Table<NewContact>,
    bookings: Table<NewBooking>,
    calculators: Table<NewCalculatorSubmission>,
}

impl SubmissionStore {
    /// Create an empty store with unbounded tables
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        fn build_table<S: Submission>(limit: Option<usize>) -> Table<S> {
            match limit {
                Some(limit) => Table::with_limit(limit),
                None => Table::new(),
            }
        }

        let limit = options.max_records_per_table;
        Self {
            contacts: build_table(limit),
            bookings: build_table(limit),
            calculators: build_table(limit),
        }
    }

    /// Contact table
    pub fn contacts(&self) -> &Table<NewContact> {
        &self.contacts
    }

    /// Booking table
    pub fn bookings(&self) -> &Table<NewBooking> {
        &self.bookings
    }

    /// Calculator table
    pub fn calculators(&self) -> &Table<NewCalculatorSubmission> {
        &self.calculators
    }

    /// Typed table access
    pub fn table<S: StoredIn>(&self) -> &Table<S> {
        S::table(self)
    }

    // ========================================================================
    // Kind-dispatched operations
    // ========================================================================

    /// Store a validated record of any kind
    pub fn create(&self, record: ValidatedRecord) -> Result<StoredRecord, StorageError> {
        Ok(match record {
            ValidatedRecord::Contact(input) => self.contacts.create(input)?.into(),
            ValidatedRecord::Booking(input) => self.bookings.create(input)?.into(),
            ValidatedRecord::Calculator(input) => self.calculators.create(input)?.into(),
        })
    }

    /// Every record held for `kind`
    ///
    /// Ordering is not part of the contract.
    pub fn list_all(&self, kind: EntityKind) -> Result<Vec<StoredRecord>, StorageError> {
        Ok(match kind {
            EntityKind::Contact => erase(self.contacts.list_all()),
            EntityKind::Booking => erase(self.bookings.list_all()),
            EntityKind::Calculator => erase(self.calculators.list_all()),
        })
    }

    /// Number of records held for `kind`
    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Contact => self.contacts.len(),
            EntityKind::Booking => self.bookings.len(),
            EntityKind::Calculator => self.calculators.len(),
        }
    }

    /// Total records across all tables
    pub fn total_records(&self) -> usize {
        EntityKind::ALL.iter().map(|kind| self.len(*kind)).sum()
    }
}

fn erase<R: Into<StoredRecord>>(records: Vec<R>) -> Vec<StoredRecord> {
    records.into_iter().map(Into::into).collect()
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SubmissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionStore")
            .field("contacts", &self.contacts.len())
            .field("bookings", &self.bookings.len())
            .field("calculators", &self.calculators.len())
            .finish()
    }
}

/// Locates the table that holds a submission type
pub trait StoredIn: Submission + Sized {
    /// The table for `Self` inside `store`
    fn table(store: &SubmissionStore) -> &Table<Self>;
}

impl StoredIn for NewContact {
    fn table(store: &SubmissionStore) -> &Table<Self> {
        &store.contacts
    }
}

impl StoredIn for NewBooking {
    fn table(store: &SubmissionStore) -> &Table<Self> {
        &store.bookings
    }
}

impl StoredIn for NewCalculatorSubmission {
    fn table(store: &SubmissionStore) -> &Table<Self> {
        &store.calculators
    }
}
