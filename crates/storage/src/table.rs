//! Append-only submission table
//!
//! One table per entity kind. Records are keyed by their generated id in a
//! DashMap (sharded, lock-free reads) with an FxHash hasher.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, lock-free reads
//! - FxHasher: fast non-crypto hash over random UUID keys
//! - Clock: mutex-guarded (sequence, createdAt) issuer; creates are serialized
//!   through it so createdAt never decreases along the sequence
//!
//! # Guarantees
//!
//! - Ids are never reused within a table
//! - A record becomes visible only once fully built (single map insert)
//! - No update or delete exists

use dashmap::DashMap;
use parking_lot::Mutex;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use sunrise_core::{EntityKind, RecordId, StorageError, Submission, Timestamp};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// A stored record plus its insertion sequence
#[derive(Debug, Clone)]
struct Row<R> {
    seq: u64,
    record: R,
}

/// Issues (sequence, createdAt) pairs
///
/// The wall clock can step backwards (NTP adjustments); createdAt is
/// clamped to the last issued value so it stays non-decreasing.
#[derive(Debug, Default)]
struct Clock {
    seq: u64,
    last: Option<Timestamp>,
}

impl Clock {
    fn tick(&mut self) -> (u64, Timestamp) {
        let now = Timestamp::now();
        let stamp = match self.last {
            Some(prev) if prev > now => prev,
            _ => now,
        };
        self.seq += 1;
        self.last = Some(stamp);
        (self.seq, stamp)
    }
}

/// Append-only table of one submission kind
///
/// # Thread Safety
///
/// All operations take `&self`:
/// - create(): serialized through the table clock, one map insert
/// - list_all() / get(): lock-free reads via DashMap
/// - Different tables never contend
///
/// # Example
///
/// ```ignore
/// use sunrise_storage::Table;
/// use sunrise_core::NewContact;
///
/// let table: Table<NewContact> = Table::new();
/// let contact = table.create(input)?;
/// assert_eq!(table.len(), 1);
/// ```
pub struct Table<S: Submission> {
    rows: DashMap<RecordId, Row<S::Record>, FxBuildHasher>,
    clock: Mutex<Clock>,
    limit: Option<usize>,
}

impl<S: Submission> Table<S> {
    /// Create an unbounded table
    pub fn new() -> Self {
        Self {
            rows: DashMap::with_hasher(FxBuildHasher::default()),
            clock: Mutex::new(Clock::default()),
            limit: None,
        }
    }

    /// Create a table that refuses inserts beyond `limit` records
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Entity kind stored here
    #[inline]
    pub fn kind(&self) -> EntityKind {
        S::KIND
    }

    /// Configured record limit, if any
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sequence number of the most recent insert (0 when empty)
    pub fn version(&self) -> u64 {
        self.clock.lock().seq
    }

    // ========================================================================
    // Create / Read
    // ========================================================================

    /// Insert a validated input and return the stored record
    ///
    /// Generates a fresh id, stamps createdAt and inserts in one step.
    ///
    /// # Errors
    ///
    /// `StorageError::CapacityExceeded` if the table is at its limit.
    pub fn create(&self, input: S) -> Result<S::Record, StorageError> {
        let mut clock = self.clock.lock();

        if let Some(limit) = self.limit {
            if self.rows.len() >= limit {
                return Err(StorageError::CapacityExceeded {
                    kind: S::KIND,
                    limit,
                });
            }
        }

        let id = self.fresh_id();
        let (seq, created_at) = clock.tick();
        let record = input.into_record(id, created_at);
        self.rows.insert(
            id,
            Row {
                seq,
                record: record.clone(),
            },
        );
        drop(clock);

        let kind = S::KIND;
        tracing::trace!(entity = %kind, %id, seq, "row inserted");
        Ok(record)
    }

    /// Get a record by id
    #[inline]
    pub fn get(&self, id: &RecordId) -> Option<S::Record> {
        self.rows.get(id).map(|row| row.record.clone())
    }

    /// Check if an id is present
    #[inline]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.rows.contains_key(id)
    }

    /// Every record currently held
    ///
    /// Returned in insertion order. Callers should not rely on that: a
    /// concurrent create may or may not appear in a given snapshot.
    pub fn list_all(&self) -> Vec<S::Record> {
        let mut rows: Vec<(u64, S::Record)> = self
            .rows
            .iter()
            .map(|entry| (entry.seq, entry.record.clone()))
            .collect();
        rows.sort_unstable_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, record)| record).collect()
    }

    // Uuid v4 collisions are not expected; the check keeps the
    // never-reused guarantee unconditional.
    fn fresh_id(&self) -> RecordId {
        loop {
            let id = RecordId::new();
            if !self.rows.contains_key(&id) {
                return id;
            }
        }
    }
}

impl<S: Submission> Default for Table<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Submission> std::fmt::Debug for Table<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("kind", &S::KIND)
            .field("len", &self.len())
            .field("limit", &self.limit)
            .finish()
    }
}
