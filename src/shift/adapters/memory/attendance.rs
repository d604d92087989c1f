//! In-memory attendance record repository with atomic batch insert.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::shift::{
    domain::{AttendanceRecord, AttendanceRecordId, JobId, WorkerId},
    error::RepositoryError,
    ports::{AttendanceRepository, RepositoryResult},
};

/// Thread-safe in-memory attendance repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceRepository {
    state: Arc<RwLock<InMemoryAttendanceState>>,
}

#[derive(Debug, Default)]
struct InMemoryAttendanceState {
    records: HashMap<AttendanceRecordId, AttendanceRecord>,
    date_index: HashSet<(JobId, WorkerId, NaiveDate)>,
}

impl InMemoryAttendanceRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, InMemoryAttendanceState>> {
        self.state
            .read()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, InMemoryAttendanceState>> {
        self.state
            .write()
            .map_err(|err| RepositoryError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl AttendanceRepository for InMemoryAttendanceRepository {
    async fn store_batch(&self, records: &[AttendanceRecord]) -> RepositoryResult<()> {
        let mut state = self.write()?;

        // Validate the whole batch before touching the state so the
        // insert stays all-or-nothing.
        for record in records {
            let key = (record.job_id(), record.worker_id(), record.date());
            if state.date_index.contains(&key) {
                return Err(RepositoryError::DuplicateAttendanceRecord {
                    job_id: record.job_id(),
                    worker_id: record.worker_id(),
                    date: record.date(),
                });
            }
        }

        for record in records {
            state
                .date_index
                .insert((record.job_id(), record.worker_id(), record.date()));
            state.records.insert(record.id(), record.clone());
        }
        Ok(())
    }

    async fn update(&self, record: &AttendanceRecord) -> RepositoryResult<()> {
        let mut state = self.write()?;
        if !state.records.contains_key(&record.id()) {
            return Err(RepositoryError::AttendanceRecordNotFound(record.id()));
        }
        state.records.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: AttendanceRecordId,
    ) -> RepositoryResult<Option<AttendanceRecord>> {
        let state = self.read()?;
        Ok(state.records.get(&id).cloned())
    }

    async fn list_by_assignment(
        &self,
        job_id: JobId,
        worker_id: WorkerId,
    ) -> RepositoryResult<Vec<AttendanceRecord>> {
        let state = self.read()?;
        let mut records: Vec<AttendanceRecord> = state
            .records
            .values()
            .filter(|record| record.job_id() == job_id && record.worker_id() == worker_id)
            .cloned()
            .collect();
        records.sort_by_key(AttendanceRecord::date);
        Ok(records)
    }

    async fn delete_by_assignment(
        &self,
        job_id: JobId,
        worker_id: WorkerId,
    ) -> RepositoryResult<u32> {
        let mut state = self.write()?;
        let doomed: Vec<AttendanceRecordId> = state
            .records
            .values()
            .filter(|record| record.job_id() == job_id && record.worker_id() == worker_id)
            .map(AttendanceRecord::id)
            .collect();
        for id in &doomed {
            if let Some(record) = state.records.remove(id) {
                state
                    .date_index
                    .remove(&(record.job_id(), record.worker_id(), record.date()));
            }
        }
        Ok(u32::try_from(doomed.len()).unwrap_or(u32::MAX))
    }
}
