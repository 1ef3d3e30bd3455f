//! The appointment store.
//!
//! An ordered in-memory collection of booking requests, mirrored to a single
//! JSON snapshot file on every mutation and reloaded once at startup. The
//! store is the exclusive owner of the collection; views get read-only
//! snapshots for rendering.
//!
//! Every mutation rewrites the whole snapshot. That is O(n) per call, which
//! is fine at this scale (dozens of records, not millions).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::models::{Appointment, AppointmentDraft, AppointmentStatus};

/// Ordered collection of appointments with full-snapshot persistence.
pub struct AppointmentStore {
    path: PathBuf,
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    /// Open the store, loading the snapshot at `path` if one exists.
    ///
    /// A missing snapshot means an empty store. A snapshot that exists but
    /// cannot be parsed is set aside as `<path>.corrupt` and the store
    /// starts empty; booking requests are a convenience cache, so starting
    /// over is recoverable where refusing to start would not be.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let appointments = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(records) => records,
                Err(_) => {
                    let mut quarantine = path.clone().into_os_string();
                    quarantine.push(".corrupt");
                    fs::rename(&path, PathBuf::from(quarantine))?;
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Ok(AppointmentStore { path, appointments })
    }

    /// Read-only view of the whole collection, in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// All records still awaiting staff action, in insertion order.
    pub fn list_pending(&self) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .cloned()
            .collect()
    }

    /// Number of pending records, the counter shown on the dashboard.
    pub fn pending_count(&self) -> usize {
        self.appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .count()
    }

    /// Create a record from a draft, append it and persist.
    ///
    /// The record gets a fresh UUID id, `status = pending` and a creation
    /// timestamp; it is returned after the snapshot write succeeds.
    pub fn add(&mut self, draft: AppointmentDraft) -> Result<Appointment, StoreError> {
        let appointment = Appointment::from_draft(draft);
        self.appointments.push(appointment.clone());
        self.persist()?;
        Ok(appointment)
    }

    /// Remove the record with the given id and persist.
    ///
    /// Returns whether a record was actually removed. An absent id is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.appointments.len();
        self.appointments.retain(|a| a.id != id);

        if self.appointments.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flag the record with the given id as done, retaining it, and persist.
    ///
    /// Returns whether a record matched. This is the history-keeping
    /// alternative to `remove`; the dashboard's default action deletes.
    pub fn mark_done(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        appointment.status = AppointmentStatus::Done;
        self.persist()?;
        Ok(true)
    }

    /// Rewrite the full snapshot.
    ///
    /// Writes to a sibling temp file and renames over the snapshot so a
    /// crash mid-write cannot leave a truncated file behind.
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.appointments)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;
    use tempfile::tempdir;

    fn draft(name: &str) -> AppointmentDraft {
        AppointmentDraft::new(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            "555-0100".to_string(),
            Service::Audiology,
            "2026-01-10".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn open_without_snapshot_starts_empty() {
        let dir = tempdir().unwrap();
        let store = AppointmentStore::open(dir.path().join("appointments.json")).unwrap();
        assert!(store.appointments().is_empty());
    }

    #[test]
    fn add_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let added = {
            let mut store = AppointmentStore::open(&path).unwrap();
            store.add(draft("Jane Doe")).unwrap()
        };

        // Simulated restart: a fresh store reads the same snapshot.
        let store = AppointmentStore::open(&path).unwrap();
        assert_eq!(store.appointments(), &[added.clone()]);
        assert_eq!(added.status, AppointmentStatus::Pending);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let mut store = AppointmentStore::open(&path).unwrap();
        let a = store.add(draft("Alice")).unwrap();
        let b = store.add(draft("Bob")).unwrap();
        let c = store.add(draft("Carol")).unwrap();

        let ids: Vec<&str> = store.appointments().iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);

        let store = AppointmentStore::open(&path).unwrap();
        let ids: Vec<&str> = store.appointments().iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn remove_deletes_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let mut store = AppointmentStore::open(&path).unwrap();
        store.add(draft("Alice")).unwrap();
        let b = store.add(draft("Bob")).unwrap();
        store.add(draft("Carol")).unwrap();

        assert!(store.remove(&b.id).unwrap());
        assert_eq!(store.appointments().len(), 2);
        assert!(store.appointments().iter().all(|a| a.id != b.id));

        let store = AppointmentStore::open(&path).unwrap();
        assert_eq!(store.appointments().len(), 2);
        assert!(store.appointments().iter().all(|a| a.id != b.id));
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let dir = tempdir().unwrap();
        let mut store = AppointmentStore::open(dir.path().join("appointments.json")).unwrap();
        store.add(draft("Alice")).unwrap();

        assert!(!store.remove("no-such-id").unwrap());
        assert_eq!(store.appointments().len(), 1);
    }

    #[test]
    fn mark_done_retains_the_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");

        let mut store = AppointmentStore::open(&path).unwrap();
        let a = store.add(draft("Alice")).unwrap();
        store.add(draft("Bob")).unwrap();

        assert!(store.mark_done(&a.id).unwrap());
        assert!(!store.mark_done("no-such-id").unwrap());

        assert_eq!(store.appointments().len(), 2);
        assert_eq!(store.pending_count(), 1);
        assert_eq!(store.list_pending()[0].patient_name, "Bob");

        let store = AppointmentStore::open(&path).unwrap();
        assert_eq!(store.appointments()[0].status, AppointmentStatus::Done);
    }

    #[test]
    fn malformed_snapshot_is_quarantined_and_store_starts_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        fs::write(&path, "not json {").unwrap();

        let store = AppointmentStore::open(&path).unwrap();
        assert!(store.appointments().is_empty());
        assert!(dir.path().join("appointments.json.corrupt").exists());
    }

    #[test]
    fn booking_scenario_end_to_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appointments.json");
        let mut store = AppointmentStore::open(&path).unwrap();

        let before = chrono::Utc::now().timestamp_millis();
        let record = store
            .add(
                AppointmentDraft::new(
                    "Jane Doe".to_string(),
                    "jane@x.com".to_string(),
                    "555".to_string(),
                    Service::Audiology,
                    "2026-01-10".to_string(),
                )
                .unwrap(),
            )
            .unwrap();
        let after = chrono::Utc::now().timestamp_millis();

        assert!(!record.id.is_empty());
        assert_eq!(record.status, AppointmentStatus::Pending);
        assert!(record.created_at >= before && record.created_at <= after);
        assert_eq!(store.pending_count(), 1);

        assert!(store.remove(&record.id).unwrap());
        assert!(store.appointments().is_empty());
    }
}
