//! Data models for the clinic booking core.
//!
//! This module defines the structures shared by the booking form and the
//! staff dashboard:
//! - Service: the closed set of clinic services a patient can book
//! - AppointmentStatus: lifecycle state of a stored record
//! - AppointmentDraft: validated form input, before system-assigned fields
//! - Appointment: a stored booking request

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BookingError;

/// Services offered by the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "Audiology")]
    Audiology,
    #[serde(rename = "Sinus & Allergy")]
    SinusAllergy,
    #[serde(rename = "Throat & Voice")]
    ThroatVoice,
}

impl Service {
    /// Convert user-facing input to a Service.
    pub fn from_string(value: &str) -> Result<Self, BookingError> {
        match value.trim().to_lowercase().as_str() {
            "audiology" => Ok(Service::Audiology),
            "sinus & allergy" | "sinus and allergy" => Ok(Service::SinusAllergy),
            "throat & voice" | "throat and voice" => Ok(Service::ThroatVoice),
            _ => Err(BookingError::UnknownService(value.trim().to_string())),
        }
    }

    /// Display label, also the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Service::Audiology => "Audiology",
            Service::SinusAllergy => "Sinus & Allergy",
            Service::ThroatVoice => "Throat & Voice",
        }
    }

    /// All offered services, in menu order.
    pub fn all() -> [Service; 3] {
        [
            Service::Audiology,
            Service::SinusAllergy,
            Service::ThroatVoice,
        ]
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of a stored appointment.
///
/// Records are created Pending. The dashboard's default action deletes the
/// record outright when staff finish with it; Done only appears when a
/// caller opts into retaining history via `AppointmentStore::mark_done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Done,
}

/// A patient's booking input, prior to system-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub date: String,
}

impl AppointmentDraft {
    /// Create a new draft with presence-only validation.
    ///
    /// The upstream form enforces required-ness; this mirrors it and does
    /// not inspect field contents any further.
    pub fn new(
        patient_name: String,
        email: String,
        phone: String,
        service: Service,
        date: String,
    ) -> Result<Self, BookingError> {
        if patient_name.trim().is_empty() {
            return Err(BookingError::MissingField("Patient name"));
        }
        if email.trim().is_empty() {
            return Err(BookingError::MissingField("Email"));
        }
        if phone.trim().is_empty() {
            return Err(BookingError::MissingField("Phone"));
        }
        if date.trim().is_empty() {
            return Err(BookingError::MissingField("Date"));
        }

        Ok(AppointmentDraft {
            patient_name,
            email,
            phone,
            service,
            date,
        })
    }
}

/// A stored booking request.
///
/// `id` and `created_at` are assigned once at creation and never change.
/// The snapshot layout uses camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub email: String,
    pub phone: String,
    pub service: Service,
    pub date: String,
    pub status: AppointmentStatus,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

impl Appointment {
    /// Build a record from a draft, assigning id, status and timestamp.
    pub(crate) fn from_draft(draft: AppointmentDraft) -> Self {
        Appointment {
            id: Uuid::new_v4().to_string(),
            patient_name: draft.patient_name,
            email: draft.email,
            phone: draft.phone,
            service: draft.service,
            date: draft.date,
            status: AppointmentStatus::Pending,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_parses_labels_case_insensitively() {
        assert_eq!(
            Service::from_string("Audiology").unwrap(),
            Service::Audiology
        );
        assert_eq!(
            Service::from_string("  sinus & allergy ").unwrap(),
            Service::SinusAllergy
        );
        assert_eq!(
            Service::from_string("Throat and Voice").unwrap(),
            Service::ThroatVoice
        );
        assert!(matches!(
            Service::from_string("Dermatology"),
            Err(BookingError::UnknownService(_))
        ));
    }

    #[test]
    fn service_serializes_as_display_label() {
        let json = serde_json::to_string(&Service::SinusAllergy).unwrap();
        assert_eq!(json, "\"Sinus & Allergy\"");
        let back: Service = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Service::SinusAllergy);
    }

    #[test]
    fn draft_requires_every_field() {
        let draft = AppointmentDraft::new(
            "".to_string(),
            "jane@x.com".to_string(),
            "555".to_string(),
            Service::Audiology,
            "2026-01-10".to_string(),
        );
        assert_eq!(
            draft.unwrap_err(),
            BookingError::MissingField("Patient name")
        );

        let draft = AppointmentDraft::new(
            "Jane Doe".to_string(),
            "jane@x.com".to_string(),
            "555".to_string(),
            Service::Audiology,
            "  ".to_string(),
        );
        assert_eq!(draft.unwrap_err(), BookingError::MissingField("Date"));
    }

    #[test]
    fn appointment_snapshot_keys_are_camel_case() {
        let draft = AppointmentDraft::new(
            "Jane Doe".to_string(),
            "jane@x.com".to_string(),
            "555".to_string(),
            Service::Audiology,
            "2026-01-10".to_string(),
        )
        .unwrap();
        let record = Appointment::from_draft(draft);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["patientName"], "Jane Doe");
        assert_eq!(value["status"], "pending");
        assert!(value["createdAt"].is_i64());
    }
}
