//! Booking core for a single-clinic appointment site.
//!
//! Two collaborators make up the core: the [`session::Session`] gate, which
//! classifies the visitor as anonymous, patient or staff, and the
//! [`store::AppointmentStore`], which owns the ordered collection of booking
//! requests and mirrors it to a JSON snapshot on every mutation. Everything
//! else is presentation.

pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{AuthError, BookingError, StoreError};
pub use models::{Appointment, AppointmentDraft, AppointmentStatus, Service};
pub use session::{Role, Session};
pub use store::AppointmentStore;
