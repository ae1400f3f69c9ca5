//! Typed records for the principal backend collections.
//!
//! The resource client itself treats items opaquely; these types are a
//! convenience for consumers that want typed results for the collections
//! the portals actually render. Fields the backend omits in partial
//! payloads default to `None`.

mod alerts;
mod appointments;
mod devices;
mod messages;
mod users;
mod vitals;

pub use alerts::{Alert, AlertCategory, AlertKind, AlertPriority, AlertStatus};
pub use appointments::{Appointment, AppointmentKind, AppointmentStatus};
pub use devices::{Device, DeviceKind, DeviceStatus};
pub use messages::Message;
pub use users::{User, UserStatus};
pub use vitals::{Measurement, MeasurementStatus, VitalSigns};
