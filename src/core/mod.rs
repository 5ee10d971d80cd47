pub mod booking;
pub mod confirmation;
pub mod contact;
pub mod submission;
pub mod validation;

pub use crate::domain::model::{
    BookingField, BookingFieldUpdate, BookingRequest, ContactField, ContactFieldUpdate,
    ContactRequest, FieldErrors, NormalizedContactRequest,
};
pub use crate::domain::ports::{FormRelay, Navigator, NotificationKind, Notifier, RelayResponse};
pub use crate::utils::error::Result;
