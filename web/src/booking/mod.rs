pub mod form;
pub mod schedule;

pub use form::{BookingError, BookingForm, SubmitOutcome};
