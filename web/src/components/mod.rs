pub mod booking_calendar;
pub mod booking_modal;
pub mod time_slot_picker;

// Re-export commonly used types
pub use booking_calendar::BookingCalendar;
pub use booking_modal::BookingModal;
pub use time_slot_picker::TimeSlotPicker;
