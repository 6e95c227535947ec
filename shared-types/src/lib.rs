pub mod booking;
pub mod calendar;
pub mod catalog;

// Re-export commonly used types
pub use booking::{Booking, BookingDraft, BookingError, BookingStore};
pub use calendar::CalendarSelection;
pub use catalog::{bike_services, find_service, Service, AVAILABLE_TIMES};
