pub mod calendar_grid;
pub mod navbar;
pub mod time_slot_picker;

// Re-export commonly used components
pub use calendar_grid::CalendarGrid;
pub use navbar::Navbar;
pub use time_slot_picker::TimeSlotPicker;
