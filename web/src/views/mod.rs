pub mod book;
pub mod booking_confirmation;
pub mod bookings;
pub mod contact;
pub mod home;
pub mod not_found;

pub use book::BookingPage;
pub use booking_confirmation::BookingConfirmationPage;
pub use bookings::BookingLookupPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
