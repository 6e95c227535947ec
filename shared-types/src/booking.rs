use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Service;

/// A confirmed service appointment. Created only by a successful form
/// submission, never mutated or deleted afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: Service,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum BookingError {
    #[error("Please fill out all fields and select a date and time.")]
    MissingFields,
}

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp kept strictly monotonic within the session, so a
/// rapid double-submit cannot hand out the same id twice.
fn next_booking_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    loop {
        let last = LAST_ID.load(Ordering::SeqCst);
        let id = now.max(last + 1);
        if LAST_ID
            .compare_exchange(last, id, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return id;
        }
    }
}

/// Pending form input, not yet a Booking until `submit` accepts it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<Service>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingDraft {
    /// Rejects with one user-facing message when any required field is
    /// missing; otherwise mints a Booking with a fresh id.
    pub fn submit(self) -> Result<Booking, BookingError> {
        if self.first_name.is_empty() || self.last_name.is_empty() || self.email.is_empty() {
            return Err(BookingError::MissingFields);
        }
        let (Some(service), Some(date), Some(time)) = (self.service, self.date, self.time) else {
            return Err(BookingError::MissingFields);
        };
        let phone = if self.phone.trim().is_empty() {
            None
        } else {
            Some(self.phone)
        };
        Ok(Booking {
            id: next_booking_id(),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone,
            service,
            date,
            time,
        })
    }
}

/// Append-only, insertion-ordered list of the session's confirmed bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Case-insensitive exact match on the stored email. No trimming, no
    /// partial match. An empty result is a normal outcome.
    pub fn find_by_email(&self, query: &str) -> Vec<Booking> {
        let query = query.to_lowercase();
        self.bookings
            .iter()
            .filter(|booking| booking.email.to_lowercase() == query)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_service;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn full_draft() -> BookingDraft {
        BookingDraft {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            service: find_service("general-tire-repair"),
            date: Some(date(2027, 6, 14)),
            time: Some("10:30 AM".to_string()),
        }
    }

    #[test]
    fn submit_rejects_any_missing_required_field() {
        let blank_first = BookingDraft {
            first_name: String::new(),
            ..full_draft()
        };
        let blank_last = BookingDraft {
            last_name: String::new(),
            ..full_draft()
        };
        let blank_email = BookingDraft {
            email: String::new(),
            ..full_draft()
        };
        let no_service = BookingDraft {
            service: None,
            ..full_draft()
        };
        let no_date = BookingDraft {
            date: None,
            ..full_draft()
        };
        let no_time = BookingDraft {
            time: None,
            ..full_draft()
        };
        for draft in [blank_first, blank_last, blank_email, no_service, no_date, no_time] {
            assert_eq!(draft.submit(), Err(BookingError::MissingFields));
        }
    }

    #[test]
    fn missing_phone_is_not_an_error() {
        let booking = full_draft().submit().unwrap();
        assert_eq!(booking.phone, None);

        let with_phone = BookingDraft {
            phone: "613-123-4567".to_string(),
            ..full_draft()
        };
        let booking = with_phone.submit().unwrap();
        assert_eq!(booking.phone.as_deref(), Some("613-123-4567"));
    }

    #[test]
    fn submit_carries_the_chosen_service_and_slots() {
        let booking = full_draft().submit().unwrap();
        assert_eq!(booking.service.name, "General Tire Repair");
        assert_eq!(booking.service.price, 25);
        assert_eq!(booking.date, date(2027, 6, 14));
        assert_eq!(booking.time, "10:30 AM");
    }

    #[test]
    fn ids_strictly_increase_even_within_one_millisecond() {
        let ids: Vec<i64> = (0..50).map(|_| full_draft().submit().unwrap().id).collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "{} then {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn error_message_is_the_user_facing_string() {
        assert_eq!(
            BookingError::MissingFields.to_string(),
            "Please fill out all fields and select a date and time."
        );
    }

    #[test]
    fn store_appends_in_insertion_order() {
        let mut store = BookingStore::new();
        assert!(store.is_empty());
        let first = full_draft().submit().unwrap();
        let second = BookingDraft {
            email: "sam@y.org".to_string(),
            ..full_draft()
        }
        .submit()
        .unwrap();
        store.append(first.clone());
        store.append(second.clone());
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_email("jane@x.com"), vec![first]);
        assert_eq!(store.find_by_email("sam@y.org"), vec![second]);
    }

    #[test]
    fn lookup_is_case_insensitive_exact_match() {
        let mut store = BookingStore::new();
        let booking = BookingDraft {
            email: "a@b.com".to_string(),
            ..full_draft()
        }
        .submit()
        .unwrap();
        store.append(booking.clone());
        assert_eq!(store.find_by_email("A@B.com"), vec![booking.clone()]);
        // no trimming, no partial match
        assert!(store.find_by_email(" a@b.com").is_empty());
        assert!(store.find_by_email("a@b").is_empty());
    }

    #[test]
    fn lookup_on_empty_store_returns_empty() {
        assert!(BookingStore::new().find_by_email("jane@x.com").is_empty());
    }
}
