use leptos::prelude::*;
use shared_types::{Booking, BookingStore};

/// Session-wide booking state, provided once at the app root and gone on
/// reload. `confirm` is the sole producer of new Booking records: it appends
/// to the store and remembers the record for the confirmation view.
#[derive(Clone, Copy)]
pub struct BookingSession {
    store: RwSignal<BookingStore>,
    last_confirmed: RwSignal<Option<Booking>>,
}

impl BookingSession {
    pub fn provide() {
        provide_context(Self {
            store: RwSignal::new(BookingStore::new()),
            last_confirmed: RwSignal::new(None),
        });
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn confirm(&self, booking: Booking) {
        self.store.update(|store| store.append(booking.clone()));
        self.last_confirmed.set(Some(booking));
    }

    pub fn last_confirmed(&self) -> Option<Booking> {
        self.last_confirmed.get()
    }

    pub fn find_by_email(&self, query: &str) -> Vec<Booking> {
        self.store.with(|store| store.find_by_email(query))
    }
}
