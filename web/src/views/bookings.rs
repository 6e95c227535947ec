use leptos::prelude::*;
use shared_types::calendar::format_date_short;
use shared_types::Booking;
use thaw::*;

use crate::session::BookingSession;

#[component]
pub fn BookingLookupPage() -> impl IntoView {
    let session = BookingSession::expect();

    let email = RwSignal::new(String::new());
    let found_bookings = RwSignal::new(Vec::<Booking>::new());
    // distinguishes "not searched yet" from "searched, zero results"
    let searched = RwSignal::new(false);

    view! {
        <div class="page-container">
            <div class="card lookup-card">
                <h2 class="page-title">"Find Your Bookings"</h2>
                <p class="lookup-hint">"Please enter your email to see your bookings."</p>
                <div class="lookup-controls">
                    <Input
                        id="lookup-email"
                        input_type=InputType::Email
                        placeholder="your.email@example.com"
                        value=email
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            found_bookings.set(session.find_by_email(&email.get()));
                            searched.set(true);
                        }
                    >
                        "Find"
                    </Button>
                </div>
            </div>

            {move || {
                if !searched.get() {
                    return view! {}.into_any();
                }
                let bookings = found_bookings.get();
                if bookings.is_empty() {
                    view! {
                        <p class="lookup-empty">"No bookings found for that email address."</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="lookup-results">
                            <h3>"Your Upcoming Appointments:"</h3>
                            {bookings
                                .into_iter()
                                .map(|booking| {
                                    view! {
                                        <div class="card booking-card">
                                            <p>
                                                <strong>"Service: "</strong>
                                                {booking.service.name.clone()}
                                            </p>
                                            <p>
                                                <strong>"Date: "</strong>
                                                {format!(
                                                    "{} at {}",
                                                    format_date_short(booking.date),
                                                    booking.time,
                                                )}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
