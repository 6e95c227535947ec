use leptos::prelude::*;
use leptos_router::components::A;
use shared_types::calendar::format_date_long;

use crate::session::BookingSession;

#[component]
pub fn BookingConfirmationPage() -> impl IntoView {
    let session = BookingSession::expect();

    view! {
        <div class="page-container">
            {move || match session.last_confirmed() {
                None => view! {
                    <div class="confirmation-missing">
                        <p>"Something went wrong. No booking details found."</p>
                    </div>
                }
                .into_any(),
                Some(booking) => view! {
                    <div class="card confirmation-card">
                        <div class="confirmation-success-icon">"✓"</div>
                        <h2 class="confirmation-title">"Your appointment has been confirmed!"</h2>
                        <p>
                            "Thank you, "
                            <strong>{booking.first_name.clone()}</strong>
                            ". You will receive an email confirmation shortly."
                        </p>

                        <div class="confirmation-summary">
                            <h3>"Appointment Summary:"</h3>
                            <p>
                                <strong>"Service: "</strong>
                                {format!("{} (${})", booking.service.name, booking.service.price)}
                            </p>
                            <p>
                                <strong>"Date: "</strong>
                                {format_date_long(booking.date)}
                            </p>
                            <p>
                                <strong>"Time: "</strong>
                                {booking.time.clone()}
                            </p>
                        </div>

                        <p class="confirmation-note">
                            "You can view your bookings at any time in the "
                            <A href="/bookings">"Your Bookings"</A>
                            " tab."
                        </p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
