use chrono::Local;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::catalog::DEFAULT_SERVICE_ID;
use shared_types::{bike_services, find_service, BookingDraft, CalendarSelection};
use thaw::*;

use crate::components::{CalendarGrid, TimeSlotPicker};
use crate::session::BookingSession;

#[component]
pub fn BookingPage() -> impl IntoView {
    let session = BookingSession::expect();
    let navigate = use_navigate();

    // Form state
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let service_id = RwSignal::new(DEFAULT_SERVICE_ID.to_string());
    let error = RwSignal::new(None::<String>);

    // Calendar state
    let calendar = RwSignal::new(CalendarSelection::starting_at(Local::now().date_naive()));

    let handle_submit = {
        let navigate = navigate.clone();
        move || {
            let draft = BookingDraft {
                first_name: first_name.get(),
                last_name: last_name.get(),
                email: email.get(),
                phone: phone.get(),
                service: find_service(&service_id.get()),
                date: calendar.with(|sel| sel.selected_date),
                time: calendar.with(|sel| sel.selected_time.clone()),
            };
            match draft.submit() {
                Ok(booking) => {
                    error.set(None);
                    session.confirm(booking);
                    navigate("/confirmation", Default::default());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        }
    };

    view! {
        <div class="page-container">
            <h2 class="page-title">"Book a Bike Repair"</h2>

            <form on:submit=move |ev| {
                ev.prevent_default();
                handle_submit();
            }>
                <div class="booking-columns">
                    // Left column: user details
                    <div class="card booking-details">
                        <h3 class="form-section-title">"Your Details"</h3>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="first-name">"First Name"</label>
                                <Input id="first-name" value=first_name/>
                            </div>
                            <div class="form-group">
                                <label for="last-name">"Last Name"</label>
                                <Input id="last-name" value=last_name/>
                            </div>
                        </div>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <Input id="email" input_type=InputType::Email value=email/>
                        </div>
                        <div class="form-group">
                            <label for="phone">"Phone # (Optional)"</label>
                            <Input id="phone" value=phone/>
                        </div>
                        <div class="form-group">
                            <label for="service">"Service"</label>
                            <select
                                id="service"
                                class="form-input"
                                prop:value=move || service_id.get()
                                on:change=move |ev| {
                                    service_id.set(event_target_value(&ev));
                                }
                            >
                                {bike_services()
                                    .into_iter()
                                    .map(|service| {
                                        view! {
                                            <option value=service.id.clone()>{service.label()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </div>
                    </div>

                    // Right column: calendar and time
                    <div class="card booking-schedule">
                        <CalendarGrid calendar/>
                        <TimeSlotPicker calendar/>
                    </div>
                </div>

                <div class="booking-actions">
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <p class="form-error">{message}</p> })
                    }}
                    <div class="booking-buttons">
                        <button
                            type="button"
                            class="btn-secondary"
                            on:click={
                                let navigate = navigate.clone();
                                move |_| {
                                    navigate("/", Default::default());
                                }
                            }
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">
                            "Book Now"
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
