use leptos::prelude::*;
use shared_types::calendar::{self, CalendarSelection};
use shared_types::AVAILABLE_TIMES;

#[component]
pub fn TimeSlotPicker(calendar: RwSignal<CalendarSelection>) -> impl IntoView {
    view! {
        <div class="time-slot-picker">
            {move || match calendar.with(|sel| sel.selected_date) {
                None => view! {
                    <p class="time-slot-picker-subtitle">"Please select a date first"</p>
                }
                .into_any(),
                Some(date) => view! {
                    <div class="time-slot-picker-content">
                        <h4 class="time-slot-picker-header">
                            {format!("Available Times for {}", calendar::format_date_short(date))}
                        </h4>
                        <div class="time-slot-picker-grid">
                            {AVAILABLE_TIMES
                                .iter()
                                .map(|time| {
                                    let time = *time;
                                    let is_chosen = move || {
                                        calendar.with(|sel| sel.selected_time.as_deref() == Some(time))
                                    };
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if is_chosen() {
                                                    "time-slot-button chosen"
                                                } else {
                                                    "time-slot-button"
                                                }
                                            }
                                            on:click=move |_| {
                                                calendar.update(|sel| sel.select_time(time))
                                            }
                                        >
                                            {time}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
