use chrono::{Datelike, Local};
use leptos::prelude::*;
use shared_types::calendar::{self, CalendarSelection, WEEKDAY_LABELS};
use thaw::*;

#[component]
pub fn CalendarGrid(calendar: RwSignal<CalendarSelection>) -> impl IntoView {
    let month_heading = move || calendar.with(|sel| calendar::month_label(sel.displayed_month()));

    let get_day_class = move |day: u32| -> String {
        let mut classes = vec!["calendar-day"];

        let displayed = calendar.with(|sel| sel.displayed_month());
        if let Some(date) = displayed.with_day(day) {
            if calendar::is_past_day(date, Local::now().date_naive()) {
                classes.push("past");
            }
            if calendar.with(|sel| sel.selected_date) == Some(date) {
                classes.push("selected");
            }
        }

        classes.join(" ")
    };

    view! {
        <div class="calendar-grid">
            <div class="calendar-navigation">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| calendar.update(|sel| sel.prev_month())
                >
                    "← Previous"
                </Button>

                <h3 class="current-month">{month_heading}</h3>

                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| calendar.update(|sel| sel.next_month())
                >
                    "Next →"
                </Button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="weekday">{*label}</div> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="calendar-days">
                {move || {
                    let displayed = calendar.with(|sel| sel.displayed_month());

                    calendar::month_grid(displayed)
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <div class="calendar-day empty"></div> }.into_any(),
                            Some(day) => view! {
                                <button
                                    type="button"
                                    class=move || get_day_class(day)
                                    on:click=move |_| {
                                        // a past-day click is a no-op inside select_day
                                        let today = Local::now().date_naive();
                                        calendar.update(|sel| sel.select_day(day, today));
                                    }
                                >
                                    <span class="day-number">{day}</span>
                                </button>
                            }
                            .into_any(),
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
