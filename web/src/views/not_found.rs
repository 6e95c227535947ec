use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with a route back to the shop.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="page-container not-found">
            <div class="card not-found-card">
                <h1 class="not-found-code">"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"Looks like this page rolled off the stand. Let's get you back on track."</p>
                <div class="not-found-actions">
                    <button
                        class="btn-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                    >
                        "Go Home"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Ok(history) = window.history() {
                                    let _ = history.back();
                                }
                            }
                        }
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}
