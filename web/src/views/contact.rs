use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    // local display state only; nothing is stored or transmitted
    let is_sent = RwSignal::new(false);

    let handle_submit = move || {
        if email.get().is_empty() || message.get().is_empty() {
            error.set(Some(
                "Please fill out both the email and message section.".to_string(),
            ));
            return;
        }
        error.set(None);
        is_sent.set(true);
    };

    view! {
        <div class="page-container">
            {move || {
                if is_sent.get() {
                    view! {
                        <div class="card confirmation-card">
                            <div class="confirmation-success-icon">"✓"</div>
                            <h2 class="confirmation-title">"Message Sent!"</h2>
                            <p>
                                "Thanks for the message! We'll get back to you at "
                                <strong>{email.get()}</strong>
                                " as soon as possible."
                            </p>
                            <button
                                class="btn-primary"
                                on:click={
                                    let navigate = navigate.clone();
                                    move |_| {
                                        navigate("/", Default::default());
                                    }
                                }
                            >
                                "Back to Home"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card contact-card">
                            <h2 class="page-title">"Contact Us"</h2>
                            <p class="contact-hint">"Have a question? Send us a message!"</p>
                            <p class="contact-hint">"613-123-4567 fixabike@gmail.com"</p>
                            <form on:submit=move |ev| {
                                ev.prevent_default();
                                handle_submit();
                            }>
                                <div class="form-group">
                                    <label for="contact-email">"Your Email"</label>
                                    <Input
                                        id="contact-email"
                                        input_type=InputType::Email
                                        placeholder="you@example.com"
                                        value=email
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="contact-message">"Message"</label>
                                    <textarea
                                        id="contact-message"
                                        class="form-input"
                                        rows="6"
                                        placeholder="Ask us anything!"
                                        prop:value=move || message.get()
                                        on:input=move |ev| {
                                            message.set(event_target_value(&ev));
                                        }
                                    ></textarea>
                                </div>
                                {move || {
                                    error
                                        .get()
                                        .map(|msg| view! { <p class="form-error">{msg}</p> })
                                }}
                                <div class="contact-actions">
                                    <button type="submit" class="btn-primary">
                                        "Send Message"
                                    </button>
                                </div>
                            </form>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
