use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-container homepage">
            <div class="homepage-grid">
                <div class="homepage-info">
                    <img
                        class="homepage-photo"
                        src="/images/storefront.svg"
                        alt="The FIX-A-BIKE workshop"
                    />
                    <div class="card">
                        <h3>"Our Location"</h3>
                        <p>"123 Bike Lane, Ottawa, ON K1H 8M5"</p>
                        <p>"Open Mon-Sat, 9am - 6pm"</p>
                    </div>
                </div>

                <div class="card homepage-about">
                    <h2>"About Us"</h2>
                    <p>
                        "We're a small team of cyclists devoted to helping others in the \
                         community have a good time by keeping their bikes repaired! With \
                         over 10 years of experience, we handle nearly all issues and \
                         customizations when it comes to bicycles. Book with us, and your \
                         bike is in good hands."
                    </p>
                    <p class="homepage-credit">"Designed by Victor and Matthew"</p>
                    <A href="/book">
                        <button class="btn-primary btn-large">"Book Now"</button>
                    </A>
                </div>
            </div>
        </div>
    }
}
