use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "FIX-A-BIKE"
                    </A>
                    <span class="navbar__tagline">"Your Trusted Neighborhood Bike Shop"</span>
                </div>

                <nav class="navbar__links">
                    <A href="/" attr:class="navbar__link">
                        "Home"
                    </A>
                    <A href="/book" attr:class="navbar__link">
                        "Services"
                    </A>
                    <A href="/bookings" attr:class="navbar__link">
                        "Your Bookings"
                    </A>
                    <A href="/contact" attr:class="navbar__link">
                        "Contact Us"
                    </A>
                </nav>
            </div>
        </header>
    }
}
