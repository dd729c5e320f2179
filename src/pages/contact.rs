//! Contact Page

use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <h1>"Contact"</h1>
            <div class="contact-channels">
                <div class="contact-card">
                    <h3>"Email"</h3>
                    <a href="mailto:dsc@hcmute.edu.vn">"dsc@hcmute.edu.vn"</a>
                </div>
                <div class="contact-card">
                    <h3>"Facebook"</h3>
                    <a href="https://facebook.com/hcmute.dsc" target="_blank" rel="noopener noreferrer">
                        "facebook.com/hcmute.dsc"
                    </a>
                </div>
                <div class="contact-card">
                    <h3>"Campus"</h3>
                    <p>"1 Vo Van Ngan, Thu Duc, Ho Chi Minh City"</p>
                </div>
            </div>
        </div>
    }
}
