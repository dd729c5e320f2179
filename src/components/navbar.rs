//! Site Navbar
//!
//! Top navigation for the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/events", "Events"),
    ("/projects", "Projects"),
    ("/members", "Members"),
    ("/documents", "Documents"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar-brand">
                "HCMUTE DSC"
            </A>
            <div class="navbar-links">
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href attr:class="navbar-link">
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
