//! Admin Route Guard
//!
//! Renders its children only while the session is authenticated and
//! redirects to the login view otherwise. The protected content is never
//! mounted for an anonymous visitor, not even transiently — the API
//! still enforces real access control on every mutating call.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !session.is_authenticated() {
            navigate("/admin/login", Default::default());
        }
    });

    view! { <Show when=move || session.is_authenticated()>{children()}</Show> }
}
