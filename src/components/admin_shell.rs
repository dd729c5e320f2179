//! Admin Shell
//!
//! Sidebar navigation and logout wrapper shared by the admin pages.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

const ADMIN_LINKS: &[(&str, &str)] = &[
    ("/admin/dashboard", "Dashboard"),
    ("/admin/banners", "Banners"),
    ("/admin/events", "Events"),
    ("/admin/members", "Members"),
    ("/admin/projects", "Projects"),
];

#[component]
pub fn AdminShell(children: Children) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/admin/login", Default::default());
    };

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <div class="admin-brand">"DSC Admin"</div>
                {ADMIN_LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <A href=*href attr:class="admin-nav-link">
                                {*label}
                            </A>
                        }
                    })
                    .collect_view()}
                <div class="admin-user">
                    {move || session.user().map(|u| u.username).unwrap_or_default()}
                </div>
                <button class="admin-logout-btn" on:click=on_logout>
                    "Log out"
                </button>
            </aside>
            <main class="admin-content">{children()}</main>
        </div>
    }
}
