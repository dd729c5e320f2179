//! Admin Dashboard
//!
//! Entry view: loads all collections into the store and shows counts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::AdminShell;
use crate::fetch_task::use_fetch_guard;
use crate::session::use_session;
use crate::store::{use_admin_store, AdminStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_admin_store();
    let session = use_session();
    let (error, set_error) = signal(Option::<String>::None);
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let banners = api::list_banners().await;
            let events = api::list_events().await;
            let members = api::list_members().await;
            let projects = api::list_projects().await;
            if !guard.is_live() {
                return;
            }
            match (banners, events, members, projects) {
                (Ok(banners), Ok(events), Ok(members), Ok(projects)) => {
                    store.banners().set(banners);
                    store.events().set(events);
                    store.members().set(members);
                    store.projects().set(projects);
                }
                (Err(err), ..) | (_, Err(err), ..) | (_, _, Err(err), _) | (.., Err(err)) => {
                    if let Some(message) = session.handle_api_error(&err) {
                        set_error.set(Some(message));
                    }
                }
            }
        });
    });

    let cards = move || {
        vec![
            ("/admin/banners", "Banners", store.banners().with(|b| b.len())),
            ("/admin/events", "Events", store.events().with(|e| e.len())),
            ("/admin/members", "Members", store.members().with(|m| m.len())),
            ("/admin/projects", "Projects", store.projects().with(|p| p.len())),
        ]
    };

    view! {
        <AdminShell>
            <h1>"Dashboard"</h1>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="notice error">{message}</div> })
            }}

            <div class="dashboard-cards">
                {move || {
                    cards()
                        .into_iter()
                        .map(|(href, label, count)| {
                            view! {
                                <A href=href attr:class="dashboard-card">
                                    <span class="dashboard-count">{count}</span>
                                    <span class="dashboard-label">{label}</span>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </AdminShell>
    }
}
