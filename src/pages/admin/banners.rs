//! Banner Management
//!
//! CRUD table for home-page banners. Every mutation carries the bearer
//! header; a 401/403 tears the session down and the route guard redirects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, BannerPayload};
use crate::components::{AdminShell, DeleteConfirmButton, EmptyState};
use crate::fetch_task::use_fetch_guard;
use crate::models::Banner;
use crate::session::use_session;
use crate::store::{
    store_remove_banner, store_upsert_banner, use_admin_store, AdminStateStoreFields,
};

#[component]
pub fn BannerManagementPage() -> impl IntoView {
    let store = use_admin_store();
    let session = use_session();
    let (error, set_error) = signal(Option::<String>::None);
    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<u32>::None);
    let (title, set_title) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (order, set_order) = signal(String::from("0"));
    let (active, set_active) = signal(true);
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_banners().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => store.banners().set(loaded),
                Err(err) => {
                    if let Some(message) = session.handle_api_error(&err) {
                        set_error.set(Some(message));
                    }
                }
            }
        });
    });

    let open_create = move |_| {
        set_editing_id.set(None);
        set_title.set(String::new());
        set_image.set(String::new());
        set_order.set(String::from("0"));
        set_active.set(true);
        set_form_open.set(true);
    };

    let open_edit = move |banner: Banner| {
        set_editing_id.set(Some(banner.id));
        set_title.set(banner.title);
        set_image.set(banner.image);
        set_order.set(banner.order.to_string());
        set_active.set(banner.active);
        set_form_open.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(auth) = session.auth_header() else {
            session.expire();
            return;
        };
        let payload = BannerPayload {
            title: title.get(),
            image: image.get(),
            order: order.get().trim().parse().unwrap_or(0),
            active: active.get(),
        };
        if payload.title.is_empty() || payload.image.is_empty() {
            set_error.set(Some("Title and image are required".to_string()));
            return;
        }
        let id = editing_id.get();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_banner(id, &payload, &auth).await,
                None => api::create_banner(&payload, &auth).await,
            };
            match result {
                Ok(saved) => {
                    store_upsert_banner(&store, saved);
                    set_form_open.set(false);
                    set_error.set(None);
                }
                // Validation messages stay on screen with the form intact
                Err(err) => {
                    if let Some(message) = session.handle_api_error(&err) {
                        set_error.set(Some(message));
                    }
                }
            }
        });
    };

    let on_delete = move |id: u32| {
        let Some(auth) = session.auth_header() else {
            session.expire();
            return;
        };
        spawn_local(async move {
            match api::delete_banner(id, &auth).await {
                Ok(()) => store_remove_banner(&store, id),
                Err(err) => {
                    if let Some(message) = session.handle_api_error(&err) {
                        set_error.set(Some(message));
                    }
                }
            }
        });
    };

    view! {
        <AdminShell>
            <div class="admin-page-header">
                <h1>"Banner Management"</h1>
                <button class="btn primary" on:click=open_create>
                    "New banner"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="notice error">{message}</div> })
            }}

            <Show when=move || form_open.get()>
                <form class="admin-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Image path"
                        prop:value=move || image.get()
                        on:input=move |ev| set_image.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Order"
                        prop:value=move || order.get()
                        on:input=move |ev| set_order.set(event_target_value(&ev))
                    />
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |_| set_active.update(|a| *a = !*a)
                        />
                        "Active"
                    </label>
                    <div class="admin-form-actions">
                        <button type="button" on:click=move |_| set_form_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn primary">
                            "Save"
                        </button>
                    </div>
                </form>
            </Show>

            {move || {
                if store.banners().with(|b| b.is_empty()) {
                    view! { <EmptyState message="No banners yet" /> }.into_any()
                } else {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Order"</th>
                                    <th>"Active"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.banners().get()
                                    key=|banner| banner.id
                                    children=move |banner| {
                                        let id = banner.id;
                                        let for_edit = banner.clone();
                                        view! {
                                            <tr>
                                                <td>{banner.title.clone()}</td>
                                                <td>{banner.order}</td>
                                                <td>{if banner.active { "yes" } else { "no" }}</td>
                                                <td>
                                                    <button on:click=move |_| open_edit(for_edit.clone())>
                                                        "Edit"
                                                    </button>
                                                    <DeleteConfirmButton on_confirm=move |_| on_delete(id) />
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </AdminShell>
    }
}
