//! Event Management
//!
//! CRUD table for events.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, EventPayload};
use crate::components::{AdminShell, DeleteConfirmButton, EmptyState};
use crate::fetch_task::use_fetch_guard;
use crate::models::Event;
use crate::session::use_session;
use crate::store::{
    store_remove_event, store_upsert_event, use_admin_store, AdminStateStoreFields,
};

const STATUSES: &[&str] = &["upcoming", "ongoing", "past"];

#[component]
pub fn EventManagementPage() -> impl IntoView {
    let store = use_admin_store();
    let session = use_session();
    let (error, set_error) = signal(Option::<String>::None);
    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<u32>::None);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (location, set_location) = signal(String::new());
    let (status, set_status) = signal(String::from("upcoming"));
    let (image, set_image) = signal(String::new());
    let (max_participants, set_max_participants) = signal(String::from("0"));
    let (organizer, set_organizer) = signal(String::new());
    let (form_url, set_form_url) = signal(String::new());
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_events().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => store.events().set(loaded),
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
        set_description.set(String::new());
        set_date.set(String::new());
        set_time.set(String::new());
        set_location.set(String::new());
        set_status.set(String::from("upcoming"));
        set_image.set(String::new());
        set_max_participants.set(String::from("0"));
        set_organizer.set(String::new());
        set_form_url.set(String::new());
        set_form_open.set(true);
    };

    let open_edit = move |event: Event| {
        set_editing_id.set(Some(event.id));
        set_title.set(event.title);
        set_description.set(event.description);
        set_date.set(event.date);
        set_time.set(event.time);
        set_location.set(event.location);
        set_status.set(event.status);
        set_image.set(event.image);
        set_max_participants.set(event.max_participants.to_string());
        set_organizer.set(event.organizer);
        set_form_url.set(event.google_form_url);
        set_form_open.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(auth) = session.auth_header() else {
            session.expire();
            return;
        };
        let payload = EventPayload {
            title: title.get(),
            description: description.get(),
            date: date.get(),
            time: time.get(),
            location: location.get(),
            status: status.get(),
            image: image.get(),
            max_participants: max_participants.get().trim().parse().unwrap_or(0),
            organizer: organizer.get(),
            google_form_url: form_url.get(),
        };
        if payload.title.is_empty() || payload.date.is_empty() {
            set_error.set(Some("Title and date are required".to_string()));
            return;
        }
        let id = editing_id.get();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_event(id, &payload, &auth).await,
                None => api::create_event(&payload, &auth).await,
            };
            match result {
                Ok(saved) => {
                    store_upsert_event(&store, saved);
                    set_form_open.set(false);
                    set_error.set(None);
                }
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
            match api::delete_event(id, &auth).await {
                Ok(()) => store_remove_event(&store, id),
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
                <h1>"Event Management"</h1>
                <button class="btn primary" on:click=open_create>
                    "New event"
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
                    <textarea
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                    <input
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| set_time.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Location"
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || status.get()
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                    >
                        {STATUSES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="Image path"
                        prop:value=move || image.get()
                        on:input=move |ev| set_image.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Max participants"
                        prop:value=move || max_participants.get()
                        on:input=move |ev| set_max_participants.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Organizer"
                        prop:value=move || organizer.get()
                        on:input=move |ev| set_organizer.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Registration form URL"
                        prop:value=move || form_url.get()
                        on:input=move |ev| set_form_url.set(event_target_value(&ev))
                    />
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
                if store.events().with(|e| e.is_empty()) {
                    view! { <EmptyState message="No events yet" /> }.into_any()
                } else {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Date"</th>
                                    <th>"Status"</th>
                                    <th>"Participants"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.events().get()
                                    key=|event| event.id
                                    children=move |event| {
                                        let id = event.id;
                                        let for_edit = event.clone();
                                        view! {
                                            <tr>
                                                <td>{event.title.clone()}</td>
                                                <td>{format!("{} {}", event.date, event.time)}</td>
                                                <td>{event.status.clone()}</td>
                                                <td>
                                                    {format!(
                                                        "{}/{}",
                                                        event.current_participants,
                                                        event.max_participants,
                                                    )}
                                                </td>
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
