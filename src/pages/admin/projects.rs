//! Project Management
//!
//! CRUD table for projects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ProjectPayload};
use crate::components::{AdminShell, DeleteConfirmButton, EmptyState};
use crate::fetch_task::use_fetch_guard;
use crate::models::{Project, ProjectLinks};
use crate::session::use_session;
use crate::store::{
    store_remove_project, store_upsert_project, use_admin_store, AdminStateStoreFields,
};

const CATEGORIES: &[&str] = &["web", "mobile", "ai"];

fn split_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[component]
pub fn ProjectManagementPage() -> impl IntoView {
    let store = use_admin_store();
    let session = use_session();
    let (error, set_error) = signal(Option::<String>::None);
    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<u32>::None);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::from("web"));
    let (image, set_image) = signal(String::new());
    let (progress, set_progress) = signal(String::from("0"));
    let (team_size, set_team_size) = signal(String::from("1"));
    let (technologies, set_technologies) = signal(String::new());
    let (github, set_github) = signal(String::new());
    let (demo, set_demo) = signal(String::new());
    let (details, set_details) = signal(String::new());
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_projects().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => store.projects().set(loaded),
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
        set_category.set(String::from("web"));
        set_image.set(String::new());
        set_progress.set(String::from("0"));
        set_team_size.set(String::from("1"));
        set_technologies.set(String::new());
        set_github.set(String::new());
        set_demo.set(String::new());
        set_details.set(String::new());
        set_form_open.set(true);
    };

    let open_edit = move |project: Project| {
        set_editing_id.set(Some(project.id));
        set_title.set(project.title);
        set_description.set(project.description);
        set_category.set(project.category);
        set_image.set(project.image);
        set_progress.set(project.progress.to_string());
        set_team_size.set(project.team_size.to_string());
        set_technologies.set(project.technologies.join(", "));
        set_github.set(project.links.github);
        set_demo.set(project.links.demo.unwrap_or_default());
        set_details.set(project.details);
        set_form_open.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(auth) = session.auth_header() else {
            session.expire();
            return;
        };
        let demo_url = demo.get();
        let payload = ProjectPayload {
            title: title.get(),
            description: description.get(),
            category: category.get(),
            image: image.get(),
            progress: progress.get().trim().parse().unwrap_or(0).min(100),
            team_size: team_size.get().trim().parse().unwrap_or(1),
            technologies: split_technologies(&technologies.get()),
            links: ProjectLinks {
                github: github.get(),
                demo: if demo_url.is_empty() { None } else { Some(demo_url) },
            },
            details: details.get(),
        };
        if payload.title.is_empty() {
            set_error.set(Some("Title is required".to_string()));
            return;
        }
        let id = editing_id.get();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_project(id, &payload, &auth).await,
                None => api::create_project(&payload, &auth).await,
            };
            match result {
                Ok(saved) => {
                    store_upsert_project(&store, saved);
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
            match api::delete_project(id, &auth).await {
                Ok(()) => store_remove_project(&store, id),
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
                <h1>"Project Management"</h1>
                <button class="btn primary" on:click=open_create>
                    "New project"
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
                        placeholder="Short description"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
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
                        placeholder="Progress (%)"
                        prop:value=move || progress.get()
                        on:input=move |ev| set_progress.set(event_target_value(&ev))
                    />
                    <input
                        type="number"
                        placeholder="Team size"
                        prop:value=move || team_size.get()
                        on:input=move |ev| set_team_size.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Technologies, comma separated"
                        prop:value=move || technologies.get()
                        on:input=move |ev| set_technologies.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="GitHub URL"
                        prop:value=move || github.get()
                        on:input=move |ev| set_github.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Demo URL (optional)"
                        prop:value=move || demo.get()
                        on:input=move |ev| set_demo.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Details"
                        prop:value=move || details.get()
                        on:input=move |ev| set_details.set(event_target_value(&ev))
                    ></textarea>
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
                if store.projects().with(|p| p.is_empty()) {
                    view! { <EmptyState message="No projects yet" /> }.into_any()
                } else {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Progress"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.projects().get()
                                    key=|project| project.id
                                    children=move |project| {
                                        let id = project.id;
                                        let for_edit = project.clone();
                                        view! {
                                            <tr>
                                                <td>{project.title.clone()}</td>
                                                <td>{project.category.clone()}</td>
                                                <td>{format!("{}%", project.progress)}</td>
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

#[cfg(test)]
mod tests {
    use super::split_technologies;

    #[test]
    fn test_split_technologies() {
        assert_eq!(split_technologies("Leptos, Axum"), vec!["Leptos", "Axum"]);
        assert!(split_technologies(" , ").is_empty());
    }
}
