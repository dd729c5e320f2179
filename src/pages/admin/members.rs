//! Member Management
//!
//! CRUD table for members. Skills are entered comma-separated and split
//! before submission.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, MemberPayload};
use crate::components::{AdminShell, DeleteConfirmButton, EmptyState};
use crate::fetch_task::use_fetch_guard;
use crate::models::{Member, MemberLinks};
use crate::session::use_session;
use crate::store::{
    store_remove_member, store_upsert_member, use_admin_store, AdminStateStoreFields,
};

const TEAMS: &[&str] = &["lead", "academic", "event", "media"];

/// "a, b, c" -> ["a", "b", "c"], dropping empties
fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[component]
pub fn MemberManagementPage() -> impl IntoView {
    let store = use_admin_store();
    let session = use_session();
    let (error, set_error) = signal(Option::<String>::None);
    let (form_open, set_form_open) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<u32>::None);
    let (name, set_name) = signal(String::new());
    let (role, set_role) = signal(String::new());
    let (avatar, set_avatar) = signal(String::new());
    let (team, set_team) = signal(String::from("academic"));
    let (department, set_department) = signal(String::new());
    let (year, set_year) = signal(String::new());
    let (skills, set_skills) = signal(String::new());
    let (facebook, set_facebook) = signal(String::new());
    let (github, set_github) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_members().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => store.members().set(loaded),
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
        set_name.set(String::new());
        set_role.set(String::new());
        set_avatar.set(String::new());
        set_team.set(String::from("academic"));
        set_department.set(String::new());
        set_year.set(String::new());
        set_skills.set(String::new());
        set_facebook.set(String::new());
        set_github.set(String::new());
        set_email.set(String::new());
        set_form_open.set(true);
    };

    let open_edit = move |member: Member| {
        set_editing_id.set(Some(member.id));
        set_name.set(member.name);
        set_role.set(member.role);
        set_avatar.set(member.avatar);
        set_team.set(member.team);
        set_department.set(member.department);
        set_year.set(member.year.unwrap_or_default());
        set_skills.set(member.skills.join(", "));
        set_facebook.set(member.links.facebook);
        set_github.set(member.links.github);
        set_email.set(member.links.email);
        set_form_open.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(auth) = session.auth_header() else {
            session.expire();
            return;
        };
        let tenure = year.get();
        let payload = MemberPayload {
            name: name.get(),
            role: role.get(),
            avatar: avatar.get(),
            team: team.get().to_lowercase(),
            department: department.get(),
            year: if tenure.is_empty() { None } else { Some(tenure) },
            skills: split_skills(&skills.get()),
            links: MemberLinks {
                facebook: facebook.get(),
                github: github.get(),
                email: email.get(),
            },
        };
        if payload.name.is_empty() || payload.role.is_empty() {
            set_error.set(Some("Name and role are required".to_string()));
            return;
        }
        let id = editing_id.get();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_member(id, &payload, &auth).await,
                None => api::create_member(&payload, &auth).await,
            };
            match result {
                Ok(saved) => {
                    store_upsert_member(&store, saved);
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
            match api::delete_member(id, &auth).await {
                Ok(()) => store_remove_member(&store, id),
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
                <h1>"Member Management"</h1>
                <button class="btn primary" on:click=open_create>
                    "New member"
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
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Role"
                        prop:value=move || role.get()
                        on:input=move |ev| set_role.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Avatar path"
                        prop:value=move || avatar.get()
                        on:input=move |ev| set_avatar.set(event_target_value(&ev))
                    />
                    <select
                        prop:value=move || team.get()
                        on:change=move |ev| set_team.set(event_target_value(&ev))
                    >
                        {TEAMS
                            .iter()
                            .map(|t| view! { <option value=*t>{*t}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="Department"
                        prop:value=move || department.get()
                        on:input=move |ev| set_department.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Term (e.g. 2024-2025)"
                        prop:value=move || year.get()
                        on:input=move |ev| set_year.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Skills, comma separated"
                        prop:value=move || skills.get()
                        on:input=move |ev| set_skills.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Facebook URL"
                        prop:value=move || facebook.get()
                        on:input=move |ev| set_facebook.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="GitHub URL"
                        prop:value=move || github.get()
                        on:input=move |ev| set_github.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
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
                if store.members().with(|m| m.is_empty()) {
                    view! { <EmptyState message="No members yet" /> }.into_any()
                } else {
                    view! {
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Role"</th>
                                    <th>"Team"</th>
                                    <th>"Term"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.members().get()
                                    key=|member| member.id
                                    children=move |member| {
                                        let id = member.id;
                                        let for_edit = member.clone();
                                        view! {
                                            <tr>
                                                <td>{member.name.clone()}</td>
                                                <td>{member.role.clone()}</td>
                                                <td>{member.team.clone()}</td>
                                                <td>{member.year.clone().unwrap_or_default()}</td>
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
    use super::split_skills;

    #[test]
    fn test_split_skills_trims_and_drops_empties() {
        assert_eq!(split_skills("Rust, Go , ,Docker"), vec!["Rust", "Go", "Docker"]);
        assert!(split_skills("").is_empty());
    }
}
