//! Admin Login Page
//!
//! Credential form driving the session guard. An already-authenticated
//! visitor is sent straight to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(Option::<String>::None);

    // Skip the form entirely when a session is already held
    {
        let navigate = navigate.clone();
        Effect::new(move |_| {
            if session.is_authenticated() {
                navigate("/admin/dashboard", Default::default());
            }
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            set_error.set(Some("Username and password are required".to_string()));
            return;
        }
        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(&user, &pass).await {
                Ok(()) => navigate("/admin/dashboard", Default::default()),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Admin Login"</h1>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="notice error">{message}</div> })
                }}

                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn primary"
                    disabled=move || session.is_authenticating()
                >
                    {move || if session.is_authenticating() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
