//! Club Frontend App
//!
//! Root component: session + admin store contexts and the route table.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use reactive_stores::Store;

use crate::components::{Navbar, RequireAdmin};
use crate::pages::admin::{
    BannerManagementPage, DashboardPage, EventManagementPage, MemberManagementPage,
    ProjectManagementPage,
};
use crate::pages::{
    AboutPage, ContactPage, DocumentsPage, EventDetailPage, EventsPage, HomePage, LoginPage,
    MembersPage, ProjectsPage,
};
use crate::session::provide_session;
use crate::store::{AdminState, AdminStore};

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="page not-found">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href="/">"Back to home"</a>
        </main>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_session();
    provide_context::<AdminStore>(Store::new(AdminState::default()));

    view! {
        <Router>
            <Navbar />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/events") view=EventsPage />
                <Route path=path!("/events/:id") view=EventDetailPage />
                <Route path=path!("/projects") view=ProjectsPage />
                <Route path=path!("/members") view=MembersPage />
                <Route path=path!("/documents") view=DocumentsPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/admin/login") view=LoginPage />
                <Route
                    path=path!("/admin/dashboard")
                    view=|| view! { <RequireAdmin><DashboardPage /></RequireAdmin> }
                />
                <Route
                    path=path!("/admin/banners")
                    view=|| view! { <RequireAdmin><BannerManagementPage /></RequireAdmin> }
                />
                <Route
                    path=path!("/admin/events")
                    view=|| view! { <RequireAdmin><EventManagementPage /></RequireAdmin> }
                />
                <Route
                    path=path!("/admin/members")
                    view=|| view! { <RequireAdmin><MemberManagementPage /></RequireAdmin> }
                />
                <Route
                    path=path!("/admin/projects")
                    view=|| view! { <RequireAdmin><ProjectManagementPage /></RequireAdmin> }
                />
            </Routes>
        </Router>
    }
}
