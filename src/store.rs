//! Admin State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity across the
//! admin management pages: mutations patch the affected row instead of
//! refetching the whole collection.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Banner, Event, Member, Project};

/// Back-office collections with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub banners: Vec<Banner>,
    pub events: Vec<Event>,
    pub members: Vec<Member>,
    pub projects: Vec<Project>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a banner by id, or append it when new
pub fn store_upsert_banner(store: &AdminStore, banner: Banner) {
    let field = store.banners();
    let mut banners = field.write();
    match banners.iter_mut().find(|b| b.id == banner.id) {
        Some(existing) => *existing = banner,
        None => banners.push(banner),
    }
}

/// Remove a banner from the store by id
pub fn store_remove_banner(store: &AdminStore, id: u32) {
    store.banners().write().retain(|b| b.id != id);
}

/// Replace an event by id, or append it when new
pub fn store_upsert_event(store: &AdminStore, event: Event) {
    let field = store.events();
    let mut events = field.write();
    match events.iter_mut().find(|e| e.id == event.id) {
        Some(existing) => *existing = event,
        None => events.push(event),
    }
}

/// Remove an event from the store by id
pub fn store_remove_event(store: &AdminStore, id: u32) {
    store.events().write().retain(|e| e.id != id);
}

/// Replace a member by id, or append them when new
pub fn store_upsert_member(store: &AdminStore, member: Member) {
    let field = store.members();
    let mut members = field.write();
    match members.iter_mut().find(|m| m.id == member.id) {
        Some(existing) => *existing = member,
        None => members.push(member),
    }
}

/// Remove a member from the store by id
pub fn store_remove_member(store: &AdminStore, id: u32) {
    store.members().write().retain(|m| m.id != id);
}

/// Replace a project by id, or append it when new
pub fn store_upsert_project(store: &AdminStore, project: Project) {
    let field = store.projects();
    let mut projects = field.write();
    match projects.iter_mut().find(|p| p.id == project.id) {
        Some(existing) => *existing = project,
        None => projects.push(project),
    }
}

/// Remove a project from the store by id
pub fn store_remove_project(store: &AdminStore, id: u32) {
    store.projects().write().retain(|p| p.id != id);
}
