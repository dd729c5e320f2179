//! Loading / Empty States
//!
//! An empty result is not an error: it gets its own explicit rendering,
//! distinct from the loading skeleton.

use leptos::prelude::*;

/// Skeleton shown while the first fetch is in flight
#[component]
pub fn LoadingState() -> impl IntoView {
    view! {
        <div class="loading-state">
            <div class="skeleton-block"></div>
            <div class="skeleton-block short"></div>
        </div>
    }
}

/// Explicit empty state for a filter or fetch that matched nothing
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <span class="empty-state-message">{message}</span>
        </div>
    }
}
