//! Tab Bar Component
//!
//! Category tab strip shared by the events, members and projects pages.

use leptos::prelude::*;

/// One selectable tab
#[derive(Clone, Copy, PartialEq)]
pub struct TabDef {
    pub id: &'static str,
    pub label: &'static str,
}

/// Horizontal tab bar bound to a category signal
#[component]
pub fn TabBar(
    tabs: &'static [TabDef],
    active: ReadSignal<String>,
    set_active: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="tab-bar">
            {tabs
                .iter()
                .map(|tab| {
                    let id = tab.id;
                    let is_active = move || active.get() == id;
                    let tab_class = move || {
                        if is_active() { "tab active" } else { "tab" }
                    };

                    view! {
                        <button class=tab_class on:click=move |_| set_active.set(id.to_string())>
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
