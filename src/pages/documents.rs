//! Documents Page
//!
//! Category tree sidebar plus free-text search over the document list,
//! with a breadcrumb trail for the selected category. Matching follows
//! the flat-compare mode: the selected key is checked directly against
//! each document's category and sub-category.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::categories::{self, CategoryNode};
use crate::components::{DocumentCard, EmptyState, LoadingState};
use crate::config;
use crate::fetch_task::use_fetch_guard;
use crate::filter::{self, FilterConfig, Predicates};
use crate::models::Document;

const SEARCHABLE: &[fn(&Document) -> &str] =
    &[|d| d.title.as_str(), |d| d.description.as_str()];
const CATEGORY_KEYS: &[fn(&Document) -> &str] =
    &[|d| d.category.as_str(), |d| d.sub_category.as_str()];

#[component]
fn CategorySidebar(
    selected: ReadSignal<String>,
    set_selected: WriteSignal<String>,
) -> impl IntoView {
    let node_view = move |node: &'static CategoryNode, depth: usize| {
        let key = node.key;
        let is_selected = move || selected.get() == key;
        let row_class = move || {
            if is_selected() { "category-row selected" } else { "category-row" }
        };
        view! {
            <button
                class=row_class
                style=format!("padding-left: {}px;", depth * 16 + 8)
                on:click=move |_| set_selected.set(key.to_string())
            >
                {node.title}
            </button>
        }
    };

    view! {
        <aside class="category-sidebar">
            <div class="category-sidebar-header">"Categories"</div>
            {categories::CATEGORY_TREE
                .iter()
                .map(|root| {
                    view! {
                        {node_view(root, 0)}
                        {root.children.iter().map(|child| node_view(child, 1)).collect_view()}
                    }
                })
                .collect_view()}
        </aside>
    }
}

#[component]
fn BreadcrumbTrail(selected: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="breadcrumbs">
            <A href="/" attr:class="breadcrumb-link">
                "Home"
            </A>
            <span class="breadcrumb-item">"Documents"</span>
            {move || {
                categories::breadcrumb_trail(&selected.get())
                    .into_iter()
                    .map(|title| view! { <span class="breadcrumb-item">{title}</span> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let (documents, set_documents) = signal(Vec::<Document>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (search_text, set_search_text) = signal(String::new());
    let (selected, set_selected) = signal(categories::ALL_KEY.to_string());
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_documents().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => set_documents.set(loaded),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let config = FilterConfig::new(SEARCHABLE, CATEGORY_KEYS);
        let predicates = Predicates {
            search_text: search_text.get(),
            category: selected.get(),
        };
        documents.with(|docs| filter::apply(docs, &predicates, &config))
    });

    let on_download = move |document: Document| {
        spawn_local(async move {
            api::bump_download(document.id).await;
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(
                    &config::asset_url(&document.file_url),
                    "_blank",
                );
            }
        });
    };

    view! {
        <div class="documents-page">
            <section class="documents-hero">
                <h1>"Documents"</h1>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search documents..."
                    prop:value=move || search_text.get()
                    on:input=move |ev| set_search_text.set(event_target_value(&ev))
                />
            </section>

            <BreadcrumbTrail selected=selected />

            <div class="documents-layout">
                <CategorySidebar selected=selected set_selected=set_selected />

                <div class="documents-list">
                    {move || {
                        if loading.get() {
                            view! { <LoadingState /> }.into_any()
                        } else if let Some(message) = error.get() {
                            view! { <EmptyState message=message /> }.into_any()
                        } else if visible.get().is_empty() {
                            view! { <EmptyState message="No documents found" /> }.into_any()
                        } else {
                            view! {
                                <For
                                    each=move || visible.get()
                                    key=|doc| doc.id
                                    children=move |doc| {
                                        view! { <DocumentCard document=doc on_download=on_download /> }
                                    }
                                />
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
