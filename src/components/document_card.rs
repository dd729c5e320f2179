//! Document Card Component

use leptos::prelude::*;

use crate::models::Document;

#[component]
pub fn DocumentCard(
    document: Document,
    #[prop(into)] on_download: Callback<Document>,
) -> impl IntoView {
    let for_click = document.clone();

    view! {
        <div class="document-card">
            <div class="document-info">
                <h3 class="document-title">{document.title.clone()}</h3>
                <p class="document-description">{document.description.clone()}</p>
                <div class="document-meta">
                    <span class="file-type-tag">{document.file_type.clone()}</span>
                    <span>{document.file_size.clone()}</span>
                    <span>{format!("{} downloads", document.downloads)}</span>
                </div>
            </div>
            <button class="document-download-btn" on:click=move |_| on_download.run(for_click.clone())>
                "Download"
            </button>
        </div>
    }
}
