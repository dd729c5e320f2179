//! Projects Page
//!
//! Category tabs over the project list, with a detail modal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EmptyState, LoadingState, ProjectCard, TabBar, TabDef};
use crate::config;
use crate::fetch_task::use_fetch_guard;
use crate::filter::{self, FilterConfig, Predicates};
use crate::models::Project;

const TABS: &[TabDef] = &[
    TabDef { id: "all", label: "All" },
    TabDef { id: "web", label: "Web App" },
    TabDef { id: "mobile", label: "Mobile App" },
    TabDef { id: "ai", label: "AI/ML" },
];

const SEARCHABLE: &[fn(&Project) -> &str] = &[|p| p.title.as_str(), |p| p.description.as_str()];
const CATEGORY_KEYS: &[fn(&Project) -> &str] = &[|p| p.category.as_str()];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (active_tab, set_active_tab) = signal("all".to_string());
    let (selected, set_selected) = signal(Option::<Project>::None);
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_projects().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => set_projects.set(loaded),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let visible = Memo::new(move |_| {
        let config = FilterConfig::new(SEARCHABLE, CATEGORY_KEYS);
        let predicates = Predicates {
            search_text: String::new(),
            category: active_tab.get(),
        };
        projects.with(|list| filter::apply(list, &predicates, &config))
    });

    let on_open = move |project: Project| set_selected.set(Some(project));

    view! {
        <div class="projects-page">
            <section class="projects-hero">
                <h1>"Projects"</h1>
                <p>"What we are building together."</p>
            </section>

            <TabBar tabs=TABS active=active_tab set_active=set_active_tab />

            {move || {
                if loading.get() {
                    view! { <LoadingState /> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <EmptyState message=message /> }.into_any()
                } else if visible.get().is_empty() {
                    view! { <EmptyState message="No projects in this category" /> }.into_any()
                } else {
                    view! {
                        <div class="projects-grid">
                            <For
                                each=move || visible.get()
                                key=|project| project.id
                                children=move |project| {
                                    view! { <ProjectCard project=project on_open=on_open /> }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            // Project detail modal
            {move || {
                selected
                    .get()
                    .map(|project| {
                        let github = project.links.github.clone();
                        let demo = project.links.demo.clone();
                        view! {
                            <div class="modal-backdrop" on:click=move |_| set_selected.set(None)>
                                <div class="modal" on:click=|ev| ev.stop_propagation()>
                                    <img
                                        class="project-image"
                                        src=config::asset_url(&project.image)
                                        alt=project.title.clone()
                                    />
                                    <h3>{project.title.clone()}</h3>
                                    <p>{project.details.clone()}</p>
                                    <div class="project-progress">
                                        <div
                                            class="project-progress-fill"
                                            style=format!("width: {}%;", project.progress)
                                        ></div>
                                    </div>
                                    <div class="project-team">
                                        {project
                                            .team_members
                                            .iter()
                                            .map(|member| {
                                                view! {
                                                    <div class="project-team-member">
                                                        <img
                                                            src=config::asset_url(&member.avatar)
                                                            alt=member.name.clone()
                                                        />
                                                        <span>{member.name.clone()}</span>
                                                        <span class="team-member-role">
                                                            {member.role.clone()}
                                                        </span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="modal-actions">
                                        <a href=github target="_blank" rel="noopener noreferrer">
                                            "GitHub"
                                        </a>
                                        {demo
                                            .map(|url| {
                                                view! {
                                                    <a href=url target="_blank" rel="noopener noreferrer">
                                                        "Live demo"
                                                    </a>
                                                }
                                            })}
                                        <button on:click=move |_| set_selected.set(None)>
                                            "Close"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
