//! Project Card Component

use leptos::prelude::*;

use crate::config;
use crate::models::Project;

#[component]
pub fn ProjectCard(project: Project, #[prop(into)] on_open: Callback<Project>) -> impl IntoView {
    let for_click = project.clone();

    view! {
        <div class="project-card" on:click=move |_| on_open.run(for_click.clone())>
            <img class="project-image" src=config::asset_url(&project.image) alt=project.title.clone() />
            <h3 class="project-title">{project.title.clone()}</h3>
            <p class="project-description">{project.description.clone()}</p>
            <div class="project-progress">
                <div class="project-progress-fill" style=format!("width: {}%;", project.progress)>
                </div>
            </div>
            <div class="project-technologies">
                {project
                    .technologies
                    .iter()
                    .map(|tech| view! { <span class="tech-tag">{tech.clone()}</span> })
                    .collect_view()}
            </div>
            <p class="project-team-size">{format!("{} members", project.team_size)}</p>
        </div>
    }
}
