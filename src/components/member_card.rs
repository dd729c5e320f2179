//! Member Card Component
//!
//! Card for one member; the current leader gets the larger hero variant
//! above the tabbed grid.

use leptos::prelude::*;

use crate::config;
use crate::models::Member;

#[component]
pub fn MemberCard(member: Member, #[prop(optional)] hero: bool) -> impl IntoView {
    let avatar = if member.avatar.is_empty() {
        config::asset_url(config::DEFAULT_AVATAR)
    } else {
        config::asset_url(&member.avatar)
    };
    let card_class = if hero { "member-card hero" } else { "member-card" };
    let tenure = member.year.clone();

    view! {
        <div class=card_class>
            <img class="member-avatar" src=avatar alt=member.name.clone() />
            <div class="member-info">
                <h3 class="member-name">{member.name.clone()}</h3>
                <p class="member-role">{member.role.clone()}</p>
                <p class="member-department">{member.department.clone()}</p>
                {tenure
                    .map(|year| {
                        view! { <p class="member-tenure">{format!("Term {year}")}</p> }
                    })}
            </div>
            <div class="member-skills">
                {member
                    .skills
                    .iter()
                    .map(|skill| view! { <span class="skill-tag">{skill.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="member-links">
                <a href=member.links.facebook.clone() target="_blank" rel="noopener noreferrer">
                    "Facebook"
                </a>
                <a href=member.links.github.clone() target="_blank" rel="noopener noreferrer">
                    "GitHub"
                </a>
                <a href=format!("mailto:{}", member.links.email)>"Email"</a>
            </div>
        </div>
    }
}
