//! Members Page
//!
//! Hero card for the current leader, then team tabs over everyone else,
//! ordered by the priority score (lead team, mentors, newer tenures
//! first). The leader is excluded from the general list by id.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{EmptyState, LoadingState, MemberCard, TabBar, TabDef};
use crate::fetch_task::use_fetch_guard;
use crate::filter::{self, FilterConfig, Predicates};
use crate::models::Member;

const TABS: &[TabDef] = &[
    TabDef { id: "all", label: "All" },
    TabDef { id: "lead", label: "Lead Team" },
    TabDef { id: "academic", label: "Academic" },
    TabDef { id: "event", label: "Events" },
    TabDef { id: "media", label: "Media" },
];

const SEARCHABLE: &[fn(&Member) -> &str] = &[|m| m.name.as_str(), |m| m.role.as_str()];
const CATEGORY_KEYS: &[fn(&Member) -> &str] = &[|m| m.team.as_str()];

#[component]
pub fn MembersPage() -> impl IntoView {
    let (members, set_members) = signal(Vec::<Member>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (active_tab, set_active_tab) = signal("all".to_string());
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            let result = api::list_members().await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => set_members.set(loaded),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let leader = Memo::new(move |_| {
        members.with(|list| list.iter().find(|m| m.is_current_leader()).cloned())
    });

    let visible = Memo::new(move |_| {
        let config = FilterConfig::new(SEARCHABLE, CATEGORY_KEYS)
            .with_ordering(|m: &Member| m.priority_score());
        let predicates = Predicates {
            search_text: String::new(),
            category: active_tab.get(),
        };
        members.with(|list| {
            let general = match leader.get() {
                Some(hero) => filter::excluding_id(list, hero.id, |m| m.id),
                None => list.clone(),
            };
            filter::apply(&general, &predicates, &config)
        })
    });

    view! {
        <div class="members-page">
            <section class="members-hero">
                <h1>"Members"</h1>
                <p>"Meet the people behind the club."</p>
            </section>

            {move || {
                if loading.get() {
                    view! { <LoadingState /> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <EmptyState message=message /> }.into_any()
                } else {
                    view! {
                        {move || {
                            leader
                                .get()
                                .map(|hero| view! { <MemberCard member=hero hero=true /> })
                        }}

                        <TabBar tabs=TABS active=active_tab set_active=set_active_tab />

                        {move || {
                            if visible.get().is_empty() {
                                view! { <EmptyState message="No members in this team" /> }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="members-grid">
                                        <For
                                            each=move || visible.get()
                                            key=|member| member.id
                                            children=move |member| {
                                                view! { <MemberCard member=member /> }
                                            }
                                        />
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
