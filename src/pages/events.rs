//! Events Page
//!
//! Status tabs over the event list plus the registration flow. The event
//! list and the visitor-IP lookup are independent fetches and may resolve
//! in either order; registration is keyed on the visitor IP the external
//! service reported.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, RegisterOutcome};
use crate::components::{EmptyState, EventCard, LoadingState, TabBar, TabDef};
use crate::fetch_task::use_fetch_guard;
use crate::filter::{self, FilterConfig, Predicates};
use crate::models::Event;

const TABS: &[TabDef] = &[
    TabDef { id: "all", label: "All" },
    TabDef { id: "upcoming", label: "Upcoming" },
    TabDef { id: "ongoing", label: "Ongoing" },
    TabDef { id: "past", label: "Finished" },
];

const SEARCHABLE: &[fn(&Event) -> &str] = &[|e| e.title.as_str(), |e| e.description.as_str()];
const CATEGORY_KEYS: &[fn(&Event) -> &str] = &[|e| e.status.as_str()];

/// User-facing notice with a severity class
#[derive(Debug, Clone, PartialEq)]
struct Notice {
    kind: &'static str,
    text: String,
}

/// Apply a registration outcome to the local event list and produce the
/// notice to show. Only a confirmed registration with a known visitor IP
/// touches the list; a duplicate is a warning and the registrant list
/// stays as fetched.
fn apply_register_outcome(
    events: &mut [Event],
    event_id: u32,
    ip: &str,
    outcome: RegisterOutcome,
) -> Notice {
    match outcome {
        RegisterOutcome::Registered => {
            if !ip.is_empty() {
                if let Some(entry) = events.iter_mut().find(|e| e.id == event_id) {
                    entry.registered_ips.push(ip.to_string());
                }
            }
            Notice {
                kind: "success",
                text: "Registration confirmed".to_string(),
            }
        }
        RegisterOutcome::AlreadyRegistered => Notice {
            kind: "warning",
            text: "You have already registered for this event".to_string(),
        },
        RegisterOutcome::CapacityFull => Notice {
            kind: "error",
            text: "This event is already full".to_string(),
        },
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let (events, set_events) = signal(Vec::<Event>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (active_tab, set_active_tab) = signal("all".to_string());
    let (visitor_ip, set_visitor_ip) = signal(String::new());
    let (selected_event, set_selected_event) = signal(Option::<Event>::None);
    let (registering, set_registering) = signal(false);
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let guard = use_fetch_guard();

    // Event list
    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let guard = guard.clone();
            spawn_local(async move {
                let result = api::list_events().await;
                if !guard.is_live() {
                    return;
                }
                match result {
                    Ok(loaded) => set_events.set(loaded),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
                set_loading.set(false);
            });
        });
    }

    // Visitor IP, independent of the list fetch; failure just leaves the
    // IP unknown and registration state unmarked
    {
        let guard = guard.clone();
        Effect::new(move |_| {
            let guard = guard.clone();
            spawn_local(async move {
                if let Ok(ip) = api::fetch_visitor_ip().await {
                    if guard.is_live() {
                        set_visitor_ip.set(ip);
                    }
                }
            });
        });
    }

    let visible = Memo::new(move |_| {
        let config = FilterConfig::new(SEARCHABLE, CATEGORY_KEYS);
        let predicates = Predicates {
            search_text: String::new(),
            category: active_tab.get(),
        };
        events.with(|list| filter::apply(list, &predicates, &config))
    });

    // Stored so the confirm handler stays `Copy` for the dialog closure
    let confirm_guard = StoredValue::new_local(guard.clone());
    let on_confirm = move |_| {
        let Some(event) = selected_event.get_untracked() else {
            return;
        };
        let guard = confirm_guard.get_value();
        set_registering.set(true);
        spawn_local(async move {
            let result = api::register_event(event.id).await;
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(outcome) => {
                    let ip = visitor_ip.get_untracked();
                    let mut notice = None;
                    set_events.update(|list| {
                        notice = Some(apply_register_outcome(list, event.id, &ip, outcome));
                    });
                    set_notice.set(notice);
                }
                Err(err) => {
                    set_notice.set(Some(Notice {
                        kind: "error",
                        text: format!("Could not register: {err}"),
                    }));
                }
            }
            set_registering.set(false);
            set_selected_event.set(None);
        });
    };

    let on_register = move |event: Event| {
        set_selected_event.set(Some(event));
    };

    view! {
        <div class="events-page">
            <section class="events-hero">
                <h1>"Events"</h1>
                <p>"Learn, share and connect at our community events."</p>
            </section>

            {move || {
                notice
                    .get()
                    .map(|n| {
                        view! { <div class=format!("notice {}", n.kind)>{n.text}</div> }
                    })
            }}

            <TabBar tabs=TABS active=active_tab set_active=set_active_tab />

            {move || {
                if loading.get() {
                    view! { <LoadingState /> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <EmptyState message=message /> }.into_any()
                } else if visible.get().is_empty() {
                    view! { <EmptyState message="No events in this state" /> }.into_any()
                } else {
                    view! {
                        <div class="events-grid">
                            <For
                                each=move || visible.get()
                                key=|event| event.id
                                children=move |event| {
                                    view! {
                                        <EventCard
                                            event=event
                                            visitor_ip=visitor_ip
                                            on_register=on_register
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}

            // Registration confirmation dialog
            <Show when=move || selected_event.get().is_some()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <h3>"Confirm registration"</h3>
                        <p>
                            "Fill in the registration form first, then confirm here so we "
                            "can track attendance."
                        </p>
                        {move || {
                            selected_event
                                .get()
                                .map(|event| {
                                    view! {
                                        <a
                                            href=event.google_form_url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            "Open registration form"
                                        </a>
                                    }
                                })
                        }}
                        <div class="modal-actions">
                            <button on:click=move |_| set_selected_event.set(None)>"Cancel"</button>
                            <button
                                class="btn primary"
                                disabled=move || registering.get()
                                on:click=on_confirm
                            >
                                {move || if registering.get() { "Confirming..." } else { "Confirm" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(id: u32, registered_ips: Vec<String>) -> Event {
        Event {
            id,
            title: format!("Event {id}"),
            description: String::new(),
            date: "2025-01-01".to_string(),
            time: "18:00".to_string(),
            location: String::new(),
            status: "upcoming".to_string(),
            image: String::new(),
            max_participants: 10,
            current_participants: 1,
            organizer: String::new(),
            google_form_url: String::new(),
            registered_ips,
        }
    }

    #[test]
    fn test_duplicate_registration_warns_without_appending_ip() {
        let mut events = vec![make_event(1, vec!["1.2.3.4".to_string()])];
        let notice =
            apply_register_outcome(&mut events, 1, "1.2.3.4", RegisterOutcome::AlreadyRegistered);
        assert_eq!(notice.kind, "warning");
        assert_eq!(events[0].registered_ips, vec!["1.2.3.4"]);
    }

    #[test]
    fn test_registered_with_unknown_ip_leaves_list_untouched() {
        let mut events = vec![make_event(1, vec![])];
        let notice = apply_register_outcome(&mut events, 1, "", RegisterOutcome::Registered);
        assert_eq!(notice.kind, "success");
        assert!(events[0].registered_ips.is_empty());
    }

    #[test]
    fn test_registered_appends_visitor_ip_exactly_once() {
        let mut events = vec![make_event(1, vec![]), make_event(2, vec![])];
        let notice = apply_register_outcome(&mut events, 1, "5.6.7.8", RegisterOutcome::Registered);
        assert_eq!(notice.kind, "success");
        assert_eq!(events[0].registered_ips, vec!["5.6.7.8"]);
        // Only the registered event is touched
        assert!(events[1].registered_ips.is_empty());
    }

    #[test]
    fn test_capacity_full_is_an_error_without_append() {
        let mut events = vec![make_event(1, vec![])];
        let notice =
            apply_register_outcome(&mut events, 1, "5.6.7.8", RegisterOutcome::CapacityFull);
        assert_eq!(notice.kind, "error");
        assert!(events[0].registered_ips.is_empty());
    }
}
