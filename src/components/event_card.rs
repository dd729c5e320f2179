//! Event Card Component
//!
//! Card for one event with its registration button. The button label and
//! disabled state mirror why registration is unavailable.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config;
use crate::models::Event;

fn status_label(status: &str) -> &'static str {
    match status {
        "upcoming" => "Upcoming",
        "ongoing" => "Ongoing",
        _ => "Finished",
    }
}

#[component]
pub fn EventCard(
    event: Event,
    visitor_ip: ReadSignal<String>,
    #[prop(into)] on_register: Callback<Event>,
) -> impl IntoView {
    let for_button = event.clone();
    let for_label = event.clone();

    let registered = {
        let event = event.clone();
        move || event.has_registered(&visitor_ip.get())
    };
    let disabled = {
        let event = event.clone();
        let registered = registered.clone();
        move || event.status == "past" || event.is_full() || registered()
    };
    let button_label = {
        let registered = registered.clone();
        move || {
            if for_label.status == "past" {
                "Finished"
            } else if for_label.is_full() {
                "Full"
            } else if registered() {
                "Registered"
            } else {
                "Register"
            }
        }
    };

    view! {
        <div class="event-card">
            <div class="event-cover">
                <img src=config::asset_url(&event.image) alt=event.title.clone() />
                <span class=format!("event-status {}", event.status)>
                    {status_label(&event.status)}
                </span>
            </div>
            <A href=format!("/events/{}", event.id) attr:class="event-title">
                {event.title.clone()}
            </A>
            <p class="event-meta">{format!("{} | {}", event.date, event.time)}</p>
            <p class="event-meta">{event.location.clone()}</p>
            <p class="event-description">{event.description.clone()}</p>
            <button
                class="event-register-btn"
                disabled=disabled
                on:click=move |_| on_register.run(for_button.clone())
            >
                {button_label}
            </button>
            <p class="event-capacity">
                {format!("{}/{} participants", event.current_participants, event.max_participants)}
            </p>
        </div>
    }
}
