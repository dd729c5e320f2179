//! Event Detail Page
//!
//! Single event view with a live countdown for upcoming events.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::components::{EmptyState, LoadingState};
use crate::config;
use crate::fetch_task::use_fetch_guard;
use crate::models::Event;

/// Split a remaining duration into days/hours/minutes/seconds.
/// None once the moment has passed or the target was unparseable.
fn countdown_parts(remaining_ms: f64) -> Option<(i64, i64, i64, i64)> {
    if !remaining_ms.is_finite() || remaining_ms <= 0.0 {
        return None;
    }
    let total = (remaining_ms / 1000.0) as i64;
    Some((
        total / 86_400,
        total % 86_400 / 3_600,
        total % 3_600 / 60,
        total % 60,
    ))
}

/// Millisecond timestamp for the event start, None when unparseable
fn event_timestamp_ms(date: &str, time: &str) -> Option<f64> {
    let parsed = js_sys::Date::parse(&format!("{date}T{time}"));
    if parsed.is_nan() {
        None
    } else {
        Some(parsed)
    }
}

#[component]
fn Countdown(event: Event) -> impl IntoView {
    let target = event_timestamp_ms(&event.date, &event.time);
    let (now, set_now) = signal(js_sys::Date::now());

    Effect::new(move |_| {
        let interval = send_wrapper::SendWrapper::new(Interval::new(1_000, move || {
            set_now.set(js_sys::Date::now())
        }));
        on_cleanup(move || drop(interval));
    });

    view! {
        {move || {
            target
                .and_then(|t| countdown_parts(t - now.get()))
                .map(|(days, hours, minutes, seconds)| {
                    view! {
                        <div class="countdown">
                            <span>{format!("{days}d")}</span>
                            <span>{format!("{hours:02}h")}</span>
                            <span>{format!("{minutes:02}m")}</span>
                            <span>{format!("{seconds:02}s")}</span>
                        </div>
                    }
                })
        }}
    }
}

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let (event, set_event) = signal(Option::<Event>::None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").and_then(|raw| raw.parse::<u32>().ok()));
        let guard = guard.clone();
        spawn_local(async move {
            let result = match id {
                Some(id) => api::get_event(id).await.map(Some),
                None => Ok(None),
            };
            if !guard.is_live() {
                return;
            }
            match result {
                Ok(loaded) => set_event.set(loaded),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="event-detail-page">
            <A href="/events" attr:class="back-link">
                "Back to events"
            </A>
            {move || {
                if loading.get() {
                    view! { <LoadingState /> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <EmptyState message=message /> }.into_any()
                } else {
                    match event.get() {
                        Some(event) => {
                            let is_upcoming = event.status == "upcoming";
                            let image = config::asset_url(&event.image);
                            let title = event.title.clone();
                            let schedule =
                                format!("{} | {} | {}", event.date, event.time, event.location);
                            let organizer = format!("Organized by {}", event.organizer);
                            let description = event.description.clone();
                            let capacity = format!(
                                "{}/{} participants",
                                event.current_participants, event.max_participants,
                            );
                            view! {
                                <article class="event-detail">
                                    <img
                                        class="event-detail-image"
                                        src=image
                                        alt=title.clone()
                                    />
                                    <h1>{title}</h1>
                                    <p class="event-meta">{schedule}</p>
                                    <p class="event-meta">{organizer}</p>
                                    <Show when=move || is_upcoming>
                                        <Countdown event=event.clone() />
                                    </Show>
                                    <p class="event-description">{description}</p>
                                    <p class="event-capacity">{capacity}</p>
                                </article>
                            }
                                .into_any()
                        }
                        None => view! { <EmptyState message="Event not found" /> }.into_any(),
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_parts_splits_duration() {
        // 2 days, 3 hours, 4 minutes, 5 seconds
        let ms = ((2 * 86_400 + 3 * 3_600 + 4 * 60 + 5) * 1_000) as f64;
        assert_eq!(countdown_parts(ms), Some((2, 3, 4, 5)));
    }

    #[test]
    fn test_countdown_parts_past_or_invalid() {
        assert_eq!(countdown_parts(0.0), None);
        assert_eq!(countdown_parts(-1_000.0), None);
        assert_eq!(countdown_parts(f64::NAN), None);
    }
}
