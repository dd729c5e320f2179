//! Banner Slider Component
//!
//! Rotates through the active banners every five seconds, with dot
//! navigation. The interval is dropped on cleanup so a torn-down home
//! page stops ticking.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::config;
use crate::models::Banner;

const ROTATE_MS: u32 = 5_000;

#[component]
pub fn BannerSlider(banners: ReadSignal<Vec<Banner>>) -> impl IntoView {
    let (current, set_current) = signal(0usize);

    // Restart the timer whenever the banner count changes
    Effect::new(move |_| {
        let count = banners.with(|b| b.len());
        if count == 0 {
            return;
        }
        let interval = send_wrapper::SendWrapper::new(Interval::new(ROTATE_MS, move || {
            set_current.update(|c| *c = (*c + 1) % count);
        }));
        on_cleanup(move || drop(interval));
    });

    view! {
        <div class="banner-slider">
            {move || {
                banners
                    .get()
                    .get(current.get())
                    .map(|banner| {
                        view! {
                            <img
                                class="banner-image"
                                src=config::asset_url(&banner.image)
                                alt=banner.title.clone()
                            />
                        }
                            .into_any()
                    })
                    .unwrap_or_else(|| view! { <div class="banner-placeholder"></div> }.into_any())
            }}

            <div class="banner-dots">
                {move || {
                    (0..banners.with(|b| b.len()))
                        .map(|index| {
                            let dot_class = move || {
                                if current.get() == index { "banner-dot active" } else { "banner-dot" }
                            };
                            view! {
                                <button class=dot_class on:click=move |_| set_current.set(index)>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
