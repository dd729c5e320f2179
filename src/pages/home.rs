//! Home Page
//!
//! Hero copy plus the rotating banner slider. Only banners marked active
//! are shown.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::components::BannerSlider;
use crate::fetch_task::use_fetch_guard;
use crate::models::Banner;

#[component]
pub fn HomePage() -> impl IntoView {
    let (banners, set_banners) = signal(Vec::<Banner>::new());
    let guard = use_fetch_guard();

    Effect::new(move |_| {
        let guard = guard.clone();
        spawn_local(async move {
            match api::list_banners().await {
                Ok(loaded) => {
                    if guard.is_live() {
                        let mut active: Vec<Banner> =
                            loaded.into_iter().filter(|b| b.active).collect();
                        active.sort_by_key(|b| b.order);
                        set_banners.set(active);
                    }
                }
                Err(err) => {
                    // The hero still renders without banners
                    web_sys::console::warn_1(&format!("banner fetch failed: {err}").into());
                }
            }
        });
    });

    view! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero-text">
                    <h1>"Welcome to HCMUTE Developer Student Club"</h1>
                    <p>
                        "Join our community of passionate developers and tech enthusiasts. "
                        "Learn, build, and grow together."
                    </p>
                    <div class="home-hero-actions">
                        <A href="/members" attr:class="btn primary">
                            "Join Us"
                        </A>
                        <A href="/projects" attr:class="btn">
                            "View Projects"
                        </A>
                    </div>
                </div>
                <BannerSlider banners=banners />
            </section>
        </div>
    }
}
