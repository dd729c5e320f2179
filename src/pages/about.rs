//! About Page

use leptos::prelude::*;

struct Activity {
    title: &'static str,
    description: &'static str,
}

const ACTIVITIES: &[Activity] = &[
    Activity {
        title: "Workshops & Seminars",
        description: "Hands-on sessions on current technologies, led by members and guests.",
    },
    Activity {
        title: "Study Groups",
        description: "Weekly groups working through fundamentals and certifications together.",
    },
    Activity {
        title: "Mentor System",
        description: "A mentor-mentee program connecting students with industry engineers.",
    },
    Activity {
        title: "Hackathons",
        description: "Internal and external competitions to build and ship under pressure.",
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-intro">
                <h1>"About the Club"</h1>
                <p>
                    "HCMUTE Developer Student Club is a student-run community for people "
                    "who like building software. We organize workshops, projects and "
                    "events around modern development practice."
                </p>
            </section>
            <section class="about-activities">
                {ACTIVITIES
                    .iter()
                    .map(|activity| {
                        view! {
                            <div class="activity-card">
                                <h3>{activity.title}</h3>
                                <p>{activity.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
