//! Pages
//!
//! One module per route; admin pages live under `admin`.

pub mod admin;
mod about;
mod contact;
mod documents;
mod event_detail;
mod events;
mod home;
mod login;
mod members;
mod projects;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use documents::DocumentsPage;
pub use event_detail::EventDetailPage;
pub use events::EventsPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use members::MembersPage;
pub use projects::ProjectsPage;
