//! Admin Pages
//!
//! Back-office management views; all rendered behind `RequireAdmin`.

mod banners;
mod dashboard;
mod events;
mod members;
mod projects;

pub use banners::BannerManagementPage;
pub use dashboard::DashboardPage;
pub use events::EventManagementPage;
pub use members::MemberManagementPage;
pub use projects::ProjectManagementPage;
