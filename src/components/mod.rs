//! UI Components
//!
//! Reusable Leptos components.

mod admin_shell;
mod banner_slider;
mod delete_confirm_button;
mod document_card;
mod event_card;
mod member_card;
mod navbar;
mod project_card;
mod require_admin;
mod states;
mod tabs;

pub use admin_shell::AdminShell;
pub use banner_slider::BannerSlider;
pub use delete_confirm_button::DeleteConfirmButton;
pub use document_card::DocumentCard;
pub use event_card::EventCard;
pub use member_card::MemberCard;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use require_admin::RequireAdmin;
pub use states::{EmptyState, LoadingState};
pub use tabs::{TabBar, TabDef};
