//! Shared UI crate for MatchMind. Cross-platform views and logic live here.

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod upload;
pub mod views;


pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Generic single-file picker modal (components/upload_modal.rs)
    pub mod upload_modal;
    pub use upload_modal::UploadModal;

    // Transient status banner (components/notice.rs)
    pub mod notice;
    pub use notice::{Notice, NoticeKind};
}
