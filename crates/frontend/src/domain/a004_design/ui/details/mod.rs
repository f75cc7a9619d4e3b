//! Design editor
//!
//! MVVM split:
//! - view_model.rs: form state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::DesignDetails;
pub use view_model::DesignDetailsViewModel;
