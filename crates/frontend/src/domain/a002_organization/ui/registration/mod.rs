//! Organization Registration UI Module
//!
//! MVVM split:
//! - controller.rs: submit state machine behind the `RegistrationRenderer` interface
//! - view_model.rs: signals implementing the renderer
//! - view.rs: Leptos component (pure UI)

mod controller;
mod view;
mod view_model;

pub use controller::{
    Banner, BannerKind, RegistrationRenderer, SubmissionController, SubmissionState,
    MSG_REGISTRATION_FAILED, MSG_REGISTRATION_OK,
};
pub use view::RegistrationForm;
pub use view_model::RegistrationViewModel;
