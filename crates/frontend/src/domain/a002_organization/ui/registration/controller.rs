use contracts::domain::a002_organization::{validate, CreateOrganizationRequest, ErrorMap, RegistrationRecord};

use crate::domain::a002_organization::api::OrganizationApi;

pub const MSG_REGISTRATION_OK: &str = "Registration successful!";
pub const MSG_REGISTRATION_FAILED: &str = "An error occurred during registration. Please try again.";

/// Idle -> Validating -> (Invalid | Submitting) -> (Succeeded | Failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success() -> Self {
        Self {
            kind: BannerKind::Success,
            message: MSG_REGISTRATION_OK.to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: BannerKind::Failure,
            message: MSG_REGISTRATION_FAILED.to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => {
                "bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded relative mt-4"
            }
            BannerKind::Failure => {
                "bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mt-4"
            }
        }
    }
}

/// Presentation side of the registration form
pub trait RegistrationRenderer {
    fn set_state(&self, state: SubmissionState);
    /// Remove inline annotations left by the previous cycle
    fn clear_errors(&self);
    fn show_errors(&self, errors: &ErrorMap);
    /// Appended after any earlier banner
    fn show_banner(&self, banner: Banner);
    fn reset_form(&self);
}

/// Drives one submit cycle: validation, POST, feedback
pub struct SubmissionController<A, R> {
    api: A,
    renderer: R,
}

impl<A, R> SubmissionController<A, R>
where
    A: OrganizationApi,
    R: RegistrationRenderer,
{
    pub fn new(api: A, renderer: R) -> Self {
        Self { api, renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run a full cycle for `record` and return the terminal state
    pub async fn submit(&self, record: RegistrationRecord) -> SubmissionState {
        self.renderer.clear_errors();
        self.transition(SubmissionState::Validating);

        let errors = validate(&record);
        if !errors.is_empty() {
            log::debug!("Registration form has {} invalid field(s)", errors.len());
            self.renderer.show_errors(&errors);
            return self.transition(SubmissionState::Invalid);
        }

        self.transition(SubmissionState::Submitting);
        let request = CreateOrganizationRequest::from(&record);
        match self.api.create(&request).await {
            Ok(body) => {
                log::info!("Success: {}", body);
                self.renderer.show_banner(Banner::success());
                self.renderer.reset_form();
                self.transition(SubmissionState::Succeeded)
            }
            Err(e) => {
                log::error!("Error: {}", e);
                self.renderer.show_banner(Banner::failure());
                self.transition(SubmissionState::Failed)
            }
        }
    }

    fn transition(&self, state: SubmissionState) -> SubmissionState {
        self.renderer.set_state(state);
        state
    }
}
