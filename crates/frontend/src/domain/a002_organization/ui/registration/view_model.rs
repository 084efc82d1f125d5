use super::controller::{Banner, RegistrationRenderer, SubmissionController, SubmissionState};
use crate::domain::a002_organization::api::HttpOrganizationApi;
use contracts::domain::a002_organization::{ErrorMap, Field, RegistrationRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the registration form
#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub form: RwSignal<RegistrationRecord>,
    pub errors: RwSignal<ErrorMap>,
    pub banners: RwSignal<Vec<Banner>>,
    pub state: RwSignal<SubmissionState>,
}

impl RegistrationViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationRecord::default()),
            errors: RwSignal::new(ErrorMap::new()),
            banners: RwSignal::new(Vec::new()),
            state: RwSignal::new(SubmissionState::Idle),
        }
    }

    pub fn error_for(&self, field: Field) -> Option<String> {
        self.errors.with(|e| e.get(&field).cloned())
    }

    pub fn is_busy(&self) -> bool {
        self.state.get().is_busy()
    }

    /// Snapshot the form and run one submit cycle
    pub fn submit_command(&self) {
        let record = self.form.get_untracked();
        let controller = SubmissionController::new(HttpOrganizationApi::from_config(), *self);
        spawn_local(async move {
            let state = controller.submit(record).await;
            log::debug!("Registration cycle finished: {:?}", state);
        });
    }
}

impl Default for RegistrationViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationRenderer for RegistrationViewModel {
    fn set_state(&self, state: SubmissionState) {
        self.state.set(state);
    }

    fn clear_errors(&self) {
        self.errors.set(ErrorMap::new());
    }

    fn show_errors(&self, errors: &ErrorMap) {
        self.errors.set(errors.clone());
    }

    fn show_banner(&self, banner: Banner) {
        self.banners.update(|b| b.push(banner));
    }

    fn reset_form(&self) {
        self.form.set(RegistrationRecord::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_organization::testing::valid_record;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_reset_form_clears_every_field() {
        Owner::new().with(|| {
            let vm = RegistrationViewModel::new();
            vm.form.set(valid_record());

            vm.reset_form();

            assert_eq!(vm.form.get_untracked(), RegistrationRecord::default());
            assert!(!vm.form.get_untracked().terms);
        });
    }

    #[test]
    fn test_errors_replaced_and_banners_appended() {
        Owner::new().with(|| {
            let vm = RegistrationViewModel::new();
            let mut errors = ErrorMap::new();
            errors.insert(Field::Email, "bad".to_string());

            vm.show_errors(&errors);
            assert_eq!(vm.error_for(Field::Email).as_deref(), Some("bad"));
            vm.clear_errors();
            assert_eq!(vm.error_for(Field::Email), None);

            vm.show_banner(Banner::failure());
            vm.show_banner(Banner::success());
            assert_eq!(vm.banners.get_untracked(), vec![Banner::failure(), Banner::success()]);

            vm.set_state(SubmissionState::Submitting);
            assert_eq!(vm.state.get_untracked(), SubmissionState::Submitting);
        });
    }
}
