//! In-memory collaborator and renderer doubles for unit tests

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::a002_organization::{
    CreateOrganizationRequest, ErrorMap, OrganizationRecord, RegistrationRecord,
};

use super::api::OrganizationApi;
use super::ui::list::ListingRenderer;
use super::ui::registration::{Banner, RegistrationRenderer, SubmissionState};
use crate::shared::error::ApiError;

pub fn valid_record() -> RegistrationRecord {
    RegistrationRecord {
        company_name: "Acme Trading".into(),
        commercial_reg_number: "1010123456".into(),
        phone_number: "+966 55-123-4567".into(),
        email: "info@acme.sa".into(),
        password: "Abc123!@".into(),
        confirm_password: "Abc123!@".into(),
        city: "Riyadh".into(),
        region: "Central".into(),
        zip_code: "11564".into(),
        business_type: "retail".into(),
        terms: true,
    }
}

#[derive(Clone, Default)]
pub struct FakeApi {
    create_result: Option<Result<String, ApiError>>,
    list_result: Option<Result<Vec<OrganizationRecord>, ApiError>>,
    created: Rc<RefCell<Vec<CreateOrganizationRequest>>>,
}

impl FakeApi {
    pub fn with_create_status(status: u16) -> Self {
        let result = match ApiError::from_status(status) {
            None => Ok(r#"{"id":"1"}"#.to_string()),
            Some(err) => Err(err),
        };
        Self {
            create_result: Some(result),
            ..Self::default()
        }
    }

    pub fn with_organizations(items: Vec<OrganizationRecord>) -> Self {
        Self {
            list_result: Some(Ok(items)),
            ..Self::default()
        }
    }

    pub fn with_list_error(err: ApiError) -> Self {
        Self {
            list_result: Some(Err(err)),
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        let err = ApiError::Network("connection refused".into());
        Self {
            create_result: Some(Err(err.clone())),
            list_result: Some(Err(err)),
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<CreateOrganizationRequest> {
        self.created.borrow().clone()
    }
}

#[async_trait(?Send)]
impl OrganizationApi for FakeApi {
    async fn create(&self, request: &CreateOrganizationRequest) -> Result<String, ApiError> {
        self.created.borrow_mut().push(request.clone());
        self.create_result
            .clone()
            .unwrap_or_else(|| Err(ApiError::Network("not configured".into())))
    }

    async fn list(&self) -> Result<Vec<OrganizationRecord>, ApiError> {
        self.list_result
            .clone()
            .unwrap_or_else(|| Err(ApiError::Network("not configured".into())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    State(SubmissionState),
    ClearErrors,
    Errors(ErrorMap),
    Banner(Banner),
    ResetForm,
    Loading(bool),
    Organizations(Vec<OrganizationRecord>),
    ListingError(String),
}

#[derive(Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<RenderCall>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.borrow().clone()
    }

    pub fn states(&self) -> Vec<SubmissionState> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                RenderCall::State(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: RenderCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl RegistrationRenderer for RecordingRenderer {
    fn set_state(&self, state: SubmissionState) {
        self.push(RenderCall::State(state));
    }

    fn clear_errors(&self) {
        self.push(RenderCall::ClearErrors);
    }

    fn show_errors(&self, errors: &ErrorMap) {
        self.push(RenderCall::Errors(errors.clone()));
    }

    fn show_banner(&self, banner: Banner) {
        self.push(RenderCall::Banner(banner));
    }

    fn reset_form(&self) {
        self.push(RenderCall::ResetForm);
    }
}

impl ListingRenderer for RecordingRenderer {
    fn set_loading(&self, loading: bool) {
        self.push(RenderCall::Loading(loading));
    }

    fn show_organizations(&self, organizations: &[OrganizationRecord]) {
        self.push(RenderCall::Organizations(organizations.to_vec()));
    }

    fn show_listing_error(&self, message: &str) {
        self.push(RenderCall::ListingError(message.to_string()));
    }
}
