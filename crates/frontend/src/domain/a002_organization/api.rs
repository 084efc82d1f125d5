use async_trait::async_trait;
use contracts::domain::a002_organization::{CreateOrganizationRequest, OrganizationRecord};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, join_url};
use crate::shared::error::ApiError;

const COLLECTION_PATH: &str = "/organization";

/// Внешний REST-сервис организаций
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait OrganizationApi {
    /// POST a new organization. Returns the raw response body.
    async fn create(&self, request: &CreateOrganizationRequest) -> Result<String, ApiError>;

    /// GET all organizations
    async fn list(&self) -> Result<Vec<OrganizationRecord>, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOrganizationApi {
    base_url: String,
}

impl HttpOrganizationApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    pub fn collection_url(&self) -> String {
        join_url(&self.base_url, COLLECTION_PATH)
    }
}

#[async_trait(?Send)]
impl OrganizationApi for HttpOrganizationApi {
    async fn create(&self, request: &CreateOrganizationRequest) -> Result<String, ApiError> {
        let response = Request::post(&self.collection_url())
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Some(err) = ApiError::from_status(response.status()) {
            return Err(err);
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn list(&self) -> Result<Vec<OrganizationRecord>, ApiError> {
        let response = Request::get(&self.collection_url())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if let Some(err) = ApiError::from_status(response.status()) {
            return Err(err);
        }

        response
            .json::<Vec<OrganizationRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
