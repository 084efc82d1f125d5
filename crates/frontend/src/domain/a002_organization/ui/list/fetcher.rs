use contracts::domain::a002_organization::OrganizationRecord;

use crate::domain::a002_organization::api::OrganizationApi;
use crate::shared::error::ApiError;

pub const MSG_LISTING_FAILED: &str = "Unable to load company details. Please try again later.";

/// Presentation side of the organization listing
pub trait ListingRenderer {
    fn set_loading(&self, loading: bool);
    /// Replace the container content with one block per organization
    fn show_organizations(&self, organizations: &[OrganizationRecord]);
    /// Replace the container content with an error block
    fn show_listing_error(&self, message: &str);
}

pub struct ListingFetcher<A, R> {
    api: A,
    renderer: R,
}

impl<A, R> ListingFetcher<A, R>
where
    A: OrganizationApi,
    R: ListingRenderer,
{
    pub fn new(api: A, renderer: R) -> Self {
        Self { api, renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Load organizations and render them. Returns the number rendered.
    pub async fn fetch(&self) -> Result<usize, ApiError> {
        self.renderer.set_loading(true);
        let result = self.api.list().await;
        match &result {
            Ok(items) => self.renderer.show_organizations(items),
            Err(e) => {
                log::error!("Error fetching company details: {}", e);
                self.renderer.show_listing_error(MSG_LISTING_FAILED);
            }
        }
        self.renderer.set_loading(false);
        result.map(|items| items.len())
    }
}
