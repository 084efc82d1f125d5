pub mod aggregate;
pub mod validation;

pub use aggregate::{CreateOrganizationRequest, OrganizationRecord, RegistrationRecord};
pub use validation::{validate, ErrorMap, Field};
