use serde::{Deserialize, Serialize};

use super::validation::Field;

// ============================================================================
// Registration form
// ============================================================================

/// Данные формы регистрации организации
///
/// Собирается из полей формы в момент отправки и после запроса не хранится.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub company_name: String,
    pub commercial_reg_number: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub city: String,
    pub region: String,
    pub zip_code: String,
    pub business_type: String,
    #[serde(default)]
    pub terms: bool,
}

impl RegistrationRecord {
    /// Текстовое значение поля (для `terms` всегда пустая строка)
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::CompanyName => &self.company_name,
            Field::CommercialRegNumber => &self.commercial_reg_number,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::City => &self.city,
            Field::Region => &self.region,
            Field::ZipCode => &self.zip_code,
            Field::BusinessType => &self.business_type,
            Field::Terms => "",
        }
    }

    /// Заменить значение текстового поля
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::CompanyName => &mut self.company_name,
            Field::CommercialRegNumber => &mut self.commercial_reg_number,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::City => &mut self.city,
            Field::Region => &mut self.region,
            Field::ZipCode => &mut self.zip_code,
            Field::BusinessType => &mut self.business_type,
            Field::Terms => return,
        };
        *slot = value;
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Тело POST-запроса `/organization`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrganizationRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub city: String,
    pub region: String,
    pub zip: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&RegistrationRecord> for CreateOrganizationRequest {
    fn from(r: &RegistrationRecord) -> Self {
        Self {
            name: r.company_name.clone(),
            phone: r.phone_number.clone(),
            email: r.email.clone(),
            password: r.password.clone(),
            city: r.city.clone(),
            region: r.region.clone(),
            zip: r.zip_code.clone(),
            kind: r.business_type.clone(),
        }
    }
}

/// Организация из внешнего списка (только чтение)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl OrganizationRecord {
    /// Строка для отображения в списке
    pub fn display_line(&self) -> String {
        format!(
            "Name:{}, Email:{}, Phone:{}, City:{}, Region:{}, Type:{}",
            self.name, self.email, self.phone, self.city, self.region, self.kind
        )
    }
}
