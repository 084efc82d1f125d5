//! Validation rules for the organization registration form

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::RegistrationRecord;

/// Symbols accepted as the "special character" of a strong password
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PHONE_MIN_LEN: usize = 10;

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_WEAK_PASSWORD: &str = "Password must be at least 8 characters long and contain uppercase, lowercase, numbers, and special characters";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_INVALID_PHONE: &str = "Please enter a valid phone number";
pub const MSG_TERMS: &str = "You must accept the terms and conditions";

/// Поле формы регистрации (в порядке отображения)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CompanyName,
    CommercialRegNumber,
    PhoneNumber,
    Email,
    Password,
    ConfirmPassword,
    City,
    Region,
    ZipCode,
    BusinessType,
    Terms,
}

impl Field {
    /// Text fields that must not be empty
    pub const REQUIRED: [Field; 10] = [
        Field::CompanyName,
        Field::CommercialRegNumber,
        Field::PhoneNumber,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::City,
        Field::Region,
        Field::ZipCode,
        Field::BusinessType,
    ];

    /// Идентификатор поля (совпадает с id элемента формы)
    pub const fn id(self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::CommercialRegNumber => "commercialRegNumber",
            Field::PhoneNumber => "phoneNumber",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::City => "city",
            Field::Region => "region",
            Field::ZipCode => "zipCode",
            Field::BusinessType => "businessType",
            Field::Terms => "terms",
        }
    }

    /// `companyName` -> `company Name`
    pub fn label(self) -> String {
        let mut out = String::new();
        for c in self.id().chars() {
            if c.is_ascii_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
        out.trim().to_string()
    }

    pub fn required_message(self) -> String {
        format!("{} is required", self.label())
    }
}

/// Field -> message. Rebuilt on every call to [`validate`].
pub type ErrorMap = BTreeMap<Field, String>;

/// Проверить данные формы. Пустой результат означает, что форму можно отправлять.
///
/// Все правила применяются по очереди; более позднее правило заменяет
/// сообщение более раннего для того же поля.
pub fn validate(record: &RegistrationRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in Field::REQUIRED {
        if record.value(field).is_empty() {
            errors.insert(field, field.required_message());
        }
    }

    if !record.email.is_empty() && !is_valid_email(&record.email) {
        errors.insert(Field::Email, MSG_INVALID_EMAIL.to_string());
    }

    if !record.password.is_empty() && !is_strong_password(&record.password) {
        errors.insert(Field::Password, MSG_WEAK_PASSWORD.to_string());
    }

    // An empty side is already reported as required.
    if !record.password.is_empty()
        && !record.confirm_password.is_empty()
        && record.password != record.confirm_password
    {
        errors.insert(Field::ConfirmPassword, MSG_PASSWORD_MISMATCH.to_string());
    }

    if !record.phone_number.is_empty() && !is_valid_phone(&record.phone_number) {
        errors.insert(Field::PhoneNumber, MSG_INVALID_PHONE.to_string());
    }

    if !record.terms {
        errors.insert(Field::Terms, MSG_TERMS.to_string());
    }

    errors
}

pub fn is_submittable(record: &RegistrationRecord) -> bool {
    validate(record).is_empty()
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Length is counted in chars, so an astral symbol such as an emoji counts once.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LEN
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Optional leading `+`, then at least ten digits, spaces or hyphens
pub fn is_valid_phone(value: &str) -> bool {
    let body = value.strip_prefix('+').unwrap_or(value);
    body.chars().count() >= PHONE_MIN_LEN
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-')
}
