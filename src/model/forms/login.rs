use serde::{Deserialize, Serialize};

use super::{is_blank, Aadhaar, FormError, Phone};

/// The login form as entered. There is no authentication behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub aadhaar: String,
    pub phone: String,
}

/// A login form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub name: String,
    pub email: String,
    pub aadhaar: Aadhaar,
    pub phone: Phone,
}

impl LoginForm {
    /// All four fields are required; then the Aadhaar number, then the phone
    /// number, are checked.
    pub fn validate(self) -> Result<Login, FormError> {
        if [&self.name, &self.email, &self.aadhaar, &self.phone]
            .into_iter()
            .any(|field| is_blank(field))
        {
            return Err(FormError::MissingFields);
        }
        let aadhaar = self.aadhaar.parse()?;
        let phone = self.phone.parse()?;
        Ok(Login {
            name: self.name,
            email: self.email,
            aadhaar,
            phone,
        })
    }
}
