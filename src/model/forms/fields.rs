use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::FormError;

lazy_static! {
    static ref PHONE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    static ref AADHAAR: Regex = Regex::new(r"^[0-9]{12}$").unwrap();
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Declare a validated string newtype that (de)serialises as a plain string.
macro_rules! validated_field {
    ($(#[$meta:meta])* $name:ident, $pattern:ident, $error:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            inner: String,
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.inner)
            }
        }

        impl FromStr for $name {
            type Err = FormError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if $pattern.is_match(s) {
                    Ok(Self {
                        inner: s.to_string(),
                    })
                } else {
                    Err($error)
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = FormError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(field: $name) -> Self {
                field.inner
            }
        }
    };
}

validated_field!(
    /// A ten-digit phone number.
    Phone,
    PHONE,
    FormError::InvalidPhone
);

validated_field!(
    /// A twelve-digit Aadhaar number.
    Aadhaar,
    AADHAAR,
    FormError::InvalidAadhaar
);

validated_field!(
    /// An email address of the loose `local@domain.tld` shape.
    Email,
    EMAIL,
    FormError::InvalidEmail
);
