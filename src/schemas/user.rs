use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{normalize_email, require_email, require_text, Validate};
use crate::error::Result;
use crate::models::User;

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub full_name: Option<String>,
    pub password: String,
}

impl UserCreate {
    /// The same input with its email in canonical form.
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            ..self
        }
    }
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<()> {
        require_email("email", &self.email)?;
        require_text("password", &self.password)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserLogin {
    pub email: String,
    pub password: String,
}

impl UserLogin {
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

impl Validate for UserLogin {
    fn validate(&self) -> Result<()> {
        require_email("email", &self.email)?;
        require_text("password", &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOut {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserOut {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            created_at: user.created_at,
        }
    }
}
