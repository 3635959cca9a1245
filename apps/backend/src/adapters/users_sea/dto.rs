//! DTOs for users_sea adapter.

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub sub: String,
    pub username: Option<String>,
    pub is_admin: bool,
}

impl UserCreate {
    pub fn new(sub: impl Into<String>, username: Option<String>) -> Self {
        Self {
            sub: sub.into(),
            username,
            is_admin: false,
        }
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

/// DTO for creating new user credentials.
#[derive(Debug, Clone)]
pub struct CredentialsCreate {
    pub user_id: i64,
    pub email: String,
    pub google_sub: Option<String>,
}

impl CredentialsCreate {
    pub fn new(user_id: i64, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            google_sub: None,
        }
    }

    pub fn with_google_sub(mut self, google_sub: impl Into<String>) -> Self {
        self.google_sub = Some(google_sub.into());
        self
    }
}

/// DTO for updating existing user credentials.
#[derive(Debug, Clone)]
pub struct CredentialsUpdate {
    pub id: i64,
    pub google_sub: Option<String>,
    pub last_login: Option<time::OffsetDateTime>,
}
