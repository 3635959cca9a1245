use jsonwebtoken::Algorithm;

/// JWT signing settings.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    /// Defaults to HS256
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

impl SecurityConfig {
    /// Reads `BACKEND_JWT_SECRET`; refuses empty secrets.
    pub fn from_env() -> Result<Self, crate::AppError> {
        let secret = std::env::var("BACKEND_JWT_SECRET")
            .map_err(|_| crate::AppError::config("BACKEND_JWT_SECRET must be set"))?;
        if secret.trim().is_empty() {
            return Err(crate::AppError::config("BACKEND_JWT_SECRET must not be empty"));
        }
        Ok(Self::new(secret.into_bytes()))
    }
}
