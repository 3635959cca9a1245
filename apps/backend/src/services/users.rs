use sea_orm::ConnectionTrait;
use tracing::{debug, info, warn};

use crate::config::admin_emails::{normalize_email, AdminEmails};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::logging::pii::Redacted;
use crate::repos::users::{self, CredentialsCreate, CredentialsUpdate, User, UserCreate};

/// Redacts a google_sub value for logging purposes.
/// Shows only the first 4 characters followed by asterisks.
fn redact_google_sub(google_sub: &str) -> String {
    match google_sub.char_indices().nth(4) {
        Some((cut, _)) => format!("{}***", &google_sub[..cut]),
        None => "*".repeat(google_sub.chars().count()),
    }
}

/// A logged-in user together with the email the token is minted for.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginIdentity {
    pub user: User,
    pub email: String,
}

/// Ensures a user exists for a federated login, creating one if necessary.
///
/// Idempotent per email. Users whose email matches `admin_emails` are flagged
/// admin on creation and promoted on later logins.
pub async fn ensure_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    name: Option<&str>,
    google_sub: &str,
    admin_emails: Option<&AdminEmails>,
) -> Result<LoginIdentity, DomainError> {
    let email = normalize_email(email);
    validate_email(&email)?;
    let google_sub = google_sub.trim();
    if google_sub.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidGoogleSub,
            "google_sub must not be empty",
        ));
    }
    let wants_admin = admin_emails.is_some_and(|list| list.matches(&email));

    let user = match users::find_credentials_by_email(conn, &email).await? {
        Some(credential) => {
            if let Some(existing) = credential.google_sub.as_deref() {
                if existing != google_sub {
                    warn!(
                        user_id = credential.user_id,
                        email = %Redacted(&email),
                        incoming_google_sub = %redact_google_sub(google_sub),
                        existing_google_sub = %redact_google_sub(existing),
                        "Google sub mismatch detected"
                    );
                    return Err(DomainError::conflict(
                        ConflictKind::GoogleSubMismatch,
                        "This email is already linked to a different Google account",
                    ));
                }
            }

            let user_id = credential.user_id;
            users::update_credentials(
                conn,
                CredentialsUpdate {
                    id: credential.id,
                    google_sub: Some(google_sub.to_string()),
                    last_login: Some(time::OffsetDateTime::now_utc()),
                },
            )
            .await?;

            let user = users::find_user_by_id(conn, user_id).await?.ok_or_else(|| {
                DomainError::not_found(
                    crate::errors::domain::NotFoundKind::User,
                    "User not found",
                )
            })?;
            debug!(user_id, email = %Redacted(&email), "Repeat login for existing user");

            if wants_admin && !user.is_admin {
                info!(user_id, "Promoting user listed in ADMIN_EMAILS");
                users::set_admin(conn, user_id, true).await?
            } else {
                user
            }
        }
        None => {
            let username = derive_username(name, &email);
            let user = users::create_user(
                conn,
                UserCreate::new(google_sub, username).admin(wants_admin),
            )
            .await?;
            users::create_credentials(
                conn,
                CredentialsCreate::new(user.id, email.clone()).with_google_sub(google_sub),
            )
            .await?;

            info!(
                user_id = user.id,
                email = %Redacted(&email),
                google_sub = %redact_google_sub(google_sub),
                is_admin = user.is_admin,
                "First user creation"
            );
            user
        }
    };

    Ok(LoginIdentity { user, email })
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
    if valid {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidEmail,
            "Email must look like name@domain",
        ))
    }
}

/// Derives a username from the provided name or email local-part.
fn derive_username(name: Option<&str>, email: &str) -> Option<String> {
    if let Some(clean_name) = name.map(str::trim).filter(|n| !n.is_empty()) {
        return Some(clean_name.to_string());
    }
    email
        .split_once('@')
        .map(|(local, _)| local)
        .filter(|local| !local.is_empty())
        .map(str::to_string)
}
