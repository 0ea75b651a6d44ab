//! Request authenticators.
//!
//! An [`Authenticator`] decides which `Authorization` header, if any, is
//! attached to every outgoing request.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::BearerToken;
use crate::error::ConfigError;

/// The authentication scheme used for outgoing requests.
///
/// # Example
///
/// ```rust
/// use data_product_exchange::{Authenticator, BearerToken};
///
/// let auth = Authenticator::bearer(BearerToken::new("token").unwrap());
/// assert_eq!(
///     auth.authorization_header(),
///     Some("Bearer token".to_string())
/// );
///
/// assert_eq!(Authenticator::NoAuth.authorization_header(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Authenticator {
    /// No `Authorization` header is sent.
    NoAuth,
    /// `Authorization: Bearer <token>`.
    BearerToken(BearerToken),
    /// `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// The user name.
        username: String,
        /// The password.
        password: String,
    },
}

impl Authenticator {
    /// Creates a bearer token authenticator.
    #[must_use]
    pub const fn bearer(token: BearerToken) -> Self {
        Self::BearerToken(token)
    }

    /// Creates a basic authenticator.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBasicCredentials`] if either value is empty.
    pub fn basic(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(ConfigError::EmptyBasicCredentials);
        }
        Ok(Self::Basic { username, password })
    }

    /// Returns the short type name used by the `<NAME>_AUTH_TYPE` variable.
    #[must_use]
    pub const fn auth_type(&self) -> &'static str {
        match self {
            Self::NoAuth => "noauth",
            Self::BearerToken(_) => "bearertoken",
            Self::Basic { .. } => "basic",
        }
    }

    /// Returns the `Authorization` header value for this authenticator.
    #[must_use]
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Self::NoAuth => None,
            Self::BearerToken(token) => Some(format!("Bearer {}", token.as_ref())),
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
        }
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAuth => f.write_str("NoAuth"),
            Self::BearerToken(token) => f.debug_tuple("BearerToken").field(token).finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"*****")
                .finish(),
        }
    }
}
