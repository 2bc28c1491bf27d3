use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::service::AUTH_INSTANCE_ID;

/// Header carrying the API key when `{prefix}_APIKEY_HEADER` is unset.
const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

/// The configured credentials cannot be attached to a lakehouse request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// A secret or identifier is not a valid HTTP header value.
    #[display("{header} header cannot carry the {credential}: {message}")]
    InvalidHeaderValue {
        /// Header the value was meant for.
        header: String,
        /// What the value is, e.g. `bearer token`.
        credential: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// `ApiKey` names a header that is not a valid HTTP header name.
    #[display("'{header_name}' cannot be used as the API key header")]
    InvalidApiKeyHeader {
        /// The configured header name.
        header_name: String,
    },

    /// Basic credentials are joined with `:`, so the username cannot hold one.
    #[display("basic auth username '{username}' contains ':'")]
    ColonInUsername {
        /// The rejected username.
        username: String,
    },

    /// `{prefix}_AUTH_TYPE` holds an unknown value.
    #[display("unsupported {variable} '{value}', expected bearer, basic, apikey or noauth")]
    UnsupportedAuthType {
        /// Name of the variable.
        variable: String,
        /// The value found.
        value: String,
    },

    /// The selected authentication type needs a variable that is not set.
    #[display("{variable} is required by {auth_type} authentication")]
    MissingCredential {
        /// Name of the missing variable.
        variable: String,
        /// The selected authentication type.
        auth_type: AuthType,
    },
}

/// Authentication scheme selected by `{prefix}_AUTH_TYPE`.
///
/// Parsing is case-insensitive; `bearertoken` is accepted for `bearer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AuthType {
    /// `Authorization: Bearer <token>` from `{prefix}_BEARER_TOKEN`.
    #[display("bearer")]
    Bearer,
    /// `Authorization: Basic ...` from `{prefix}_USERNAME` and `{prefix}_PASSWORD`.
    #[display("basic")]
    Basic,
    /// `{prefix}_APIKEY` in the `{prefix}_APIKEY_HEADER` header.
    #[display("apikey")]
    ApiKey,
    /// No credentials, even if some are set.
    #[display("noauth")]
    NoAuth,
}

impl FromStr for AuthType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bearer" | "bearertoken" => Ok(Self::Bearer),
            "basic" => Ok(Self::Basic),
            "apikey" => Ok(Self::ApiKey),
            "noauth" => Ok(Self::NoAuth),
            _ => Err(value.to_string()),
        }
    }
}

/// Wrapper for sensitive string data that zeroes its memory on drop.
///
/// Serialized as a plain string, so bucket and database secrets can be sent
/// in request bodies. `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// The secret itself.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares the secret with `other`.
    pub fn equals_str(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString(***)")
    }
}

// Long secrets keep their first and last four characters to tell tokens apart in logs.
impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.chars().count();
        if count <= 8 {
            return f.write_str("***");
        }
        let head = self.0.chars().take(4).collect::<String>();
        let tail = self.0.chars().skip(count - 4).collect::<String>();
        write!(f, "{head}...{tail}")
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Credentials sent to the lakehouse service.
///
/// Tokens are used as given: acquiring or refreshing them is left to the
/// caller.
///
/// # Examples
///
/// ```rust
/// use lakehouse_sdk::{Authentication, LakehouseClient};
///
/// # fn example() -> Result<(), lakehouse_sdk::LakehouseError> {
/// let _client = LakehouseClient::builder()
///     .with_authentication(Authentication::Basic {
///         username: "ibmlhadmin".to_string(),
///         password: "password".into(),
///     })
///     .with_auth_instance_id("crn:v1:lakehouse:instance")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub enum Authentication {
    /// Sends `Authorization: Bearer <token>`.
    Bearer(SecureString),

    /// Sends `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// The username, without `:`.
        username: String,
        /// The password.
        password: SecureString,
    },

    /// Sends the key as is in a dedicated header.
    ApiKey {
        /// Header carrying the key, e.g. `X-API-Key`.
        header_name: String,
        /// The API key.
        key: SecureString,
    },
}

impl Authentication {
    /// The scheme of these credentials.
    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::Bearer(_) => AuthType::Bearer,
            Self::Basic { .. } => AuthType::Basic,
            Self::ApiKey { .. } => AuthType::ApiKey,
        }
    }

    fn header(&self) -> Result<(HeaderName, HeaderValue), AuthenticationError> {
        match self {
            Self::Bearer(token) => {
                let bearer = format!("Bearer {}", token.as_str());
                let value = secret_value(&AUTHORIZATION, "bearer token", &bearer)?;
                Ok((AUTHORIZATION, value))
            }
            Self::Basic { username, password } => {
                if username.contains(':') {
                    return Err(AuthenticationError::ColonInUsername {
                        username: username.clone(),
                    });
                }
                let credentials = STANDARD.encode(format!("{username}:{}", password.as_str()));
                let basic = format!("Basic {credentials}");
                let value = secret_value(&AUTHORIZATION, "basic credentials", &basic)?;
                Ok((AUTHORIZATION, value))
            }
            Self::ApiKey { header_name, key } => {
                let name = HeaderName::from_bytes(header_name.as_bytes()).map_err(|_| {
                    AuthenticationError::InvalidApiKeyHeader {
                        header_name: header_name.clone(),
                    }
                })?;
                let value = secret_value(&name, "API key", key.as_str())?;
                Ok((name, value))
            }
        }
    }
}

fn secret_value(
    header: &HeaderName,
    credential: &'static str,
    value: &str,
) -> Result<HeaderValue, AuthenticationError> {
    let mut value =
        HeaderValue::from_str(value).map_err(|err| AuthenticationError::InvalidHeaderValue {
            header: header.to_string(),
            credential,
            message: err.to_string(),
        })?;
    value.set_sensitive(true);
    Ok(value)
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(token) => f.debug_tuple("Bearer").field(token).finish(),
            Self::Basic { username, password } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", password)
                .finish(),
            Self::ApiKey { header_name, key } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("key", key)
                .finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(token) => write!(f, "bearer {token}"),
            Self::Basic { username, .. } => write!(f, "basic {username}"),
            Self::ApiKey { header_name, key } => write!(f, "apikey {header_name}: {key}"),
        }
    }
}

/// Adds the client credentials and the lakehouse instance id to requests.
///
/// Each header is only added when the request does not carry it yet, so a
/// caller header or an `auth_instance_id` parameter wins over the client
/// configuration.
#[derive(Debug, Clone, Default)]
pub(crate) struct Authenticator {
    pub(super) credentials: Option<Authentication>,
    pub(super) instance_id: Option<String>,
}

impl Authenticator {
    /// Reads `{prefix}_AUTH_TYPE`, the credentials it needs, and
    /// `{prefix}_AUTH_INSTANCE_ID`.
    ///
    /// Without `{prefix}_AUTH_TYPE`, a `{prefix}_BEARER_TOKEN` selects bearer
    /// authentication.
    pub(super) fn from_vars(
        prefix: &str,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AuthenticationError> {
        let required = |suffix: &str, auth_type: AuthType| {
            var(suffix).ok_or_else(|| AuthenticationError::MissingCredential {
                variable: format!("{prefix}_{suffix}"),
                auth_type,
            })
        };

        let auth_type = var("AUTH_TYPE")
            .map(|value| {
                value
                    .parse::<AuthType>()
                    .map_err(|value| AuthenticationError::UnsupportedAuthType {
                        variable: format!("{prefix}_AUTH_TYPE"),
                        value,
                    })
            })
            .transpose()?
            .or_else(|| var("BEARER_TOKEN").map(|_| AuthType::Bearer));

        let credentials = match auth_type {
            Some(AuthType::Bearer) => Some(Authentication::Bearer(
                required("BEARER_TOKEN", AuthType::Bearer)?.into(),
            )),
            Some(AuthType::Basic) => Some(Authentication::Basic {
                username: required("USERNAME", AuthType::Basic)?,
                password: required("PASSWORD", AuthType::Basic)?.into(),
            }),
            Some(AuthType::ApiKey) => Some(Authentication::ApiKey {
                header_name: var("APIKEY_HEADER")
                    .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string()),
                key: required("APIKEY", AuthType::ApiKey)?.into(),
            }),
            Some(AuthType::NoAuth) | None => None,
        };

        Ok(Self {
            credentials,
            instance_id: var("AUTH_INSTANCE_ID"),
        })
    }

    pub(crate) fn authenticate(&self, headers: &mut HeaderMap) -> Result<(), AuthenticationError> {
        if let Some(credentials) = &self.credentials {
            let (name, value) = credentials.header()?;
            if headers.contains_key(&name) {
                trace!(header = %name, "keeping the caller credentials");
            } else {
                headers.insert(name, value);
            }
        }

        if let Some(instance_id) = &self.instance_id {
            let name = HeaderName::from_static("authinstanceid");
            if !headers.contains_key(&name) {
                let value = HeaderValue::from_str(instance_id).map_err(|err| {
                    AuthenticationError::InvalidHeaderValue {
                        header: AUTH_INSTANCE_ID.to_string(),
                        credential: "instance id",
                        message: err.to_string(),
                    }
                })?;
                headers.insert(name, value);
            }
        }
        Ok(())
    }
}
