use std::collections::HashMap;

use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome, Request};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::request::{OpenApiFromRequest, RequestHeaderInput};
use tipline_config::config;
use tipline_permissions::{has_permission, PortalPermission, Role};
use tipline_result::{create_error, Error, Result};

/// Resolved caller identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Identity the caller acts as
    pub id: String,
    /// Role the caller acts under
    pub role: Role,
}

impl Principal {
    /// Ensure this principal may invoke the given operation
    pub fn require(&self, permission: PortalPermission) -> Result<()> {
        if has_permission(self.role, permission) {
            Ok(())
        } else {
            Err(create_error!(MissingPermission {
                permission: permission.to_string()
            }))
        }
    }
}

/// Resolves caller tokens to identities
///
/// Stands in for the external identity system; injected as managed
/// state so deployments can swap in their own resolution.
#[rocket::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a token to a principal
    async fn resolve(&self, token: &str) -> Option<Principal>;
}

/// Identity provider backed by the static token table in configuration
pub struct TokenIdentityProvider {
    tokens: HashMap<String, Principal>,
}

impl TokenIdentityProvider {
    pub fn new(tokens: HashMap<String, Principal>) -> TokenIdentityProvider {
        TokenIdentityProvider { tokens }
    }

    /// Load the token table from configuration
    pub async fn from_config() -> TokenIdentityProvider {
        let config = config().await;

        TokenIdentityProvider::new(
            config
                .api
                .identity
                .tokens
                .into_iter()
                .filter_map(|(token, entry)| {
                    if let Ok(role) = entry.role.parse() {
                        Some((
                            token,
                            Principal {
                                id: entry.username,
                                role,
                            },
                        ))
                    } else {
                        tracing::warn!(
                            "Ignoring token for {}: unknown role {}",
                            entry.username,
                            entry.role
                        );
                        None
                    }
                })
                .collect(),
        )
    }
}

#[rocket::async_trait]
impl IdentityProvider for TokenIdentityProvider {
    async fn resolve(&self, token: &str) -> Option<Principal> {
        self.tokens.get(token).cloned()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Principal {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let principal: &Option<Principal> = request
            .local_cache_async(async {
                let provider = request
                    .rocket()
                    .state::<Box<dyn IdentityProvider>>()
                    .expect("`IdentityProvider`");

                let header_session_token = request
                    .headers()
                    .get("x-session-token")
                    .next()
                    .map(|x| x.to_string());

                if let Some(token) = header_session_token {
                    provider.resolve(&token).await
                } else {
                    None
                }
            })
            .await;

        if let Some(principal) = principal {
            Outcome::Success(principal.clone())
        } else {
            Outcome::Error((Status::Unauthorized, create_error!(NotAuthenticated)))
        }
    }
}

impl<'r> OpenApiFromRequest<'r> for Principal {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        Ok(RequestHeaderInput::None)
    }
}
