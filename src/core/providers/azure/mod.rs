//! Cognitive Services region and authentication helpers.

mod auth;
mod region;

pub use auth::{
    HttpTokenIssuer, SUBSCRIPTION_KEY_HEADER, TOKEN_RENEWAL_INTERVAL, TokenAuthenticator,
    TokenIssuer, TokenState, build_bearer_header,
};
pub use region::AzureRegion;
