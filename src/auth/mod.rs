pub mod credentials;
pub mod token;

pub use credentials::Credentials;
pub use token::{fetch_access_token, AccessToken, DOCS_READONLY_SCOPE};
