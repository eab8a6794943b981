//! HTTP adapters for the translation, generation and search backends.

mod dto;
pub mod image_fetcher;
pub mod imagine_client;
pub mod lens_client;
pub mod translate_client;

use std::time::Duration;

use reqwest::Client;

pub use image_fetcher::HttpImageFetcher;
pub use imagine_client::{DEFAULT_GENERATE_URL, ImagineClient};
pub use lens_client::{DEFAULT_LENS_URL, GlensClient};
pub use translate_client::{DEFAULT_TRANSLATE_URL, GoogleTranslateClient};

/// Default User-Agent header for backend requests.
pub const USER_AGENT: &str = concat!("imagine-lens/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every backend adapter.
///
/// # Errors
/// Returns error if the TLS backend cannot be initialized.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}
