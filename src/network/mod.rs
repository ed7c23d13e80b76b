//! Remote data boundary: the provider contract and its HTTP implementation.

mod error;
mod http;
mod provider;

pub use error::FetchError;
pub use http::HttpPostProvider;
pub use provider::PostProvider;
