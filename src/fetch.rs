//! The transport seam between the high-level client and the network.

use std::future::Future;

use crate::error::HttpError;

/// Performs one `GET` against a fully formed URL and returns the response body.
///
/// [`NomicsHttp`](crate::http::NomicsHttp) is the reqwest implementation. Any
/// other implementation (a recorded-response stub, a proxy-aware client) can
/// drive [`NomicsClient`](crate::client::NomicsClient) unchanged.
///
/// Implementations must be safe to call repeatedly and in any order: every
/// Nomics endpoint is an idempotent read.
pub trait Fetch {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, HttpError>>;
}
