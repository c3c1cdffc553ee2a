/// Module containing the wire-level HTTP transport
pub mod http_client;
/// Module containing the resilient REST client and its trait seam
pub mod rest_client;
/// Module containing response normalization
pub mod response;

pub use http_client::{HttpTransport, QueryParams, RawResponse};
pub use rest_client::{ApiClient, RestClient};
pub use response::NormalizedResponse;
