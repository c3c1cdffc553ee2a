/// Default base URL of the FinanceAnalyst Pro REST API
pub const DEFAULT_BASE_URL: &str = "https://api.financeanalystpro.com/v1";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default total number of attempts for a request before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Base delay in milliseconds for the exponential backoff between attempts
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 1000;
/// Seconds to wait after a 429 when the server sends no usable Retry-After
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;
/// How many 429 replays are allowed before the call fails as rate limited
pub const DEFAULT_RATE_LIMIT_RETRIES: u32 = 5;
/// Default client side throughput ceiling, requests per period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 10;
/// Default rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECS: u64 = 1;
/// Default rate limiter burst size
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 1;
/// Margin in seconds subtracted from a token's lifetime when deciding
/// whether it should be treated as expired
pub const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;
/// Response header carrying the server side request id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";
/// Request header carrying the client generated correlation id
pub const CLIENT_REQUEST_ID_HEADER: &str = "X-Client-Request-Id";
/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "X-API-Key";
/// User agent string used in HTTP requests to identify this client to the API
pub const USER_AGENT: &str = concat!("financeanalyst-client/", env!("CARGO_PKG_VERSION"));
