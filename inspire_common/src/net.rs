//! Remote source constants shared by the fetcher and the command line.

/// Endpoint returning one random Kaamelott line as JSON.
pub const API_URL: &str = "https://kaamelott.chaudie.re/api/random";
/// Upper bound, in seconds, for the whole HTTP exchange.
pub const API_TIMEOUT_SECS: u64 = 5;
/// Identification sent with every request; the API rejects anonymous clients.
pub const API_USER_AGENT: &str = "Mozilla/5.0 (compatible; inspire_me/2.0; +https://github.com)";
