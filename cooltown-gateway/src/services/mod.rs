//! Clients for the upstream Cooltown services

pub mod search_client;
pub mod tracks_client;

pub use search_client::SearchClient;
pub use tracks_client::TracksClient;

const USER_AGENT: &str = concat!("cooltown-gateway/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by both upstream clients
///
/// Transport defaults only: no request timeout, no retries.
pub fn build_http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_handles_slashes() {
        assert_eq!(join_url("http://h:1", "recognize"), "http://h:1/recognize");
        assert_eq!(join_url("http://h:1/", "/tracks/a"), "http://h:1/tracks/a");
    }
}
