use reqwest::Client;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Shared TheMealDB HTTP client configuration.
///
/// No timeout is configured; requests wait for the upstream answer.
pub struct MealDbClient {
    pub client: Client,
    pub base_url: String,
}

impl MealDbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("recipe-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Builds `<base>/<endpoint>?<query>` with the query encoded.
    pub fn endpoint_url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, url::ParseError> {
        let raw = format!("{}/{}", self.base_url, endpoint);
        if query.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, query)
        }
    }
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = MealDbClient::new("http://localhost:9000/");

        assert_eq!(client.base_url, "http://localhost:9000");
    }

    #[test]
    fn should_build_url_without_query() {
        let client = MealDbClient::default();

        let url = client.endpoint_url("categories.php", &[]).unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.themealdb.com/api/json/v1/1/categories.php"
        );
    }

    #[test]
    fn should_encode_query_values() {
        let client = MealDbClient::new("http://localhost:9000");

        let url = client
            .endpoint_url("search.php", &[("s", "mac & cheese")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/search.php?s=mac+%26+cheese"
        );
    }
}
