use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use gems_boundary::{BoundsQuery, Location, SearchQuery};

use crate::{into_json, Result, RetryPolicy};

/// Public Hidden Gems API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub async fn locations(&self) -> Result<Vec<Location>> {
        let url = format!("{}/locations", self.url);
        self.get_json(&url).await
    }

    pub async fn locations_in_bounds(&self, bounds: &BoundsQuery) -> Result<Vec<Location>> {
        let url = format!("{}/locations?{}", self.url, bounds_query_string(bounds));
        self.get_json(&url).await
    }

    pub async fn location(&self, id: &str) -> Result<Location> {
        let encoded_id = utf8_percent_encode(id, NON_ALPHANUMERIC);
        let url = format!("{}/locations/{encoded_id}", self.url);
        self.get_json(&url).await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Location>> {
        let url = format!(
            "{}/locations/search?{}",
            self.url,
            search_query_string(query)
        );
        self.get_json(&url).await
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let client = &self.client;
        self.retry
            .run(move || async move {
                log::debug!("GET {url}");
                let response = client.get(url).send().await?;
                into_json(response).await
            })
            .await
    }
}

fn bounds_query_string(bounds: &BoundsQuery) -> String {
    let BoundsQuery {
        min_lat,
        max_lat,
        min_lng,
        max_lng,
    } = bounds;
    format!("minLat={min_lat}&maxLat={max_lat}&minLng={min_lng}&maxLng={max_lng}")
}

fn search_query_string(query: &SearchQuery) -> String {
    let SearchQuery { query, category } = query;
    let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
    let mut params = format!("query={encoded_query}");
    if let Some(category) = category {
        let encoded_category = utf8_percent_encode(category, NON_ALPHANUMERIC);
        params.push_str(&format!("&category={encoded_category}"));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_as_query_parameters() {
        let bounds = BoundsQuery {
            min_lat: 36.785,
            max_lat: 36.865,
            min_lng: -3.0,
            max_lng: 10.28,
        };
        assert_eq!(
            bounds_query_string(&bounds),
            "minLat=36.785&maxLat=36.865&minLng=-3&maxLng=10.28"
        );
    }

    #[test]
    fn encode_search_query() {
        let query = SearchQuery {
            query: "rooftop café".into(),
            category: None,
        };
        assert_eq!(search_query_string(&query), "query=rooftop%20caf%C3%A9");
        let query = SearchQuery {
            query: "beach".into(),
            category: Some("viewpoint".into()),
        };
        assert_eq!(
            search_query_string(&query),
            "query=beach&category=viewpoint"
        );
    }

    #[test]
    fn trim_trailing_slash_of_base_url() {
        let api = PublicApi::new("http://localhost:3000/".into());
        assert_eq!(api.url(), "http://localhost:3000");
        assert_eq!(*api.retry_policy(), RetryPolicy::default());
    }
}
