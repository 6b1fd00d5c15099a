use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};
use crate::models::ListingResponse;

/// Upper bound on titles returned, sent upstream as `limit` and enforced again locally.
pub const MAX_TITLES: usize = 10;

/// Builds the client used for listing requests. Redirects are never followed:
/// Reddit answers an unknown subreddit with a redirect to its search page.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .redirect(Policy::none())
        .build()
        .map_err(FetchError::ClientBuild)
}

pub fn listing_url(config: &FetchConfig, subreddit: &str) -> String {
    format!(
        "{}/r/{}/hot.json",
        config.base_url.trim_end_matches('/'),
        subreddit
    )
}

pub(crate) fn titles_from_listing(listing_response: ListingResponse) -> Vec<String> {
    listing_response
        .data
        .children
        .into_iter()
        .filter_map(|child| child.data?.title.filter(|title| !title.is_empty()))
        .take(MAX_TITLES)
        .collect()
}

/// Fetches the hot listing of `subreddit` and returns up to [`MAX_TITLES`]
/// titles in listing order.
///
/// Any status of 300 or above is a rejection and its body is not read.
/// A valid listing without children yields an empty list, not an error.
/// A 2xx body that is not listing JSON, including an empty one, is a
/// [`FetchError::MalformedResponse`].
pub async fn fetch_hot_titles(
    client: &Client,
    config: &FetchConfig,
    subreddit: &str,
) -> Result<Vec<String>> {
    let url = listing_url(config, subreddit);
    debug!(%url, "requesting hot listing");

    let outcome = request_listing(client, &url).await.map(titles_from_listing);
    match &outcome {
        Ok(titles) => debug!(subreddit, count = titles.len(), "hot listing fetched"),
        Err(e) => warn!(subreddit, error = %e, "no titles for subreddit"),
    }
    outcome
}

async fn request_listing(client: &Client, url: &str) -> Result<ListingResponse> {
    let response = client
        .get(url)
        .query(&[("limit", MAX_TITLES)])
        .send()
        .await?;

    let status = response.status();
    if status.as_u16() >= 300 {
        return Err(FetchError::UpstreamRejection { status });
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice::<ListingResponse>(&body)?)
}
