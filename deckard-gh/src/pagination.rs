//! # Pagination
//!
//! GitHub list endpoints return results a page at a time and advertise the
//! next page through the `Link` response header. Listings here always request
//! [`PER_PAGE`] items per page.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::client::GitHubClient;
use crate::consts::PER_PAGE;

/// One page of a list endpoint
#[derive(Debug)]
pub struct Page<T> {
  pub items: Vec<T>,
  /// Number of the following page, `None` on the last page
  pub next_page: Option<u32>,
}

/// Extract the `page` query parameter of the `rel="next"` entry of a `Link`
/// header value.
///
/// ```
/// use deckard_gh::pagination::next_page_from_link;
///
/// let link = r#"<https://api.github.com/orgs/acme/repos?per_page=10&page=2>; rel="next", <https://api.github.com/orgs/acme/repos?per_page=10&page=5>; rel="last""#;
/// assert_eq!(next_page_from_link(link), Some(2));
/// ```
pub fn next_page_from_link(link: &str) -> Option<u32> {
  link.split(',').find_map(|entry| {
    let mut parts = entry.split(';');
    let target = parts.next()?.trim().strip_prefix('<')?.strip_suffix('>')?;
    let is_next = parts.any(|param| param.trim().replace(' ', "") == r#"rel="next""#);
    if !is_next {
      return None;
    }

    let url = Url::parse(target).ok()?;
    url
      .query_pairs()
      .find(|(key, _)| key == "page")
      .and_then(|(_, value)| value.parse().ok())
  })
}

fn next_page(headers: &HeaderMap) -> Option<u32> {
  headers
    .get(LINK)
    .and_then(|value| value.to_str().ok())
    .and_then(next_page_from_link)
}

impl GitHubClient {
  /// Fetch a single page of a list endpoint
  pub async fn get_page<T: DeserializeOwned>(&self, url: &str, page: u32) -> Result<Page<T>> {
    trace!("Fetching page {} of {}", page, url);

    let request = self
      .get(url)
      .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
    let response = Self::send(request, url).await?;

    if response.status() != StatusCode::OK {
      return Err(Self::unexpected_status(response).await);
    }

    let next_page = next_page(response.headers());
    let items = response
      .json::<Vec<T>>()
      .await
      .with_context(|| format!("Failed to parse page {page} of {url}"))?;

    Ok(Page { items, next_page })
  }

  /// Walk every page of a list endpoint and collect the items
  ///
  /// The first failing page aborts the walk.
  pub async fn get_all_pages<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
    let mut all_items = Vec::new();
    let mut page = 1;

    loop {
      let Page { items, next_page } = self.get_page::<T>(url, page).await?;
      all_items.extend(items);

      match next_page {
        // A next page that does not move forward would loop forever
        Some(next) if next > page => page = next,
        _ => break,
      }
    }

    debug!("Collected {} items from {}", all_items.len(), url);
    Ok(all_items)
  }
}
