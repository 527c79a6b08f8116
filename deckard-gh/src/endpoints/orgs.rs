//! GitHub organization endpoints.

use anyhow::Result;
use tracing::{debug, instrument};

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::models::GitHubUser;

impl GitHubClient {
  /// List every member of an organization visible to the client
  ///
  /// Anonymous clients only see public members.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_org_members(&self, org: &str) -> Result<Vec<GitHubUser>> {
    let url = self.segments_url(["orgs", org, "members"])?;
    self.get_all_pages(&url).await
  }

  /// Render the organization's usernames as a chat-ready list.
  ///
  /// Handy for picking an assignee when you don't know someone's GitHub
  /// login. Failures are rendered into the returned text: an unexpected
  /// success status is reported as such, any API or transport error as
  /// "Could not fetch users".
  pub async fn org_members_report(&self, org: &str) -> String {
    let users = match self.list_org_members(org).await {
      Ok(users) => users,
      Err(e) => {
        return match e.downcast_ref::<GitHubError>() {
          Some(bad_status @ GitHubError::BadStatus(status)) if status.is_success() => bad_status.to_string(),
          _ => format!("Could not fetch users for {org}: {e:#}"),
        };
      }
    };

    let mut lines = vec![format!("*Here's a list of all {org} Github usernames:*")];
    for user in users {
      debug!("Github Username: {}", user.login);
      lines.push(user.login);
    }

    lines.join("\n")
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::endpoints::test_support::test_client;

  #[tokio::test]
  async fn test_org_members_report() -> Result<()> {
    let mock_server = MockServer::start().await;

    let next = format!(r#"<{}/orgs/acme/members?per_page=10&page=2>; rel="next""#, mock_server.uri());
    Mock::given(method("GET"))
      .and(path("/orgs/acme/members"))
      .and(query_param("page", "1"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header("Link", next.as_str())
          .set_body_json(json!([{ "login": "octocat", "id": 1 }, { "login": "hubot", "id": 2 }])),
      )
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/orgs/acme/members"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "login": "monalisa", "id": 3 }])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let report = client.org_members_report("acme").await;

    assert_eq!(
      report,
      "*Here's a list of all acme Github usernames:*\noctocat\nhubot\nmonalisa"
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_org_members_report_empty_org() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/orgs/acme/members"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let report = client.org_members_report("acme").await;

    assert_eq!(report, "*Here's a list of all acme Github usernames:*");
    Ok(())
  }

  #[tokio::test]
  async fn test_org_members_report_api_error() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/orgs/acme/members"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let report = client.org_members_report("acme").await;

    assert_eq!(
      report,
      "Could not fetch users for acme: Bad response from Github: 404 Not Found"
    );
    Ok(())
  }

  #[tokio::test]
  async fn test_org_members_report_unexpected_success_status() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/orgs/acme/members"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let report = client.org_members_report("acme").await;

    assert_eq!(report, "Bad response from Github: 204 No Content");
    Ok(())
  }

  #[tokio::test]
  async fn test_org_members_report_unparseable_body() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/orgs/acme/members"))
      .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let report = client.org_members_report("acme").await;

    assert!(report.starts_with("Could not fetch users for acme: "));
    Ok(())
  }
}
