use crate::client::JiraClient;
use crate::error::{Error, Result};
use crate::models::{Issue, SearchParams};

/// Number of issues requested per search round trip. Balances round-trip
/// count against response size.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Forward-only cursor over a JQL result set. One page is fetched per
/// `next_page` call; the consumer pulls pages until `Ok(None)`, so a large
/// result set never has to sit in memory at once. Requests are strictly
/// sequential because each offset depends on the previous response.
#[derive(Debug)]
pub struct PagedSearch {
    client: JiraClient,
    jql: String,
    start_at: u32,
    page_size: u32,
    total: Option<u32>,
}

impl PagedSearch {
    pub fn new(client: JiraClient, jql: impl Into<String>) -> Self {
        Self::with_page_size(client, jql, DEFAULT_PAGE_SIZE)
    }

    /// Page size is fixed for the lifetime of the cursor; it exists as a
    /// constructor knob for tests, not as a per-call parameter.
    pub fn with_page_size(client: JiraClient, jql: impl Into<String>, page_size: u32) -> Self {
        Self {
            client,
            jql: jql.into(),
            start_at: 0,
            page_size,
            total: None,
        }
    }

    pub fn jql(&self) -> &str {
        &self.jql
    }

    /// Fetch the next page of issues, or `Ok(None)` once the server-side
    /// result set is exhausted. A `total` learned from a previous response
    /// terminates the sequence without another request.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Issue>>> {
        if let Some(total) = self.total {
            if self.start_at >= total {
                return Ok(None);
            }
        }

        let params = SearchParams::new()
            .start_at(self.start_at)
            .max_results(self.page_size);
        let result = self
            .client
            .search_issues(&self.jql, params)
            .await
            .map_err(classify_search_error)?;

        self.total = Some(result.total);
        if self.start_at >= result.total {
            // Covers the empty result set on the first probe.
            return Ok(None);
        }
        self.start_at += self.page_size;
        Ok(Some(result.issues))
    }
}

/// Collapse transport and protocol failures into the two caller-facing
/// kinds: a structurally invalid query (carrying the server's explanation)
/// or a generic search failure. Neither is retried.
fn classify_search_error(error: Error) -> Error {
    match error {
        Error::ApiError { status: 400, message } => {
            Error::InvalidQuery(query_error_text(&message))
        }
        Error::ApiError { status, message } => {
            Error::SearchFailed(format!("server answered {}: {}", status, message))
        }
        Error::RequestFailed(e) => Error::SearchFailed(e.to_string()),
        other => other,
    }
}

/// Jira reports bad JQL as a 400 with an `errorMessages` array; fall back
/// to the raw body when the explanation is not where expected.
fn query_error_text(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            let messages = value.get("errorMessages")?.as_array()?;
            let lines: Vec<&str> = messages.iter().filter_map(|m| m.as_str()).collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join(" "))
            }
        })
        .unwrap_or_else(|| body.to_string())
}
