use crate::client::JiraClient;
use crate::error::Result;
use crate::fields::{NOT_AVAILABLE, canonify};
use crate::search::PagedSearch;
use serde_json::Value;
use std::io::Write;

pub const ISSUE_HEADER: [&str; 7] = [
    "issuekey",
    "type",
    "status",
    "summary",
    "created",
    "original estimate",
    "remaining estimate",
];

pub const WORKLOG_HEADER: [&str; 4] = ["issuekey", "author", "started", "time spent"];

const ISSUE_FIELD_PATHS: [&[&str]; 7] = [
    &["key"],
    &["fields", "issuetype", "name"],
    &["fields", "status", "name"],
    &["fields", "summary"],
    &["fields", "created"],
    &["fields", "timetracking", "originalEstimate"],
    &["fields", "timetracking", "remainingEstimate"],
];

// Cloud worklogs carry displayName, Server ones carry name; updateAuthor is
// the last resort for entries with no author record.
const WORKLOG_AUTHOR_PATHS: [&[&str]; 3] = [
    &["author", "displayName"],
    &["author", "name"],
    &["updateAuthor", "displayName"],
];

/// Emit one CSV row per issue. The header goes out before the first page is
/// pulled, so an empty result still produces it. Every row costs one
/// full-record fetch: search results omit the time tracking fields.
pub async fn emit_issue_rows<W: Write>(
    client: &JiraClient,
    search: &mut PagedSearch,
    out: W,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(ISSUE_HEADER)?;
    writer.flush()?;

    while let Some(page) = search.next_page().await? {
        for item in page {
            let record = client.get_issue_record(&item.key).await?;
            let row: Vec<String> = ISSUE_FIELD_PATHS
                .iter()
                .map(|path| canonify(&record, path))
                .collect();
            writer.write_record(&row)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Emit one CSV row per work-log entry, in the log's own order. An issue
/// with no entries contributes nothing beyond its fetch.
pub async fn emit_worklog_rows<W: Write>(
    client: &JiraClient,
    search: &mut PagedSearch,
    out: W,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(WORKLOG_HEADER)?;
    writer.flush()?;

    while let Some(page) = search.next_page().await? {
        for item in page {
            let record = client.get_issue_record(&item.key).await?;
            let issue_key = canonify(&record, &["key"]);
            let Some(entries) = record
                .pointer("/fields/worklog/worklogs")
                .and_then(Value::as_array)
            else {
                continue;
            };
            for entry in entries {
                writer.write_record([
                    issue_key.clone(),
                    canonify_first(entry, &WORKLOG_AUTHOR_PATHS),
                    canonify(entry, &["started"]),
                    canonify(entry, &["timeSpent"]),
                ])?;
                writer.flush()?;
            }
        }
    }
    Ok(())
}

fn canonify_first(record: &Value, paths: &[&[&str]]) -> String {
    paths
        .iter()
        .map(|path| canonify(record, path))
        .find(|text| text != NOT_AVAILABLE)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
