use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The worklog container embedded in a full issue record: a bounded window
/// over the issue's entries plus a total-count hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worklog {
    #[serde(rename = "startAt")]
    pub start_at: u32,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
    pub total: u32,
    pub worklogs: Vec<WorkLogEntry>,
}

/// One logged time block. Never exists outside its parent issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(rename = "updateAuthor")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(rename = "timeSpent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(rename = "timeSpentSeconds")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<u64>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

use super::User;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_worklog_deserialization() {
        let json_data = json!({
            "startAt": 0,
            "maxResults": 20,
            "total": 2,
            "worklogs": [
                {
                    "id": "100028",
                    "author": {
                        "name": "bminard",
                        "displayName": "Brian Minard"
                    },
                    "started": "2017-12-07T09:23:19.552+0000",
                    "timeSpent": "3h",
                    "timeSpentSeconds": 10800
                },
                {
                    "started": "2017-12-08T09:00:00.000+0000",
                    "timeSpent": "1h 30m"
                }
            ]
        });

        let worklog: Worklog = serde_json::from_value(json_data).unwrap();

        assert_eq!(worklog.total, 2);
        assert_eq!(worklog.worklogs.len(), 2);
        let first = &worklog.worklogs[0];
        assert_eq!(first.time_spent, Some("3h".to_string()));
        assert_eq!(
            first.author.as_ref().unwrap().display_name,
            Some("Brian Minard".to_string())
        );
        // Entries with no author still deserialize.
        assert!(worklog.worklogs[1].author.is_none());
    }
}
