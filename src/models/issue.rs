use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub self_url: String,
    pub fields: IssueFields,
}

/// Issue fields as returned by the search and issue endpoints. Timestamps
/// stay as the server's own strings; nothing here interprets time values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueFields {
    pub summary: String,
    #[serde(rename = "issuetype")]
    pub issue_type: IssueType,
    pub status: Status,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timetracking: Option<TimeTracking>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worklog: Option<Worklog>,

    // Custom fields vary per server; keep whatever else arrives.
    #[serde(flatten)]
    pub custom_fields: HashMap<String, serde_json::Value>,
}

/// Estimate figures. Commonly absent wholesale, and any subset of the
/// members can be missing on issues that do carry the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeTracking {
    #[serde(rename = "originalEstimate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_estimate: Option<String>,
    #[serde(rename = "remainingEstimate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_estimate: Option<String>,
    #[serde(rename = "timeSpent")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
}

// Re-export dependent types that are defined in other modules
use super::{IssueType, Status, Worklog};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_deserialization() {
        let json_data = json!({
            "id": "10000",
            "key": "TRANS-1871",
            "self": "https://jira.atlassian.com/rest/api/2/issue/10000",
            "fields": {
                "summary": "functionality issue",
                "issuetype": {
                    "id": "1",
                    "name": "Bug",
                    "self": "https://jira.atlassian.com/rest/api/2/issuetype/1",
                    "subtask": false
                },
                "status": {
                    "id": "5",
                    "name": "Resolved",
                    "self": "https://jira.atlassian.com/rest/api/2/status/5"
                },
                "created": "2016-01-25T05:15:35.706+0000",
                "timetracking": {
                    "originalEstimate": "32h",
                    "remainingEstimate": "32h"
                },
                "customfield_10001": "Custom Value"
            }
        });

        let issue: Issue = serde_json::from_value(json_data).unwrap();

        assert_eq!(issue.id, "10000");
        assert_eq!(issue.key, "TRANS-1871");
        assert_eq!(issue.fields.summary, "functionality issue");
        assert_eq!(issue.fields.created, "2016-01-25T05:15:35.706+0000");
        let tracking = issue.fields.timetracking.unwrap();
        assert_eq!(tracking.original_estimate, Some("32h".to_string()));
        assert_eq!(tracking.remaining_estimate, Some("32h".to_string()));
        assert_eq!(tracking.time_spent, None);
        assert_eq!(
            issue.fields.custom_fields.get("customfield_10001").unwrap(),
            "Custom Value"
        );
    }

    #[test]
    fn test_issue_without_timetracking() {
        let json_data = json!({
            "id": "20000",
            "key": "CLOUD-10000",
            "self": "https://jira.atlassian.com/rest/api/2/issue/20000",
            "fields": {
                "summary": "No estimates here",
                "issuetype": {
                    "id": "2",
                    "name": "Task",
                    "self": "https://jira.atlassian.com/rest/api/2/issuetype/2"
                },
                "status": {
                    "id": "1",
                    "name": "Open",
                    "self": "https://jira.atlassian.com/rest/api/2/status/1"
                },
                "created": "2017-06-29T03:59:55.237+0000"
            }
        });

        let issue: Issue = serde_json::from_value(json_data).unwrap();

        assert!(issue.fields.timetracking.is_none());
        assert!(issue.fields.worklog.is_none());

        // Absent members must stay absent after serialization, not turn
        // into nulls.
        let value = serde_json::to_value(&issue).unwrap();
        assert!(value["fields"].get("timetracking").is_none());
        assert!(value["fields"].get("worklog").is_none());
    }
}
