use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub name: String,
    #[serde(rename = "self")]
    pub self_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "iconUrl")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    // Older servers omit the category entirely.
    #[serde(rename = "statusCategory")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_category: Option<StatusCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCategory {
    pub id: u32,
    pub key: String,
    pub name: String,
    #[serde(rename = "colorName")]
    pub color_name: String,
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_deserialization() {
        let json_data = json!({
            "id": "5",
            "name": "Resolved",
            "self": "https://jira.atlassian.com/rest/api/2/status/5",
            "statusCategory": {
                "id": 3,
                "key": "done",
                "name": "Done",
                "colorName": "green",
                "self": "https://jira.atlassian.com/rest/api/2/statuscategory/3"
            }
        });

        let status: Status = serde_json::from_value(json_data).unwrap();

        assert_eq!(status.id, "5");
        assert_eq!(status.name, "Resolved");
        let category = status.status_category.unwrap();
        assert_eq!(category.key, "done");
        assert_eq!(category.color_name, "green");
    }

    #[test]
    fn test_status_without_category() {
        let json_data = json!({
            "id": "1",
            "name": "Open",
            "self": "https://jira.atlassian.com/rest/api/2/status/1"
        });

        let status: Status = serde_json::from_value(json_data).unwrap();

        assert_eq!(status.name, "Open");
        assert!(status.status_category.is_none());
    }
}
