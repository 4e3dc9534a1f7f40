use serde::{Deserialize, Serialize};

/// Response of the `serverInfo` endpoint, used only as a connection probe:
/// an endpoint that cannot produce this record is not a Jira server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(rename = "baseUrl")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "serverTitle")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_title: Option<String>,
    #[serde(rename = "deploymentType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_info_deserialization() {
        let json_data = json!({
            "baseUrl": "https://jira.atlassian.com",
            "version": "7.1.0",
            "serverTitle": "Atlassian JIRA",
            "deploymentType": "Server"
        });

        let info: ServerInfo = serde_json::from_value(json_data).unwrap();

        assert_eq!(info.base_url, "https://jira.atlassian.com");
        assert_eq!(info.version, Some("7.1.0".to_string()));
    }
}
