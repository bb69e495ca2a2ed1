use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Query of `GET /api/integrations/{name}/aws/securitygroups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSecurityGroupsRequest {
    pub vpc_id: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSecurityGroupsResponse {
    #[serde(default)]
    pub security_groups: Vec<SecurityGroup>,
    #[serde(default)]
    pub next_token: Option<String>,
}

impl ListSecurityGroupsResponse {
    /// Continuation token, an empty string counts as "no more pages"
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let json = r#"{
            "securityGroups": [
                {"id": "sg-1", "name": "default", "description": "default VPC group"},
                {"id": "sg-2", "name": "agents"}
            ],
            "nextToken": "t1"
        }"#;
        let resp: ListSecurityGroupsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.security_groups.len(), 2);
        assert_eq!(resp.security_groups[1].description, "");
        assert_eq!(resp.continuation(), Some("t1"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        let resp: ListSecurityGroupsResponse =
            serde_json::from_str(r#"{"securityGroups": []}"#).unwrap();
        assert_eq!(resp.continuation(), None);

        let resp: ListSecurityGroupsResponse =
            serde_json::from_str(r#"{"securityGroups": [], "nextToken": ""}"#).unwrap();
        assert_eq!(resp.continuation(), None);
    }
}
