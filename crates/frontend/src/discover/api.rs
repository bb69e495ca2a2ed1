use contracts::integrations::{ListSecurityGroupsRequest, ListSecurityGroupsResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;

/// Path and query of the security group listing of an AWS integration
pub fn security_groups_path(
    integration_name: &str,
    req: &ListSecurityGroupsRequest,
) -> Result<String, ApiError> {
    let query = serde_qs::to_string(req).map_err(|e| ApiError::Request(e.to_string()))?;
    Ok(format!(
        "/api/integrations/{}/aws/securitygroups?{}",
        urlencoding::encode(integration_name),
        query
    ))
}

/// Fetch one page of security groups of a VPC
pub async fn fetch_security_groups(
    integration_name: &str,
    req: &ListSecurityGroupsRequest,
) -> Result<ListSecurityGroupsResponse, ApiError> {
    let url = api_url(&security_groups_path(integration_name, req)?);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_http(status, &body));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page_path() {
        let req = ListSecurityGroupsRequest {
            vpc_id: "vpc-1".to_string(),
            region: "us-east-1".to_string(),
            next_token: None,
        };
        assert_eq!(
            security_groups_path("aws-oidc", &req).unwrap(),
            "/api/integrations/aws-oidc/aws/securitygroups?vpcId=vpc-1&region=us-east-1"
        );
    }

    #[test]
    fn test_next_page_path() {
        let req = ListSecurityGroupsRequest {
            vpc_id: "vpc-1".to_string(),
            region: "us-east-1".to_string(),
            next_token: Some("t1".to_string()),
        };
        assert_eq!(
            security_groups_path("my integration", &req).unwrap(),
            "/api/integrations/my%20integration/aws/securitygroups?vpcId=vpc-1&region=us-east-1&nextToken=t1"
        );
    }
}
