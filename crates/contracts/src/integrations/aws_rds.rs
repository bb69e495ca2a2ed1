use serde::{Deserialize, Serialize};

/// RDS database picked in the previous discover step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsRdsDatabase {
    pub name: String,
    #[serde(default)]
    pub engine: String,
    pub vpc_id: String,
    pub region: String,
}

/// Everything the deploy-service step needs to know about the enrolled database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseDeployMeta {
    /// Name of the AWS OIDC integration used for API calls
    pub integration_name: String,
    pub selected_db: AwsRdsDatabase,
}
