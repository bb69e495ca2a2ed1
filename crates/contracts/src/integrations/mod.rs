//! DTOs of the cloud integration API

pub mod aws_rds;
pub mod security_group;

pub use aws_rds::{AwsRdsDatabase, DatabaseDeployMeta};
pub use security_group::{ListSecurityGroupsRequest, ListSecurityGroupsResponse, SecurityGroup};
