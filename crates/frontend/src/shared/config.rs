//! Startup parameters of the discover flow
//!
//! The console opens the flow with a query string such as
//! `?resource=databases&integration=aws-oidc&db=orders&vpc_id=vpc-1&region=us-east-1&utm_campaign=k8s`.
//! Missing values fall back to defaults; the deploy step only shows up when
//! integration, vpc and region are all known.

use contracts::enums::ClusterResource;
use contracts::integrations::{AwsRdsDatabase, DatabaseDeployMeta};
use contracts::system::user_preferences::MarketingParams;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiscoverConfig {
    /// Preselected resource kind, by code
    pub resource: Option<String>,
    pub integration: Option<String>,
    pub db: Option<String>,
    pub engine: Option<String>,
    pub vpc_id: Option<String>,
    pub region: Option<String>,
    pub utm_campaign: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub intent: Option<String>,
}

impl DiscoverConfig {
    /// Parse a location search string, with or without the leading `?`
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
            log::warn!("ignoring malformed discover query: {}", e);
            Self::default()
        })
    }

    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::parse(&search)
    }

    pub fn deploy_meta(&self) -> Option<DatabaseDeployMeta> {
        let integration_name = non_empty(&self.integration)?;
        let vpc_id = non_empty(&self.vpc_id)?;
        let region = non_empty(&self.region)?;

        Some(DatabaseDeployMeta {
            integration_name,
            selected_db: AwsRdsDatabase {
                name: non_empty(&self.db).unwrap_or_else(|| "database".to_string()),
                engine: non_empty(&self.engine).unwrap_or_default(),
                vpc_id,
                region,
            },
        })
    }

    /// Resource kind to open with: the `resource` code if known, databases
    /// when a deploy scope is given, nothing otherwise
    pub fn initial_resource(&self) -> Option<ClusterResource> {
        self.resource
            .as_deref()
            .and_then(ClusterResource::from_code)
            .or_else(|| self.deploy_meta().map(|_| ClusterResource::Databases))
    }

    pub fn marketing_params(&self) -> MarketingParams {
        MarketingParams {
            campaign: self.utm_campaign.clone(),
            source: self.utm_source.clone(),
            medium: self.utm_medium.clone(),
            intent: self.intent.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}
