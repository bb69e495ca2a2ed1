use contracts::enums::ClusterResource;
use contracts::integrations::DatabaseDeployMeta;
use contracts::system::user_preferences::MarketingParams;
use leptos::prelude::*;

use super::database::deploy_service::select_security_groups::SecurityGroupSelection;
use crate::shared::config::DiscoverConfig;

/// State shared by the discover steps; outlives every single step view
#[derive(Clone, Copy)]
pub struct DiscoverContext {
    pub marketing_params: RwSignal<MarketingParams>,
    pub selected_resource: RwSignal<Option<ClusterResource>>,
    pub deploy_meta: RwSignal<Option<DatabaseDeployMeta>>,
    pub selected_security_groups: RwSignal<SecurityGroupSelection>,
}

impl DiscoverContext {
    pub fn new(config: &DiscoverConfig) -> Self {
        Self {
            marketing_params: RwSignal::new(config.marketing_params()),
            selected_resource: RwSignal::new(config.initial_resource()),
            deploy_meta: RwSignal::new(config.deploy_meta()),
            selected_security_groups: RwSignal::new(SecurityGroupSelection::new()),
        }
    }
}

pub fn use_discover() -> DiscoverContext {
    use_context::<DiscoverContext>().expect("DiscoverContext context not found")
}
