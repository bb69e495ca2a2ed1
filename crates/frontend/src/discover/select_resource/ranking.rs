use contracts::enums::ClusterResource;
use contracts::system::user_preferences::MarketingParams;

use super::marketing_terms::marketing_term_matches;

/// Move resource kinds suggested by the marketing params to the front.
/// Both groups keep their relative order.
pub fn rank_resources(
    resources: Vec<ClusterResource>,
    params: &MarketingParams,
) -> Vec<ClusterResource> {
    let matches = marketing_term_matches(params);
    if matches.is_empty() {
        return resources;
    }

    let (mut ranked, rest): (Vec<_>, Vec<_>) =
        resources.into_iter().partition(|r| matches.contains(r));
    ranked.extend(rest);
    ranked
}
