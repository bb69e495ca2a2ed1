//! Resource kinds suggested by signup attribution
//!
//! Marketing params are free text (`utm_campaign=k8s-webinar`, ...). Each
//! present field is scanned for the known terms below; every hit suggests
//! the resource kind the term belongs to.

use contracts::enums::ClusterResource;
use contracts::system::user_preferences::MarketingParams;

/// Known terms in match order. Matching is case-sensitive.
pub const TERM_MATCHES: &[(&str, Option<ClusterResource>)] = &[
    ("app", Some(ClusterResource::WebApplications)),
    ("database", Some(ClusterResource::Databases)),
    ("desktop", Some(ClusterResource::WindowsDesktops)),
    ("k8s", Some(ClusterResource::Kubernetes)),
    ("kube", Some(ClusterResource::Kubernetes)),
    ("kubernetes", Some(ClusterResource::Kubernetes)),
    ("server", Some(ClusterResource::ServerSsh)),
    ("ssh", Some(ClusterResource::ServerSsh)),
    ("windows", Some(ClusterResource::WindowsDesktops)),
    // no resource kind for AWS yet
    ("aws", None),
];

/// Resource kinds matched by the marketing params, without duplicates.
///
/// The result is in first-match order but should be treated as a set.
pub fn marketing_term_matches(params: &MarketingParams) -> Vec<ClusterResource> {
    let fields = params.present_fields();
    if fields.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for field in fields {
        for (term, resource) in TERM_MATCHES {
            let Some(resource) = resource else { continue };
            if field.contains(term) && !matches.contains(resource) {
                matches.push(*resource);
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(v: Vec<ClusterResource>) -> HashSet<ClusterResource> {
        v.into_iter().collect()
    }

    #[test]
    fn test_no_params() {
        assert!(marketing_term_matches(&MarketingParams::default()).is_empty());

        let empty = MarketingParams {
            campaign: Some(String::new()),
            source: Some(String::new()),
            medium: None,
            intent: Some(String::new()),
        };
        assert!(marketing_term_matches(&empty).is_empty());
    }

    #[test]
    fn test_aws_term_has_no_resource() {
        let params = MarketingParams {
            source: Some("aws-k8s-demo".to_string()),
            ..Default::default()
        };
        assert_eq!(marketing_term_matches(&params), vec![ClusterResource::Kubernetes]);

        let params = MarketingParams {
            source: Some("aws".to_string()),
            ..Default::default()
        };
        assert!(marketing_term_matches(&params).is_empty());
    }

    #[test]
    fn test_same_resource_reported_once() {
        let params = MarketingParams {
            campaign: Some("ssh-and-server-onboarding".to_string()),
            ..Default::default()
        };
        assert_eq!(marketing_term_matches(&params), vec![ClusterResource::ServerSsh]);

        let params = MarketingParams {
            campaign: Some("kubernetes".to_string()),
            source: Some("k8s".to_string()),
            ..Default::default()
        };
        assert_eq!(marketing_term_matches(&params), vec![ClusterResource::Kubernetes]);
    }

    #[test]
    fn test_matches_across_fields() {
        let params = MarketingParams {
            medium: Some("desktop".to_string()),
            intent: Some("database".to_string()),
            ..Default::default()
        };
        assert_eq!(
            as_set(marketing_term_matches(&params)),
            as_set(vec![ClusterResource::WindowsDesktops, ClusterResource::Databases])
        );
    }

    #[test]
    fn test_one_field_many_resources() {
        let params = MarketingParams {
            intent: Some("windows-server-app".to_string()),
            ..Default::default()
        };
        assert_eq!(
            as_set(marketing_term_matches(&params)),
            as_set(vec![
                ClusterResource::WebApplications,
                ClusterResource::ServerSsh,
                ClusterResource::WindowsDesktops,
            ])
        );
    }

    #[test]
    fn test_case_sensitive() {
        let params = MarketingParams {
            campaign: Some("K8S-Launch".to_string()),
            ..Default::default()
        };
        assert!(marketing_term_matches(&params).is_empty());
    }
}
