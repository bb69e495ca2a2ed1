use serde::{Deserialize, Serialize};

/// Attribution parameters captured at signup, stored in cluster user preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingParams {
    #[serde(default)]
    pub campaign: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub intent: Option<String>,
}

impl MarketingParams {
    /// Non-empty fields in the order campaign, medium, source, intent
    pub fn present_fields(&self) -> Vec<&str> {
        [&self.campaign, &self.medium, &self.source, &self.intent]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .filter(|f| !f.is_empty())
            .collect()
    }
}
