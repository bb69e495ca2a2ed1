//! Page accumulator behind the security group picker
//!
//! Pure state, no signals: the view model wraps it in an `RwSignal` and
//! drives it from async fetches. Every fetch is ticketed with a generation
//! number so late or duplicate responses can be dropped.

use contracts::integrations::{ListSecurityGroupsResponse, SecurityGroup};

/// Whether another page can be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// A continuation token is stored
    Ready,
    /// A page request is in flight
    Loading,
    /// No continuation token, every page has been loaded
    Disabled,
}

/// Lifecycle of the fetch attempt that drives which view is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptStatus {
    Processing,
    Failed(String),
    Success,
}

/// Ticket handed out by [`SecurityGroupPage::begin_fetch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub next_token: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SecurityGroupPage {
    pub items: Vec<SecurityGroup>,
    pub next_token: Option<String>,
    pub fetch_status: FetchStatus,
    pub attempt: AttemptStatus,
    generation: u64,
    in_flight: bool,
    status_before_fetch: FetchStatus,
    pages_loaded: usize,
    disposed: bool,
}

impl Default for SecurityGroupPage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_token: None,
            fetch_status: FetchStatus::Disabled,
            attempt: AttemptStatus::Processing,
            generation: 0,
            in_flight: false,
            status_before_fetch: FetchStatus::Disabled,
            pages_loaded: 0,
            disposed: false,
        }
    }
}

impl SecurityGroupPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next page request.
    ///
    /// Returns `None` while another request is in flight, after the last page
    /// was loaded, or once the owning view is gone. The very first call always
    /// succeeds.
    pub fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.disposed || self.in_flight {
            return None;
        }
        if self.pages_loaded > 0 && self.next_token.is_none() {
            return None;
        }

        self.generation += 1;
        self.in_flight = true;
        self.status_before_fetch = self.fetch_status;
        self.fetch_status = FetchStatus::Loading;

        Some(PageRequest {
            generation: self.generation,
            next_token: self.next_token.clone(),
        })
    }

    /// Append a fetched page. Returns `false` if the response was dropped.
    pub fn apply_page(&mut self, generation: u64, response: ListSecurityGroupsResponse) -> bool {
        if !self.accepts(generation) {
            return false;
        }

        let next_token = response.continuation().map(str::to_string);
        self.in_flight = false;
        self.items.extend(response.security_groups);
        self.fetch_status = if next_token.is_some() {
            FetchStatus::Ready
        } else {
            FetchStatus::Disabled
        };
        self.next_token = next_token;
        self.attempt = AttemptStatus::Success;
        self.pages_loaded += 1;
        true
    }

    /// Record a failed fetch. Items and token stay as they were so a retry
    /// asks for the same page again. Returns `false` if the failure was dropped.
    pub fn apply_failure(&mut self, generation: u64, message: String) -> bool {
        if !self.accepts(generation) {
            return false;
        }

        self.in_flight = false;
        self.fetch_status = self.status_before_fetch;
        self.attempt = AttemptStatus::Failed(message);
        true
    }

    /// Owning view was unmounted; everything arriving later is ignored
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.in_flight = false;
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }

    pub fn can_load_more(&self) -> bool {
        !self.in_flight && self.fetch_status == FetchStatus::Ready
    }

    fn accepts(&self, generation: u64) -> bool {
        !self.disposed && self.in_flight && generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sg(id: &str) -> SecurityGroup {
        SecurityGroup {
            id: id.to_string(),
            name: format!("{id}-name"),
            description: String::new(),
        }
    }

    fn page(ids: &[&str], token: Option<&str>) -> ListSecurityGroupsResponse {
        ListSecurityGroupsResponse {
            security_groups: ids.iter().map(|id| sg(id)).collect(),
            next_token: token.map(str::to_string),
        }
    }

    fn ids(state: &SecurityGroupPage) -> Vec<&str> {
        state.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = SecurityGroupPage::new();
        assert_eq!(state.attempt, AttemptStatus::Processing);
        assert_eq!(state.fetch_status, FetchStatus::Disabled);
        assert!(state.items.is_empty());
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_first_fetch_is_unconditional() {
        let mut state = SecurityGroupPage::new();
        let request = state.begin_fetch().unwrap();
        assert_eq!(request.next_token, None);
        assert_eq!(state.fetch_status, FetchStatus::Loading);
    }

    #[test]
    fn test_two_pages_then_exhausted() {
        let mut state = SecurityGroupPage::new();

        let first = state.begin_fetch().unwrap();
        assert!(state.apply_page(first.generation, page(&["sg-1", "sg-2"], Some("t1"))));
        assert_eq!(state.attempt, AttemptStatus::Success);
        assert_eq!(state.fetch_status, FetchStatus::Ready);
        assert!(state.can_load_more());

        let second = state.begin_fetch().unwrap();
        assert_eq!(second.next_token.as_deref(), Some("t1"));
        assert!(state.apply_page(second.generation, page(&["sg-3"], None)));

        assert_eq!(ids(&state), vec!["sg-1", "sg-2", "sg-3"]);
        assert_eq!(state.fetch_status, FetchStatus::Disabled);
        assert_eq!(state.next_token, None);
        assert!(!state.can_load_more());
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_empty_token_means_exhausted() {
        let mut state = SecurityGroupPage::new();
        let request = state.begin_fetch().unwrap();
        state.apply_page(request.generation, page(&["sg-1"], Some("")));
        assert_eq!(state.fetch_status, FetchStatus::Disabled);
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_duplicates_across_pages_are_kept() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        state.apply_page(first.generation, page(&["sg-1"], Some("t1")));
        let second = state.begin_fetch().unwrap();
        state.apply_page(second.generation, page(&["sg-1"], None));
        assert_eq!(ids(&state), vec!["sg-1", "sg-1"]);
    }

    #[test]
    fn test_failure_keeps_items() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        state.apply_page(first.generation, page(&["sg-1"], Some("t1")));

        let second = state.begin_fetch().unwrap();
        assert!(state.apply_failure(second.generation, "access denied".to_string()));
        // reported once: a repeated failure for the same request is dropped
        assert!(!state.apply_failure(second.generation, "access denied".to_string()));

        assert_eq!(ids(&state), vec!["sg-1"]);
        assert_eq!(state.attempt, AttemptStatus::Failed("access denied".to_string()));
        assert_eq!(state.next_token.as_deref(), Some("t1"));
        assert_eq!(state.fetch_status, FetchStatus::Ready);
    }

    #[test]
    fn test_retry_requests_same_page() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        state.apply_page(first.generation, page(&["sg-1"], Some("t1")));

        let failed = state.begin_fetch().unwrap();
        state.apply_failure(failed.generation, "timeout".to_string());

        let retry = state.begin_fetch().unwrap();
        assert_eq!(retry.next_token.as_deref(), Some("t1"));
        assert!(state.apply_page(retry.generation, page(&["sg-2"], None)));
        assert_eq!(ids(&state), vec!["sg-1", "sg-2"]);
        assert_eq!(state.attempt, AttemptStatus::Success);
    }

    #[test]
    fn test_initial_failure_then_retry() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        state.apply_failure(first.generation, "boom".to_string());
        assert_eq!(state.fetch_status, FetchStatus::Disabled);

        let retry = state.begin_fetch().unwrap();
        assert_eq!(retry.next_token, None);
    }

    #[test]
    fn test_busy_guard() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        assert!(state.is_fetching());
        assert!(state.begin_fetch().is_none());
        state.apply_page(first.generation, page(&["sg-1"], Some("t1")));
        assert!(state.begin_fetch().is_some());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        assert!(!state.apply_page(first.generation + 1, page(&["sg-x"], None)));
        assert!(state.items.is_empty());
        assert!(state.is_fetching());

        assert!(state.apply_page(first.generation, page(&["sg-1"], None)));
        assert!(!state.apply_page(first.generation, page(&["sg-1"], None)));
        assert_eq!(ids(&state), vec!["sg-1"]);
    }

    #[test]
    fn test_dispose_drops_late_responses() {
        let mut state = SecurityGroupPage::new();
        let first = state.begin_fetch().unwrap();
        state.dispose();
        assert!(!state.apply_page(first.generation, page(&["sg-1"], None)));
        assert!(!state.apply_failure(first.generation, "late".to_string()));
        assert!(state.items.is_empty());
        assert_eq!(state.attempt, AttemptStatus::Processing);
        assert!(state.begin_fetch().is_none());
    }
}
