//! ViewModel for the security group picker

use contracts::integrations::{
    DatabaseDeployMeta, ListSecurityGroupsRequest, ListSecurityGroupsResponse, SecurityGroup,
};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::state::{AttemptStatus, FetchStatus, SecurityGroupPage};
use crate::discover::api;
use crate::shared::error::ApiError;

/// Prefix of error events emitted when a page cannot be loaded
pub const FETCH_ERROR_PREFIX: &str = "fetch security groups error";

/// Apply the outcome of a page request.
///
/// `emit` receives the prefixed error message, once per failure the page
/// accepted; dropped responses (stale, repeated, after dispose) emit nothing.
pub fn finish_fetch(
    page: &mut SecurityGroupPage,
    generation: u64,
    result: Result<ListSecurityGroupsResponse, ApiError>,
    mut emit: impl FnMut(String),
) {
    match result {
        Ok(response) => {
            let count = response.security_groups.len();
            if page.apply_page(generation, response) {
                log!("security groups: loaded {} items", count);
            }
        }
        Err(e) => {
            let message = e.to_string();
            if page.apply_failure(generation, message.clone()) {
                log::warn!("security groups: {}", message);
                emit(format!("{}: {}", FETCH_ERROR_PREFIX, message));
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct SelectSecurityGroupsVm {
    /// Accumulated pages
    pub page: RwSignal<SecurityGroupPage>,
    meta: StoredValue<DatabaseDeployMeta>,
    emit_error_event: Callback<String>,
}

impl SelectSecurityGroupsVm {
    pub fn new(meta: DatabaseDeployMeta, emit_error_event: Callback<String>) -> Self {
        Self {
            page: RwSignal::new(SecurityGroupPage::new()),
            meta: StoredValue::new(meta),
            emit_error_event,
        }
    }

    /// Load the next page (the first one on mount, the stored token later).
    /// Ignored while a request is already in flight.
    pub fn fetch_page(&self) {
        let Some(request) = self.page.try_update(|p| p.begin_fetch()).flatten() else {
            log!("security groups: fetch skipped, request in flight or nothing left");
            return;
        };

        let meta = self.meta.get_value();
        let page = self.page;
        let emit_error_event = self.emit_error_event;

        spawn_local(async move {
            let req = ListSecurityGroupsRequest {
                vpc_id: meta.selected_db.vpc_id.clone(),
                region: meta.selected_db.region.clone(),
                next_token: request.next_token.clone(),
            };

            let result = api::fetch_security_groups(&meta.integration_name, &req).await;
            let mut emitted = None;
            page.try_update(|p| {
                finish_fetch(p, request.generation, result, |message| emitted = Some(message))
            });
            if let Some(message) = emitted {
                emit_error_event.run(message);
            }
        });
    }

    /// Drop responses that arrive after the view is gone
    pub fn dispose(&self) {
        self.page.try_update(|p| p.dispose());
    }

    pub fn attempt(&self) -> AttemptStatus {
        self.page.with(|p| p.attempt.clone())
    }

    pub fn items(&self) -> Vec<SecurityGroup> {
        self.page.with(|p| p.items.clone())
    }

    pub fn fetch_status(&self) -> FetchStatus {
        self.page.with(|p| p.fetch_status)
    }

    pub fn is_fetching(&self) -> bool {
        self.page.with(|p| p.is_fetching())
    }

    pub fn can_load_more(&self) -> bool {
        self.page.with(|p| p.can_load_more())
    }
}
