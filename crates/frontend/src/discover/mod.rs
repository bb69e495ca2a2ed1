//! Discover flow: guide a user from "what do you want to connect" to a
//! running agent

pub mod api;
pub mod context;
pub mod database;
pub mod page;
pub mod select_resource;

pub use context::{use_discover, DiscoverContext};
pub use page::DiscoverPage;
