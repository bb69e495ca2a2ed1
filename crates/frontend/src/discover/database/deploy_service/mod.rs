pub mod select_security_groups;
pub mod view;

pub use view::DeployService;
