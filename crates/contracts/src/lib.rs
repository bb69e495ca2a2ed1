pub mod enums;
pub mod integrations;
pub mod shared;
pub mod system;
