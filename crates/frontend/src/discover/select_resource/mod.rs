pub mod marketing_terms;
pub mod ranking;
pub mod view;

pub use marketing_terms::marketing_term_matches;
pub use ranking::rank_resources;
pub use view::SelectResource;
