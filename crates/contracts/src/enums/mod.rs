pub mod cluster_resource;

pub use cluster_resource::ClusterResource;
