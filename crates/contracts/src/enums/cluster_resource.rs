use serde::{Deserialize, Serialize};

/// Resource kinds a cluster user can be guided towards in the discover flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterResource {
    WebApplications,
    Databases,
    Kubernetes,
    ServerSsh,
    WindowsDesktops,
}

impl ClusterResource {
    /// Stable code, matches the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            ClusterResource::WebApplications => "web_applications",
            ClusterResource::Databases => "databases",
            ClusterResource::Kubernetes => "kubernetes",
            ClusterResource::ServerSsh => "server_ssh",
            ClusterResource::WindowsDesktops => "windows_desktops",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ClusterResource::WebApplications => "Web Applications",
            ClusterResource::Databases => "Databases",
            ClusterResource::Kubernetes => "Kubernetes",
            ClusterResource::ServerSsh => "Servers (SSH)",
            ClusterResource::WindowsDesktops => "Windows Desktops",
        }
    }

    pub fn all() -> Vec<ClusterResource> {
        vec![
            ClusterResource::WebApplications,
            ClusterResource::Databases,
            ClusterResource::Kubernetes,
            ClusterResource::ServerSsh,
            ClusterResource::WindowsDesktops,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "web_applications" => Some(ClusterResource::WebApplications),
            "databases" => Some(ClusterResource::Databases),
            "kubernetes" => Some(ClusterResource::Kubernetes),
            "server_ssh" => Some(ClusterResource::ServerSsh),
            "windows_desktops" => Some(ClusterResource::WindowsDesktops),
            _ => None,
        }
    }
}
