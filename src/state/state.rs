use serde::{Deserialize, Serialize};

/// Read-only view of a candidate host, as handed to filters by the scheduler.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HostState {
    pub node_name: String,
    /// Host name. Hosts encode their locality as a prefix of this.
    pub host: String,
}

impl HostState {
    pub fn new(node_name: &str, host: &str) -> Self {
        HostState {
            node_name: node_name.to_string(),
            host: host.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

impl From<&str> for HostState {
    fn from(host: &str) -> Self {
        HostState::new(host, host)
    }
}

/// Request scoped context passed to every filter call.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilterRequest {
    pub request_id: Option<String>,
}

impl FilterRequest {
    pub fn with_id(request_id: &str) -> Self {
        FilterRequest {
            request_id: Some(request_id.to_string()),
        }
    }
}
