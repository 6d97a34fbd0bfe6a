use crate::state::state::HostState;

pub mod host_filter;
pub mod locality;
pub mod plugins;

#[derive(Debug, Clone, PartialEq)]
pub struct RejectedHost {
    pub node_name: String,
    /// Name of the filter that rejected the host.
    pub filter: String,
    pub reason: String,
}

/// Outcome of running a filter chain over a set of hosts. Both lists keep input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSelection {
    pub passed: Vec<HostState>,
    pub rejected: Vec<RejectedHost>,
}

impl HostSelection {
    pub fn passed_names(&self) -> Vec<&str> {
        self.passed.iter().map(|h| h.node_name.as_str()).collect()
    }
}
