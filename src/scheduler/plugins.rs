use crate::state::state::{FilterRequest, HostState};

pub trait Plugin {
    fn name(&self) -> &str;

    /// Hint to the scheduler that the plugin gives the same answer for a host
    /// for the whole of a request, so the result may be reused.
    fn run_once_per_request(&self) -> bool {
        false
    }
}

/// These plugins are used to filter out hosts that cannot take the workload. For each host, the
/// scheduler will call filter plugins in their configured order. If any filter plugin marks the
/// host as infeasible, the remaining plugins will not be called for that host.
///
/// Filters may be called concurrently for different hosts, hence `Send + Sync`.
pub trait Filter: Plugin + Send + Sync {
    fn filter(&self, host: &HostState, request: &FilterRequest) -> Result<(), String>;

    fn passes(&self, host: &HostState, request: &FilterRequest) -> bool {
        self.filter(host, request).is_ok()
    }
}
