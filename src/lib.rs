mod config;
mod errors;
mod scheduler;
mod state;

#[cfg(test)]
mod test_helpers;

pub use config::{DEFAULT_CONFIG_PATH, DEFAULT_DISCOVERY_LOCALITY, LocalityConfig};
pub use errors::LocalityError;
pub use scheduler::host_filter::HostFilterChain;
pub use scheduler::locality::{DiscoveryLocalityFilter, belongs_to_locality};
pub use scheduler::plugins::{Filter, Plugin};
pub use scheduler::{HostSelection, RejectedHost};
pub use state::state::{FilterRequest, HostState};
