use crate::config::LocalityConfig;
use crate::scheduler::plugins::{Filter, Plugin};
use crate::state::state::{FilterRequest, HostState};
use log::debug;

/// Filters hosts by discovery locality.
///
/// A plain comparison of the locality name with the host name prefix, ignoring case.
/// A host belongs to exactly one locality. When disabled the filter passes every host.
#[derive(Debug, Clone)]
pub struct DiscoveryLocalityFilter {
    locality: String,
    enabled: bool,
}

impl DiscoveryLocalityFilter {
    pub fn new(locality: &str, enabled: bool) -> Self {
        DiscoveryLocalityFilter {
            locality: locality.to_string(),
            enabled,
        }
    }

    pub fn from_config(config: &LocalityConfig) -> Self {
        Self::new(&config.discovery_locality, config.enable_discovery_locality)
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn rejection(&self, host: &HostState) -> String {
        format!(
            "locality '{}' requested, node '{}' does not belong to this locality",
            self.locality, host.host
        )
    }
}

pub fn belongs_to_locality(host: &str, locality: &str) -> bool {
    host.to_lowercase().starts_with(&locality.to_lowercase())
}

impl Plugin for DiscoveryLocalityFilter {
    fn name(&self) -> &'static str {
        "DiscoveryLocalityFilter"
    }

    // host locality doesn't change within a request
    fn run_once_per_request(&self) -> bool {
        true
    }
}

impl Filter for DiscoveryLocalityFilter {
    fn filter(&self, host: &HostState, request: &FilterRequest) -> Result<(), String> {
        if !self.passes(host, request) {
            return Err(self.rejection(host));
        }
        Ok(())
    }

    fn passes(&self, host: &HostState, _: &FilterRequest) -> bool {
        if !self.enabled {
            return true;
        }

        debug!("discovery locality filter is enabled");
        debug!("discovery locality '{}' found", self.locality);
        debug!("discovery node '{}' found", host.host());

        let passes = belongs_to_locality(host.host(), &self.locality);
        if !passes {
            debug!("{}", self.rejection(host));
        }
        passes
    }
}
