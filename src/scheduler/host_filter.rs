use crate::config::LocalityConfig;
use crate::scheduler::locality::DiscoveryLocalityFilter;
use crate::scheduler::plugins::Filter;
use crate::scheduler::{HostSelection, RejectedHost};
use crate::state::state::{FilterRequest, HostState};
use itertools::{Either, Itertools};
use log::debug;

/// Ordered set of filters run against every candidate host.
#[derive(Default)]
pub struct HostFilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl HostFilterChain {
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn from_config(config: &LocalityConfig) -> Self {
        Self::new().with_filter(Box::new(DiscoveryLocalityFilter::from_config(config)))
    }

    pub fn with_filter(mut self, filter: Box<dyn Filter>) -> Self {
        self.register(filter);
        self
    }

    pub fn register(&mut self, filter: Box<dyn Filter>) {
        debug!("registering filter {}", filter.name());
        self.filters.push(filter);
    }

    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn filter_hosts(&self, hosts: &[HostState], request: &FilterRequest) -> HostSelection {
        let (passed, rejected): (Vec<_>, Vec<_>) = hosts.iter().partition_map(|h| {
            // first failing filter rejects the host
            for filter in &self.filters {
                if let Err(reason) = filter.filter(h, request) {
                    return Either::Right(RejectedHost {
                        node_name: h.node_name.clone(),
                        filter: filter.name().to_string(),
                        reason,
                    });
                }
            }
            Either::Left(h.clone())
        });

        debug!(
            "request {}: {} hosts passed, {} rejected",
            request.request_id.as_deref().unwrap_or("-"),
            passed.len(),
            rejected.len()
        );

        HostSelection { passed, rejected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::plugins::Plugin;
    use crate::test_helpers::objects::{host_states, init_logger};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingFilter {
        calls: Arc<AtomicUsize>,
    }

    impl Plugin for CountingFilter {
        fn name(&self) -> &'static str {
            "CountingFilter"
        }
    }

    impl Filter for CountingFilter {
        fn filter(&self, _: &HostState, _: &FilterRequest) -> Result<(), String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_empty_chain_passes_all() {
        let chain = HostFilterChain::new();
        let hosts = host_states(&["a", "b", "c"]);
        let selection = chain.filter_hosts(&hosts, &FilterRequest::default());
        assert_eq!(selection.passed, hosts);
        assert!(selection.rejected.is_empty());
    }

    #[test]
    fn test_partitions_in_order() {
        init_logger();
        let chain = HostFilterChain::from_config(&LocalityConfig {
            discovery_locality: "RegionOne".to_string(),
            enable_discovery_locality: true,
        });
        let hosts = host_states(&["RegionOne-1", "RegionTwo-1", "regionone-2", "other"]);

        let selection = chain.filter_hosts(&hosts, &FilterRequest::with_id("req-1"));

        assert_eq!(selection.passed_names(), vec!["RegionOne-1", "regionone-2"]);
        assert_eq!(
            selection.rejected.iter().map(|r| r.node_name.as_str()).collect::<Vec<_>>(),
            vec!["RegionTwo-1", "other"]
        );
        assert_eq!(selection.rejected[0].filter, "DiscoveryLocalityFilter");
        assert!(selection.rejected[0].reason.contains("RegionTwo-1"));
    }

    #[test]
    fn test_disabled_locality_passes_all() {
        let chain = HostFilterChain::from_config(&LocalityConfig::default());
        let hosts = host_states(&["RegionOne-1", "RegionTwo-1", ""]);
        let selection = chain.filter_hosts(&hosts, &FilterRequest::default());
        assert_eq!(selection.passed.len(), 3);
        assert!(selection.rejected.is_empty());
    }

    #[test]
    fn test_first_failure_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = HostFilterChain::new()
            .with_filter(Box::new(DiscoveryLocalityFilter::new("RegionOne", true)))
            .with_filter(Box::new(CountingFilter { calls: calls.clone() }));

        assert_eq!(chain.filter_names(), vec!["DiscoveryLocalityFilter", "CountingFilter"]);

        let hosts = host_states(&["RegionOne-1", "RegionTwo-1", "RegionTwo-2"]);
        let selection = chain.filter_hosts(&hosts, &FilterRequest::default());

        assert_eq!(selection.passed.len(), 1);
        assert_eq!(selection.rejected.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
