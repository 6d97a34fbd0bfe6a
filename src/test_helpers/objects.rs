use crate::state::state::HostState;

#[allow(unused)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(unused)]
pub fn host_state(name: &str) -> HostState {
    HostState::new(name, name)
}

#[allow(unused)]
pub fn host_states(names: &[&str]) -> Vec<HostState> {
    names.iter().map(|n| host_state(n)).collect()
}
