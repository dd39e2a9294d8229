pub(crate) mod connectivity_monitor;
pub(crate) mod connectivity_status;

pub use connectivity_monitor::{ConnectivityMonitor, MonitorHandle};
pub use connectivity_status::ConnectivityStatus;
