//! Page views: one module per collection on top of the shared table model.

pub mod activities;
pub mod common;
pub mod devices;
pub mod nodes;

pub use activities::{ACTIVITY_COLUMNS, ActivityColumn, build_activities_view};
pub use common::{HeaderCell, PageView, RowStyleClass, SummaryChip, ViewCell, ViewRow};
pub use devices::{DEVICE_COLUMNS, DeviceColumn, build_devices_view};
pub use nodes::{NODE_COLUMNS, NodeColumn, build_nodes_view};
