//! Devices view.

use crate::fmt::{format_timestamp, yes_no};
use crate::model::{Collection, ContainerConfig, ContainerState, Device};
use crate::table::{
    ColumnDescriptor, ColumnRegistry, PageRow, RowKey, SortValue, TableRow, TableViewModel,
};
use crate::view::common::{
    PageView, RowStyleClass, SummaryChip, ViewCell, build_page,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceColumn {
    No,
    Name,
    DeviceType,
    DeviceId,
    Site,
    RtspUrl,
    AppTypes,
    PlaybackEnabled,
    PlaybackNode,
    LiveNode,
    AnalyticsNode,
    Status,
    Updated,
}

const fn col(
    key: DeviceColumn,
    id: &'static str,
    label: &'static str,
    pinned: bool,
    width: u16,
) -> ColumnDescriptor<DeviceColumn> {
    ColumnDescriptor {
        key,
        id,
        label,
        sortable: true,
        pinned,
        width,
    }
}

pub static DEVICE_COLUMNS: ColumnRegistry<DeviceColumn> = ColumnRegistry::new(&[
    col(DeviceColumn::No, "sno", "S.No", true, 6),
    col(DeviceColumn::Name, "name", "Name / Alias", true, 28),
    col(DeviceColumn::DeviceType, "type", "Type", false, 10),
    col(DeviceColumn::DeviceId, "device-id", "Device ID", false, 16),
    col(DeviceColumn::Site, "site", "Site", false, 14),
    col(DeviceColumn::RtspUrl, "rtsp-url", "RTSP URL", false, 36),
    col(DeviceColumn::AppTypes, "app-types", "App Types", false, 20),
    col(DeviceColumn::PlaybackEnabled, "playback-enabled", "Playback Enabled", false, 10),
    col(DeviceColumn::PlaybackNode, "playback-node", "Playback Node", false, 16),
    col(DeviceColumn::LiveNode, "live-node", "Live Node", false, 16),
    col(DeviceColumn::AnalyticsNode, "analytics-node", "Analytics Node", false, 16),
    col(DeviceColumn::Status, "status", "Status", false, 10),
    col(DeviceColumn::Updated, "updated", "Updated", false, 22),
]);

impl TableRow for Device {
    type Column = DeviceColumn;

    fn registry() -> &'static ColumnRegistry<DeviceColumn> {
        &DEVICE_COLUMNS
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        fn container(c: &Option<ContainerConfig>) -> Option<&str> {
            c.as_ref().and_then(|c| c.container_name.as_deref())
        }
        let mut fields = vec![
            self.device_id.as_deref(),
            self.info().and_then(|i| i.id.as_deref()),
            self.name(),
            self.alias(),
            self.rtsp_url(),
            self.device_type(),
            self.org_name.as_deref(),
            self.site_id.as_deref(),
            self.playback_node(),
            container(&self.playback_config),
            self.live_node(),
            self.analytics_node(),
            container(&self.analytics_config),
        ];
        fields.extend(self.app_types.iter().map(|t| Some(t.as_str())));
        fields
    }

    fn category(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.as_str())
    }

    fn sort_value(&self, column: DeviceColumn, index: usize) -> SortValue {
        match column {
            DeviceColumn::No => SortValue::Integer(index as i64),
            DeviceColumn::Name => SortValue::text(self.name()),
            DeviceColumn::DeviceType => SortValue::text(self.device_type()),
            DeviceColumn::DeviceId => SortValue::text(self.device_id.as_deref()),
            DeviceColumn::Site => SortValue::text(self.site()),
            DeviceColumn::RtspUrl => SortValue::text(self.rtsp_url()),
            DeviceColumn::AppTypes => SortValue::Text(self.app_types.join(",").to_lowercase()),
            DeviceColumn::PlaybackEnabled => SortValue::Flag(self.playback_enabled()),
            DeviceColumn::PlaybackNode => SortValue::text(self.playback_node()),
            DeviceColumn::LiveNode => SortValue::text(self.live_node()),
            DeviceColumn::AnalyticsNode => SortValue::text(self.analytics_node()),
            DeviceColumn::Status => SortValue::text(self.status.as_ref().map(|s| s.as_str())),
            DeviceColumn::Updated => SortValue::timestamp(self.updated_at),
        }
    }
}

/// Node alias cell, colored by the container state when one is reported.
fn node_cell(node: Option<&str>, config: Option<&ContainerConfig>) -> ViewCell {
    let mut cell = ViewCell::text_or_dash(node);
    if node.is_some()
        && let Some(status) = config.and_then(|c| c.container_status.as_deref())
    {
        let state = ContainerState::classify(status);
        cell.text = format!("{} ({})", cell.text, status);
        cell.style = Some(match state {
            ContainerState::Running => RowStyleClass::Active,
            ContainerState::Stopped => RowStyleClass::Warning,
        });
    }
    cell
}

fn name_cell(d: &Device) -> ViewCell {
    match (d.name(), d.alias()) {
        (Some(name), Some(alias)) if !alias.is_empty() => {
            ViewCell::plain(format!("{} / {}", name, alias))
        }
        (name, _) => ViewCell::text_or_dash(name),
    }
}

fn device_cells(r: &PageRow<'_, Device>) -> (Vec<ViewCell>, RowStyleClass) {
    let d = r.row;
    let app_types = if d.app_types.is_empty() {
        ViewCell::text_or_dash(None)
    } else {
        ViewCell::plain(d.app_types.join(", "))
    };
    let playback = d.playback_enabled();
    let status = match &d.status {
        Some(s) => ViewCell::badge(s),
        None => ViewCell::text_or_dash(None),
    };

    let cells = vec![
        ViewCell::plain(r.ordinal.to_string()),
        name_cell(d),
        ViewCell::text_or_dash(d.device_type()),
        ViewCell::text_or_dash(d.device_id.as_deref()),
        ViewCell::text_or_dash(d.site()),
        ViewCell::text_or_dash(d.rtsp_url()),
        app_types,
        ViewCell::styled(
            yes_no(playback).to_string(),
            if playback {
                RowStyleClass::Active
            } else {
                RowStyleClass::Dimmed
            },
        ),
        node_cell(d.playback_node(), d.playback_config.as_ref()),
        ViewCell::text_or_dash(d.live_node()),
        node_cell(d.analytics_node(), d.analytics_config.as_ref()),
        status,
        ViewCell::plain(format_timestamp(d.updated_at)),
    ];
    (cells, RowStyleClass::Normal)
}

/// Builds the devices page for the current view state.
pub fn build_devices_view(vm: &TableViewModel<Device>) -> PageView<RowKey> {
    let all = vm.rows();
    let active = all.iter().filter(|d| d.is_active()).count();
    let summary = vec![
        SummaryChip::new("Total Devices", all.len(), RowStyleClass::Normal),
        SummaryChip::new("Active", active, RowStyleClass::Active),
        SummaryChip::new("Inactive", all.len() - active, RowStyleClass::Critical),
    ];
    build_page(vm, "Devices", Collection::Devices.name(), summary, device_cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::table::CategoryFilter;

    fn devices() -> Vec<Device> {
        serde_json::from_str(
            r#"[
                {"_id": "d1", "deviceId": "CAM-2", "status": "active",
                 "deviceInfo": {"name": "lobby", "alias": "front"},
                 "appTypes": ["live", "analytics"],
                 "playback": {"enabled": true},
                 "playbackConfig": {"node_alias_name": "edge-a", "containerStatus": "running"}},
                {"_id": "d2", "deviceId": "CAM-1", "status": "inactive",
                 "deviceInfo": {"name": "Garage"}, "orgName": "acme"},
                {"_id": "d3", "deviceId": "CAM-3",
                 "deviceInfo": {"name": "dock"}, "siteId": "north"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn registry_is_valid() {
        DEVICE_COLUMNS.validate().unwrap();
        assert_eq!(DEVICE_COLUMNS.pinned().len(), 2);
        assert_eq!(DEVICE_COLUMNS.pinned_offsets(), vec![0, 6]);
    }

    #[test]
    fn search_covers_nested_fields_and_app_types() {
        let mut vm = TableViewModel::new(devices(), ViewConfig::DEVICES);
        vm.set_query("EDGE-A");
        assert_eq!(vm.filtered().len(), 1);
        vm.set_query("analytics");
        assert_eq!(vm.filtered().len(), 1);
        vm.set_query("acme");
        assert_eq!(vm.filtered()[0].row.device_id.as_deref(), Some("CAM-1"));
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut vm = TableViewModel::new(devices(), ViewConfig::DEVICES);
        vm.click_header(DeviceColumn::Name);
        let names: Vec<_> = vm.sorted().iter().map(|r| r.row.name()).collect();
        assert_eq!(names, vec![Some("dock"), Some("Garage"), Some("lobby")]);
    }

    #[test]
    fn playback_enabled_sorts_false_before_true() {
        let mut vm = TableViewModel::new(devices(), ViewConfig::DEVICES);
        vm.click_header(DeviceColumn::PlaybackEnabled);
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["d2", "d3", "d1"]);

        vm.click_header(DeviceColumn::PlaybackEnabled);
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["d1", "d2", "d3"]);
    }

    #[test]
    fn status_category_and_summary() {
        let mut vm = TableViewModel::new(devices(), ViewConfig::DEVICES);
        vm.set_category(CategoryFilter::parse("inactive"));
        let page = build_devices_view(&vm);
        assert_eq!(page.rows.len(), 1);
        let chips: Vec<_> = page.summary.iter().map(|c| (c.label, c.value)).collect();
        assert_eq!(
            chips,
            vec![
                ("Total Devices", 3),
                ("Active", 1),
                ("Inactive", 2),
                ("Showing", 1)
            ]
        );
    }

    #[test]
    fn page_renders_cells_and_headers() {
        let mut vm = TableViewModel::new(devices(), ViewConfig::DEVICES);
        vm.click_header(DeviceColumn::DeviceId);
        let page = build_devices_view(&vm);
        assert_eq!(page.sort_label.as_deref(), Some("Sorted by Device ID ▲"));
        assert_eq!(page.showing, "Showing 1–3 of 3 devices");
        assert_eq!(page.headers[1].pinned_offset, Some(6));
        assert_eq!(page.headers[2].pinned_offset, None);

        let first = &page.rows[0];
        assert_eq!(first.id, RowKey::Id("d2".into()));
        assert_eq!(first.cells[0].text, "1");
        assert_eq!(first.cells[4].text, "acme");

        let lobby = &page.rows[1];
        assert_eq!(lobby.cells[1].text, "lobby / front");
        assert_eq!(lobby.cells[6].text, "live, analytics");
        assert_eq!(lobby.cells[8].text, "edge-a (running)");
        assert_eq!(lobby.cells[11].style, Some(RowStyleClass::Active));
    }

    #[test]
    fn empty_messages() {
        let mut vm = TableViewModel::new(Vec::<Device>::new(), ViewConfig::DEVICES);
        assert_eq!(
            build_devices_view(&vm).empty_message.as_deref(),
            Some("No devices found.")
        );
        vm.set_query("zzz");
        assert_eq!(
            build_devices_view(&vm).empty_message.as_deref(),
            Some("No devices match your filters.")
        );
    }
}
