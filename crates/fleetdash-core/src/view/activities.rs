//! Activity log view.

use crate::fmt::{format_timestamp, humanize_action};
use crate::model::{Activity, ActivityType, Collection};
use crate::table::{
    ColumnDescriptor, ColumnRegistry, PageRow, RowKey, SortValue, TableRow, TableViewModel,
};
use crate::view::common::{
    Badge, PageView, RowStyleClass, SummaryChip, ViewCell, build_page,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityColumn {
    No,
    DeviceId,
    NodeAlias,
    Type,
    Action,
    Time,
    Error,
}

pub static ACTIVITY_COLUMNS: ColumnRegistry<ActivityColumn> = ColumnRegistry::new(&[
    ColumnDescriptor {
        key: ActivityColumn::No,
        id: "sno",
        label: "S.No",
        sortable: false,
        pinned: true,
        width: 6,
    },
    ColumnDescriptor {
        key: ActivityColumn::DeviceId,
        id: "device-id",
        label: "Device ID",
        sortable: true,
        pinned: true,
        width: 18,
    },
    ColumnDescriptor {
        key: ActivityColumn::NodeAlias,
        id: "node-alias",
        label: "Node Alias",
        sortable: true,
        pinned: false,
        width: 16,
    },
    ColumnDescriptor {
        key: ActivityColumn::Type,
        id: "type",
        label: "Type",
        sortable: true,
        pinned: false,
        width: 11,
    },
    ColumnDescriptor {
        key: ActivityColumn::Action,
        id: "action",
        label: "Action",
        sortable: true,
        pinned: false,
        width: 24,
    },
    ColumnDescriptor {
        key: ActivityColumn::Time,
        id: "time",
        label: "Date / Time",
        sortable: true,
        pinned: false,
        width: 22,
    },
    ColumnDescriptor {
        key: ActivityColumn::Error,
        id: "error",
        label: "Error",
        sortable: true,
        pinned: false,
        width: 40,
    },
]);

impl TableRow for Activity {
    type Column = ActivityColumn;

    fn registry() -> &'static ColumnRegistry<ActivityColumn> {
        &ACTIVITY_COLUMNS
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.device_id.as_deref(),
            self.node_alias_name.as_deref(),
            self.kind_str(),
            self.action.as_deref(),
            self.error_message.as_deref(),
        ]
    }

    /// Exact, case-sensitive activity type.
    fn category(&self) -> Option<&str> {
        self.kind_str()
    }

    fn sort_value(&self, column: ActivityColumn, index: usize) -> SortValue {
        match column {
            ActivityColumn::No => SortValue::Integer(index as i64),
            ActivityColumn::DeviceId => SortValue::text(self.device_id.as_deref()),
            ActivityColumn::NodeAlias => SortValue::text(self.node_alias_name.as_deref()),
            ActivityColumn::Type => SortValue::text(self.kind_str()),
            ActivityColumn::Action => SortValue::text(self.action.as_deref()),
            ActivityColumn::Time => SortValue::timestamp(self.time),
            ActivityColumn::Error => SortValue::text(self.error_message.as_deref()),
        }
    }
}

fn activity_cells(r: &PageRow<'_, Activity>) -> (Vec<ViewCell>, RowStyleClass) {
    let a = r.row;
    let kind = match &a.kind {
        Some(k) => ViewCell::badge(k),
        None => ViewCell::text_or_dash(None),
    };
    let action = match (a.action.as_deref(), a.action_kind()) {
        (Some(action), Some(kind)) if !action.is_empty() => {
            ViewCell::styled(humanize_action(action), kind.style())
        }
        _ => ViewCell::text_or_dash(None),
    };
    let error = if a.has_error() {
        ViewCell::styled(
            a.error_message.clone().unwrap_or_default(),
            RowStyleClass::Critical,
        )
    } else {
        ViewCell::text_or_dash(None)
    };

    let cells = vec![
        ViewCell::plain(r.ordinal.to_string()),
        ViewCell::text_or_dash(a.device_id.as_deref()),
        ViewCell::text_or_dash(a.node_alias_name.as_deref()),
        kind,
        action,
        ViewCell::plain(format_timestamp(a.time)),
        error,
    ];
    (cells, RowStyleClass::Normal)
}

/// Builds the activity page for the current view state.
pub fn build_activities_view(vm: &TableViewModel<Activity>) -> PageView<RowKey> {
    let all = vm.rows();
    let of_kind = |kind: ActivityType| {
        all.iter()
            .filter(|a| a.kind.as_ref() == Some(&kind))
            .count()
    };
    let errors = all.iter().filter(|a| a.has_error()).count();
    let summary = vec![
        SummaryChip::new("Total", all.len(), RowStyleClass::Normal),
        SummaryChip::new("Live", of_kind(ActivityType::Live), ActivityType::Live.style()),
        SummaryChip::new(
            "Playback",
            of_kind(ActivityType::Playback),
            ActivityType::Playback.style(),
        ),
        SummaryChip::new(
            "Analytics",
            of_kind(ActivityType::Analytics),
            ActivityType::Analytics.style(),
        ),
        SummaryChip::new(
            "Errors",
            errors,
            if errors > 0 {
                RowStyleClass::Critical
            } else {
                RowStyleClass::Dimmed
            },
        ),
    ];
    build_page(vm, "Activity Logs", Collection::Activities.name(), summary, activity_cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::table::CategoryFilter;

    fn activities() -> Vec<Activity> {
        serde_json::from_str(
            r#"[
                {"_id": "a1", "device_id": "CAM-1", "type": "live", "action": "stream_started",
                 "time": "2026-10-19T14:03:22Z"},
                {"_id": "a2", "device_id": "CAM-2", "type": "Live", "action": "stream_stopped"},
                {"_id": "a3", "device_id": "CAM-3", "type": "playback", "action": "start_error",
                 "errorMessage": "rtsp timeout"},
                {"device_id": "CAM-4", "type": "analytics", "action": "restart"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn registry_is_valid() {
        ACTIVITY_COLUMNS.validate().unwrap();
        assert!(!ACTIVITY_COLUMNS.is_sortable(ActivityColumn::No));
        assert_eq!(ACTIVITY_COLUMNS.offset_of(ActivityColumn::DeviceId), Some(6));
    }

    #[test]
    fn type_filter_is_exact() {
        let mut vm = TableViewModel::new(activities(), ViewConfig::ACTIVITIES);
        vm.set_category(CategoryFilter::parse("live"));
        let ids: Vec<_> = vm.filtered().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["a1"]);
    }

    #[test]
    fn row_without_id_is_keyed_by_position() {
        let vm = TableViewModel::new(activities(), ViewConfig::ACTIVITIES);
        let page = build_activities_view(&vm);
        assert_eq!(page.rows[3].id, RowKey::Position(3));
    }

    #[test]
    fn cells_and_summary() {
        let vm = TableViewModel::new(activities(), ViewConfig::ACTIVITIES);
        let page = build_activities_view(&vm);

        let first = &page.rows[0];
        assert_eq!(first.cells[4].text, "stream started");
        assert_eq!(first.cells[4].style, Some(RowStyleClass::Active));
        assert_eq!(first.cells[5].text, "Oct 19, 2026 14:03:22");
        assert_eq!(page.rows[2].cells[6].text, "rtsp timeout");
        assert_eq!(page.rows[2].cells[6].style, Some(RowStyleClass::Critical));

        let chips: Vec<_> = page.summary.iter().map(|c| (c.label, c.value)).collect();
        assert_eq!(
            chips,
            vec![
                ("Total", 4),
                ("Live", 1),
                ("Playback", 1),
                ("Analytics", 1),
                ("Errors", 1),
                ("Showing", 4)
            ]
        );
        assert_eq!(page.categories, vec!["live", "Live", "playback", "analytics"]);
    }

    #[test]
    fn time_sorts_by_instant_with_absent_lowest() {
        let rows: Vec<Activity> = serde_json::from_str(
            r#"[
                {"_id": "late", "time": "2026-10-09T23:00:00-02:00"},
                {"_id": "none"},
                {"_id": "early", "time": "2026-10-10T00:00:00Z"}
            ]"#,
        )
        .unwrap();
        let mut vm = TableViewModel::new(rows, ViewConfig::ACTIVITIES);
        vm.click_header(ActivityColumn::Time);
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["none", "early", "late"]);

        vm.click_header(ActivityColumn::Time);
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["late", "early", "none"]);
    }

    #[test]
    fn sno_header_click_is_ignored() {
        let mut vm = TableViewModel::new(activities(), ViewConfig::ACTIVITIES);
        vm.click_header(ActivityColumn::No);
        assert!(!vm.sort_state().is_active());
        assert!(build_activities_view(&vm).sort_label.is_none());
    }
}
