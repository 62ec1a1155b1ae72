//! Streaming nodes view.

use crate::fmt::{format_credentials, format_limit, format_timestamp};
use crate::model::{Capability, Collection, Node, RecordStatus};
use crate::table::{
    ColumnDescriptor, ColumnRegistry, PageRow, RowKey, SortValue, TableRow, TableViewModel,
};
use crate::view::common::{
    PageView, RowStyleClass, SummaryChip, ViewCell, build_page,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeColumn {
    No,
    Name,
    Alias,
    Status,
    /// Sorted by the streamer limit.
    Limits,
    IpAddr,
    Domain,
    MediaUrl,
    Credentials,
    Updated,
}

const fn col(
    key: NodeColumn,
    id: &'static str,
    label: &'static str,
    pinned: bool,
    width: u16,
) -> ColumnDescriptor<NodeColumn> {
    ColumnDescriptor {
        key,
        id,
        label,
        sortable: true,
        pinned,
        width,
    }
}

pub static NODE_COLUMNS: ColumnRegistry<NodeColumn> = ColumnRegistry::new(&[
    col(NodeColumn::No, "sno", "S.No", true, 6),
    col(NodeColumn::Name, "name", "Name & Description", true, 30),
    col(NodeColumn::Alias, "alias", "Alias", false, 14),
    col(NodeColumn::Status, "status", "Status", false, 10),
    col(NodeColumn::Limits, "limits", "Limits", false, 24),
    col(NodeColumn::IpAddr, "ip", "IP Address", false, 16),
    col(NodeColumn::Domain, "domain", "Domain", false, 20),
    col(NodeColumn::MediaUrl, "media-url", "MediaMTX URL", false, 30),
    col(NodeColumn::Credentials, "credentials", "Credentials", false, 20),
    col(NodeColumn::Updated, "updated", "Updated", false, 22),
]);

impl TableRow for Node {
    type Column = NodeColumn;

    fn registry() -> &'static ColumnRegistry<NodeColumn> {
        &NODE_COLUMNS
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.alias_name.as_deref(),
            self.status_str(),
            self.description.as_deref(),
            self.ip_addr(),
            self.domain(),
            self.media_url(),
            self.username(),
        ]
    }

    fn category(&self) -> Option<&str> {
        self.status_str()
    }

    fn sort_value(&self, column: NodeColumn, index: usize) -> SortValue {
        match column {
            NodeColumn::No => SortValue::Integer(index as i64),
            NodeColumn::Name => SortValue::text(self.name.as_deref()),
            NodeColumn::Alias => SortValue::text(self.alias_name.as_deref()),
            NodeColumn::Status => SortValue::text(self.status_str()),
            NodeColumn::Limits => {
                SortValue::Float(self.limit(Capability::Streamer).unwrap_or(0.0))
            }
            NodeColumn::IpAddr => SortValue::text(self.ip_addr()),
            NodeColumn::Domain => SortValue::text(self.domain()),
            NodeColumn::MediaUrl => SortValue::text(self.media_url()),
            NodeColumn::Credentials => SortValue::text(self.username()),
            NodeColumn::Updated => SortValue::timestamp(self.updated_at),
        }
    }
}

fn limits_text(n: &Node) -> String {
    format!(
        "Str {} · Live {} · Play {}",
        format_limit(n.limit(Capability::Streamer)),
        format_limit(n.limit(Capability::Live)),
        format_limit(n.limit(Capability::Playback)),
    )
}

fn name_cell(n: &Node) -> ViewCell {
    match (n.name.as_deref(), n.description.as_deref()) {
        (Some(name), Some(desc)) if !desc.is_empty() => {
            ViewCell::plain(format!("{} · {}", name, desc))
        }
        (name, _) => ViewCell::text_or_dash(name),
    }
}

fn node_cells(r: &PageRow<'_, Node>) -> (Vec<ViewCell>, RowStyleClass) {
    let n = r.row;
    let status = match &n.status {
        Some(s) => ViewCell::badge(s),
        None => ViewCell::text_or_dash(None),
    };
    let credentials = if n.username().is_some() || n.has_password() {
        ViewCell::plain(format_credentials(n.username(), n.has_password()))
    } else {
        ViewCell::text_or_dash(None)
    };

    let cells = vec![
        ViewCell::plain(r.ordinal.to_string()),
        name_cell(n),
        ViewCell::text_or_dash(n.alias_name.as_deref()),
        status,
        ViewCell::plain(limits_text(n)),
        ViewCell::text_or_dash(n.ip_addr()),
        ViewCell::text_or_dash(n.domain()),
        ViewCell::text_or_dash(n.media_url()),
        credentials,
        ViewCell::plain(format_timestamp(n.updated_at)),
    ];
    (cells, RowStyleClass::Normal)
}

/// Builds the nodes page for the current view state.
pub fn build_nodes_view(vm: &TableViewModel<Node>) -> PageView<RowKey> {
    let all = vm.rows();
    let count = |status: RecordStatus| {
        all.iter()
            .filter(|n| n.status.as_ref() == Some(&status))
            .count()
    };
    let summary = vec![
        SummaryChip::new("Total Nodes", all.len(), RowStyleClass::Normal),
        SummaryChip::new("Active", count(RecordStatus::Active), RowStyleClass::Active),
        SummaryChip::new("Inactive", count(RecordStatus::Inactive), RowStyleClass::Warning),
    ];
    build_page(vm, "Nodes", Collection::Nodes.name(), summary, node_cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::fmt::MASK;
    use crate::table::SortDirection;

    fn nodes() -> Vec<Node> {
        serde_json::from_str(
            r#"[
                {"_id": "n1", "name": "Edge A", "alias_name": "edge-a", "status": "active",
                 "limits": {"streamer": {"max_limit": 8}, "live": {"max_limit": 4}},
                 "mediaMtxInfo": {"ip_addr": "10.0.0.2", "username": "ops", "password": "pw"}},
                {"_id": "n2", "name": "Edge B", "alias_name": "edge-b", "status": "inactive",
                 "description": "backup rack"},
                {"_id": "n3", "name": "core", "alias_name": "core-1", "status": "maintenance",
                 "limits": {"streamer": {"max_limit": 20}}}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn registry_is_valid() {
        NODE_COLUMNS.validate().unwrap();
        assert_eq!(NODE_COLUMNS.pinned_span(), 36);
    }

    #[test]
    fn limits_sort_by_streamer_limit_absent_lowest() {
        let mut vm = TableViewModel::new(nodes(), ViewConfig::NODES);
        vm.click_header(NodeColumn::Limits);
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["n2", "n1", "n3"]);
        vm.click_header(NodeColumn::Limits);
        assert_eq!(vm.sort_state().direction(), Some(SortDirection::Descending));
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["n3", "n1", "n2"]);
    }

    #[test]
    fn ip_sort_ignores_case() {
        let rows: Vec<Node> = serde_json::from_str(
            r#"[
                {"_id": "n1", "mediaMtxInfo": {"ip_addr": "fe80::B"}},
                {"_id": "n2", "mediaMtxInfo": {"ip_addr": "fe80::a"}},
                {"_id": "n3"}
            ]"#,
        )
        .unwrap();
        let mut vm = TableViewModel::new(rows, ViewConfig::NODES);
        vm.click_header(NodeColumn::IpAddr);
        let ids: Vec<_> = vm.sorted().iter().map(|r| r.key().to_string()).collect();
        assert_eq!(ids, vec!["n3", "n2", "n1"]);
    }

    #[test]
    fn search_matches_description_and_connection_info() {
        let mut vm = TableViewModel::new(nodes(), ViewConfig::NODES);
        vm.set_query("Backup");
        assert_eq!(vm.filtered().len(), 1);
        vm.set_query("10.0.0");
        assert_eq!(vm.filtered()[0].row.id.as_deref(), Some("n1"));
    }

    #[test]
    fn summary_counts_exact_statuses() {
        let vm = TableViewModel::new(nodes(), ViewConfig::NODES);
        let page = build_nodes_view(&vm);
        let chips: Vec<_> = page.summary.iter().map(|c| (c.label, c.value)).collect();
        assert_eq!(
            chips,
            vec![
                ("Total Nodes", 3),
                ("Active", 1),
                ("Inactive", 1),
                ("Showing", 3)
            ]
        );
    }

    #[test]
    fn cells_mask_credentials() {
        let vm = TableViewModel::new(nodes(), ViewConfig::NODES);
        let page = build_nodes_view(&vm);
        let edge_a = &page.rows[0];
        assert_eq!(edge_a.cells[4].text, "Str 8 · Live 4 · Play 0");
        assert_eq!(edge_a.cells[8].text, format!("ops / {}", MASK));
        assert!(!edge_a.cells[8].text.contains("pw"));

        let edge_b = &page.rows[1];
        assert_eq!(edge_b.cells[1].text, "Edge B · backup rack");
        assert_eq!(edge_b.cells[8].style, Some(RowStyleClass::Dimmed));
    }
}
