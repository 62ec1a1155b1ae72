//! `print` subcommand: one page of one view as text or JSON.

use std::fmt;
use std::io::{self, Write};

use clap::Args;
use serde::de::DeserializeOwned;

use fleetdash_core::config::ViewConfig;
use fleetdash_core::fmt::truncate;
use fleetdash_core::model::{Activity, Collection, Device, Node};
use fleetdash_core::provider::{RecordProvider, load_or_empty};
use fleetdash_core::table::{CategoryFilter, RowKey, TableError, TableRow, TableViewModel};
use fleetdash_core::view::{
    PageView, build_activities_view, build_devices_view, build_nodes_view,
};

#[derive(Args)]
pub struct PrintArgs {
    /// View to print: devices, nodes or activities.
    #[arg(value_parser = parse_collection)]
    view: Collection,

    /// Case-insensitive search text.
    #[arg(long, default_value = "")]
    search: String,

    /// Category filter (status for devices/nodes, type for activities).
    #[arg(long, default_value = "all")]
    category: String,

    /// Column id to sort by, e.g. `action` or `updated`.
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending.
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Page number; out-of-range pages are clamped.
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page; must be one of the view's allowed sizes.
    #[arg(long)]
    page_size: Option<usize>,

    /// Print the page as JSON.
    #[arg(long)]
    json: bool,
}

fn parse_collection(s: &str) -> Result<Collection, String> {
    Collection::parse(s).ok_or_else(|| format!("unknown view '{}'", s))
}

#[derive(Debug)]
pub enum PrintError {
    Table(TableError),
    Json(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::Table(e) => write!(f, "{}", e),
            PrintError::Json(e) => write!(f, "JSON error: {}", e),
            PrintError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PrintError {}

impl From<TableError> for PrintError {
    fn from(e: TableError) -> Self {
        PrintError::Table(e)
    }
}

impl From<serde_json::Error> for PrintError {
    fn from(e: serde_json::Error) -> Self {
        PrintError::Json(e)
    }
}

impl From<io::Error> for PrintError {
    fn from(e: io::Error) -> Self {
        PrintError::Io(e)
    }
}

pub fn run(provider: &dyn RecordProvider, args: &PrintArgs) -> Result<(), PrintError> {
    let page = match args.view {
        Collection::Devices => {
            build::<Device>(provider, args, ViewConfig::DEVICES, build_devices_view)?
        }
        Collection::Nodes => build::<Node>(provider, args, ViewConfig::NODES, build_nodes_view)?,
        Collection::Activities => build::<Activity>(
            provider,
            args,
            ViewConfig::ACTIVITIES,
            build_activities_view,
        )?,
    };

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &page)?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &page)?;
    }
    Ok(())
}

fn build<R: TableRow + DeserializeOwned>(
    provider: &dyn RecordProvider,
    args: &PrintArgs,
    config: ViewConfig,
    build_view: fn(&TableViewModel<R>) -> PageView<RowKey>,
) -> Result<PageView<RowKey>, TableError> {
    let rows: Vec<R> = load_or_empty(provider, args.view);
    let mut vm = TableViewModel::new(rows, config);

    vm.set_query(args.search.as_str());
    vm.set_category(CategoryFilter::parse(&args.category));
    if let Some(size) = args.page_size {
        vm.set_page_size(size)?;
    }
    if let Some(id) = &args.sort {
        vm.click_header_id(id)?;
        if args.desc {
            vm.click_header_id(id)?;
        }
    }
    vm.set_page(args.page);

    Ok(build_view(&vm))
}

fn write_text(out: &mut impl Write, page: &PageView<RowKey>) -> io::Result<()> {
    let chips: Vec<String> = page
        .summary
        .iter()
        .map(|c| format!("{}: {}", c.label, c.value))
        .collect();
    writeln!(out, "{}  ({})", page.title, chips.join(", "))?;
    if let Some(label) = &page.sort_label {
        writeln!(out, "{}", label)?;
    }

    let header: Vec<String> = page
        .headers
        .iter()
        .map(|h| pad(&h.title(), h.width))
        .collect();
    writeln!(out, "{}", header.concat().trim_end())?;

    match &page.empty_message {
        Some(message) => writeln!(out, "{}", message)?,
        None => {
            for row in &page.rows {
                let line: Vec<String> = row
                    .cells
                    .iter()
                    .zip(&page.headers)
                    .map(|(c, h)| pad(&c.text, h.width))
                    .collect();
                writeln!(out, "{}", line.concat().trim_end())?;
            }
        }
    }

    let window: Vec<String> = page.window.iter().map(|l| l.to_string()).collect();
    writeln!(
        out,
        "{}  [page {}/{}: {}]  {} per page",
        page.showing,
        page.page,
        page.total_pages,
        window.join(" "),
        page.page_size
    )
}

/// Truncates to the column width minus a one-cell gap, then pads.
fn pad(text: &str, width: u16) -> String {
    let width = width as usize;
    let text = truncate(text, width.saturating_sub(1));
    format!("{:<width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdash_core::provider::InMemoryProvider;

    fn args(view: Collection) -> PrintArgs {
        PrintArgs {
            view,
            search: String::new(),
            category: "all".into(),
            sort: None,
            desc: false,
            page: 1,
            page_size: None,
            json: false,
        }
    }

    fn provider() -> InMemoryProvider {
        InMemoryProvider::new().with(
            Collection::Activities,
            r#"[
                {"_id": "a1", "device_id": "CAM-1", "type": "live", "action": "b_stop"},
                {"_id": "a2", "device_id": "CAM-2", "type": "playback", "action": "A_start"},
                {"_id": "a3", "device_id": "CAM-3", "type": "live", "action": "c_error"}
            ]"#,
        )
    }

    #[test]
    fn sort_desc_and_category() {
        let mut a = args(Collection::Activities);
        a.category = "live".into();
        a.sort = Some("action".into());
        a.desc = true;
        let page = build::<Activity>(&provider(), &a, ViewConfig::ACTIVITIES, build_activities_view)
            .unwrap();
        let ids: Vec<_> = page.rows.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["a3", "a1"]);
        assert_eq!(page.sort_label.as_deref(), Some("Sorted by Action ▼"));
    }

    #[test]
    fn unknown_or_unsortable_column_and_bad_page_size_are_errors() {
        let mut a = args(Collection::Activities);
        a.sort = Some("nope".into());
        let err = build::<Activity>(&provider(), &a, ViewConfig::ACTIVITIES, build_activities_view)
            .unwrap_err();
        assert_eq!(err, TableError::UnknownColumn("nope".into()));

        let mut a = args(Collection::Activities);
        a.sort = Some("sno".into());
        a.desc = true;
        let err = build::<Activity>(&provider(), &a, ViewConfig::ACTIVITIES, build_activities_view)
            .unwrap_err();
        assert_eq!(err, TableError::UnsortableColumn("sno"));

        let mut a = args(Collection::Activities);
        a.page_size = Some(15);
        assert!(
            build::<Activity>(&provider(), &a, ViewConfig::ACTIVITIES, build_activities_view)
                .is_err()
        );
    }

    #[test]
    fn text_output_has_header_rows_and_footer() {
        let page = build::<Activity>(
            &provider(),
            &args(Collection::Activities),
            ViewConfig::ACTIVITIES,
            build_activities_view,
        )
        .unwrap();
        let mut buf = Vec::new();
        write_text(&mut buf, &page).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Activity Logs"));
        assert!(lines[1].starts_with("S.No"));
        assert!(lines[2].starts_with("1     CAM-1"));
        assert!(lines[5].starts_with("Showing 1–3 of 3 activities"));
    }

    #[test]
    fn missing_collection_prints_empty_state() {
        let page = build::<Node>(
            &InMemoryProvider::new(),
            &args(Collection::Nodes),
            ViewConfig::NODES,
            build_nodes_view,
        )
        .unwrap();
        assert_eq!(page.empty_message.as_deref(), Some("No nodes found."));
    }
}
