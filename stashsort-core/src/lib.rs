use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod bits;
pub mod catalog;
pub mod chunks;
pub mod classify;
pub mod config;
pub mod item;
pub mod page;
pub mod properties;
pub mod stash;
pub mod upgrade;

use bits::BitError;
use catalog::StaticCatalog;
use config::SortConfig;
use page::Page;
use stash::Stash;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SorterSettings {
    pub input_path: PathBuf,
    /// Where the sorted stash goes; the input is replaced when unset.
    pub output_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    /// Decode and print the items as JSON without writing anything.
    pub dump_items: bool,
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub pages_ignored: usize,
    pub pages_written: usize,
    pub items_read: usize,
    pub items_written: usize,
    pub dump: Option<String>,
}

#[derive(Debug, Error)]
pub enum SorterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("malformed stash: {0}")]
    Format(String),
    #[error("bit field error: {0}")]
    Bits(#[from] BitError),
    #[error("unknown {kind}: {key}")]
    UnknownCatalogEntry { kind: &'static str, key: String },
    #[error("item {code} ({width}x{height}) does not fit on an empty page")]
    ItemTooLarge { code: String, width: u8, height: u8 },
}

pub type Result<T> = std::result::Result<T, SorterError>;

/// `dir/name.ext` -> `dir/name<suffix>.ext`
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

fn write_replacing(target: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp_name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = target.with_file_name(tmp_name);
    fs::write(&tmp, bytes)?;
    if let Err(err) = fs::rename(&tmp, target) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

fn sort_report(
    input: &Path,
    target: &Path,
    summary: &RunSummary,
    pages: &[Page],
    page_groups: &[String],
) -> String {
    let mut log = format!("Stash: {}\n", input.display());
    log.push_str(&format!("output: {}\n", target.display()));
    log.push_str(&format!(
        "pages: {} ignored, {} written\n",
        summary.pages_ignored, summary.pages_written
    ));
    log.push_str(&format!(
        "items: {} read, {} written\n",
        summary.items_read, summary.items_written
    ));
    for (idx, (page, group)) in pages.iter().zip(page_groups).enumerate() {
        let number = summary.pages_ignored + idx + 1;
        log.push_str(&format!("page {} [{}]:", number, group));
        for item in page.items() {
            let (x, y) = item.position();
            log.push_str(&format!(" {}({},{})", item.code, x, y));
        }
        log.push('\n');
    }
    log
}

pub fn run(settings: &SorterSettings) -> Result<RunSummary> {
    if !settings.input_path.exists() {
        return Err(SorterError::Config(format!(
            "Input path does not exist: {}",
            settings.input_path.display()
        )));
    }

    let catalog = StaticCatalog;
    let config = SortConfig::load(settings.config_path.as_deref(), &catalog)?;

    let bytes = fs::read(&settings.input_path)?;
    let stash = Stash::parse(&bytes)?;

    let mut summary = RunSummary {
        pages_ignored: config.ignore_first_pages.min(stash.pages.len()),
        ..RunSummary::default()
    };
    if stash.pages.len() <= config.ignore_first_pages {
        info!(
            "all {} pages are ignored, leaving {} unchanged",
            stash.pages.len(),
            settings.input_path.display()
        );
        return Ok(summary);
    }

    let (ignored, sortable) = stash.pages.split_at(config.ignore_first_pages);
    let mut items = stash::decode_pages(sortable, &catalog)?;
    summary.items_read = items.len();
    info!("decoded {} items from {} pages", items.len(), sortable.len());

    if settings.dump_items {
        summary.dump = Some(serde_json::to_string_pretty(&items)?);
        return Ok(summary);
    }

    if config.upgrade_runes.enabled {
        items = upgrade::upgrade_runes(items, &config.upgrade_runes, &catalog)?;
    }
    if config.upgrade_gems.enabled {
        items = upgrade::upgrade_gems(items, &config.upgrade_gems, &catalog)?;
    }

    let groups = classify::classify(items, &config.groups);
    let (columns, rows) = config.page_size();
    let mut pages: Vec<Page> = Vec::new();
    let mut page_groups: Vec<String> = Vec::new();
    for group in groups {
        let laid = page::layout(vec![group.items], columns, rows)?;
        page_groups.extend(std::iter::repeat(group.name).take(laid.len()));
        pages.extend(laid);
    }

    let out_bytes = stash.assemble(ignored, &pages);
    summary.pages_written = pages.len();
    summary.items_written = pages.iter().map(Page::len).sum();

    let target = settings
        .output_path
        .clone()
        .unwrap_or_else(|| settings.input_path.clone());
    let report = settings
        .debug
        .then(|| sort_report(&settings.input_path, &target, &summary, &pages, &page_groups));

    if config.backup_stash_file && target.exists() {
        let backup = sibling_with_suffix(&target, "_OLD");
        fs::copy(&target, &backup)?;
        info!("backed up {} to {}", target.display(), backup.display());
    }
    write_replacing(&target, &out_bytes)?;
    info!(
        "wrote {} pages ({} kept as is) to {}",
        summary.pages_written + summary.pages_ignored,
        summary.pages_ignored,
        target.display()
    );

    // The stash is already replaced; a lost report does not fail the run.
    if let Some(report) = report {
        let log_path = sibling_with_suffix(&target, "_sort_log").with_extension("txt");
        if let Err(err) = fs::write(&log_path, report) {
            warn!("could not write {}: {err}", log_path.display());
        }
    }

    Ok(summary)
}
