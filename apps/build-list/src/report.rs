//! Tab-delimited report over a directory tree.

use std::{
	io::{self, Write},
	path::Path,
};

use ed_file_ext::{Detector, Extension};
use tracing::{debug, warn};
use walkdir::WalkDir;

pub const HEADER: &str = "Old Ext\tNew Ext\tMime Type\tDescription\tRule\tFilename";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportStats {
	pub files: usize,
	pub classified: usize,
	pub skipped: usize,
}

/// Tabs and line breaks would shift the columns.
fn cell(value: &str) -> String {
	value.replace(['\t', '\r', '\n'], " ")
}

fn ext_cell(ext: Option<&Extension>) -> &str {
	ext.map_or("", Extension::as_str)
}

/// Walk `root` without following symlinks and write one row per regular
/// file. `exclude` is left out, so the report can live inside `root`.
pub fn write_report(
	detector: &Detector,
	root: &Path,
	exclude: Option<&Path>,
	mut out: impl Write,
) -> io::Result<ReportStats> {
	let mut stats = ReportStats::default();
	writeln!(out, "{HEADER}")?;

	for entry in WalkDir::new(root).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				warn!("Skipping unreadable entry: {e}");
				stats.skipped += 1;
				continue;
			}
		};

		if !entry.file_type().is_file() || exclude.is_some_and(|exclude| entry.path() == exclude) {
			continue;
		}

		let path = entry.path();
		stats.files += 1;
		let old_ext = Detector::by_name(path);

		match detector.try_classify(path) {
			Ok(Some(verdict)) => {
				stats.classified += 1;
				writeln!(
					out,
					"{}\t{}\t{}\t{}\t{}\t{}",
					ext_cell(old_ext.as_ref()),
					verdict.extension,
					cell(&verdict.signal.media_type),
					cell(&verdict.signal.description),
					verdict.rule,
					cell(&path.display().to_string()),
				)?;
			}
			Ok(None) => {
				debug!(path = %path.display(), "No content extension");
				writeln!(
					out,
					"{}\t\t\t\t\t{}",
					ext_cell(old_ext.as_ref()),
					cell(&path.display().to_string()),
				)?;
			}
			Err(e) => {
				warn!(path = %path.display(), "Skipping file: {e:#}");
				stats.skipped += 1;
			}
		}
	}

	Ok(stats)
}
