//! Optional decision log and per-extension counters.

use std::{
	collections::HashMap,
	io::{self, Write},
	path::Path,
	sync::{Mutex, PoisonError},
};

use tracing::debug;

use crate::{cascade::Verdict, extensions::Extension};

/// Shared by every thread classifying through the same detector.
#[derive(Debug, Default)]
pub struct Instrumentation {
	counts: Mutex<HashMap<Extension, u64>>,
}

impl Instrumentation {
	pub fn record(&self, path: &Path, verdict: &Verdict) {
		let old_ext = Extension::of_path(path);
		debug!(
			path = %path.display(),
			old_ext = old_ext.as_ref().map_or("", Extension::as_str),
			new_ext = %verdict.extension,
			media_type = %verdict.signal.media_type,
			description = %verdict.signal.description,
			rule = %verdict.rule,
			"Classified file"
		);

		*self
			.counts
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.entry(verdict.extension.clone())
			.or_default() += 1;
	}

	/// `(extension, count)` pairs, most frequent first.
	#[must_use]
	pub fn summary(&self) -> Vec<(Extension, u64)> {
		let mut summary = self
			.counts
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.iter()
			.map(|(ext, count)| (ext.clone(), *count))
			.collect::<Vec<_>>();

		summary.sort_by(|(a_ext, a_count), (b_ext, b_count)| {
			b_count.cmp(a_count).then_with(|| a_ext.cmp(b_ext))
		});

		summary
	}

	/// Tab separated summary with a header row.
	pub fn write_summary(&self, mut out: impl Write) -> io::Result<()> {
		writeln!(out, "Dest Ext\tCall Count")?;
		for (ext, count) in self.summary() {
			writeln!(out, "{ext}\t{count}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{kind::Rule, sniff::OracleSignal};
	use pretty_assertions::assert_eq;

	fn verdict(ext: &'static str) -> Verdict {
		Verdict {
			extension: Extension::from_static(ext),
			signal: OracleSignal::new("text/plain", "ASCII text"),
			rule: Rule::MediaType,
		}
	}

	#[test]
	fn summary_is_sorted_by_count_then_extension() {
		let stats = Instrumentation::default();
		for ext in [".txt", ".cs", ".txt", ".js", ".cs", ".txt"] {
			stats.record(Path::new("/tmp/x.bin"), &verdict(ext));
		}

		assert_eq!(
			stats.summary(),
			vec![
				(Extension::from_static(".txt"), 3),
				(Extension::from_static(".cs"), 2),
				(Extension::from_static(".js"), 1),
			]
		);
	}

	#[test]
	fn writes_tab_separated_summary() {
		let stats = Instrumentation::default();
		stats.record(Path::new("/tmp/a"), &verdict(".xml"));

		let mut out = Vec::new();
		stats.write_summary(&mut out).expect("write to vec");
		assert_eq!(String::from_utf8(out).unwrap(), "Dest Ext\tCall Count\n.xml\t1\n");
	}

	#[test]
	fn counts_survive_concurrent_recording() {
		let stats = Instrumentation::default();
		std::thread::scope(|s| {
			for _ in 0..8 {
				s.spawn(|| {
					for _ in 0..250 {
						stats.record(Path::new("/tmp/t"), &verdict(".txt"));
					}
				});
			}
		});

		assert_eq!(stats.summary(), vec![(Extension::from_static(".txt"), 2000)]);
	}
}
