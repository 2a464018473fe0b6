//! Oracle backed by the `file` command.

use std::{
	ffi::OsString,
	io,
	path::{Path, PathBuf},
	process::Command,
};

use ed_file_ext::{FileIOError, OracleSignal, SniffError, Sniffer};
use tracing::{debug, trace};

/// Tests `file` skips: they only add noise or latency for our purposes.
const EXCLUDED_TESTS: [&str; 3] = ["compress", "elf", "apptype"];

/// Runs `file --brief` twice per path, once for the media type and once
/// for the description.
#[derive(Debug, Clone)]
pub struct FileCommand {
	program: PathBuf,
	magic_file: Option<PathBuf>,
}

impl Default for FileCommand {
	fn default() -> Self {
		Self {
			program: PathBuf::from("file"),
			magic_file: None,
		}
	}
}

impl FileCommand {
	#[must_use]
	pub fn with_program(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
			..Self::default()
		}
	}

	/// Use a compiled magic database instead of the system one.
	#[must_use]
	pub fn with_magic_file(mut self, magic_file: impl Into<PathBuf>) -> Self {
		self.magic_file = Some(magic_file.into());
		self
	}

	fn args(&self, mime_type: bool, path: &Path) -> Vec<OsString> {
		let mut args = vec![OsString::from("--brief")];
		if mime_type {
			args.push("--mime-type".into());
		}
		for test in EXCLUDED_TESTS {
			args.push("-e".into());
			args.push(test.into());
		}
		if let Some(magic_file) = &self.magic_file {
			args.push("--magic-file".into());
			args.push(magic_file.into());
		}
		args.push("--".into());
		args.push(path.into());
		args
	}

	fn run(&self, mime_type: bool, path: &Path) -> Result<String, SniffError> {
		let output = Command::new(&self.program)
			.args(self.args(mime_type, path))
			.output()
			.map_err(|e| {
				if e.kind() == io::ErrorKind::NotFound {
					SniffError::Unsupported(format!(
						"'{}' is not installed",
						self.program.display()
					))
				} else {
					FileIOError::from_std_io_err_with_msg(path, e, "running file command").into()
				}
			})?;

		let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
		let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
		trace!(path = %path.display(), %stdout, %stderr, "file command finished");

		if !output.status.success() || !stderr.is_empty() {
			return Err(SniffError::Database(if stderr.is_empty() {
				format!("file exited with {}", output.status)
			} else {
				stderr
			}));
		}

		// `file` reports most problems on stdout with a zero exit status
		if stdout.is_empty()
			|| stdout.starts_with("cannot open")
			|| stdout.starts_with("ERROR:")
		{
			return Err(SniffError::Database(stdout));
		}

		Ok(stdout)
	}
}

impl Sniffer for FileCommand {
	fn sniff(&self, path: &Path) -> Result<OracleSignal, SniffError> {
		if !path.exists() {
			return Err(SniffError::NotFound(path.into()));
		}

		let media_type = self.run(true, path)?;
		let description = self.run(false, path)?;
		debug!(path = %path.display(), %media_type, %description, "Sniffed");

		Ok(OracleSignal::new(media_type, description))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn file_is_installed() -> bool {
		Command::new("file").arg("--version").output().is_ok()
	}

	#[test]
	fn builds_brief_invocations() {
		let args = FileCommand::default()
			.with_magic_file("/opt/magic.mgc")
			.args(true, Path::new("/tmp/-odd name"));

		assert_eq!(
			args,
			[
				"--brief",
				"--mime-type",
				"-e",
				"compress",
				"-e",
				"elf",
				"-e",
				"apptype",
				"--magic-file",
				"/opt/magic.mgc",
				"--",
				"/tmp/-odd name",
			]
			.map(OsString::from)
		);
	}

	#[test]
	fn missing_files_fail_closed() {
		assert!(matches!(
			FileCommand::default().sniff(Path::new("/no/such/file.bin")),
			Err(SniffError::NotFound(_))
		));
	}

	#[test]
	fn missing_program_is_unsupported() {
		let file = tempfile::NamedTempFile::new().expect("temp file");
		assert!(matches!(
			FileCommand::with_program("/no/such/bin/file").sniff(file.path()),
			Err(SniffError::Unsupported(_))
		));
	}

	#[test]
	fn sniffs_plain_text() {
		if !file_is_installed() {
			return;
		}

		let file = tempfile::NamedTempFile::new().expect("temp file");
		std::fs::write(file.path(), "just a few words of text\n").expect("write");

		let signal = FileCommand::default().sniff(file.path()).expect("sniff");
		assert_eq!(signal.media_type, "text/plain");
		assert!(signal.description.contains("text"));
	}
}
