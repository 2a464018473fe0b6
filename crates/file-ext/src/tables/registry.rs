use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use crate::{
	error::{FileIOError, Result},
	extensions::Extension,
};

/// Well known location of the system media type database on Unix hosts.
pub const SYSTEM_MIME_TYPES: &str = "/etc/mime.types";

/// Host-provided media type to extension lookup, consulted when the built-in
/// table has no entry.
pub trait MimeRegistry: Send + Sync {
	fn extension_for(&self, media_type: &str) -> Option<Extension>;
}

/// A registry that knows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRegistry;

impl MimeRegistry for NoRegistry {
	fn extension_for(&self, _: &str) -> Option<Extension> {
		None
	}
}

/// Media types parsed from an Apache style `mime.types` file.
///
/// Each line holds a media type followed by its extensions; the first
/// extension listed wins. `#` starts a comment.
#[derive(Debug, Default, Clone)]
pub struct MimeTypesFile {
	entries: HashMap<String, Extension>,
}

impl MimeTypesFile {
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read_to_string(path)
			.map_err(|e| FileIOError::from_std_io_err_with_msg(path, e, "reading mime.types"))?;

		let registry = Self::parse(&raw);
		debug!(
			path = %path.display(),
			entries = registry.len(),
			"Loaded media type registry"
		);

		Ok(registry)
	}

	/// The host's own database, if there is one.
	#[must_use]
	pub fn system() -> Option<Self> {
		Self::load(SYSTEM_MIME_TYPES)
			.map_err(|e| debug!("No system media type registry: {e}"))
			.ok()
	}

	#[must_use]
	pub fn parse(raw: &str) -> Self {
		let entries = raw
			.lines()
			.map(|line| line.split_once('#').map_or(line, |(data, _)| data))
			.filter_map(|line| {
				let mut fields = line.split_whitespace();
				let media_type = fields.next()?;
				let ext = fields.find_map(Extension::parse)?;
				Some((media_type.to_ascii_lowercase(), ext))
			})
			.fold(HashMap::new(), |mut entries, (media_type, ext)| {
				entries.entry(media_type).or_insert(ext);
				entries
			});

		Self { entries }
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl MimeRegistry for MimeTypesFile {
	fn extension_for(&self, media_type: &str) -> Option<Extension> {
		self.entries.get(&media_type.to_ascii_lowercase()).cloned()
	}
}
