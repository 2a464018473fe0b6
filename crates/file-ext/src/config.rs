//! Detector configuration

use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, FileIOError, Result};

/// Signature length used by most branches, in characters.
pub const DEFAULT_SIGNATURE_LEN: usize = 1024;

/// Markup documents often carry long preambles before the root tag.
pub const DEFAULT_MARKUP_SIGNATURE_LEN: usize = 2048;

/// Upper bound on bytes read from a single file.
pub const DEFAULT_READ_LIMIT: u64 = 1024 * 1024;

pub const DEFAULT_PATTERN_TIMEOUT_MS: u64 = 5_000;

/// Tuning knobs for the classification cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
	/// Maximum signature length, in characters
	pub signature_len: usize,

	/// Maximum signature length for the `text/xml` branch, in characters
	pub markup_signature_len: usize,

	/// Maximum number of bytes read from a file prefix
	pub read_limit: u64,

	/// Wall-clock budget for every pattern check, in milliseconds
	pub pattern_timeout_ms: u64,

	/// An assembly listing needs strictly more distinct tokens than this
	pub assembly_threshold: usize,

	/// Minimum number of `selector { prop: value; }` blocks for a stylesheet
	pub css_min_rules: usize,

	/// Record every decision and keep per-extension counters
	pub instrumentation: bool,
}

impl Default for DetectorConfig {
	fn default() -> Self {
		Self {
			signature_len: DEFAULT_SIGNATURE_LEN,
			markup_signature_len: DEFAULT_MARKUP_SIGNATURE_LEN,
			read_limit: DEFAULT_READ_LIMIT,
			pattern_timeout_ms: DEFAULT_PATTERN_TIMEOUT_MS,
			assembly_threshold: 5,
			css_min_rules: 3,
			instrumentation: false,
		}
	}
}

impl DetectorConfig {
	/// Load a TOML configuration file. Missing keys take their defaults.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		info!("Loading detector config from {}", path.display());

		let raw = fs::read_to_string(path).map_err(|e| {
			FileIOError::from_std_io_err_with_msg(path, e, "reading detector config")
		})?;

		Self::from_toml(&raw)
	}

	pub fn from_toml(raw: &str) -> Result<Self> {
		let config: Self = toml::from_str(raw)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.signature_len == 0 || self.markup_signature_len == 0 {
			return Err(Error::InvalidConfig(
				"signature lengths must be greater than zero".into(),
			));
		}

		if self.read_limit < 16 {
			return Err(Error::InvalidConfig(format!(
				"read_limit must be at least 16 bytes, got {}",
				self.read_limit
			)));
		}

		if self.pattern_timeout_ms == 0 {
			return Err(Error::InvalidConfig(
				"pattern_timeout_ms must be greater than zero".into(),
			));
		}

		Ok(())
	}

	#[must_use]
	pub const fn pattern_timeout(&self) -> Duration {
		Duration::from_millis(self.pattern_timeout_ms)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn empty_toml_yields_defaults() {
		assert_eq!(
			DetectorConfig::from_toml("").expect("empty config"),
			DetectorConfig::default()
		);
	}

	#[test]
	fn partial_toml_overrides_only_given_keys() {
		let config = DetectorConfig::from_toml(
			"signature_len = 512\ninstrumentation = true\npattern_timeout_ms = 250\n",
		)
		.expect("valid config");

		assert_eq!(config.signature_len, 512);
		assert!(config.instrumentation);
		assert_eq!(config.pattern_timeout(), Duration::from_millis(250));
		assert_eq!(config.markup_signature_len, DEFAULT_MARKUP_SIGNATURE_LEN);
	}

	#[test]
	fn zero_timeout_is_rejected() {
		assert!(matches!(
			DetectorConfig::from_toml("pattern_timeout_ms = 0"),
			Err(Error::InvalidConfig(_))
		));
	}

	#[test]
	fn tiny_read_limit_is_rejected() {
		assert!(matches!(
			DetectorConfig::from_toml("read_limit = 8"),
			Err(Error::InvalidConfig(_))
		));
	}

	#[test]
	fn malformed_toml_is_a_parse_error() {
		assert!(matches!(
			DetectorConfig::from_toml("signature_len = \"long\""),
			Err(Error::ConfigParse(_))
		));
	}
}
