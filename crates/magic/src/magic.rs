//! Byte patterns at fixed offsets

use std::{fmt, num::ParseIntError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
	#[error("invalid hex byte '{token}': {source}")]
	InvalidHex {
		token: String,
		#[source]
		source: ParseIntError,
	},
	#[error("invalid byte range '{0}'")]
	InvalidRange(String),
	#[error("empty byte pattern")]
	Empty,
}

/// A run of bytes expected at `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicBytePattern {
	pub bytes: Vec<MagicByte>,
	pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MagicByte {
	Exact(u8),
	Any,
	Range { min: u8, max: u8 },
}

fn parse_hex(token: &str) -> Result<u8, PatternError> {
	u8::from_str_radix(token, 16).map_err(|source| PatternError::InvalidHex {
		token: token.to_string(),
		source,
	})
}

impl MagicBytePattern {
	/// Parse space separated hex bytes, e.g. `"FF D8 FF ?? 00-1F"`.
	pub fn from_hex_string(s: &str, offset: usize) -> Result<Self, PatternError> {
		let bytes = s
			.split_whitespace()
			.map(|part| match part {
				"??" | "?" => Ok(MagicByte::Any),
				_ => match part.split_once('-') {
					Some((min, max)) => {
						let (min, max) = (parse_hex(min)?, parse_hex(max)?);
						if min > max {
							return Err(PatternError::InvalidRange(part.to_string()));
						}
						Ok(MagicByte::Range { min, max })
					}
					None => parse_hex(part).map(MagicByte::Exact),
				},
			})
			.collect::<Result<Vec<_>, _>>()?;

		if bytes.is_empty() {
			return Err(PatternError::Empty);
		}

		Ok(Self { bytes, offset })
	}

	/// Literal bytes, as for ASCII markers like `%PDF-`.
	#[must_use]
	pub fn literal(bytes: &[u8], offset: usize) -> Self {
		Self {
			bytes: bytes.iter().copied().map(MagicByte::Exact).collect(),
			offset,
		}
	}

	#[must_use]
	pub fn matches(&self, buf: &[u8]) -> bool {
		buf.get(self.offset..self.required_size())
			.is_some_and(|slice| {
				slice
					.iter()
					.zip(&self.bytes)
					.all(|(&byte, pattern)| pattern.matches(byte))
			})
	}

	/// Minimum buffer size needed to check this pattern
	#[must_use]
	pub fn required_size(&self) -> usize {
		self.offset + self.bytes.len()
	}
}

impl MagicByte {
	#[must_use]
	pub const fn matches(self, byte: u8) -> bool {
		match self {
			Self::Exact(b) => b == byte,
			Self::Any => true,
			Self::Range { min, max } => byte >= min && byte <= max,
		}
	}
}

impl fmt::Display for MagicByte {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact(b) => write!(f, "{b:02X}"),
			Self::Any => write!(f, "??"),
			Self::Range { min, max } => write!(f, "{min:02X}-{max:02X}"),
		}
	}
}

impl fmt::Display for MagicBytePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "offset={}:", self.offset)?;
		for byte in &self.bytes {
			write!(f, " {byte}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parses_hex_with_wildcards_and_ranges() {
		let pattern = MagicBytePattern::from_hex_string("47 ?? 00-1f 47", 0).unwrap();
		assert_eq!(
			pattern.bytes,
			vec![
				MagicByte::Exact(0x47),
				MagicByte::Any,
				MagicByte::Range { min: 0, max: 0x1F },
				MagicByte::Exact(0x47),
			]
		);
		assert_eq!(pattern.to_string(), "offset=0: 47 ?? 00-1F 47");
	}

	#[test]
	fn rejects_bad_patterns() {
		assert!(matches!(
			MagicBytePattern::from_hex_string("FF ZZ", 0),
			Err(PatternError::InvalidHex { .. })
		));
		assert_eq!(
			MagicBytePattern::from_hex_string("20-10", 0),
			Err(PatternError::InvalidRange("20-10".into()))
		);
		assert_eq!(MagicBytePattern::from_hex_string("  ", 0), Err(PatternError::Empty));
	}

	#[test]
	fn matches_at_offset() {
		let pattern = MagicBytePattern::from_hex_string("FF D8", 0).unwrap();
		assert!(pattern.matches(&[0xFF, 0xD8, 0xFF]));
		assert!(!pattern.matches(&[0xFF, 0xD7]));
		assert!(!pattern.matches(&[0xFF]));

		let pattern = MagicBytePattern::literal(b"PK", 2);
		assert_eq!(pattern.required_size(), 4);
		assert!(pattern.matches(&[0x00, 0x00, 0x50, 0x4B]));
		assert!(!pattern.matches(&[0x50, 0x4B, 0x00, 0x00]));
	}
}
