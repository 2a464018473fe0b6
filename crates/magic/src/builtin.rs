//! A small in-process oracle for hosts without libmagic.
//!
//! Only the formats the extension cascade cares about are recognised: a
//! handful of container and image signatures, Windows executables (with the
//! PE header decoded the way `file` describes it), markup and plain text.
//! Everything else is `application/octet-stream` "data".

use std::{
	fs::{self, File},
	io::{self, Read},
	path::Path,
};

use ed_file_ext::{
	text::{encoding_of, TextEncoding},
	FileIOError, OracleSignal, SniffError, Sniffer,
};
use once_cell::sync::Lazy;
use tracing::{error, trace};

use crate::magic::MagicBytePattern;

/// Bytes read from the start of each file.
pub const DEFAULT_READ_LEN: usize = 8 * 1024;

struct MagicRule {
	pattern: MagicBytePattern,
	priority: u8,
	media_type: &'static str,
	description: &'static str,
}

// (pattern, offset, priority, media type, description)
const RAW_RULES: &[(&str, usize, u8, &str, &str)] = &[
	("89 50 4E 47 0D 0A 1A 0A", 0, 100, "image/png", "PNG image data"),
	("FF D8 FF", 0, 90, "image/jpeg", "JPEG image data"),
	("47 49 46 38 37-39 61", 0, 90, "image/gif", "GIF image data"),
	("42 4D ?? ?? ?? ?? 00 00 00 00", 0, 60, "image/bmp", "PC bitmap"),
	(
		"00 00 00 0C 6A 50 20 20 0D 0A 87 0A",
		0,
		100,
		"image/jp2",
		"JPEG 2000 image",
	),
	("50 4B 03 04", 0, 80, "application/zip", "Zip archive data"),
	("1F 8B 08", 0, 90, "application/gzip", "gzip compressed data"),
	("42 5A 68 31-39", 0, 90, "application/x-bzip2", "bzip2 compressed data"),
	(
		"37 7A BC AF 27 1C",
		0,
		100,
		"application/x-7z-compressed",
		"7-zip archive data",
	),
	(
		"D0 CF 11 E0 A1 B1 1A E1",
		0,
		100,
		"application/CDFV2",
		"Composite Document File V2 Document",
	),
	(
		"52 49 46 46 ?? ?? ?? ?? 57 41 56 45",
		0,
		100,
		"audio/x-wav",
		"RIFF (little-endian) data, WAVE audio",
	),
	("49 44 33 02-04", 0, 80, "audio/mpeg", "Audio file with ID3 version 2"),
	("7F 45 4C 46", 0, 100, "application/x-executable", "ELF executable"),
];

// ASCII markers: (marker, offset, priority, media type, description)
const LITERAL_RULES: &[(&str, usize, u8, &str, &str)] = &[
	("%PDF-", 0, 100, "application/pdf", "PDF document"),
	("%!PS-Adobe", 0, 90, "application/postscript", "PostScript document text"),
	("Rar!\x1a\x07", 0, 100, "application/x-rar", "RAR archive data"),
	("wOF2", 0, 100, "font/woff2", "Web Open Font Format (Version 2)"),
	("wOFF", 0, 100, "font/woff", "Web Open Font Format"),
	("OggS", 0, 90, "audio/ogg", "Ogg data"),
	("fLaC", 0, 90, "audio/x-flac", "FLAC audio bitstream data"),
	("ustar", 257, 70, "application/x-tar", "POSIX tar archive"),
];

static RULES: Lazy<Vec<MagicRule>> = Lazy::new(|| {
	let mut rules = RAW_RULES
		.iter()
		.filter_map(|&(hex, offset, priority, media_type, description)| {
			MagicBytePattern::from_hex_string(hex, offset)
				.map_err(|err| error!(%hex, "{err:#?}"))
				.ok()
				.map(|pattern| MagicRule {
					pattern,
					priority,
					media_type,
					description,
				})
		})
		.chain(LITERAL_RULES.iter().map(
			|&(marker, offset, priority, media_type, description)| MagicRule {
				pattern: MagicBytePattern::literal(marker.as_bytes(), offset),
				priority,
				media_type,
				description,
			},
		))
		.collect::<Vec<_>>();

	rules.sort_by(|a, b| b.priority.cmp(&a.priority));
	rules
});

const DOS_EXECUTABLE: &str = "application/x-dosexec";

fn u16_at(buf: &[u8], offset: usize) -> Option<u16> {
	buf.get(offset..offset + 2)
		.map(|bytes| u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn u32_at(buf: &[u8], offset: usize) -> Option<u32> {
	buf.get(offset..offset + 4)
		.map(|bytes| u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Describe a PE image the way `file` does, e.g.
/// `PE32+ executable (DLL) (GUI) x86-64, for MS Windows`.
fn describe_pe(buf: &[u8]) -> Option<String> {
	let pe = usize::try_from(u32_at(buf, 0x3C)?).ok()?;
	if buf.get(pe..pe + 4)? != b"PE\0\0" {
		return None;
	}

	let machine = match u16_at(buf, pe + 4)? {
		0x014C => "Intel 80386",
		0x8664 => "x86-64",
		0xAA64 => "Aarch64",
		0x01C4 => "ARMv7 Thumb",
		0x0200 => "Intel Itanium",
		_ => return None,
	};
	let is_dll = u16_at(buf, pe + 22)? & 0x2000 != 0;

	let optional = pe + 24;
	let format = match u16_at(buf, optional)? {
		0x010B => "PE32",
		0x020B => "PE32+",
		_ => return None,
	};
	let subsystem = match u16_at(buf, optional + 68) {
		Some(1) => Some("native"),
		Some(2) => Some("GUI"),
		Some(3) => Some("console"),
		Some(10) => Some("EFI application"),
		_ => None,
	};

	let mut description = format!("{format} executable");
	if is_dll {
		description.push_str(" (DLL)");
	}
	if let Some(subsystem) = subsystem {
		description.push_str(&format!(" ({subsystem})"));
	}
	description.push_str(&format!(" {machine}, for MS Windows"));

	Some(description)
}

fn encoding_label(encoding: TextEncoding) -> &'static str {
	match encoding {
		TextEncoding::Ascii => "ASCII",
		TextEncoding::Utf8 => "UTF-8 Unicode",
		TextEncoding::Utf16BigEndian => "Big-endian UTF-16 Unicode",
		TextEncoding::Utf16LittleEndian => "Little-endian UTF-16 Unicode",
		TextEncoding::Utf32BigEndian => "Big-endian UTF-32 Unicode",
		TextEncoding::Utf32LittleEndian => "Little-endian UTF-32 Unicode",
		TextEncoding::Latin1 => "ISO-8859",
	}
}

fn describe_text(head: &[u8], encoding: TextEncoding) -> OracleSignal {
	let label = encoding_label(encoding);
	let start = String::from_utf8_lossy(&head[..head.len().min(256)])
		.trim_start_matches('\u{feff}')
		.trim_start()
		.to_ascii_lowercase();

	if start.starts_with("<?xml") {
		return OracleSignal::new("text/xml", format!("XML 1.0 document, {label} text"));
	}
	if start.starts_with("<!doctype html") || start.starts_with("<html") {
		return OracleSignal::new("text/html", format!("HTML document, {label} text"));
	}

	let mut description = format!("{label} text");
	if head.windows(2).any(|pair| pair == b"\r\n") {
		description.push_str(", with CRLF line terminators");
	}
	OracleSignal::new("text/plain", description)
}

/// Identify a file from its first bytes.
///
/// `truncated` tells the text check that `head` is a prefix of a longer file.
#[must_use]
pub fn identify(head: &[u8], truncated: bool) -> OracleSignal {
	if head.is_empty() {
		return OracleSignal::new("inode/x-empty", "empty");
	}

	if head.starts_with(b"MZ") {
		let description = describe_pe(head).unwrap_or_else(|| "MS-DOS executable".to_string());
		return OracleSignal::new(DOS_EXECUTABLE, description);
	}

	if let Some(rule) = RULES.iter().find(|rule| rule.pattern.matches(head)) {
		trace!(pattern = %rule.pattern, media_type = rule.media_type, "magic matched");
		return OracleSignal::new(rule.media_type, rule.description);
	}

	encoding_of(head, truncated).map_or_else(
		|| OracleSignal::new("application/octet-stream", "data"),
		|encoding| describe_text(head, encoding),
	)
}

/// Oracle backed by the built-in pattern table.
#[derive(Debug, Clone)]
pub struct BuiltinMagic {
	read_len: usize,
}

impl Default for BuiltinMagic {
	fn default() -> Self {
		Self {
			read_len: DEFAULT_READ_LEN,
		}
	}
}

impl BuiltinMagic {
	#[must_use]
	pub fn with_read_len(read_len: usize) -> Self {
		Self {
			read_len: read_len.max(1),
		}
	}

	fn read_head(&self, path: &Path) -> Result<Vec<u8>, SniffError> {
		let to_sniff_error = |e: io::Error, msg| {
			if e.kind() == io::ErrorKind::NotFound {
				SniffError::NotFound(path.into())
			} else {
				FileIOError::from_std_io_err_with_msg(path, e, msg).into()
			}
		};

		let file = File::open(path).map_err(|e| to_sniff_error(e, "opening file"))?;
		let mut head = Vec::with_capacity(self.read_len);
		file.take(u64::try_from(self.read_len).unwrap_or(u64::MAX))
			.read_to_end(&mut head)
			.map_err(|e| to_sniff_error(e, "reading file head"))?;

		Ok(head)
	}
}

impl Sniffer for BuiltinMagic {
	fn sniff(&self, path: &Path) -> Result<OracleSignal, SniffError> {
		let metadata = fs::metadata(path).map_err(|e| {
			if e.kind() == io::ErrorKind::NotFound {
				SniffError::NotFound(path.into())
			} else {
				FileIOError::from_std_io_err_with_msg(path, e, "reading metadata").into()
			}
		})?;

		if metadata.is_dir() {
			return Ok(OracleSignal::new("inode/directory", "directory"));
		}

		let head = self.read_head(path)?;
		let truncated = head.len() >= self.read_len;
		Ok(identify(&head, truncated))
	}
}
