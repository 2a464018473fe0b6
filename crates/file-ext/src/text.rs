/**
 * Character tables based on an excerpt from the File type identification utility by Ian F. Darwin and others
 * https://github.com/file/file/blob/445f38730df6a2654eadcc180116035cc6788363/src/encoding.c
 */
use std::io::{self, BufRead, BufReader, Read};

use serde::Serialize;

const F: u8 = 0;
const T: u8 = 1;
const I: u8 = 2;
const X: u8 = 3;

static TEXT_CHARS: [u8; 256] = [
	/*                  BEL BS HT LF VT FF CR    */
	F, F, F, F, F, F, F, T, T, T, T, T, T, T, F, F, /* 0x0X */
	/*                              ESC          */
	F, F, F, F, F, F, F, F, F, F, F, T, F, F, F, F, /* 0x1X */
	T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x2X */
	T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x3X */
	T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x4X */
	T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x5X */
	T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x6X */
	T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, F, /* 0x7X */
	/*            NEL                            */
	X, X, X, X, X, T, X, X, X, X, X, X, X, X, X, X, /* 0x8X */
	X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, /* 0x9X */
	I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xaX */
	I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xbX */
	I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xcX */
	I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xdX */
	I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xeX */
	I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xfX */
];

const XX: u8 = 0xF1; // invalid: size 1
const AS: u8 = 0xF0; // ASCII: size 1
const S1: u8 = 0x02; // accept 0, size 2
const S2: u8 = 0x13; // accept 1, size 3
const S3: u8 = 0x03; // accept 0, size 3
const S4: u8 = 0x23; // accept 2, size 3
const S5: u8 = 0x34; // accept 3, size 4
const S6: u8 = 0x04; // accept 0, size 4
const S7: u8 = 0x44; // accept 4, size 4
const LOCB: u8 = 0x80;
const HICB: u8 = 0xBF;

static FIRST: [u8; 256] = [
	//   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x00-0x0F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x10-0x1F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x20-0x2F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x30-0x3F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x40-0x4F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x50-0x5F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x60-0x6F
	AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, AS, // 0x70-0x7F
	//   1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
	XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0x80-0x8F
	XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0x90-0x9F
	XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0xA0-0xAF
	XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0xB0-0xBF
	XX, XX, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, // 0xC0-0xCF
	S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, S1, // 0xD0-0xDF
	S2, S3, S3, S3, S3, S3, S3, S3, S3, S3, S3, S3, S3, S4, S3, S3, // 0xE0-0xEF
	S5, S6, S6, S6, S7, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, XX, // 0xF0-0xFF
];

/// Valid range for the second byte of a multi-byte sequence; later bytes are
/// always `LOCB..=HICB`.
static ACCEPT_RANGES: [(u8, u8); 5] = [
	(LOCB, HICB),
	(0xA0, HICB),
	(LOCB, 0x9F),
	(0x90, HICB),
	(LOCB, 0x8F),
];

/// Streaming UTF-8 decoder over any reader.
///
/// Invalid sequences decode to [`char::REPLACEMENT_CHARACTER`] and never
/// produce an error. A sequence cut short by the end of input is dropped, so
/// a prefix that ends mid-character still decodes cleanly.
pub struct Utf8Chars<R> {
	reader: BufReader<R>,
	pending: Option<u8>,
}

impl<R: Read> Utf8Chars<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader: BufReader::new(reader),
			pending: None,
		}
	}

	fn next_byte(&mut self) -> io::Result<Option<u8>> {
		if let Some(byte) = self.pending.take() {
			return Ok(Some(byte));
		}

		loop {
			match self.reader.fill_buf() {
				Ok([]) => return Ok(None),
				Ok(buf) => {
					let byte = buf[0];
					self.reader.consume(1);
					return Ok(Some(byte));
				}
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			}
		}
	}
}

impl<R: Read> Iterator for Utf8Chars<R> {
	type Item = io::Result<char>;

	fn next(&mut self) -> Option<Self::Item> {
		let first = match self.next_byte() {
			Ok(Some(byte)) => byte,
			Ok(None) => return None,
			Err(e) => return Some(Err(e)),
		};

		let class = FIRST[usize::from(first)];
		if class == AS {
			return Some(Ok(char::from(first)));
		}
		if class == XX {
			return Some(Ok(char::REPLACEMENT_CHARACTER));
		}

		let size = class & 0x07;
		let (lo, hi) = ACCEPT_RANGES[usize::from(class >> 4)];
		let mut code = u32::from(first) & (0x7F >> size);

		for n in 1..size {
			let byte = match self.next_byte() {
				Ok(Some(byte)) => byte,
				Ok(None) => return None,
				Err(e) => return Some(Err(e)),
			};

			let (lo, hi) = if n == 1 { (lo, hi) } else { (LOCB, HICB) };
			if byte < lo || byte > hi {
				// The offending byte may start the next character
				self.pending = Some(byte);
				return Some(Ok(char::REPLACEMENT_CHARACTER));
			}

			code = (code << 6) | u32::from(byte & 0x3F);
		}

		Some(Ok(
			char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
		))
	}
}

/// Text encodings recognised by [`encoding_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextEncoding {
	Ascii,
	Utf8,
	Utf16BigEndian,
	Utf16LittleEndian,
	Utf32BigEndian,
	Utf32LittleEndian,
	Latin1,
}

impl TextEncoding {
	/// The charset label `file --mime-encoding` would print
	#[must_use]
	pub const fn charset(self) -> &'static str {
		match self {
			Self::Ascii => "us-ascii",
			Self::Utf8 => "utf-8",
			Self::Utf16BigEndian => "utf-16be",
			Self::Utf16LittleEndian => "utf-16le",
			Self::Utf32BigEndian => "utf-32be",
			Self::Utf32LittleEndian => "utf-32le",
			Self::Latin1 => "iso-8859-1",
		}
	}
}

fn is_text_byte(byte: u8) -> bool {
	TEXT_CHARS[usize::from(byte)] == T
}

fn looks_latin1(buf: &[u8]) -> bool {
	buf.iter()
		.all(|&byte| matches!(TEXT_CHARS[usize::from(byte)], T | I))
}

/// `Some(true)` for plain ASCII, `Some(false)` for multi-byte UTF-8.
fn looks_utf8(buf: &[u8], partial: bool) -> Option<bool> {
	let mut ascii = true;
	let mut ctrl = false;

	for ch in Utf8Chars::new(buf).map_while(io::Result::ok) {
		if ch == char::REPLACEMENT_CHARACTER {
			return None;
		}

		match u8::try_from(ch) {
			Ok(byte) if byte.is_ascii() => ctrl |= !is_text_byte(byte),
			_ => ascii = false,
		}
	}

	(partial || !ctrl).then_some(ascii)
}

fn looks_ucs16(buf: &[u8]) -> Option<TextEncoding> {
	if buf.len() < 2 || buf.len() % 2 != 0 {
		return None;
	}

	let big_endian = match (buf[0], buf[1]) {
		(0xFE, 0xFF) => true,
		(0xFF, 0xFE) => false,
		_ => return None,
	};

	let mut high_surrogate = false;
	for chunk in buf[2..].chunks_exact(2) {
		let pair = [chunk[0], chunk[1]];
		let unit = if big_endian {
			u16::from_be_bytes(pair)
		} else {
			u16::from_le_bytes(pair)
		};

		match unit {
			0xFFFE | 0xFFFF | 0xFDD0..=0xFDEF => return None,
			0xDC00..=0xDFFF if !high_surrogate => return None,
			0xDC00..=0xDFFF => high_surrogate = false,
			0xD800..=0xDBFF => high_surrogate = true,
			_ if high_surrogate => return None,
			_ => {
				if let Ok(byte) = u8::try_from(unit) {
					if byte.is_ascii() && !is_text_byte(byte) {
						return None;
					}
				}
			}
		}
	}

	Some(if big_endian {
		TextEncoding::Utf16BigEndian
	} else {
		TextEncoding::Utf16LittleEndian
	})
}

fn looks_ucs32(buf: &[u8]) -> Option<TextEncoding> {
	if buf.len() < 4 || buf.len() % 4 != 0 {
		return None;
	}

	let big_endian = match buf[..4] {
		[0, 0, 0xFE, 0xFF] => true,
		[0xFF, 0xFE, 0, 0] => false,
		_ => return None,
	};

	for chunk in buf[4..].chunks_exact(4) {
		let quad = [chunk[0], chunk[1], chunk[2], chunk[3]];
		let unit = if big_endian {
			u32::from_be_bytes(quad)
		} else {
			u32::from_le_bytes(quad)
		};

		if unit == 0xFFFE {
			return None;
		}
		if let Ok(byte) = u8::try_from(unit) {
			if byte.is_ascii() && !is_text_byte(byte) {
				return None;
			}
		}
	}

	Some(if big_endian {
		TextEncoding::Utf32BigEndian
	} else {
		TextEncoding::Utf32LittleEndian
	})
}

/// Guess the text encoding of `data`, or `None` when it looks binary.
///
/// `partial` tolerates control characters, for buffers known to be a prefix
/// of a larger file.
#[must_use]
pub fn encoding_of(data: &[u8], partial: bool) -> Option<TextEncoding> {
	if data.is_empty() {
		return None;
	}

	let body = data.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(data);
	match looks_utf8(body, partial) {
		Some(true) if body.len() == data.len() => return Some(TextEncoding::Ascii),
		Some(_) => return Some(TextEncoding::Utf8),
		None => (),
	}

	if let Some(encoding) = looks_ucs32(data).or_else(|| looks_ucs16(data)) {
		return Some(encoding);
	}

	looks_latin1(data).then_some(TextEncoding::Latin1)
}
