//! Turns a file prefix into a comment-free, whitespace-collapsed signature.

use std::{
	io::{self, Read},
	iter::Peekable,
};

use serde::Serialize;
use tracing::trace;

use crate::text::Utf8Chars;

/// Files shorter than this many bytes are never worth classifying.
pub const MIN_CONTENT_BYTES: usize = 16;

/// Signatures shorter than this many characters are reported as [`Signature::Empty`].
pub const MIN_SIGNATURE_CHARS: usize = 8;

/// Outcome of normalizing a file prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Signature {
	Text(String),
	/// Too little text to classify
	Empty,
	/// A control character or an invalid UTF-8 sequence was found
	Binary,
	/// The content could not be read
	Unreadable,
}

impl Signature {
	#[must_use]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// `true` for [`Signature::Binary`] and [`Signature::Unreadable`], the
	/// two outcomes that rule out any text-based decision.
	#[must_use]
	pub const fn is_opaque(&self) -> bool {
		matches!(self, Self::Binary | Self::Unreadable)
	}
}

enum Stop {
	Binary,
	Io(io::Error),
}

type Step<T> = std::result::Result<T, Stop>;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Tab, line feed, form feed and carriage return are the only control
/// characters text files may contain.
fn is_forbidden(ch: char) -> bool {
	ch == char::REPLACEMENT_CHARACTER || (ch.is_control() && !matches!(ch, '\t' | '\n' | '\x0C' | '\r'))
}

struct Scanner<I: Iterator<Item = io::Result<char>>> {
	chars: Peekable<I>,
	out: String,
	len: usize,
	max_len: usize,
	semicolon_comments: bool,
}

impl<I: Iterator<Item = io::Result<char>>> Scanner<I> {
	fn next_char(&mut self) -> Step<Option<char>> {
		match self.chars.next() {
			None => Ok(None),
			Some(Err(e)) => Err(Stop::Io(e)),
			Some(Ok(ch)) if is_forbidden(ch) => Err(Stop::Binary),
			Some(Ok(ch)) => Ok(Some(ch)),
		}
	}

	fn peek(&mut self) -> Option<char> {
		self.chars.peek().and_then(|next| next.as_ref().ok()).copied()
	}

	fn last(&self) -> char {
		self.out.chars().next_back().unwrap_or(' ')
	}

	fn push(&mut self, ch: char) {
		self.out.push(ch);
		self.len += 1;
	}

	fn pop(&mut self) {
		if self.out.pop().is_some() {
			self.len -= 1;
		}
	}

	/// Whitespace and stripped comments collapse into one space, never leading.
	fn push_space(&mut self) {
		if self.last() != ' ' {
			self.push(' ');
		}
	}

	fn skip_line(&mut self) -> Step<()> {
		while let Some(ch) = self.next_char()? {
			if ch == '\n' {
				break;
			}
		}
		Ok(())
	}

	fn skip_block_comment(&mut self) -> Step<()> {
		// opening '*'
		self.next_char()?;
		while let Some(ch) = self.next_char()? {
			if ch == '*' && self.peek() == Some('/') {
				self.next_char()?;
				break;
			}
		}
		Ok(())
	}

	fn skip_markup_comment(&mut self) -> Step<()> {
		let mut dashes = 0_usize;
		while let Some(ch) = self.next_char()? {
			match ch {
				'-' => dashes += 1,
				'>' if dashes >= 2 => break,
				_ => dashes = 0,
			}
		}
		Ok(())
	}

	fn follows_url_scheme(&self) -> bool {
		self.out.ends_with("http:") || self.out.ends_with("https:")
	}

	fn run(mut self) -> Step<Signature> {
		let mut after_markup_decl = false;

		while self.len < self.max_len {
			let Some(ch) = self.next_char()? else {
				break;
			};

			// Until something is emitted, byte order marks are dropped and a
			// semicolon switches on `;` comments.
			if self.out.is_empty() {
				match ch {
					BYTE_ORDER_MARK => continue,
					';' => self.semicolon_comments = true,
					_ => {}
				}
			}

			let opens_comment = after_markup_decl && ch == '-' && self.peek() == Some('-');
			after_markup_decl = false;

			if ch == '<' && self.peek() == Some('!') {
				if self.len + 2 > self.max_len {
					break;
				}
				self.next_char()?;
				self.push('<');
				self.push('!');
				after_markup_decl = true;
				continue;
			}

			if opens_comment {
				self.pop();
				self.pop();
				self.next_char()?;
				self.skip_markup_comment()?;
				self.push_space();
				continue;
			}

			match ch {
				'/' if self.peek() == Some('*') => {
					self.skip_block_comment()?;
					self.push_space();
				}
				'/' if self.peek() == Some('/') && !self.follows_url_scheme() => {
					self.skip_line()?;
					self.push_space();
				}
				'#' if self.peek() != Some('!') => {
					self.skip_line()?;
					self.push_space();
				}
				';' if self.semicolon_comments => {
					self.skip_line()?;
					self.push_space();
				}
				'"' => self.push('\''),
				ch if ch.is_whitespace() => self.push_space(),
				ch => self.push(ch),
			}
		}

		if self.out.ends_with(' ') {
			self.pop();
		}

		if self.len < MIN_SIGNATURE_CHARS {
			return Ok(Signature::Empty);
		}

		Ok(Signature::Text(self.out))
	}
}

/// Normalize at most `max_len` characters of text read from `reader`.
///
/// Comments in the `<!-- -->`, `/* */`, `//` and `#` styles are removed, with
/// `http://` URLs and `#!` lines preserved. `;` line comments are removed when
/// `semicolon_comments` is set, or when a semicolon comes before any other
/// text survives. A leading byte order mark is dropped. Whitespace runs
/// collapse to one space and double quotes become single quotes.
pub fn normalize<R: Read>(mut reader: R, max_len: usize, semicolon_comments: bool) -> Signature {
	let mut head = [0_u8; MIN_CONTENT_BYTES];
	let mut filled = 0;

	while filled < head.len() {
		match reader.read(&mut head[filled..]) {
			Ok(0) => {
				trace!(bytes = filled, "content below minimum size");
				return Signature::Empty;
			}
			Ok(n) => filled += n,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => {
				trace!(?e, "failed to read content head");
				return Signature::Unreadable;
			}
		}
	}

	let scanner = Scanner {
		chars: Utf8Chars::new(head.as_slice().chain(reader)).peekable(),
		out: String::with_capacity(max_len.min(4096)),
		len: 0,
		max_len,
		semicolon_comments,
	};

	match scanner.run() {
		Ok(signature) => signature,
		Err(Stop::Binary) => {
			trace!("binary content");
			Signature::Binary
		}
		Err(Stop::Io(e)) => {
			trace!(?e, "failed to read content");
			Signature::Unreadable
		}
	}
}

/// [`normalize`] over an in-memory string.
#[must_use]
pub fn normalize_str(text: &str, max_len: usize, semicolon_comments: bool) -> Signature {
	normalize(text.as_bytes(), max_len, semicolon_comments)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn text(input: &str) -> String {
		match normalize_str(input, 1024, false) {
			Signature::Text(text) => text,
			other => panic!("expected text signature, got {other:?}"),
		}
	}

	#[test]
	fn collapses_whitespace_and_quotes() {
		assert_eq!(
			text("  print(\"hello\")\r\n\t\tprint(\"world\")  \n"),
			"print('hello') print('world')"
		);
	}

	#[test]
	fn strips_block_and_line_comments() {
		assert_eq!(
			text("int a; /* block\n comment */ int b; // trailing\nint c;"),
			"int a; int b; int c;"
		);
	}

	#[test]
	fn keeps_urls_and_shebangs() {
		assert_eq!(
			text("#!/bin/sh\n# comment\ncurl https://example.com/x // fetch\n"),
			"#!/bin/sh curl https://example.com/x"
		);
	}

	#[test]
	fn strips_markup_comments_but_keeps_doctype() {
		assert_eq!(
			text("<!-- generated -- by hand --><!DOCTYPE html><html>"),
			"<!DOCTYPE html><html>"
		);
		assert_eq!(text("<p>one</p><!-- x -->\n<p>two</p>"), "<p>one</p> <p>two</p>");
	}

	#[test]
	fn leading_semicolon_enables_ini_comments() {
		assert_eq!(
			text("; settings file\n[section]\nkey=value ; note\n"),
			"[section] key=value"
		);
		assert_eq!(text("[section]\nkey=value;other\n"), "[section] key=value;other");
	}

	#[test]
	fn semicolon_after_a_stripped_comment_still_leads() {
		let sig = text("# header comment\n; not a comment here\nkey = value pairs here\n");
		assert_eq!(sig, "key = value pairs here");
		assert_eq!(text(&sig), sig);
	}

	#[test]
	fn byte_order_mark_is_dropped() {
		assert_eq!(
			text("\u{FEFF}<?xml version=\"1.0\"?>\n<Project>\n</Project>\n"),
			"<?xml version='1.0'?> <Project> </Project>"
		);
		assert_eq!(
			text("\u{FEFF}; settings file\n[section]\nkey=value\n"),
			"[section] key=value"
		);
		assert_eq!(
			text("\u{FEFF}\u{FEFF}  plain words after two marks"),
			"plain words after two marks"
		);
	}

	#[test]
	fn explicit_semicolon_mode() {
		assert_eq!(
			normalize_str("mov eax, 1 ; load\nret ; done\n", 1024, true),
			Signature::Text("mov eax, 1 ret".into())
		);
	}

	#[test]
	fn url_slashes_are_not_comments() {
		assert_eq!(
			text("// see http://example.com/foo\nfunction bar(x, y) { return x; }"),
			"function bar(x, y) { return x; }"
		);
		assert_eq!(text("link = 'http://a.b/c'; other"), "link = 'http://a.b/c'; other");
	}

	#[test]
	fn control_characters_mean_binary() {
		let mut bytes = b"perfectly normal text up to here".to_vec();
		bytes.push(0x07);
		bytes.extend_from_slice(b" and more");
		assert_eq!(normalize(bytes.as_slice(), 1024, false), Signature::Binary);
	}

	#[test]
	fn control_characters_inside_comments_mean_binary() {
		assert_eq!(
			normalize_str("some code here /* \u{1} */ more", 1024, false),
			Signature::Binary
		);
	}

	#[test]
	fn invalid_utf8_means_binary() {
		let bytes = b"header bytes then \xFF\xFE garbage";
		assert_eq!(normalize(bytes.as_slice(), 1024, false), Signature::Binary);
	}

	#[test]
	fn fifteen_bytes_is_empty() {
		assert_eq!(normalize_str("abcdefghijklmno", 1024, false), Signature::Empty);
		assert!(matches!(
			normalize_str("abcdefghijklmnop", 1024, false),
			Signature::Text(_)
		));
	}

	#[test]
	fn eight_characters_survive_seven_do_not() {
		assert_eq!(
			normalize_str("abcdefgh        ", 1024, false),
			Signature::Text("abcdefgh".into())
		);
		assert_eq!(normalize_str("abcdefg         ", 1024, false), Signature::Empty);
	}

	#[test]
	fn comment_only_file_is_empty() {
		assert_eq!(
			normalize_str("// nothing but a comment in here\n", 1024, false),
			Signature::Empty
		);
	}

	#[test]
	fn stops_at_max_length() {
		let long = "word ".repeat(100);
		let Signature::Text(sig) = normalize_str(&long, 12, false) else {
			panic!("expected text");
		};
		assert_eq!(sig, "word word wo");
	}

	#[test]
	fn markup_decl_never_overflows() {
		let Signature::Text(sig) = normalize_str("abcdefghi<!DOCTYPE html>", 10, false) else {
			panic!("expected text");
		};
		assert_eq!(sig, "abcdefghi");
	}

	#[test]
	fn read_errors_are_unreadable() {
		struct Failing;
		impl Read for Failing {
			fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
				Err(io::Error::new(io::ErrorKind::Other, "device gone"))
			}
		}

		assert_eq!(normalize(Failing, 1024, false), Signature::Unreadable);
	}

	#[test]
	fn normalizing_twice_changes_nothing() {
		for sample in [
			"<?xml version=\"1.0\"?>\n<!-- c -->\n<root a=\"b\">\n  <child/>\n</root>\n",
			"using System;\n/* x */\nnamespace Foo { class Bar {} }\n",
			"#!/usr/bin/env python\n# comment\nimport os\nprint(\"hi\")  # trailing\n",
			"body { color: red; }\n// comment\nh1 { margin: 0; }\n",
			"; comment\n[InternetShortcut]\nURL=http://example.com/\n",
		] {
			let Signature::Text(once) = normalize_str(sample, 1024, false) else {
				panic!("expected text for {sample:?}");
			};
			let twice = normalize_str(&once, 1024, false);
			assert_eq!(twice, Signature::Text(once.clone()), "sample {sample:?}");
		}
	}

	proptest! {
		#[test]
		fn signatures_hold_their_invariants(
			bytes in proptest::collection::vec(any::<u8>(), 0..2048),
			max_len in 8_usize..600,
		) {
			if let Signature::Text(sig) = normalize(bytes.as_slice(), max_len, false) {
				prop_assert!(sig.chars().count() <= max_len);
				prop_assert!(sig.chars().count() >= MIN_SIGNATURE_CHARS);
				prop_assert!(!sig.contains("  "));
				prop_assert!(!sig.contains('"'));
				prop_assert!(!sig.starts_with(' ') && !sig.ends_with(' '));
				prop_assert!(!sig.chars().any(|ch| ch.is_control()));
			}
		}

		#[test]
		fn normalizing_is_idempotent(text in "[ -~\t\n\r]{16,600}") {
			if let Signature::Text(once) = normalize_str(&text, 1024, false) {
				if once.len() >= MIN_CONTENT_BYTES {
					prop_assert_eq!(normalize_str(&once, 1024, false), Signature::Text(once.clone()));
				}
			}
		}

		#[test]
		fn printable_text_is_never_binary(text in "[ -~\t\n\r]{0,600}") {
			prop_assert_ne!(normalize_str(&text, 1024, false), Signature::Binary);
		}
	}
}
