//! Base64 payloads and digests.

use once_cell::sync::Lazy;

use crate::{
	extensions::Extension,
	pattern::{BoundedPattern, Deadline},
};

static BASE64: Lazy<BoundedPattern> =
	Lazy::new(|| BoundedPattern::new("base64", r"^[a-zA-Z0-9/+\s]+={0,2}$"));

/// Length of a SHA-256 digest written as hex.
const SHA256_TEXT_LEN: usize = 64;

/// Length of a SHA-512 digest written as base64.
const SHA512_TEXT_LEN: usize = 88;

/// `.sha256` or `.sha512` for digest-sized payloads, `.base64` for any other
/// signature made only of base64 characters.
#[must_use]
pub fn encoded_extension(signature: &str, deadline: Deadline) -> Option<Extension> {
	if !BASE64.is_match(signature, deadline).matched() {
		return None;
	}

	Some(Extension::from_static(match signature.chars().count() {
		SHA256_TEXT_LEN => ".sha256",
		SHA512_TEXT_LEN => ".sha512",
		_ => ".base64",
	}))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;

	fn classify(signature: &str) -> Option<String> {
		encoded_extension(signature, Deadline::after(Duration::from_secs(5)))
			.map(|ext| ext.to_string())
	}

	#[test]
	fn digest_lengths() {
		let sha256 = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
		assert_eq!(classify(sha256).as_deref(), Some(".sha256"));

		let sha512 = format!("{}==", "A".repeat(86));
		assert_eq!(classify(&sha512).as_deref(), Some(".sha512"));
	}

	#[test]
	fn other_lengths_are_plain_base64() {
		assert_eq!(
			classify("TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu").as_deref(),
			Some(".base64")
		);
		assert_eq!(
			classify("TWFueSBoYW5kcyBt YWtlIGxpZ2h0IHdvcmsu=").as_deref(),
			Some(".base64")
		);
	}

	#[test]
	fn punctuation_is_not_base64() {
		assert_eq!(classify("hello, world. this is text"), None);
		assert_eq!(classify("abc==def"), None);
	}
}
