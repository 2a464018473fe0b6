//! Static reference tables.
//!
//! Every table is built once per process on first use and is immutable
//! afterwards, so lookups are lock-free and safe from any thread.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::extensions::Extension;

mod description;
mod mime;
mod registry;
mod root_tags;

pub use registry::{MimeRegistry, MimeTypesFile, NoRegistry, SYSTEM_MIME_TYPES};
pub use root_tags::RootTagRule;

/// Map keyed by ASCII case-folded strings.
///
/// Folding is ordinal so every host resolves keys the same way regardless of
/// locale.
#[derive(Debug)]
pub struct FoldedMap<V> {
	entries: HashMap<String, V>,
}

impl<V: Copy> FoldedMap<V> {
	fn build(pairs: &[(&str, V)]) -> Self {
		Self {
			entries: pairs
				.iter()
				.map(|&(key, value)| (key.to_ascii_lowercase(), value))
				.collect(),
		}
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<V> {
		self.entries.get(&key.to_ascii_lowercase()).copied()
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

static MEDIA_TYPES: Lazy<FoldedMap<&'static str>> =
	Lazy::new(|| FoldedMap::build(mime::MEDIA_TYPE_EXTENSIONS));

static OCTET_STREAM: Lazy<FoldedMap<&'static str>> =
	Lazy::new(|| FoldedMap::build(description::OCTET_STREAM_DESCRIPTIONS));

static PLAIN_TEXT: Lazy<FoldedMap<&'static str>> =
	Lazy::new(|| FoldedMap::build(description::PLAIN_TEXT_DESCRIPTIONS));

static EXECUTABLE: Lazy<HashMap<&'static str, &'static str>> =
	Lazy::new(|| description::EXECUTABLE_DESCRIPTIONS.iter().copied().collect());

static ROOT_TAGS: Lazy<FoldedMap<RootTagRule>> =
	Lazy::new(|| FoldedMap::build(root_tags::ROOT_TAG_RULES));

/// Description tables key on the text before the first `,` or `(`.
fn description_key(description: &str) -> &str {
	description
		.find([',', '('])
		.map_or(description, |idx| &description[..idx])
}

/// Default extension for a media type from the built-in table.
#[must_use]
pub fn media_type_extension(media_type: &str) -> Option<Extension> {
	MEDIA_TYPES.get(media_type).map(Extension::from_static)
}

#[must_use]
pub fn octet_stream_extension(description: &str) -> Option<Extension> {
	OCTET_STREAM
		.get(description_key(description))
		.map(Extension::from_static)
}

#[must_use]
pub fn plain_text_extension(description: &str) -> Option<Extension> {
	PLAIN_TEXT
		.get(description_key(description))
		.map(Extension::from_static)
}

/// Executable descriptions are matched verbatim, case included.
#[must_use]
pub fn executable_extension(description: &str) -> Option<Extension> {
	EXECUTABLE
		.get(description)
		.copied()
		.map(Extension::from_static)
}

/// Extension for an INI file from the section name libmagic reports last.
#[must_use]
pub fn ini_section_extension(description: &str) -> Option<Extension> {
	description::INI_SECTION_SUFFIXES
		.iter()
		.find(|(suffix, _)| description.ends_with(suffix))
		.map(|&(_, ext)| Extension::from_static(ext))
}

/// Rule for a markup root tag, or a `root|attribute` compound key.
#[must_use]
pub fn root_tag_rule(key: &str) -> Option<RootTagRule> {
	ROOT_TAGS.get(key)
}
