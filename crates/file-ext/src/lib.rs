#![warn(
	clippy::all,
	clippy::pedantic,
	clippy::correctness,
	clippy::perf,
	clippy::style,
	clippy::suspicious,
	clippy::complexity,
	clippy::nursery,
	clippy::unwrap_used,
	unused_qualifications,
	rust_2018_idioms,
	clippy::expect_used,
	trivial_casts,
	trivial_numeric_casts,
	unused_allocation,
	clippy::as_conversions,
	clippy::dbg_macro
)]
#![forbid(unsafe_code)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! Infers the most specific file extension for a file from its content.
//!
//! A content oracle (libmagic or similar) supplies a coarse media type and a
//! description; the [`Detector`] refines them with reference tables and
//! lightweight signature checks over a normalized text prefix of the file.

pub mod cascade;
pub mod config;
pub mod error;
pub mod extensions;
pub mod instrument;
pub mod kind;
pub mod markup;
pub mod matchers;
pub mod normalize;
pub mod pattern;
pub mod sniff;
pub mod source;
pub mod tables;
pub mod text;

pub use cascade::{Detector, Verdict};
pub use config::DetectorConfig;
pub use error::{Error, FileIOError, Result, SniffError};
pub use extensions::Extension;
pub use kind::{Branch, Rule};
pub use markup::{classify_markup, describe_markup, xml_namespaces};
pub use normalize::{normalize, normalize_str, Signature};
pub use sniff::{OracleSignal, Sniffer, StaticSniffer};
pub use source::{ContentSource, FsContentSource};
pub use tables::{MimeRegistry, MimeTypesFile, NoRegistry};
