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

//! Content oracles for [`ed_file_ext::Detector`].
//!
//! [`FileCommand`] defers to the `file` command and its libmagic database.
//! [`BuiltinMagic`] needs nothing from the host and knows far fewer formats.

pub mod builtin;
pub mod command;
pub mod magic;

pub use builtin::{identify, BuiltinMagic};
pub use command::FileCommand;
pub use magic::{MagicByte, MagicBytePattern, PatternError};
