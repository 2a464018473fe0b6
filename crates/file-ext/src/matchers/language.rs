//! Source language signatures.
//!
//! Patterns run against normalized signatures: comments are gone, whitespace
//! is single spaces and every double quote is a single quote.

use once_cell::sync::Lazy;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::{
	extensions::Extension,
	pattern::{BoundedPattern, Deadline},
};

static TYPESCRIPT: Lazy<BoundedPattern> = Lazy::new(|| {
	BoundedPattern::new("typescript", r"\bdeclare namespace [0-9A-Za-z$._]+ \{ ")
});

static CSHARP: Lazy<BoundedPattern> =
	Lazy::new(|| BoundedPattern::new("csharp", r"\bnamespace [0-9A-Za-z$._]+ \{ "));

static JAVASCRIPT: Lazy<BoundedPattern> = Lazy::new(|| {
	BoundedPattern::new(
		"javascript",
		r"'use strict'|[=:;]\s*require\('[^']+'\)|\bfunction\s*(?:[\[A-Za-z0-9_]+)?\([$A-Za-z0-9_, ]+\)",
	)
});

static IDL: Lazy<BoundedPattern> =
	Lazy::new(|| BoundedPattern::new("idl", r"\bimport '[0-9A-Za-z._]+.idl'"));

static CSS_RULE: Lazy<BoundedPattern> = Lazy::new(|| {
	BoundedPattern::new(
		"css",
		r#"[.a-zA-Z0-9#*"', >+~\[\]=|^$:() \-]+\s*\{\s*(?:[a-zA-Z-]+\s*:\s*[^;}]+;?\s*)+\}"#,
	)
});

/// Languages recognised from a signature alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
pub enum Language {
	TypeScript,
	CSharp,
	JavaScript,
	/// Interface definition language
	Idl,
}

impl Language {
	fn pattern(self) -> &'static BoundedPattern {
		match self {
			Self::TypeScript => &TYPESCRIPT,
			Self::CSharp => &CSHARP,
			Self::JavaScript => &JAVASCRIPT,
			Self::Idl => &IDL,
		}
	}

	#[must_use]
	pub const fn extension(self) -> Extension {
		Extension::from_static(match self {
			Self::TypeScript => ".ts",
			Self::CSharp => ".cs",
			Self::JavaScript => ".js",
			Self::Idl => ".idl",
		})
	}

	/// Does `signature` carry this language's signature? Timeouts count as no.
	#[must_use]
	pub fn matches(self, signature: &str, deadline: Deadline) -> bool {
		self.pattern().is_match(signature, deadline).matched()
	}
}

/// A stylesheet has at least `min_rules` `selector { property: value; }` blocks.
///
/// The last rule of a truncated signature is closed before counting.
#[must_use]
pub fn is_stylesheet(signature: &str, min_rules: usize, deadline: Deadline) -> bool {
	let closed = format!("{signature}}}");
	CSS_RULE
		.count_at_least(&closed, min_rules, deadline)
		.matched()
}
