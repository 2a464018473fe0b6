use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::matchers::Language;

/// Media types the cascade knows how to refine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Branch {
	#[strum(serialize = "application/octet-stream")]
	OctetStream,
	#[strum(serialize = "text/plain")]
	PlainText,
	#[strum(serialize = "text/html")]
	Html,
	#[strum(serialize = "application/x-wine-extension-ini")]
	Ini,
	#[strum(serialize = "application/postscript")]
	PostScript,
	#[strum(serialize = "application/x-setupscript")]
	SetupScript,
	#[strum(serialize = "text/x-Algol68")]
	Algol68,
	#[strum(serialize = "text/x-asm")]
	Assembly,
	#[strum(serialize = "text/x-c")]
	CSource,
	#[strum(serialize = "text/xml")]
	Xml,
	#[strum(serialize = "text/x-forth")]
	Forth,
	#[strum(serialize = "image/jp2")]
	Jpeg2000,
	#[strum(serialize = "application/x-dosexec")]
	DosExecutable,
}

/// The check that settled a classification
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Rule {
	/// Default extension for the media type, nothing more specific found
	MediaType,
	/// Oracle description found in a reference table
	Description,
	/// `.exe` for executables with an unlisted description
	ExecutableDefault,
	/// Root tag of a markup document
	Markup,
	TypeScript,
	CSharp,
	JavaScript,
	Idl,
	Stylesheet,
	/// Base64 payload or digest
	Encoded,
	Assembly,
	SolutionFile,
	HtmlDoctype,
	XmlDeclaration,
	PerlPod,
	PhpTag,
	HtmlHelp,
	DuiXml,
	CHeader,
	/// Text with no recognisable structure
	PlainText,
	/// Markup media type without any markup
	UnstructuredMarkup,
	IniSection,
	EncapsulatedPostScript,
}

impl From<Language> for Rule {
	fn from(language: Language) -> Self {
		match language {
			Language::TypeScript => Self::TypeScript,
			Language::CSharp => Self::CSharp,
			Language::JavaScript => Self::JavaScript,
			Language::Idl => Self::Idl,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;
	use strum::IntoEnumIterator;

	#[test]
	fn branches_parse_without_regard_to_case() {
		assert_eq!(Branch::from_str("text/plain"), Ok(Branch::PlainText));
		assert_eq!(Branch::from_str("TEXT/X-ALGOL68"), Ok(Branch::Algol68));
		assert!(Branch::from_str("text/markdown").is_err());
	}

	#[test]
	fn branch_names_round_trip() {
		for branch in Branch::iter() {
			assert_eq!(Branch::from_str(&branch.to_string()), Ok(branch));
		}
	}

	#[test]
	fn rules_render_in_kebab_case() {
		assert_eq!(Rule::ExecutableDefault.to_string(), "executable-default");
		assert_eq!(<&'static str>::from(Rule::HtmlDoctype), "html-doctype");
	}
}
