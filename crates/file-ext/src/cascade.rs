//! The classification cascade.
//!
//! The oracle's media type picks a branch. Each branch runs its checks in a
//! fixed order and the first one that recognises the content decides the
//! extension; when none does, the media type's default extension stands.

use std::path::Path;

use once_cell::unsync::OnceCell;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{
	config::DetectorConfig,
	error::Result,
	extensions::Extension,
	instrument::Instrumentation,
	kind::{Branch, Rule},
	markup,
	matchers::{encoded_extension, is_stylesheet, looks_like_assembly, Language},
	normalize::{normalize, Signature},
	pattern::Deadline,
	sniff::{OracleSignal, Sniffer},
	source::{ContentSource, FsContentSource},
	tables::{self, MimeRegistry, NoRegistry},
};

/// A settled classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
	pub extension: Extension,
	pub signal: OracleSignal,
	pub rule: Rule,
}

type Decision = Option<(Extension, Rule)>;

fn decided(ext: &'static str, rule: Rule) -> Decision {
	Some((Extension::from_static(ext), rule))
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
	haystack
		.to_ascii_lowercase()
		.contains(&needle.to_ascii_lowercase())
}

/// Signature of one file, read on first use.
struct Content<'a> {
	detector: &'a Detector,
	path: &'a Path,
	max_len: usize,
	signature: OnceCell<Signature>,
}

impl<'a> Content<'a> {
	const fn new(detector: &'a Detector, path: &'a Path, max_len: usize) -> Self {
		Self {
			detector,
			path,
			max_len,
			signature: OnceCell::new(),
		}
	}

	/// `None` when the file is binary, unreadable or too short.
	fn text(&self) -> Option<&str> {
		self.signature
			.get_or_init(|| self.detector.signature(self.path, self.max_len, false))
			.as_text()
	}
}

/// Infers file extensions from content.
pub struct Detector {
	config: DetectorConfig,
	sniffer: Box<dyn Sniffer>,
	source: Box<dyn ContentSource>,
	registry: Box<dyn MimeRegistry>,
	instrumentation: Option<Instrumentation>,
}

impl Detector {
	/// A detector with the default configuration, reading from the local
	/// filesystem and without a host media type registry.
	pub fn new(sniffer: impl Sniffer + 'static) -> Self {
		Self {
			config: DetectorConfig::default(),
			sniffer: Box::new(sniffer),
			source: Box::new(FsContentSource),
			registry: Box::new(NoRegistry),
			instrumentation: None,
		}
	}

	#[must_use]
	pub fn with_config(mut self, config: DetectorConfig) -> Self {
		self.instrumentation = config.instrumentation.then(Instrumentation::default);
		self.config = config;
		self
	}

	#[must_use]
	pub fn with_content_source(mut self, source: impl ContentSource + 'static) -> Self {
		self.source = Box::new(source);
		self
	}

	#[must_use]
	pub fn with_registry(mut self, registry: impl MimeRegistry + 'static) -> Self {
		self.registry = Box::new(registry);
		self
	}

	#[must_use]
	pub const fn config(&self) -> &DetectorConfig {
		&self.config
	}

	/// Present when the configuration enables instrumentation.
	#[must_use]
	pub const fn instrumentation(&self) -> Option<&Instrumentation> {
		self.instrumentation.as_ref()
	}

	/// The extension `path` already has.
	#[must_use]
	pub fn by_name(path: impl AsRef<Path>) -> Option<Extension> {
		Extension::of_path(path)
	}

	/// Default extension for a media type.
	///
	/// The built-in table is tried first, then the host registry. Types of the
	/// form `major/x-minor` get a second chance as `major/minor`.
	#[must_use]
	pub fn by_media_type(&self, media_type: &str) -> Option<Extension> {
		if media_type.is_empty() {
			return None;
		}

		let lookup = |media_type: &str| {
			tables::media_type_extension(media_type)
				.or_else(|| self.registry.extension_for(media_type))
		};

		lookup(media_type).or_else(|| {
			media_type
				.contains("/x-")
				.then(|| media_type.replace("x-", ""))
				.and_then(|unprefixed| lookup(&unprefixed))
		})
	}

	/// Normalized signature of at most `max_len` characters of `path`.
	#[must_use]
	pub fn signature(&self, path: &Path, max_len: usize, semicolon_comments: bool) -> Signature {
		match self.source.open_prefix(path, self.config.read_limit) {
			Ok(reader) => normalize(reader, max_len, semicolon_comments),
			Err(e) => {
				trace!(path = %path.display(), ?e, "failed to open content");
				Signature::Unreadable
			}
		}
	}

	fn deadline(&self) -> Deadline {
		Deadline::after(self.config.pattern_timeout())
	}

	/// The most specific extension for `path`, or `None` to keep whatever
	/// the caller would otherwise use. Never fails: oracle and I/O errors are
	/// logged and yield `None`.
	#[must_use]
	pub fn classify(&self, path: impl AsRef<Path>) -> Option<Extension> {
		let path = path.as_ref();
		match self.try_classify(path) {
			Ok(verdict) => verdict.map(|verdict| verdict.extension),
			Err(e) => {
				debug!(path = %path.display(), "Unable to classify: {e:#}");
				None
			}
		}
	}

	/// Like [`Detector::classify`], but reports oracle failures and keeps the
	/// rule that decided.
	pub fn try_classify(&self, path: impl AsRef<Path>) -> Result<Option<Verdict>> {
		let path = path.as_ref();
		let signal = self.sniffer.sniff(path)?;
		let verdict = self.classify_signal(path, signal);

		if let (Some(stats), Some(verdict)) = (&self.instrumentation, &verdict) {
			stats.record(path, verdict);
		}

		Ok(verdict)
	}

	/// Ask the content oracle alone.
	pub fn sniff(&self, path: impl AsRef<Path>) -> Result<OracleSignal> {
		Ok(self.sniffer.sniff(path.as_ref())?)
	}

	/// Run the cascade for an oracle answer already in hand.
	#[must_use]
	pub fn classify_signal(&self, path: &Path, signal: OracleSignal) -> Option<Verdict> {
		let Some(default) = self.by_media_type(&signal.media_type) else {
			debug!(
				path = %path.display(),
				media_type = %signal.media_type,
				"No extension known for media type"
			);
			return None;
		};

		let decision = match signal.media_type.parse::<Branch>() {
			Ok(branch) => self.run_branch(branch, path, &signal),
			Err(_) => None,
		};

		let (extension, rule) = decision.unwrap_or((default, Rule::MediaType));
		debug!(
			path = %path.display(),
			media_type = %signal.media_type,
			%rule,
			%extension,
			"Classified"
		);

		Some(Verdict {
			extension,
			signal,
			rule,
		})
	}

	fn run_branch(&self, branch: Branch, path: &Path, signal: &OracleSignal) -> Decision {
		let content = Content::new(self, path, self.config.signature_len);

		match branch {
			Branch::OctetStream => self.octet_stream(&content, signal),
			Branch::PlainText => self.plain_text(&content, signal),
			Branch::Html => self.html(&content),
			Branch::Ini => tables::ini_section_extension(&signal.description)
				.map(|ext| (ext, Rule::IniSection)),
			Branch::PostScript => signal
				.description
				.ends_with("type EPS")
				.then(|| (Extension::from_static(".eps"), Rule::EncapsulatedPostScript)),
			Branch::SetupScript => {
				let text = content.text()?;
				(text.starts_with("typedef interface ") || text.starts_with("extern 'C'{ "))
					.then(|| (Extension::from_static(".h"), Rule::CHeader))
			}
			Branch::Algol68 => self.algol68(&content),
			Branch::Assembly => {
				let text = content.text()?;
				self.language(text, &[Language::JavaScript])
					.or_else(|| self.stylesheet(text))
			}
			Branch::CSource => {
				let text = content.text()?;
				if text.starts_with("<duixml>") {
					return decided(".duixml", Rule::DuiXml);
				}
				self.language(text, &[Language::CSharp])
					.or_else(|| self.assembly(path))
			}
			Branch::Xml => {
				let content = Content::new(self, path, self.config.markup_signature_len);
				self.markup(content.text()?)
			}
			Branch::Forth => self.markup(content.text()?),
			Branch::Jpeg2000 => self.encoded(content.text()?),
			Branch::DosExecutable => Some(
				tables::executable_extension(&signal.description).map_or_else(
					|| (Extension::from_static(".exe"), Rule::ExecutableDefault),
					|ext| (ext, Rule::Description),
				),
			),
		}
	}

	fn octet_stream(&self, content: &Content<'_>, signal: &OracleSignal) -> Decision {
		if let Some(ext) = tables::octet_stream_extension(&signal.description) {
			return Some((ext, Rule::Description));
		}

		let text = content.text()?;
		self.language(text, &[Language::CSharp, Language::Idl])
			.or_else(|| {
				if contains_ignore_ascii_case(text, "<!DOCTYPE html>") {
					decided(".htm", Rule::HtmlDoctype)
				} else if text.contains("<?xml ") {
					decided(".xml", Rule::XmlDeclaration)
				} else if text.contains("=pod ") {
					decided(".pod", Rule::PerlPod)
				} else {
					None
				}
			})
			.or_else(|| self.language(text, &[Language::JavaScript]))
			.or_else(|| decided(".txt", Rule::PlainText))
	}

	fn plain_text(&self, content: &Content<'_>, signal: &OracleSignal) -> Decision {
		if let Some(ext) = tables::plain_text_extension(&signal.description) {
			return Some((ext, Rule::Description));
		}

		let text = content.text()?;
		self.markup(text)
			.or_else(|| {
				self.language(
					text,
					&[Language::TypeScript, Language::CSharp, Language::JavaScript],
				)
			})
			.or_else(|| {
				text.starts_with("Microsoft Visual Studio Solution File")
					.then(|| (Extension::from_static(".sln"), Rule::SolutionFile))
			})
			.or_else(|| self.stylesheet(text))
			.or_else(|| self.language(text, &[Language::Idl]))
			.or_else(|| self.encoded(text))
			.or_else(|| self.assembly(content.path))
	}

	fn html(&self, content: &Content<'_>) -> Decision {
		let text = content.text()?;
		self.markup(text)
			.or_else(|| {
				if text.contains("<?php ") {
					decided(".php", Rule::PhpTag)
				} else if text.contains("=pod ") || text.contains("=head1 ") {
					decided(".pod", Rule::PerlPod)
				} else if text.contains("HTML Help Workshop") {
					decided(".hhc", Rule::HtmlHelp)
				} else {
					None
				}
			})
			.or_else(|| self.language(text, &[Language::CSharp, Language::JavaScript]))
			.or_else(|| self.stylesheet(text))
			.or_else(|| {
				(!markup::has_markup_root(text, self.deadline()))
					.then(|| (Extension::from_static(".txt"), Rule::UnstructuredMarkup))
			})
	}

	fn algol68(&self, content: &Content<'_>) -> Decision {
		let text = content.text()?;
		self.language(text, &[Language::CSharp, Language::JavaScript])
			.or_else(|| decided(".txt", Rule::PlainText))
	}

	/// First language of `candidates` whose signature `text` carries.
	fn language(&self, text: &str, candidates: &[Language]) -> Decision {
		candidates
			.iter()
			.find(|language| language.matches(text, self.deadline()))
			.map(|&language| (language.extension(), Rule::from(language)))
	}

	fn markup(&self, text: &str) -> Decision {
		markup::classify_markup(text, self.deadline()).map(|ext| (ext, Rule::Markup))
	}

	fn stylesheet(&self, text: &str) -> Decision {
		is_stylesheet(text, self.config.css_min_rules, self.deadline())
			.then(|| (Extension::from_static(".css"), Rule::Stylesheet))
	}

	fn encoded(&self, text: &str) -> Decision {
		encoded_extension(text, self.deadline()).map(|ext| (ext, Rule::Encoded))
	}

	/// Assembly listings comment with `;`, so the file is read again with
	/// semicolon comments stripped.
	fn assembly(&self, path: &Path) -> Decision {
		let signature = self.signature(path, self.config.signature_len, true);
		let text = signature.as_text()?;

		looks_like_assembly(text, self.config.assembly_threshold)
			.then(|| (Extension::from_static(".asm"), Rule::Assembly))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		error::{Error, SniffError},
		sniff::StaticSniffer,
		tables::MimeTypesFile,
	};
	use pretty_assertions::assert_eq;
	use std::{
		collections::HashMap,
		io::{self, Read},
		path::PathBuf,
	};

	/// Files held in memory, keyed by path.
	#[derive(Default)]
	struct MemorySource(HashMap<PathBuf, Vec<u8>>);

	impl ContentSource for MemorySource {
		fn open_prefix(&self, path: &Path, max_bytes: u64) -> io::Result<Box<dyn Read + '_>> {
			let bytes = self
				.0
				.get(path)
				.ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
			Ok(Box::new(bytes.as_slice().take(max_bytes)))
		}
	}

	/// Oracle answering from a table, like the memory source.
	#[derive(Default)]
	struct TableSniffer(HashMap<PathBuf, OracleSignal>);

	impl Sniffer for TableSniffer {
		fn sniff(&self, path: &Path) -> std::result::Result<OracleSignal, SniffError> {
			self.0
				.get(path)
				.cloned()
				.ok_or_else(|| SniffError::NotFound(path.into()))
		}
	}

	fn detector_for(media_type: &str, description: &str, content: &str) -> (Detector, PathBuf) {
		let path = PathBuf::from("/virtual/input.dat");
		let mut sniffer = TableSniffer::default();
		sniffer
			.0
			.insert(path.clone(), OracleSignal::new(media_type, description));
		let mut source = MemorySource::default();
		source.0.insert(path.clone(), content.as_bytes().to_vec());

		(Detector::new(sniffer).with_content_source(source), path)
	}

	fn verdict(media_type: &str, description: &str, content: &str) -> Option<(String, Rule)> {
		let (detector, path) = detector_for(media_type, description, content);
		detector
			.try_classify(&path)
			.expect("oracle answers")
			.map(|verdict| (verdict.extension.to_string(), verdict.rule))
	}

	fn ext(media_type: &str, description: &str, content: &str) -> Option<String> {
		verdict(media_type, description, content).map(|(ext, _)| ext)
	}

	#[test]
	fn html_doctype() {
		assert_eq!(
			verdict("text/html", "HTML document, ASCII text", "<!DOCTYPE html><html>"),
			Some((".html".into(), Rule::Markup))
		);
	}

	#[test]
	fn namespace_in_binary_looking_file() {
		assert_eq!(
			verdict("application/octet-stream", "data", "namespace Foo { class Bar {} }"),
			Some((".cs".into(), Rule::CSharp))
		);
	}

	#[test]
	fn sha256_digest() {
		let digest = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
		assert_eq!(
			verdict("text/plain", "ASCII text, with no line terminators", digest),
			Some((".sha256".into(), Rule::Encoded))
		);
	}

	#[test]
	fn url_is_not_a_comment() {
		assert_eq!(
			verdict(
				"text/plain",
				"ASCII text",
				"// see http://example.com/foo\nfunction bar(x, y) { return x; }"
			),
			Some((".js".into(), Rule::JavaScript))
		);
	}

	#[test]
	fn unknown_media_type_defers_to_caller() {
		assert_eq!(
			ext("application/x-made-up", "mystery", "nothing to see here at all"),
			None
		);
		assert_eq!(ext("", "", "nothing to see here at all"), None);
	}

	#[test]
	fn known_media_type_without_branch_keeps_default() {
		assert_eq!(
			verdict("image/png", "PNG image data", "\u{1}\u{2}"),
			Some((".png".into(), Rule::MediaType))
		);
	}

	#[test]
	fn description_tables_come_first() {
		assert_eq!(
			verdict("text/plain", "Python script, ASCII text executable", "namespace Foo { x }"),
			Some((".py".into(), Rule::Description))
		);
		assert_eq!(
			ext("application/octet-stream", "MS Windows shortcut, Item id list present", ""),
			Some(".lnk".into())
		);
	}

	#[test]
	fn octet_stream_order() {
		let octet = |content: &str| ext("application/octet-stream", "data", content);
		assert_eq!(octet("import 'unknwn.idl'; interface IFoo {}").as_deref(), Some(".idl"));
		assert_eq!(octet("<!doctype HTML><html><body></body></html>").as_deref(), Some(".htm"));
		assert_eq!(octet("<?xml version='1.0'?><root/>").as_deref(), Some(".xml"));
		assert_eq!(octet("=pod some documentation =cut").as_deref(), Some(".pod"));
		assert_eq!(octet("'use strict'; module.exports = 1;").as_deref(), Some(".js"));
		assert_eq!(octet("just some words in a file").as_deref(), Some(".txt"));
		assert_eq!(octet("tiny").as_deref(), Some(".bin"));
	}

	#[test]
	fn binary_content_keeps_default() {
		let (detector, path) =
			detector_for("application/octet-stream", "data", "0123456789abcdef\u{7}tail");
		assert_eq!(detector.classify(&path).unwrap(), ".bin");
	}

	#[test]
	fn plain_text_order() {
		let plain = |content: &str| verdict("text/plain", "ASCII text", content);
		assert_eq!(
			plain("<?xml version=\"1.0\"?>\n<Project>\n</Project>\n"),
			Some((".proj".into(), Rule::Markup))
		);
		assert_eq!(
			plain("declare namespace Foo { interface Bar {} }"),
			Some((".ts".into(), Rule::TypeScript))
		);
		assert_eq!(
			plain("\nMicrosoft Visual Studio Solution File, Format Version 12.00\n# Visual Studio 15\n"),
			Some((".sln".into(), Rule::SolutionFile))
		);
		assert_eq!(
			plain("body { margin: 0; }\nh1 { color: red; }\np { padding: 1em; }\na { color: blue; }\n"),
			Some((".css".into(), Rule::Stylesheet))
		);
		assert_eq!(
			plain("import 'oaidl.idl';\n[uuid(1)] interface IFoo : IUnknown {}\n"),
			Some((".idl".into(), Rule::Idl))
		);
		let sha512 = format!("{}==", "Zm9v".repeat(21) + "Zm");
		assert_eq!(plain(&sha512), Some((".sha512".into(), Rule::Encoded)));
		assert_eq!(
			plain("Just a note to self about the weekend plans."),
			Some((".txt".into(), Rule::MediaType))
		);
	}

	#[test]
	fn assembly_is_read_with_semicolon_comments() {
		let listing = "\
start:\n\
\tmov eax, 1 ; load\n\
\tpush ebx ; save\n\
\tcall helper ; work\n\
\tcmp eax, 0\n\
\tjne done ; loop\n\
\txor edx, edx\n\
done:\n\
\tret\n";
		assert_eq!(
			verdict("text/plain", "ASCII text", listing),
			Some((".asm".into(), Rule::Assembly))
		);
	}

	#[test]
	fn html_branch() {
		let html = |content: &str| ext("text/html", "HTML document", content);
		assert_eq!(html("x <?php echo 'hi'; ?> and more").as_deref(), Some(".php"));
		assert_eq!(html("x =head1 NAME Foo::Bar").as_deref(), Some(".pod"));
		assert_eq!(
			html("x <meta name='GENERATOR' content='Microsoft HTML Help Workshop 4.1'>").as_deref(),
			Some(".hhc")
		);
		assert_eq!(html("# Title\n\nSome *markdown* text here.\n").as_deref(), Some(".txt"));
	}

	#[test]
	fn small_branches() {
		assert_eq!(
			ext("application/x-wine-extension-ini", "Generic INItialization configuration [InternetShortcut]", ""),
			Some(".url".into())
		);
		assert_eq!(
			ext("application/x-wine-extension-ini", "Generic INItialization configuration [Boot]", ""),
			Some(".ini".into())
		);
		assert_eq!(
			ext("application/postscript", "PostScript document text conforming DSC level 3.0, type EPS", ""),
			Some(".eps".into())
		);
		assert_eq!(
			ext("application/x-setupscript", "", "typedef interface IFoo IFoo;\n").as_deref(),
			Some(".h")
		);
		assert_eq!(
			ext("text/x-Algol68", "", "nothing recognisable in this file").as_deref(),
			Some(".txt")
		);
		assert_eq!(
			ext("text/x-asm", "", "'use strict'; var a = require('a');").as_deref(),
			Some(".js")
		);
		assert_eq!(
			ext("text/x-c", "", "<duixml><element/></duixml>").as_deref(),
			Some(".duixml")
		);
		assert_eq!(
			ext("text/x-forth", "", "<svg xmlns='http://www.w3.org/2000/svg'></svg>").as_deref(),
			Some(".svg")
		);
		assert_eq!(
			ext("image/jp2", "", "TWFueSBoYW5kcyBtYWtlIGxpZ2h0IHdvcmsu").as_deref(),
			Some(".base64")
		);
	}

	#[test]
	fn xml_branch_reads_a_longer_signature() {
		let padding = "<!-- padding -->".repeat(200);
		let content = format!("{padding}<root>{}<value>text/microsoft-resx</value></root>", "x".repeat(1500));
		assert_eq!(ext("text/xml", "XML 1.0 document", &content).as_deref(), Some(".resx"));
	}

	#[test]
	fn executables() {
		assert_eq!(
			verdict("application/x-dosexec", "PE32+ executable (DLL) (GUI) x86-64, for MS Windows", ""),
			Some((".dll".into(), Rule::Description))
		);
		assert_eq!(
			verdict("application/x-dosexec", "PE32+ executable (dll) (gui) x86-64, for MS Windows", ""),
			Some((".exe".into(), Rule::ExecutableDefault))
		);
	}

	#[test]
	fn media_type_fallbacks() {
		let (detector, _) = detector_for("text/plain", "", "");
		assert_eq!(detector.by_media_type("text/plain").unwrap(), ".txt");
		assert_eq!(detector.by_media_type("application/x-nothing-known"), None);

		let detector = detector.with_registry(MimeTypesFile::parse(
			"application/vnd.widget\twgt\ntext/gadget\tgdg\n",
		));
		assert_eq!(detector.by_media_type("application/vnd.widget").unwrap(), ".wgt");
		assert_eq!(detector.by_media_type("text/x-gadget").unwrap(), ".gdg");
	}

	#[test]
	fn by_name_reads_the_path() {
		assert_eq!(Detector::by_name("/a/b/report.final.DOCX").unwrap(), ".DOCX");
		assert_eq!(Detector::by_name("/a/b/README"), None);
	}

	#[test]
	fn oracle_failures() {
		let detector = Detector::new(StaticSniffer::new("text/plain", "ASCII text"));
		let missing = Path::new("/no/such/file.txt");

		assert_eq!(detector.classify(missing), None);
		assert!(matches!(
			detector.try_classify(missing),
			Err(Error::Sniff(SniffError::NotFound(_)))
		));
		assert!(detector.sniff(missing).is_err());
	}

	#[test]
	fn sniff_skips_the_cascade() {
		let (detector, path) = detector_for("application/x-made-up", "mystery", "namespace Foo { x }");
		assert_eq!(
			detector.sniff(&path).expect("oracle answers"),
			OracleSignal::new("application/x-made-up", "mystery")
		);
	}

	#[test]
	fn instrumentation_counts_decisions() {
		let (detector, path) = detector_for("application/octet-stream", "data", "namespace Foo { class Bar {} }");
		let detector = detector.with_config(DetectorConfig {
			instrumentation: true,
			..DetectorConfig::default()
		});

		for _ in 0..3 {
			assert_eq!(detector.classify(&path).unwrap(), ".cs");
		}

		let stats = detector.instrumentation().expect("enabled");
		assert_eq!(stats.summary(), vec![(Extension::from_static(".cs"), 3)]);
	}
}
