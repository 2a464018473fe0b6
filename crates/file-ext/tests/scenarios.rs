use std::{fs, path::PathBuf};

use ed_file_ext::{
	Detector, DetectorConfig, Error, Extension, Rule, Signature, SniffError, StaticSniffer,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
	let path = dir.path().join(name);
	fs::write(&path, content).expect("write fixture");
	path
}

fn classify(media_type: &str, description: &str, content: impl AsRef<[u8]>) -> Option<String> {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = fixture(&dir, "input", content);

	Detector::new(StaticSniffer::new(media_type, description))
		.classify(&path)
		.map(|ext| ext.to_string())
}

fn signature(content: impl AsRef<[u8]>) -> Signature {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = fixture(&dir, "input", content);

	Detector::new(StaticSniffer::new("text/plain", "ASCII text")).signature(&path, 1024, false)
}

#[test]
fn html_document() {
	assert_eq!(
		classify("text/html", "HTML document, ASCII text", "<!DOCTYPE html><html>").as_deref(),
		Some(".html")
	);
}

#[test]
fn csharp_under_octet_stream() {
	assert_eq!(
		classify("application/octet-stream", "data", "namespace Foo { class Bar {} }").as_deref(),
		Some(".cs")
	);
}

#[test]
fn sha256_sized_base64() {
	let content = "q".repeat(43) + "ABCDEFGHIJKLMNOPQRSTU";
	assert_eq!(content.len(), 64);
	assert_eq!(classify("text/plain", "ASCII text", content).as_deref(), Some(".sha256"));
}

#[test]
fn bell_character_marks_binary() {
	assert_eq!(signature(b"some text before the bell \x07 and after it"), Signature::Binary);
	assert_eq!(
		classify("text/plain", "ASCII text", b"namespace Foo { \x07 class Bar {} }").as_deref(),
		Some(".txt")
	);
}

#[test]
fn url_scheme_does_not_start_a_comment() {
	let content = "// see http://example.com/foo\nfunction bar(x, y) { return x; }";
	assert_eq!(classify("text/plain", "ASCII text", content).as_deref(), Some(".js"));
	assert_eq!(
		signature(content).as_text(),
		Some("function bar(x, y) { return x; }")
	);
}

#[test]
fn byte_order_marks_do_not_hide_structure() {
	let project = "\u{FEFF}<?xml version=\"1.0\"?>\n<Project>\n</Project>\n";
	assert_eq!(
		classify("text/xml", "XML 1.0 document, UTF-8 Unicode (with BOM) text", project).as_deref(),
		Some(".proj")
	);
	assert_eq!(
		classify("text/plain", "UTF-8 Unicode (with BOM) text", project).as_deref(),
		Some(".proj")
	);

	let solution = "\u{FEFF}\r\nMicrosoft Visual Studio Solution File, Format Version 12.00\r\n";
	assert_eq!(
		classify("text/plain", "UTF-8 Unicode (with BOM) text", solution).as_deref(),
		Some(".sln")
	);
}

#[test]
fn unknown_media_type_defers_to_the_caller() {
	assert_eq!(
		classify("application/x-never-seen", "unknown", "no structure here whatsoever"),
		None
	);
}

#[test]
fn content_floor_boundaries() {
	assert_eq!(signature("fifteen bytes!!"), Signature::Empty);
	assert_eq!(signature("abcdefgh        ").as_text(), Some("abcdefgh"));
	assert_eq!(signature("abcdefg         "), Signature::Empty);
}

#[test]
fn missing_files_fail_closed() {
	let dir = tempfile::tempdir().expect("temp dir");
	let detector = Detector::new(StaticSniffer::new("text/plain", "ASCII text"));
	let missing = dir.path().join("missing.txt");

	assert_eq!(detector.classify(&missing), None);
	assert!(matches!(
		detector.try_classify(&missing),
		Err(Error::Sniff(SniffError::NotFound(_)))
	));
	assert_eq!(detector.signature(&missing, 1024, false), Signature::Unreadable);
}

#[test]
fn verdict_keeps_the_oracle_answer() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = fixture(&dir, "Solution.txt", "Microsoft Visual Studio Solution File, Format Version 12.00\n");
	let detector = Detector::new(StaticSniffer::new("text/plain", "ASCII text"));

	let verdict = detector.try_classify(&path).expect("sniff").expect("known media type");
	assert_eq!(verdict.extension, Extension::from_static(".sln"));
	assert_eq!(verdict.rule, Rule::SolutionFile);
	assert_eq!(verdict.signal.description, "ASCII text");
	assert_eq!(Detector::by_name(&path), Extension::parse("txt"));
}

#[test]
fn configuration_is_loaded_from_disk() {
	let dir = tempfile::tempdir().expect("temp dir");
	let config_path = fixture(&dir, "detector.toml", "css_min_rules = 5\ninstrumentation = true\n");
	let config = DetectorConfig::load(&config_path).expect("valid configuration");
	assert_eq!(config.css_min_rules, 5);

	let css = "a { x: 1; }\nb { x: 1; }\ni { x: 1; }\np { x: 1; }\n";
	let path = fixture(&dir, "styles", css);

	let strict = Detector::new(StaticSniffer::new("text/plain", "ASCII text")).with_config(config);
	let lenient = Detector::new(StaticSniffer::new("text/plain", "ASCII text"));
	assert_eq!(strict.classify(&path).map(|ext| ext.to_string()).as_deref(), Some(".txt"));
	assert_eq!(lenient.classify(&path).map(|ext| ext.to_string()).as_deref(), Some(".css"));
	assert!(strict.instrumentation().is_some());
	assert!(lenient.instrumentation().is_none());
}

#[test]
fn concurrent_classification_keeps_consistent_counts() {
	let dir = tempfile::tempdir().expect("temp dir");
	let files = [
		fixture(&dir, "a", "namespace Foo { class Bar {} }"),
		fixture(&dir, "b", "just some words in a plain file"),
		fixture(&dir, "c", "<?xml version='1.0'?><root/>"),
	];
	let detector = Detector::new(StaticSniffer::new("application/octet-stream", "data")).with_config(
		DetectorConfig {
			instrumentation: true,
			..DetectorConfig::default()
		},
	);

	std::thread::scope(|s| {
		for _ in 0..4 {
			s.spawn(|| {
				for _ in 0..25 {
					for file in &files {
						assert!(detector.classify(file).is_some());
					}
				}
			});
		}
	});

	let summary = detector.instrumentation().expect("enabled").summary();
	assert_eq!(
		summary,
		vec![
			(Extension::from_static(".cs"), 100),
			(Extension::from_static(".txt"), 100),
			(Extension::from_static(".xml"), 100),
		]
	);
}

#[test]
fn detector_is_shareable() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<Detector>();
}
