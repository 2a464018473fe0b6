use std::{fs, path::PathBuf};

use ed_file_ext::{Detector, Rule};
use ed_magic::BuiltinMagic;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
	let path = dir.path().join(name);
	fs::write(&path, content).expect("write fixture");
	path
}

fn classify(path: &PathBuf) -> Option<(String, Rule)> {
	Detector::new(BuiltinMagic::default())
		.try_classify(path)
		.expect("builtin oracle answers for existing files")
		.map(|verdict| (verdict.extension.to_string(), verdict.rule))
}

#[test]
fn renamed_source_file_is_recognised() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = write(&dir, "Program.txt", b"namespace Foo { class Bar {} }\n");

	assert_eq!(classify(&path), Some((".cs".into(), Rule::CSharp)));
}

#[test]
fn xml_project_is_recognised() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = write(
		&dir,
		"build",
		b"<?xml version=\"1.0\"?>\n<Project>\n</Project>\n",
	);

	assert_eq!(classify(&path), Some((".proj".into(), Rule::Markup)));

	let path = write(
		&dir,
		"build-bom",
		b"\xEF\xBB\xBF<?xml version=\"1.0\"?>\n<Project>\n</Project>\n",
	);
	assert_eq!(classify(&path), Some((".proj".into(), Rule::Markup)));
}

#[test]
fn images_keep_the_media_type_default() {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = write(&dir, "logo", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x10");

	assert_eq!(classify(&path), Some((".png".into(), Rule::MediaType)));
}

#[test]
fn dlls_are_told_apart_from_programs() {
	let mut image = vec![0_u8; 0x200];
	image[..2].copy_from_slice(b"MZ");
	image[0x3C..0x40].copy_from_slice(&0x80_u32.to_le_bytes());
	image[0x80..0x84].copy_from_slice(b"PE\0\0");
	image[0x84..0x86].copy_from_slice(&0x8664_u16.to_le_bytes());
	image[0x96..0x98].copy_from_slice(&0x2022_u16.to_le_bytes());
	image[0x98..0x9A].copy_from_slice(&0x020B_u16.to_le_bytes());
	image[0xDC..0xDE].copy_from_slice(&2_u16.to_le_bytes());

	let dir = tempfile::tempdir().expect("temp dir");
	let path = write(&dir, "library.bin", &image);

	assert_eq!(classify(&path), Some((".dll".into(), Rule::Description)));
}

#[test]
fn missing_files_are_left_alone() {
	let dir = tempfile::tempdir().expect("temp dir");
	let detector = Detector::new(BuiltinMagic::default());

	assert_eq!(detector.classify(dir.path().join("gone.txt")), None);
}
