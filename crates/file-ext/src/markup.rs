//! Markup documents classified by their root tag.

use once_cell::sync::Lazy;

use crate::{
	extensions::Extension,
	pattern::{BoundedPattern, Deadline},
	tables::{root_tag_rule, RootTagRule},
};

static ROOT_TAG: Lazy<BoundedPattern> = Lazy::new(|| {
	BoundedPattern::new(
		"markup-root",
		r"^[^<]?<(?:\?xml[^?]+\?>\s*)?<?(?P<root>[@%?/$!:A-Za-z0-9_]+)(?:\s+(?P<attr>[a-zA-Z0-9=':/.\-]+))?(?:.+?(?P<xmlns>xmlns='[^']+'))?",
	)
});

static NAMESPACE: Lazy<BoundedPattern> = Lazy::new(|| {
	BoundedPattern::new("xml-namespace", r"\bxmlns(?::(?P<prefix>[a-z]+))?='(?P<url>[^']+)")
});

/// Manifests may carry this attribute deep inside a long opening tag.
const MANIFEST_MARKER: &str = " manifestVersion='1.0'";

const XML: Extension = Extension::from_static(".xml");

/// Root tag and first attribute token of a markup document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupRoot<'a> {
	pub root: &'a str,
	pub attribute: &'a str,
}

/// Markup starts with `<`, or with `'<` when quoted inside another format.
fn looks_like_markup(signature: &str) -> bool {
	let mut chars = signature.chars();
	match (chars.next(), chars.next(), chars.next()) {
		(Some('<'), Some(_), Some(_)) => true,
		(Some('\''), Some('<'), Some(_)) => true,
		_ => false,
	}
}

fn root_of(signature: &str, deadline: Deadline) -> Option<MarkupRoot<'_>> {
	let caps = ROOT_TAG.captures(signature, deadline)?;
	let group = |name| caps.name(name).map_or("", |m| m.as_str());

	Some(MarkupRoot {
		root: group("root"),
		attribute: group("attr"),
	})
}

/// Does the structural markup pattern find any root tag at all?
#[must_use]
pub fn has_markup_root(signature: &str, deadline: Deadline) -> bool {
	ROOT_TAG.is_match(signature, deadline).matched()
}

/// Extension of a markup document from its root tag, or `None` when
/// `signature` is not markup.
#[must_use]
pub fn classify_markup(signature: &str, deadline: Deadline) -> Option<Extension> {
	if !looks_like_markup(signature) {
		return None;
	}

	if signature.contains(MANIFEST_MARKER) {
		return Some(Extension::from_static(".manifest"));
	}

	let MarkupRoot { root, attribute } = root_of(signature, deadline)?;
	if root.is_empty() {
		return Some(XML);
	}

	let ext = match root_tag_rule(root) {
		None => XML,
		Some(RootTagRule::Literal(ext)) => Extension::from_static(ext),
		Some(RootTagRule::NeedsSecondaryKey) => {
			if attribute.eq_ignore_ascii_case("html") && signature.contains("<?php") {
				return Some(Extension::from_static(".php"));
			}

			match root_tag_rule(&format!("{root}|{attribute}")) {
				Some(RootTagRule::Literal(ext)) => Extension::from_static(ext),
				_ => XML,
			}
		}
		Some(RootTagRule::NeedsSentinelScan {
			sentinel,
			extension,
		}) => {
			if signature.contains(sentinel) {
				Extension::from_static(extension)
			} else {
				XML
			}
		}
		Some(RootTagRule::NeedsProjectDisambiguation) => Extension::from_static(if attribute.is_empty() {
			".proj"
		} else {
			".vsproj"
		}),
		Some(RootTagRule::NeedsTransformDisambiguation {
			namespace,
			extension,
		}) => Extension::from_static(if attribute == namespace {
			extension
		} else {
			".config"
		}),
	};

	Some(ext)
}

/// Human readable summary of what the root tag parser sees, for reports.
///
/// Empty when `signature` is not markup.
#[must_use]
pub fn describe_markup(signature: &str, deadline: Deadline) -> String {
	if !looks_like_markup(signature) {
		return String::new();
	}

	let Some(MarkupRoot { root, attribute }) = root_of(signature, deadline) else {
		return "(xml noMatch)".into();
	};

	format!(
		"(\"{root}\", \"{attribute}\"){}",
		if signature.contains(MANIFEST_MARKER) {
			" IsManifest"
		} else {
			""
		}
	)
}

/// Every `xmlns` URL declared in `signature`, sorted without regard to case
/// and tab separated.
#[must_use]
pub fn xml_namespaces(signature: &str, deadline: Deadline) -> String {
	let mut urls = NAMESPACE.collect_group(signature, "url", deadline);
	urls.retain(|url| !url.is_empty());
	urls.sort_by_cached_key(|url| url.to_ascii_lowercase());
	urls.join("\t")
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::time::Duration;

	fn deadline() -> Deadline {
		Deadline::after(Duration::from_secs(5))
	}

	fn classify(signature: &str) -> Option<String> {
		classify_markup(signature, deadline()).map(|ext| ext.to_string())
	}

	#[test]
	fn plain_root_tags() {
		assert!(ROOT_TAG.is_compiled() && NAMESPACE.is_compiled());
		assert_eq!(
			classify("<svg xmlns='http://www.w3.org/2000/svg' width='10'>").as_deref(),
			Some(".svg")
		);
		assert_eq!(
			classify("<?xml version='1.0' encoding='utf-8'?> <xsl:stylesheet version='1.0'>")
				.as_deref(),
			Some(".xsl")
		);
		assert_eq!(classify("<unheard-of attr='1'>").as_deref(), Some(".xml"));
	}

	#[test]
	fn not_markup() {
		assert_eq!(classify("plain words here"), None);
		assert_eq!(classify("<p"), None);
		assert_eq!(classify("x<p>hello</p>"), None);
	}

	#[test]
	fn quoted_markup_is_accepted() {
		assert_eq!(classify("'<html><body>hi</body></html>'").as_deref(), Some(".html"));
	}

	#[test]
	fn doctype_needs_a_second_key() {
		assert_eq!(classify("<!DOCTYPE html><html>").as_deref(), Some(".html"));
		assert_eq!(classify("<!DOCTYPE plist PUBLIC '-//Apple//DTD PLIST 1.0//EN'>").as_deref(), Some(".plist"));
		assert_eq!(classify("<!DOCTYPE unknown-thing>").as_deref(), Some(".xml"));
		assert_eq!(
			classify("<!DOCTYPE HTML><html><?php echo 1; ?></html>").as_deref(),
			Some(".php")
		);
	}

	#[test]
	fn asp_directives() {
		assert_eq!(classify("<%@ Page Language='C#' %>").as_deref(), Some(".aspx"));
		assert_eq!(classify("<%@ WebHandler Class='X' %>").as_deref(), Some(".ashx"));
	}

	#[test]
	fn manifest_marker_wins() {
		assert_eq!(
			classify("<assembly xmlns='urn:schemas-microsoft-com:asm.v1' manifestVersion='1.0'>")
				.as_deref(),
			Some(".manifest")
		);
	}

	#[test]
	fn resource_tables_need_their_sentinel() {
		assert_eq!(
			classify("<root> <resheader name='resmimetype'> <value>text/microsoft-resx</value>")
				.as_deref(),
			Some(".resx")
		);
		assert_eq!(classify("<root> <item>1</item> </root>").as_deref(), Some(".xml"));
	}

	#[test]
	fn projects() {
		assert_eq!(classify("<Project> <PropertyGroup/> </Project>").as_deref(), Some(".proj"));
		assert_eq!(
			classify("<Project Sdk='Microsoft.NET.Sdk'> <PropertyGroup/>").as_deref(),
			Some(".vsproj")
		);
		assert_eq!(
			classify("<VisualStudioProject ProjectType='Visual C++'>").as_deref(),
			Some(".vcproj")
		);
	}

	#[test]
	fn config_transforms() {
		assert_eq!(
			classify("<configuration xmlns:xdt='http://schemas.microsoft.com/XML-Document-Transform'>")
				.as_deref(),
			Some(".xml")
		);
		assert_eq!(
			classify("<Config xmlns:xdt='http://schemas.microsoft.com/XML-Document-Transform'>")
				.as_deref(),
			Some(".xslt")
		);
		assert_eq!(classify("<Config> <add key='a'/> </Config>").as_deref(), Some(".config"));
	}

	#[test]
	fn classification_is_repeatable() {
		let sig = "<Project Sdk='Microsoft.NET.Sdk'> <PropertyGroup/>";
		let first = classify(sig);
		for _ in 0..10 {
			assert_eq!(classify(sig), first);
		}
	}

	#[test]
	fn describes_what_it_sees() {
		assert_eq!(
			describe_markup("<Project Sdk='Microsoft.NET.Sdk'>", deadline()),
			"(\"Project\", \"Sdk='Microsoft.NET.Sdk'\")"
		);
		assert_eq!(
			describe_markup("<assembly manifestVersion='1.0'>", deadline()),
			"(\"assembly\", \"manifestVersion='1.0'\") IsManifest"
		);
		assert_eq!(describe_markup("<> nothing to see", deadline()), "(xml noMatch)");
		assert_eq!(describe_markup("not markup at all", deadline()), "");
	}

	#[test]
	fn lists_namespaces_sorted() {
		let sig = "<root xmlns='urn:Zeta' xmlns:b='http://beta.example/' xmlns:a='urn:alpha'>";
		assert_eq!(
			xml_namespaces(sig, deadline()),
			"http://beta.example/\turn:alpha\turn:Zeta"
		);
		assert_eq!(xml_namespaces("<root/>", deadline()), "");
	}
}
