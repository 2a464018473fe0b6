use std::{fmt, path::Path};

use ed_file_ext::{
	describe_markup, pattern::Deadline, xml_namespaces, Detector, Extension, Result, Rule,
};
use serde::Serialize;

/// Everything the detector can tell about one file.
#[derive(Debug, Serialize)]
pub struct FileProperties {
	pub path: String,
	pub name_extension: Option<Extension>,
	pub media_type: String,
	pub description: String,
	pub content_extension: Option<Extension>,
	pub rule: Option<Rule>,
	pub signature: Option<String>,
	pub markup: String,
	pub namespaces: String,
}

impl FileProperties {
	pub fn gather(detector: &Detector, path: &Path) -> Result<Self> {
		let verdict = detector.try_classify(path)?;
		let signal = match &verdict {
			Some(verdict) => verdict.signal.clone(),
			None => detector.sniff(path)?,
		};

		let config = detector.config();
		let signature = detector.signature(path, config.signature_len, false);
		let text = signature.as_text().unwrap_or_default();
		let deadline = || Deadline::after(config.pattern_timeout());

		Ok(Self {
			path: path.display().to_string(),
			name_extension: Detector::by_name(path),
			media_type: signal.media_type,
			description: signal.description,
			content_extension: verdict.as_ref().map(|verdict| verdict.extension.clone()),
			rule: verdict.map(|verdict| verdict.rule),
			markup: describe_markup(text, deadline()),
			namespaces: xml_namespaces(text, deadline()),
			signature: signature.as_text().map(str::to_string),
		})
	}
}

impl fmt::Display for FileProperties {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let ext = |ext: &Option<Extension>| ext.as_ref().map_or("", Extension::as_str).to_string();

		writeln!(f, "File:         {}", self.path)?;
		writeln!(f, "Name Ext:     {}", ext(&self.name_extension))?;
		writeln!(f, "Mime Type:    {}", self.media_type)?;
		writeln!(f, "Description:  {}", self.description)?;
		writeln!(f, "Content Ext:  {}", ext(&self.content_extension))?;
		writeln!(
			f,
			"Rule:         {}",
			self.rule.map(|rule| rule.to_string()).unwrap_or_default()
		)?;
		writeln!(f, "Signature:    {}", self.signature.as_deref().unwrap_or("(none)"))?;
		writeln!(f, "Markup:       {}", self.markup)?;
		write!(f, "Namespaces:   {}", self.namespaces)
	}
}
