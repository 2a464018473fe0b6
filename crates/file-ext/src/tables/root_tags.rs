//! Markup root tag to extension rules.

use serde::Serialize;

use self::RootTagRule::{Literal, NeedsProjectDisambiguation, NeedsSecondaryKey};

/// What the root tag of a markup document says about its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RootTagRule {
	Literal(&'static str),
	/// Look up `root|attribute` instead
	NeedsSecondaryKey,
	/// `extension` when the document contains `sentinel`, otherwise `.xml`
	NeedsSentinelScan {
		sentinel: &'static str,
		extension: &'static str,
	},
	/// `.proj` for a bare root tag, `.vsproj` otherwise
	NeedsProjectDisambiguation,
	/// `extension` when the first attribute is exactly `namespace`, otherwise `.config`
	NeedsTransformDisambiguation {
		namespace: &'static str,
		extension: &'static str,
	},
}

const RESOURCE_TABLE: RootTagRule = RootTagRule::NeedsSentinelScan {
	sentinel: "<value>text/microsoft-resx</value>",
	extension: ".resx",
};

const DOCUMENT_TRANSFORM: RootTagRule = RootTagRule::NeedsTransformDisambiguation {
	namespace: "xmlns:xdt='http://schemas.microsoft.com/XML-Document-Transform'",
	extension: ".xslt",
};

/// Keys are a root tag, or `root|attribute` for tags marked [`RootTagRule::NeedsSecondaryKey`].
pub(super) static ROOT_TAG_RULES: &[(&str, RootTagRule)] = &[
	("!DOCTYPE", NeedsSecondaryKey),
	("!DOCTYPE|boost", Literal(".dbrush")),
	("!DOCTYPE|document", Literal(".DTD")),
	("!DOCTYPE|HelpCollection", Literal(".HxC")),
	("!DOCTYPE|HelpIndex", Literal(".HxK")),
	("!DOCTYPE|HelpTOC", Literal(".HXT")),
	("!DOCTYPE|html", Literal(".html")),
	("!DOCTYPE|plist", Literal(".plist")),
	("!DOCTYPE|Project", Literal(".vpj")),
	("!DOCTYPE|providers", Literal(".mftx")),
	("!DOCTYPE|SETemplate", Literal(".setemplate")),
	("!DOCTYPE|Templates", Literal(".vpt")),
	("!DOCTYPE|Version", Literal(".tbr")),
	("!DOCTYPE|Workspace", Literal(".vpw")),
	("!DOCTYPE|xsd:schema", Literal(".xsd")),
	("!DOCTYPE|xsl:stylesheet", Literal(".xsl")),
	("!ELEMENT", Literal(".dtd")),
	("!ENTITY", Literal(".dtd")),
	("$if$", Literal(".config")),
	("%", NeedsSecondaryKey),
	("%|", Literal(".asp")),
	("%|Set", Literal(".asp")),
	("%|var", Literal(".inc")),
	("%@", NeedsSecondaryKey),
	("%@|Application", Literal(".asax")),
	("%@|Control", Literal(".ascx")),
	("%@|Master", Literal(".master")),
	("%@|Page", Literal(".aspx")),
	("%@|WebHandler", Literal(".ashx")),
	("%@|WebService", Literal(".asmx")),
	("?rsa", Literal(".sig")),
	("?vlc", Literal(".vlcx")),
	("?xfa", Literal(".xdc")),
	("AcrobatUI", Literal(".aaui")),
	("actions", Literal(".uaq")),
	("Activity", Literal(".xaml")),
	("addin", Literal(".Addin")),
	("AFX_RIBBON", Literal(".mfcribbon-ms")),
	("Application", Literal(".xaml")),
	("ApplicationInsights", Literal(".config")),
	("ApplicationRuntime", Literal(".uar")),
	("asmv1:assembly", Literal(".manifest")),
	("assembly", NeedsSecondaryKey),
	("assembly|", Literal(".manifest")),
	("assembly|alias='System.Drawing'", Literal(".resx")),
	("assembly|description = 'Windows", Literal(".manifest")),
	("assembly|manifestVersion='1.0'", Literal(".manifest")),
	("assembly|xmlns='urn:schemas-microsoft-com:asm.v1'", Literal(".manifest")),
	("assembly|xmlns='urn:schemas-microsoft-com:asm.v3'", Literal(".manifest")),
	("AssemblyFoldersConfig", Literal(".config")),
	("AssocInfo", Literal(".sip")),
	("AutoVisualizer", Literal(".natvis")),
	("batch", Literal(".tis")),
	("book", Literal(".devhelp2")),
	("bootmedia", Literal(".config")),
	("browsers", Literal(".browser")),
	("bundles", Literal(".config")),
	("cam:ColorAppearanceModel", Literal(".camp")),
	("cdm:ColorDeviceModel", Literal(".cdmp")),
	("cep_report", Literal(".ctr")),
	("cfoutput", Literal(".cfml")),
	("ClassDiagram", Literal(".cd")),
	("CodeAnalysisPlugIn", Literal(".caplugin")),
	("CodeAnnotationData", Literal(".sca")),
	("CodeCoverage", Literal(".config")),
	("CodeSnippet", Literal(".snippet")),
	("CodeSnippets", Literal(".snippet")),
	("CommandTable", Literal(".vsct")),
	("CompatibilityList", Literal(".cache")),
	("Config", DOCUMENT_TRANSFORM),
	("ContentPage", Literal(".xaml")),
	("ContentView", Literal(".xaml")),
	("CustomCapabilityDescriptor", Literal(".sccd")),
	("DataSetUISetting", Literal(".xsc")),
	("dcmPS:DiagnosticPackage", Literal(".diagpkg")),
	("DevFabricConfig", Literal(".config")),
	("device", Literal(".def")),
	("DiagramLayout", Literal(".xss")),
	("Dim", Literal(".tt")),
	("DirectedGraph", Literal(".dgml")),
	("document", NeedsSecondaryKey),
	("document|type='com.apple.InterfaceBuilder.AppleTV.Storyboard'", Literal(".storyboard")),
	("document|type='com.apple.InterfaceBuilder.WatchKit.Storyboard'", Literal(".storyboard")),
	("document|type='com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB'", Literal(".storyboard")),
	("document|type='com.apple.InterfaceBuilder.AppleTV.XIB'", Literal(".xib")),
	("document|type='com.apple.InterfaceBuilder3.CocoaTouch.XIB'", Literal(".xib")),
	("duixml", Literal(".duixml")),
	("E2ETraceEvent", Literal(".svclog")),
	("edmx:Edmx", Literal(".edmx")),
	("FlowDocument", Literal(".xaml")),
	("FlyoutPage", Literal(".xaml")),
	("Folder", Literal(".wmdb")),
	("FontFamily", Literal(".CompositeFont")),
	("FontFamilyCollection", Literal(".CompositeFont")),
	("form", Literal(".html")),
	("forms", Literal(".forms")),
	("Framework", Literal(".frameworkxml")),
	("GenericObjectDataSource", Literal(".datasource")),
	("gmm:GamutMapModel", Literal(".gmmp")),
	("grammar", Literal(".grxml")),
	("GrammarCollection", Literal(".cache")),
	("Grid", Literal(".xaml")),
	("gtob_config", Literal(".cfg")),
	("helpcfg", Literal(".helpcfg")),
	("HelpCollection", Literal(".HXC")),
	("HelpIndex", Literal(".HXK")),
	("html", Literal(".html")),
	("ImageManifest", Literal(".imagemanifest")),
	("Implementatation", Literal(".psm1")),
	("InstrumentationEngineConfiguration", Literal(".config")),
	("instrumentationManifest", Literal(".manifest")),
	("isolation", Literal(".manifest")),
	("its:rules", Literal(".its")),
	("jDownloader", Literal(".mth")),
	("KeyboardList", Literal(".bin")),
	("KeyFile", Literal(".keyx")),
	("Keys", Literal(".keys")),
	("Layouts", Literal(".bin")),
	("LCX", Literal(".lce")),
	("libraryDescription", Literal(".library-ms")),
	("Licenses", Literal(".lic")),
	("LinearLayout", Literal(".axml")),
	("locatingRules", Literal(".loc")),
	("LoggerInfo", Literal(".tmp")),
	("LoginRequest", Literal(".rsrc")),
	("look", Literal(".look")),
	("magicmap", Literal(".mgk")),
	("Manifest", Literal(".manifest")),
	("MasterDetailPage", Literal(".xaml")),
	("migration", Literal(".dat")),
	("MMC_ConsoleFile", Literal(".msc")),
	("mms", Literal(".config")),
	("MobileCompatTable", Literal(".bin")),
	("module", Literal(".iml")),
	("modulemap", Literal(".mgk")),
	("mso:customUI", Literal(".officeUI")),
	("MvcTextTemplateHost", Literal(".tt")),
	("mx:Application", Literal(".mxml")),
	("MyApplicationData", Literal(".myapp")),
	("Network", Literal(".network")),
	("nlog", Literal(".nlog")),
	("NonUserCode", Literal(".natjmc")),
	("NUnitProject", Literal(".nunit")),
	("nvi", Literal(".nvi")),
	("office:color", Literal(".soc")),
	("oobe", Literal(".html")),
	("OrderedTest", Literal(".orderedtest")),
	("package", NeedsSecondaryKey),
	("package|xmlns='http://schemas.microsoft.com/packaging/2010/07/nuspec.xsd'", Literal(".nuspec")),
	("package_installation_info", Literal(".pimx")),
	("PackageLanguagePackManifest", Literal(".vsixlangpack")),
	("PackageManifest", Literal(".vsixmanifest")),
	("packages", Literal(".config")),
	("Page", Literal(".xaml")),
	("PageFunction", Literal(".xaml")),
	("para", Literal(".docbook")),
	("Patch", Literal(".cache")),
	("pdfpreflight", Literal(".kfp")),
	("persistedQuery", Literal(".search-ms")),
	("persistent", Literal(".set")),
	("playlist", Literal(".xspf")),
	("policyComments", Literal(".cmtx")),
	("policyDefinitionResources", Literal(".adml")),
	("policyDefinitions", Literal(".admx")),
	("PowerShellMetadata", Literal(".cdxml")),
	("Preferences", Literal(".dat")),
	("PremiereData", Literal(".epr")),
	("presentations", Literal(".cfg")),
	("Project", NeedsProjectDisambiguation),
	("ProjectSchemaDefinitions", Literal(".xaml")),
	("Properties", Literal(".config")),
	("providermanifest", Literal(".manifest")),
	("ProvideToolboxControl", Literal(".vb")),
	("PRX", Literal(".prx")),
	("PSConsoleFile", Literal(".psc1")),
	("r:license", Literal(".xrm-ms")),
	("RCC", Literal(".qrc")),
	("RDF", Literal(".rdf")),
	("rdf:Description", Literal(".rdf")),
	("RecentActions", Literal(".dat")),
	("RecentFiles", Literal(".dat")),
	("Relationships", Literal(".rels")),
	("Report", Literal(".rdlc")),
	("repositories", Literal(".config")),
	("ResourceDictionary", Literal(".xaml")),
	("resources", Literal(".template")),
	("rg:licenseGroup", Literal(".xrm-ms")),
	("RoleModule", Literal(".csplugin")),
	("root", RESOURCE_TABLE),
	("RS_AudioServiceResponse", Literal(".ps1")),
	("rss", Literal(".rss")),
	("Rule", Literal(".xaml")),
	("RuleSet", Literal(".ruleset")),
	("RunSettings", Literal(".runsettings")),
	("schema", Literal(".xsd")),
	("scriptlet", Literal(".sct")),
	("sect1", Literal(".docbook")),
	("server_list", Literal(".config")),
	("ServiceConfiguration", Literal(".cscfg")),
	("ServiceDefinition", Literal(".csdef")),
	("setting", Literal(".setting")),
	("settings", Literal(".settings")),
	("SettingsFile", Literal(".settings")),
	("SettingsToTranscode", Literal(".preset")),
	("setup", Literal(".cfg")),
	("Signature", Literal(".psdsxs")),
	("siteMap", Literal(".sitemap")),
	("SLCInfo", Literal(".slc")),
	("Snippets", Literal(".ps1xml")),
	("software_identification_tag", Literal(".swidtag")),
	("StackPanel", Literal(".xaml")),
	("StepFilter", Literal(".natstepfilter")),
	("strings", Literal(".strings")),
	("StringTable", Literal(".strings")),
	("StyleCopSettings", Literal(".StyleCop")),
	("svg", Literal(".svg")),
	("swid:software_identification_tag", Literal(".swidtag")),
	("System", Literal(".vb")),
	("TabbedPage", Literal(".xaml")),
	("tagfile", Literal(".tag")),
	("tags", Literal(".vpj")),
	("template", Literal(".vue")),
	("TemplateDir", Literal(".vstdir")),
	("TestLists", Literal(".vsmdi")),
	("TestRunner", Literal(".tdnet")),
	("TestSettings", Literal(".testsettings")),
	("TestTypes", Literal(".testtype")),
	("TextView", Literal(".android")),
	("theme", Literal(".theme")),
	("tile", Literal(".rsrc")),
	("toast", Literal(".rsrc")),
	("tr", Literal(".html")),
	("Types", Literal(".ps1xml")),
	("ui", Literal(".ui")),
	("UITest", Literal(".uitest")),
	("UserControl", Literal(".xaml")),
	("UserSettings", Literal(".vssettings")),
	("var", Literal(".tt")),
	("VBMyExtensionTemplate", Literal(".customdata")),
	("ViewCell", Literal(".xaml")),
	("ViewerConfig", Literal(".xml")),
	("VisualStudioProject", Literal(".vcproj")),
	("VisualWebDeveloper", Literal(".webinfo")),
	("Vsix", Literal(".vsixmanifest")),
	("VsixLanguagePack", Literal(".vsixlangpack")),
	("VSPerformanceSession", Literal(".psess")),
	("VSTemplate", Literal(".vstemplate")),
	("VSTemplateManifest", Literal(".vstman")),
	("w:styles", Literal(".bin")),
	("wap", Literal(".provxml")),
	("Window", Literal(".xaml")),
	("WindowProfile", Literal(".winprf")),
	("WindowsPerformanceRecorder", Literal(".wprp")),
	("WordBreakerRules", Literal(".dat")),
	("Workflow", Literal(".sequ")),
	("workspace", Literal(".ws")),
	("wpf:ResourceDictionary", Literal(".wpf")),
	("x:package", Literal(".dalp")),
	("x:stylesheet", Literal(".xsl")),
	("x:xmpmeta", Literal(".xmp")),
	("xliff", Literal(".xlf")),
	("XrML", Literal(".cc")),
	("xs:complexType", Literal(".xsd")),
	("xs:schema", Literal(".xsd")),
	("XSDDesignerLayout", Literal(".xsx")),
	("xsl:stylesheet", Literal(".xsl")),
	("xsl:transform", Literal(".bin")),
];
