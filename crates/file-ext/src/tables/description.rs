//! libmagic description fragments to extension.

/// `application/octet-stream` descriptions, trimmed at the first `,` or `(`.
pub(super) static OCTET_STREAM_DESCRIPTIONS: &[(&str, &str)] = &[
	("64-bit XCOFF executable or object module", ".dll"),
	("ASCII font metrics", ".afm"),
	("Adobe Multiple Master font", ".mmm"),
	("Apple binary property list", ".sks"),
	("AppleScript compiled", ".scpt"),
	("Blender3D", ".blend"),
	("Certificate", ".cer"),
	("DER Encoded Key Pair", ".der"),
	("DIY-Thermocam raw data ", ".dat"),
	("DOS/MBR boot sector; partition 1 : ID=0xee", ".vmgs"),
	("Embedded OpenType ", ".eot"),
	("GDSII Stream file version 56.66", ".abr"),
	("Hermes JavaScript bytecode", ".bundle"),
	("InstallShield CAB", ".cab"),
	("JPEG 2000 codestream", ".jpc"),
	("Keepass password database 2.x KDBX", ".kdbx"),
	("Lua bytecode", ".luac"),
	("MS Windows HtmlHelp Data", ".chm"),
	("MS Windows Vista Event Log", ".evtx"),
	("MS Windows registry file", ".hve"),
	("MS Windows shortcut", ".lnk"),
	("MSVC .res", ".res"),
	("Microsoft Cabinet archive data", ".cab"),
	("Microsoft DirectDraw Surface ", ".dds"),
	("Microsoft Disk Image eXtended", ".vhdx"),
	("Microsoft OOXML", ".ooxml"),
	("Microsoft Roslyn C# debugging symbols version 1.0", ".pdb"),
	("OpenPGP Public Key Version 2", ".pgp"),
	("OpenPGP Public Key Version 4", ".pgp"),
	("OpenPGP Public Key", ".pgp"),
	("OpenPGP Secret Key", ".pgp"),
	("PGP Secret Sub-key -", ".pgp"),
	("PGP symmetric key encrypted data - Plaintext or unencrypted data salted -", ".pgp"),
	("PGP symmetric key encrypted data - Plaintext or unencrypted data", ".pgp"),
	("PGP symmetric key encrypted data - salted & iterated -", ".pgp"),
	("PGP symmetric key encrypted data -", ".pgp"),
	("PostScript Type 1 font program data ", ".pfb"),
	("Qt Translation file", ".qm"),
	("RAGE Package Format ", ".pol"),
	("SQLite Write-Ahead Log", ".sqlite-wal"),
	("WebAssembly ", ".wasm"),
	("Web Open Font Format ", ".woff2"),
	("Web Open Font Format", ".woff"),
	("Winamp EQ library filev1.1", ".q1"),
	("Winamp plug in", ".avs"),
	("Windows Enhanced Metafile ", ".emf"),
	("WordPerfect graphic image", ".wpg"),
	("magic binary file for file", ".mgc"),
];

/// `text/plain` descriptions, trimmed at the first `,` or `(`.
pub(super) static PLAIN_TEXT_DESCRIPTIONS: &[(&str, &str)] = &[
	("a  /usr/bin/env node script", ".js"),
	("a /usr/bin/env node script", ".js"),
	("a /usr/bin/env ./node_modules/.bin/coffee script", ".coffee"),
	("a /usr/bin/env wish script", ".tcl"),
	("a /usr/bin/osascript script", ".scpt"),
	("a perl script", ".pl"),
	("a perl -w script", ".pl"),
	("awk or perl script", ".awk"),
	("DCL command file", ".vms"),
	("LCOV coverage tracefile", ".info"),
	("M3U playlist", ".m3u"),
	("Microsoft HTML Help Project", ".hhp"),
	("MS Windows 95 Internet shortcut text ", ".url"),
	("MS Windows help file Content", ".cnt"),
	("MS-DOS CONFIG.SYS", ".ini"),
	("OpenPGP Secret Key", ".pem"),
	("PEM certificate", ".pem"),
	("PEM RSA private key", ".pem"),
	("OS/2 REXX batch file", ".rexx"),
	("Perl POD document", ".pod"),
	("Perl5 module source", ".pm"),
	("PLS playlist", ".pls"),
	("PPD file", ".ppd"),
	("Python script", ".py"),
	("Tcl script", ".tcl"),
	("Windows codepage translator", ".cpx"),
	("xbm image ", ".xbm"),
];

/// `application/x-dosexec` descriptions, matched exactly.
pub(super) static EXECUTABLE_DESCRIPTIONS: &[(&str, &str)] = &[
	("COM executable for DOS", ".com"),
	("COM executable for MS-DOS", ".com"),
	("DOS executable (COM)", ".com"),
	("DOS executable (COM, 0x8C-variant)", ".com"),
	("FREE-DOS executable (COM), UPX compressed, uncompressed 5626 bytes", ".com"),
	("MS-DOS executable PE32 executable (DLL) (console) Intel 80386 (stripped to external PDB), for MS Windows, MZ for MS-DOS", ".exe"),
	("MS-DOS executable PE32 executable (DLL) (console) Intel 80386 Mono/.Net assembly, for MS Windows", ".exe"),
	("MS-DOS executable PE32 executable (DLL) (GUI) Intel 80386 Mono/.Net assembly, for MS Windows", ".exe"),
	("MS-DOS executable PE32 executable (DLL) Intel 80386, for MS Windows", ".exe"),
	("MS-DOS executable PE32+ executable (DLL) (console) x86-64 Mono/.Net assembly, for MS Windows", ".exe"),
	("MS-DOS executable PE32+ executable (DLL) (GUI) x86-64 Mono/.Net assembly, for MS Windows", ".exe"),
	("MS-DOS executable", ".exe"),
	("MS-DOS executable, MZ for MS-DOS", ".exe"),
	("MS-DOS executable, NE for MS Windows 3.x (DLL or font)", ".dll"),
	("MS-DOS executable, NE for MS Windows 3.x (EXE)", ".exe"),
	("PE32 executable (console) ARMv7 Thumb Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32 executable (console) ARMv7 Thumb, for MS Windows", ".exe"),
	("PE32 executable (console) Intel 80386 (stripped to external PDB), for MS Windows", ".exe"),
	("PE32 executable (console) Intel 80386 Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32 executable (console) Intel 80386, for MS Windows", ".exe"),
	("PE32 executable (console) Intel 80386, for MS Windows, Nullsoft Installer self-extracting archive", ".exe"),
	("PE32 executable (console) Intel 80386, for MS Windows, PECompact2 compressed", ".exe"),
	("PE32 executable (console) Intel 80386, for MS Windows, UPX compressed", ".exe"),
	("PE32 executable (DLL) (console) ARMv7 Thumb Mono/.Net assembly, for MS Windows", ".dll"),
	("PE32 executable (DLL) (console) ARMv7 Thumb, for MS Windows", ".dll"),
	("PE32 executable (DLL) (console) Intel 80386 (stripped to external PDB), for MS Windows", ".dll"),
	("PE32 executable (DLL) (console) Intel 80386 (stripped to external PDB), for MS Windows, UPX compressed", ".dll"),
	("PE32 executable (DLL) (console) Intel 80386 Mono/.Net assembly, for MS Windows", ".dll"),
	("PE32 executable (DLL) (console) Intel 80386, for MS Windows", ".dll"),
	("PE32 executable (DLL) (console) Intel 80386, for MS Windows, UPX compressed", ".dll"),
	("PE32 executable (DLL) (EFI application) Intel 80386, for MS Windows", ".efi"),
	("PE32 executable (DLL) (GUI) ARMv7 Thumb, for MS Windows", ".dll"),
	("PE32 executable (DLL) (GUI) Intel 80386 (stripped to external PDB), for MS Windows", ".dll"),
	("PE32 executable (DLL) (GUI) Intel 80386 (stripped to external PDB), for MS Windows, UPX compressed", ".dll"),
	("PE32 executable (DLL) (GUI) Intel 80386 Mono/.Net assembly, for MS Windows", ".dll"),
	("PE32 executable (DLL) (GUI) Intel 80386, for MS Windows", ".dll"),
	("PE32 executable (DLL) (GUI) Intel 80386, for MS Windows, PECompact2 compressed", ".dll"),
	("PE32 executable (DLL) (GUI) Intel 80386, for MS Windows, UPX compressed", ".dll"),
	("PE32 executable (DLL) (native) Intel 80386, for MS Windows", ".sys"),
	("PE32 executable (DLL) Intel 80386, for MS Windows", ".dll"),
	("PE32 executable (GUI) ARMv7 Thumb Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32 executable (GUI) ARMv7 Thumb, for MS Windows", ".exe"),
	("PE32 executable (GUI) Intel 80386 (stripped to external PDB), for MS Windows", ".exe"),
	("PE32 executable (GUI) Intel 80386 (stripped to external PDB), for MS Windows, MS CAB-Installer self-extracting archive", ".exe"),
	("PE32 executable (GUI) Intel 80386 (stripped to external PDB), for MS Windows, Nullsoft Installer self-extracting archive", ".exe"),
	("PE32 executable (GUI) Intel 80386 (stripped to external PDB), for MS Windows, UPX compressed", ".exe"),
	("PE32 executable (GUI) Intel 80386 Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows, InstallShield self-extracting archive", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows, MS CAB-Installer self-extracting archive", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows, Nullsoft Installer self-extracting archive", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows, RAR self-extracting archive", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows, UPX compressed", ".exe"),
	("PE32 executable (GUI) Intel 80386, for MS Windows, ZIP self-extracting archive (WinZip)", ".exe"),
	("PE32 executable (native) Intel 80386 (stripped to external PDB), for MS Windows", ".sys"),
	("PE32 executable (native) Intel 80386, for MS Windows", ".sys"),
	("PE32 executable Intel 80386, for MS Windows", ".exe"),
	("PE32+ executable (console) Aarch64 Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32+ executable (console) Aarch64, for MS Windows", ".exe"),
	("PE32+ executable (console) x86-64 (stripped to external PDB), for MS Windows", ".exe"),
	("PE32+ executable (console) x86-64 Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32+ executable (console) x86-64, for MS Windows", ".exe"),
	("PE32+ executable (console) x86-64, for MS Windows, COFF", ".exe"),
	("PE32+ executable (DLL) (console) Aarch64 Mono/.Net assembly, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (console) Aarch64, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (console) x86-64 (stripped to external PDB), for MS Windows", ".dll"),
	("PE32+ executable (DLL) (console) x86-64 Mono/.Net assembly, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (console) x86-64, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (EFI application) x86-64, for MS Windows", ".efi"),
	("PE32+ executable (DLL) (GUI) Aarch64, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (GUI) x86-64 (stripped to external PDB), for MS Windows", ".dll"),
	("PE32+ executable (DLL) (GUI) x86-64 Mono/.Net assembly, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (GUI) x86-64, for MS Windows", ".dll"),
	("PE32+ executable (DLL) (native) x86-64, for MS Windows", ".sys"),
	("PE32+ executable (DLL) x86-64, for MS Windows", ".dll"),
	("PE32+ executable (GUI) Aarch64, for MS Windows", ".exe"),
	("PE32+ executable (GUI) Intel Itanium, for MS Windows", ".exe"),
	("PE32+ executable (GUI) x86-64 (stripped to external PDB), for MS Windows", ".exe"),
	("PE32+ executable (GUI) x86-64 Mono/.Net assembly, for MS Windows", ".exe"),
	("PE32+ executable (GUI) x86-64, for MS Windows", ".exe"),
	("PE32+ executable (native) Aarch64, for MS Windows", ".sys"),
	("PE32+ executable (native) Intel Itanium, for MS Windows", ".sys"),
	("PE32+ executable (native) x86-64, for MS Windows", ".sys"),
	("PE32+ executable x86-64, for MS Windows", ".efi"),
	("Windows Program Information File for COMMAND.COM", ".pif"),
];

/// Section name libmagic appends to `application/x-wine-extension-ini` descriptions.
pub(super) static INI_SECTION_SUFFIXES: &[(&str, &str)] = &[
	("[InternetShortcut]", ".url"),
	("[FUNC]", ".asm"),
	("[)]", ".mof"),
	("[]", ".idl"),
	("[Exchange Client Compatibility]", ".ecf"),
	("[File Transfer]", ".iss"),
];
