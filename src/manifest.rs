//! Resolved dependency manifest.

use std::path::PathBuf ;



/// A key/value property forwarded into the host build's receipt.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct ReceiptProperty {
	/// Property key, e.g. `"AndroidPlugin"`.
	pub key: String,
	/// Property value; a path into the module's source tree.
	pub value: PathBuf,
}

/// Everything the host build orchestrator needs to link one plugin module.
///
/// Produced by [`LibrarySet::resolve`]( crate::LibrarySet::resolve ) and
/// folded by the orchestrator into its own static-link, delay-load, and
/// runtime-staging lists. Identical resolver inputs yield an identical
/// manifest, including ordering.
#[derive( Debug, Clone, Default, PartialEq, Eq )]
pub struct DependencyManifest {
	/// Artifact paths to link statically, in declaration order. On Android
	/// each library appears once per ABI variant.
	pub static_libraries: Vec<PathBuf>,
	/// Dynamic library filenames to delay-load at process runtime. Bare
	/// filenames - the loader finds them next to the executable.
	pub delay_load_dlls: Vec<String>,
	/// Runtime artifacts to stage alongside the executable.
	pub runtime_dependencies: Vec<PathBuf>,
	/// Properties to register in the host build's receipt.
	pub receipt_properties: Vec<ReceiptProperty>,
}
