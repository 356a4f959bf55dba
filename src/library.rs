//! Logical library model and filename conventions.
//!
//! A [`NativeLibrary`] is an abstract named dependency ("runtime", "codec")
//! independent of its per-platform physical filename. The mapping from
//! logical name to filename is held in static naming tables so that new
//! conventions are additive data changes, not new code paths.

use std::path::{ Path, PathBuf };

use nonempty_collections::NEVec ;



/// How a library is bound into the final executable.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum Linkage {
	/// Resolved entirely at link time.
	Static,
	/// Linked through an import library and loaded at process runtime; the
	/// runtime artifact is delay-loaded and must be staged next to the
	/// executable on desktop and console platforms.
	DelayLoaded,
}

/// Filename convention for one platform family and linkage.
struct Naming {
	prefix: &'static str,
	extension: &'static str,
}

impl Naming {
	fn apply( &self, name: &str ) -> String {
		format!( "{}{}.{}", self.prefix, name, self.extension )
	}
}

/// Static archive linked into Android builds.
const ANDROID_ARCHIVE: Naming = Naming { prefix: "lib", extension: "a" };
/// Shared object linked into Android builds for delay-loaded libraries.
const ANDROID_SHARED: Naming = Naming { prefix: "lib", extension: "so" };
/// Import or static library linked on desktop and console platforms.
const DESKTOP_IMPORT: Naming = Naming { prefix: "", extension: "lib" };
/// Dynamic library delay-loaded and staged on desktop and console platforms.
const DESKTOP_RUNTIME: Naming = Naming { prefix: "", extension: "dll" };

/// A precompiled native library a plugin module links against.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct NativeLibrary {
	/// Logical name, e.g. `"Sim.Runtime"` or `"zfp"`.
	name: String,
	/// How the library is bound into the final executable.
	linkage: Linkage,
}

impl NativeLibrary {

	/// Creates a logical library.
	pub fn new( name: impl Into<String>, linkage: Linkage ) -> Self {
		Self { name: name.into(), linkage }
	}

	/// Logical name of the library.
	pub fn name( &self ) -> &str { &self.name }

	/// How the library is bound into the final executable.
	pub fn linkage( &self ) -> Linkage { self.linkage }

	/// Physical filename linked on Android.
	pub(crate) fn android_filename( &self ) -> String {
		match self.linkage {
			Linkage::Static => ANDROID_ARCHIVE,
			Linkage::DelayLoaded => ANDROID_SHARED,
		}.apply( &self.name )
	}

	/// Physical filename linked on desktop and console platforms.
	pub(crate) fn desktop_filename( &self ) -> String {
		DESKTOP_IMPORT.apply( &self.name )
	}

	/// Filename of the dynamic library loaded at process runtime.
	pub(crate) fn runtime_filename( &self ) -> String {
		DESKTOP_RUNTIME.apply( &self.name )
	}

}

/// The ordered set of logical libraries one plugin module requires.
///
/// Fixed per module, never derived at runtime, and never empty - a module
/// with no native dependencies has no business invoking the resolver.
/// Declaration order is preserved in the resolved manifest.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct LibrarySet {
	/// Never empty; the constructor takes a [`NEVec`].
	libraries: Vec<NativeLibrary>,
	/// Packaging descriptor registered in the build receipt on Android.
	android_plugin_descriptor: Option<PathBuf>,
}

impl LibrarySet {

	/// Creates a library set from its libraries, in link order.
	pub fn new( libraries: NEVec<NativeLibrary> ) -> Self {
		Self {
			libraries: libraries.into_iter().collect(),
			android_plugin_descriptor: None,
		}
	}

	/// Declares a packaging descriptor to register in the build receipt when
	/// resolving for Android. Ignored on every other platform.
	pub fn with_android_plugin( mut self, descriptor: impl Into<PathBuf> ) -> Self {
		self.android_plugin_descriptor = Some( descriptor.into() );
		self
	}

	/// The libraries in declaration order.
	pub fn libraries( &self ) -> &[NativeLibrary] {
		&self.libraries
	}

	/// The Android packaging descriptor, if one was declared.
	pub fn android_plugin_descriptor( &self ) -> Option<&Path> {
		self.android_plugin_descriptor.as_deref()
	}

}
