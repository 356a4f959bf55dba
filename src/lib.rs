//! Deterministic native library resolution for modular plugin builds.
//!
//! A plugin module that links against precompiled native artifacts needs the
//! exact artifact set for each target platform and build configuration.
//! `native_link` answers that as a pure function: given a [`BuildTarget`] and
//! the module's [`LibrarySet`], it produces a [`DependencyManifest`] of
//! static libraries to link, dynamic libraries to delay-load, and runtime
//! files to stage alongside the executable - or rejects an unsupported
//! platform before a single path is computed.
//!
//! The crate resolves paths over a conventional third-party directory layout;
//! it never touches the filesystem. Compiling, linking, and staging belong to
//! the host build orchestrator that consumes the manifest.
//!
//! # Core Concepts
//!
//! - [`NativeLibrary`]: an abstract named dependency (e.g. a runtime or codec
//! 	library) independent of its per-platform physical filename. Its
//! 	[`Linkage`] says whether it is resolved entirely at link time or
//! 	delay-loaded at process runtime.
//!
//! - [`LibrarySet`]: the ordered, non-empty set of libraries one plugin
//! 	module requires. Built with the re-exported [`nev!`] macro. Fixed per
//! 	module; declaration order is preserved in the manifest.
//!
//! - [`BuildTarget`]: what the host orchestrator knows - the platform
//! 	identifier, the requested [`Configuration`], and whether debug builds
//! 	really link debug-CRT artifacts. A plain debug request still resolves
//! 	Release artifacts unless the opt-in is set.
//!
//! - [`TargetPlatform`]: the supported-platform allowlist. Android fans out
//! 	over the fixed [`AndroidAbi`] variants; every other platform resolves a
//! 	single configuration-partitioned directory named after itself.
//!
//! - [`DependencyManifest`]: the result. Resolution is deterministic -
//! 	identical inputs always yield an identical manifest.
//!
//! # Example
//!
//! ```
//! use std::path::{ Path, PathBuf };
//! use native_link::{ BuildTarget, Configuration, LibrarySet, Linkage, NativeLibrary, nev };
//!
//! # fn main() -> Result<(), native_link::ResolveError> {
//! // A spatialisation module: one DSP library, linked through an import
//! // library and delay-loaded at runtime.
//! let libraries = LibrarySet::new( nev![
//! 	NativeLibrary::new( "SpatialDsp", Linkage::DelayLoaded )
//! ]);
//!
//! let target = BuildTarget::new( "Win64", Configuration::Release );
//! let manifest = libraries.resolve( &target, Path::new( "ThirdParty" ))?;
//!
//! assert_eq!( manifest.static_libraries, vec![ PathBuf::from( "ThirdParty/Win64/Release/SpatialDsp.lib" )]);
//! assert_eq!( manifest.delay_load_dlls, vec![ "SpatialDsp.dll".to_string() ]);
//! // The staged runtime copy is always the Release build, even for
//! // debug-CRT builds - only the import library honours the configuration.
//! assert_eq!( manifest.runtime_dependencies, vec![ PathBuf::from( "ThirdParty/Win64/Release/SpatialDsp.dll" )]);
//! # Ok(())
//! # }
//! ```
//!
//! An unsupported platform is rejected before any resolution, carrying the
//! offending identifier; the caller is expected to abort its build rather
//! than continue with a partial link line:
//!
//! ```
//! use std::path::Path ;
//! use native_link::{ BuildTarget, Configuration, LibrarySet, Linkage, NativeLibrary, ResolveError, nev };
//!
//! let libraries = LibrarySet::new( nev![ NativeLibrary::new( "zfp", Linkage::Static )]);
//! let target = BuildTarget::new( "UnknownConsole", Configuration::Release );
//!
//! match libraries.resolve( &target, Path::new( "ThirdParty" )) {
//! 	Err( ResolveError::UnsupportedPlatform( platform )) => assert_eq!( platform, "UnknownConsole" ),
//! 	other => panic!( "expected rejection, found: {:?}", other ),
//! }
//! ```

mod platform ;
mod target ;
mod library ;
mod manifest ;
mod resolver ;

pub use nonempty_collections::{ NEVec, nev };

pub use platform::{ TargetPlatform, PlatformFamily, AndroidAbi };
pub use target::{ Configuration, BuildTarget };
pub use library::{ Linkage, NativeLibrary, LibrarySet };
pub use manifest::{ DependencyManifest, ReceiptProperty };
pub use resolver::ResolveError ;
