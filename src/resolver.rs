//! Library resolution.
//!
//! The crate's single decision point: validate the requested platform against
//! the allowlist, branch on platform family, and accumulate the
//! [`DependencyManifest`]. Resolution is pure - no I/O, no existence checks,
//! no shared state - so once validation passes it cannot fail, and identical
//! inputs always produce identical manifests.

use std::path::Path ;

use itertools::Itertools ;
use pipe_trait::Pipe ;
use thiserror::Error ;

use crate::{ BuildTarget, Configuration, DependencyManifest, LibrarySet, Linkage, ReceiptProperty };
use crate::platform::{ AndroidAbi, PlatformFamily, TargetPlatform };



/// Error that can occur during library resolution.
///
/// There is deliberately no second kind: missing or malformed artifacts on
/// disk surface later as link-time errors owned by the build orchestrator.
#[derive( Debug, Error )]
pub enum ResolveError {
	/// The requested platform is outside the supported-platform allowlist.
	/// The caller is expected to abort the enclosing build.
	#[error( "Target platform {0} is not supported" )] UnsupportedPlatform( String ),
}

impl LibrarySet {

	/// Resolves this library set for a build target.
	///
	/// `third_party_dir` is the root of the conventional artifact layout. It
	/// is assumed to exist and is never inspected; a missing artifact is a
	/// downstream link-time failure, not a resolution failure.
	///
	/// # Errors
	/// Returns [`ResolveError::UnsupportedPlatform`] carrying the offending
	/// identifier when the target's platform is not in the allowlist. No
	/// paths are computed in that case - there are no partial manifests.
	pub fn resolve(
		&self,
		target: &BuildTarget,
		third_party_dir: &Path,
	) -> Result<DependencyManifest, ResolveError> {
		let platform = TargetPlatform::from_name( target.platform_name() )
			.ok_or_else(|| ResolveError::UnsupportedPlatform( target.platform_name().to_string() ))?;

		Ok( match platform.family() {
			PlatformFamily::Android => self.resolve_android( third_party_dir ),
			PlatformFamily::Desktop { arch_dir } => {
				self.resolve_desktop( arch_dir, target.artifact_configuration(), third_party_dir )
			}
		})
	}

	/// Android packaging bundles every ABI variant, so each library resolves
	/// once per variant (library-major order). The Android artifact tree is
	/// not configuration-partitioned.
	fn resolve_android( &self, third_party_dir: &Path ) -> DependencyManifest {
		self.libraries().iter()
			.cartesian_product( AndroidAbi::ALL )
			.map(|( library, abi )| third_party_dir
				.join( TargetPlatform::Android.name() )
				.join( abi.dir_name() )
				.join( library.android_filename() ))
			.collect::<Vec<_>>()
			.pipe(| static_libraries | DependencyManifest {
				static_libraries,
				receipt_properties: self.android_plugin_descriptor()
					.map(| descriptor | ReceiptProperty {
						key: "AndroidPlugin".to_string(),
						value: descriptor.to_path_buf(),
					})
					.into_iter()
					.collect(),
				..DependencyManifest::default()
			})
	}

	/// Desktop and console targets link from a single directory named after
	/// the platform, partitioned by configuration. Delay-loaded libraries
	/// additionally register their runtime artifact, staged from the Win64
	/// Release directory: the staged copy ships the same binary across debug
	/// and release developer builds, so only the import library honours the
	/// resolved configuration.
	fn resolve_desktop(
		&self,
		arch_dir: &'static str,
		configuration: Configuration,
		third_party_dir: &Path,
	) -> DependencyManifest {
		let lib_dir = third_party_dir.join( arch_dir ).join( configuration.dir_name() );
		let staging_dir = third_party_dir
			.join( TargetPlatform::Win64.name() )
			.join( Configuration::Release.dir_name() );

		let mut manifest = DependencyManifest::default();
		for library in self.libraries() {
			manifest.static_libraries.push( lib_dir.join( library.desktop_filename() ));
			if library.linkage() == Linkage::DelayLoaded {
				manifest.delay_load_dlls.push( library.runtime_filename() );
				manifest.runtime_dependencies.push( staging_dir.join( library.runtime_filename() ));
			}
		}
		manifest
	}

}
