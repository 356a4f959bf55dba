//! Target platform and architecture model.
//!
//! [`TargetPlatform`] is the supported-platform allowlist as a closed enum;
//! [`TargetPlatform::from_name`] is the allowlist lookup. Platforms resolve
//! through one of two [`PlatformFamily`] branches: Android fans out over the
//! fixed [`AndroidAbi`] variants, while every other platform resolves a single
//! configuration-partitioned directory named after the platform itself.



/// A target platform from the supported-platform allowlist.
///
/// The identifier doubles as the platform's artifact directory name for the
/// desktop/console family. Platform support is a property of the shipped
/// artifact tree, so the set is closed - adding a platform means adding both
/// a variant here and the matching artifact directory.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum TargetPlatform {
	/// Android, packaged with all ABI variants in one build.
	Android,
	/// 64-bit desktop Windows. Also the source of staged runtime artifacts.
	Win64,
	/// Windows via the GDK toolchain.
	WinGdk,
	/// Xbox One via the GDK toolchain.
	XboxOneGdk,
	/// Xbox Series X|S.
	Xsx,
}

impl TargetPlatform {
	/// Every supported platform, in allowlist order.
	pub const ALL: [Self; 5] = [
		Self::Android,
		Self::Win64,
		Self::WinGdk,
		Self::XboxOneGdk,
		Self::Xsx,
	];

	/// Looks up a platform identifier against the allowlist.
	///
	/// Returns `None` for any identifier outside the supported set, including
	/// identifiers that are valid platforms in the caller's build environment.
	pub fn from_name( name: &str ) -> Option<Self> {
		Self::ALL.into_iter().find(| platform | platform.name() == name )
	}

	/// The platform identifier as it appears in the artifact tree.
	pub fn name( self ) -> &'static str {
		match self {
			Self::Android => "Android",
			Self::Win64 => "Win64",
			Self::WinGdk => "WinGDK",
			Self::XboxOneGdk => "XboxOneGDK",
			Self::Xsx => "XSX",
		}
	}

	/// The resolution family this platform belongs to.
	pub fn family( self ) -> PlatformFamily {
		match self {
			Self::Android => PlatformFamily::Android,
			platform => PlatformFamily::Desktop { arch_dir: platform.name() },
		}
	}
}

/// Family dispatch for resolution.
///
/// Keeping the branch in one sum type avoids scattering platform checks
/// across the resolver.
#[derive( Debug, Clone, Copy, PartialEq, Eq )]
pub enum PlatformFamily {
	/// Multi-ABI mobile packaging; artifacts live under `Android/<abi>` and
	/// the tree is not configuration-partitioned.
	Android,
	/// Single-architecture desktop or console target; artifacts live under
	/// `<arch_dir>/<configuration>`.
	Desktop {
		/// Artifact directory name, identical to the platform identifier.
		arch_dir: &'static str,
	},
}

/// An Android ABI variant.
///
/// Android builds bundle every variant, so resolution always covers the full
/// set rather than filtering by a requested architecture.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum AndroidAbi {
	/// 64-bit ARM.
	Arm64V8a,
	/// 32-bit ARM.
	ArmeabiV7a,
	/// 32-bit x86 (emulators).
	X86,
}

impl AndroidAbi {
	/// Every ABI variant, in artifact-tree order.
	pub const ALL: [Self; 3] = [ Self::Arm64V8a, Self::ArmeabiV7a, Self::X86 ];

	/// The ABI's directory name under `Android/`.
	pub fn dir_name( self ) -> &'static str {
		match self {
			Self::Arm64V8a => "arm64-v8a",
			Self::ArmeabiV7a => "armeabi-v7a",
			Self::X86 => "x86",
		}
	}
}
