//! Build target description.
//!
//! A [`BuildTarget`] carries what the host build orchestrator knows: the
//! platform identifier it is building for, the requested [`Configuration`],
//! and whether debug builds really link debug runtime artifacts.



/// A third-party artifact configuration.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum Configuration {
	/// Optimised artifacts. The default for every build.
	Release,
	/// Debug-CRT artifacts.
	Debug,
}

impl Configuration {
	/// The configuration's directory name in the artifact tree.
	pub fn dir_name( self ) -> &'static str {
		match self {
			Self::Release => "Release",
			Self::Debug => "Debug",
		}
	}
}

/// The build request a host orchestrator hands to the resolver.
///
/// The platform is kept as the orchestrator's identifier string rather than a
/// [`TargetPlatform`]( crate::TargetPlatform ) so that unsupported platforms
/// reach the resolver and are rejected there with the offending identifier,
/// instead of being silently unrepresentable.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct BuildTarget {
	/// Platform identifier as supplied by the orchestrator.
	platform: String,
	/// Requested build configuration.
	configuration: Configuration,
	/// Whether debug builds actually link debug-CRT artifacts.
	debug_crt: bool,
}

impl BuildTarget {

	/// Creates a build target for a platform and requested configuration.
	///
	/// Debug-CRT linking is off by default: a plain debug build still links
	/// Release third-party artifacts. See [`with_debug_crt`]( Self::with_debug_crt ).
	pub fn new( platform: impl Into<String>, configuration: Configuration ) -> Self {
		Self {
			platform: platform.into(),
			configuration,
			debug_crt: false,
		}
	}

	/// Opts debug builds into linking debug-CRT artifacts.
	///
	/// Without this, a [`Configuration::Debug`] request resolves exactly like
	/// a Release request - the common case where "debug" means debugging the
	/// caller's own code against release third-party binaries.
	pub fn with_debug_crt( mut self, debug_crt: bool ) -> Self {
		self.debug_crt = debug_crt ;
		self
	}

	/// Platform identifier as supplied by the orchestrator.
	pub fn platform_name( &self ) -> &str {
		&self.platform
	}

	/// The configuration the artifacts will actually be resolved for.
	///
	/// Downgrades to [`Configuration::Debug`] only when the request is Debug
	/// and the debug-CRT opt-in is set; otherwise Release.
	pub fn artifact_configuration( &self ) -> Configuration {
		match ( self.configuration, self.debug_crt ) {
			( Configuration::Debug, true ) => Configuration::Debug,
			_ => Configuration::Release,
		}
	}

}
