use native_link::{ BuildTarget, Configuration, ResolveError };

#[test]
fn platform_support_unknown_console() {

	let result = crate::fixtures::simulation_set().resolve(
		&BuildTarget::new( "UnknownConsole", Configuration::Release ),
		crate::fixtures::third_party_dir(),
	);

	// The rejection carries the offending identifier and no paths at all.
	match result {
		Err( ResolveError::UnsupportedPlatform( platform )) => assert_eq!( platform, "UnknownConsole" ),
		value => panic!( "Expected UnsupportedPlatform error, found: {:#?}", value ),
	}

}
