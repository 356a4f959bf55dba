use native_link::{ BuildTarget, Configuration };

#[test]
fn desktop_debug_downgrade() {

	let libraries = crate::fixtures::simulation_set();
	let third_party_dir = crate::fixtures::third_party_dir();

	// A debug build without the debug-CRT opt-in still links Release
	// third-party artifacts.
	let release = libraries
		.resolve( &BuildTarget::new( "Win64", Configuration::Release ), third_party_dir )
		.expect( "Win64 is a supported platform" );
	let debug = libraries
		.resolve( &BuildTarget::new( "Win64", Configuration::Debug ), third_party_dir )
		.expect( "Win64 is a supported platform" );

	assert_eq!( release, debug );

}
