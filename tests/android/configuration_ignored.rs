use native_link::{ BuildTarget, Configuration };

#[test]
fn android_configuration_ignored() {

	let libraries = crate::fixtures::simulation_set();
	let third_party_dir = crate::fixtures::third_party_dir();

	// The Android artifact tree is not configuration-partitioned, so even a
	// debug-CRT build resolves the same artifacts as a Release build.
	let release = libraries
		.resolve( &BuildTarget::new( "Android", Configuration::Release ), third_party_dir )
		.expect( "Android is a supported platform" );
	let debug_crt = libraries
		.resolve(
			&BuildTarget::new( "Android", Configuration::Debug ).with_debug_crt( true ),
			third_party_dir,
		)
		.expect( "Android is a supported platform" );

	assert_eq!( release, debug_crt );

}
