use native_link::{ BuildTarget, Configuration };

#[test]
fn desktop_release_paths() {

	let manifest = crate::fixtures::simulation_set()
		.resolve(
			&BuildTarget::new( "Win64", Configuration::Release ),
			crate::fixtures::third_party_dir(),
		)
		.expect( "Win64 is a supported platform" );

	// Declaration order is preserved.
	assert_eq!( manifest.static_libraries, vec![
		third_party_path!( "Win64", "Release", "Sim.Runtime.lib" ),
		third_party_path!( "Win64", "Release", "Sim.Codec.lib" ),
		third_party_path!( "Win64", "Release", "zfp.lib" ),
	]);
	assert!( manifest.delay_load_dlls.is_empty() );
	assert!( manifest.runtime_dependencies.is_empty() );
	assert!( manifest.receipt_properties.is_empty() );

}
