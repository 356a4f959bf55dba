use native_link::{ BuildTarget, Configuration };

#[test]
fn desktop_staging_always_release() {

	let manifest = crate::fixtures::dsp_set()
		.resolve(
			&BuildTarget::new( "Win64", Configuration::Debug ).with_debug_crt( true ),
			crate::fixtures::third_party_dir(),
		)
		.expect( "Win64 is a supported platform" );

	// The staged DLL ships the same binary across debug and release developer
	// builds; only the import library honours the resolved configuration.
	assert_eq!( manifest.static_libraries, vec![
		third_party_path!( "Win64", "Debug", "SpatialDsp.lib" ),
	]);
	assert_eq!( manifest.runtime_dependencies, vec![
		third_party_path!( "Win64", "Release", "SpatialDsp.dll" ),
	]);

}
