use native_link::{ BuildTarget, Configuration };

#[test]
fn android_shared_object_naming() {

	let manifest = crate::fixtures::dsp_set()
		.resolve(
			&BuildTarget::new( "Android", Configuration::Release ),
			crate::fixtures::third_party_dir(),
		)
		.expect( "Android is a supported platform" );

	// A delay-loaded library is a shared object on Android, linked directly;
	// there is no separate delay-load or staging machinery there.
	assert_eq!( manifest.static_libraries, vec![
		third_party_path!( "Android", "arm64-v8a", "libSpatialDsp.so" ),
		third_party_path!( "Android", "armeabi-v7a", "libSpatialDsp.so" ),
		third_party_path!( "Android", "x86", "libSpatialDsp.so" ),
	]);
	assert!( manifest.delay_load_dlls.is_empty() );
	assert!( manifest.runtime_dependencies.is_empty() );

}
