use native_link::{ BuildTarget, Configuration, TargetPlatform };

#[test]
fn platform_support_all_supported() {

	let libraries = crate::fixtures::simulation_set();
	let third_party_dir = crate::fixtures::third_party_dir();

	for platform in TargetPlatform::ALL {
		let manifest = libraries
			.resolve( &BuildTarget::new( platform.name(), Configuration::Release ), third_party_dir )
			.unwrap_or_else(| err | panic!( "{} should resolve: {}", platform.name(), err ));
		assert!( !manifest.static_libraries.is_empty() );
	}

}
