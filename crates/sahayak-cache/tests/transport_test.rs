use sahayak_cache::HttpRemoteSource;
use sahayak_core::config::RemoteConfig;

#[test]
fn quick_fix_url_is_built_from_config() {
    let config = RemoteConfig {
        base_url: "http://10.0.2.2:8000/".into(),
        timeout_secs: 5,
    };
    let source = HttpRemoteSource::quick_fixes(&config, 50);
    assert_eq!(source.url(), "http://10.0.2.2:8000/api/sos/quick-fixes?limit=50");
}

#[cfg(not(feature = "remote"))]
#[test]
fn without_transport_fetch_reports_network_error() {
    use sahayak_core::errors::FetchError;
    use sahayak_core::traits::RemoteSource;

    let source = HttpRemoteSource::quick_fixes(&RemoteConfig::default(), 10);
    assert!(matches!(source.fetch(), Err(FetchError::Network { .. })));
}
