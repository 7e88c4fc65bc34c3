use std::collections::HashMap;

use file_loader::aws::Service;
use file_loader::core::config::AwsSettings;
use file_loader::errors::ProvisionError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const BASE: [(&str, &str); 3] = [
    ("AWS_REGION", "us-east-1"),
    ("AWS_ACCESS_KEY_ID", "AKIAEXAMPLE1234"),
    ("AWS_SECRET_ACCESS_KEY", "super-secret-value"),
];

#[test]
fn test_from_lookup_reads_required_values() {
    let settings = AwsSettings::from_lookup(lookup(&BASE)).unwrap();

    assert_eq!(settings.region, "us-east-1");
    assert_eq!(settings.access_key_id, "AKIAEXAMPLE1234");
    assert_eq!(settings.secret_access_key, "super-secret-value");
    for service in Service::ALL {
        assert_eq!(settings.endpoint_for(service), None);
    }
}

#[test]
fn test_from_lookup_reads_endpoint_overrides() {
    let mut pairs = BASE.to_vec();
    pairs.push(("S3_ENDPOINT_URL", "http://localhost:9000"));
    pairs.push(("SQS_ENDPOINT_URL", "http://localhost:4566"));
    pairs.push(("DYNAMODB_ENDPOINT_URL", "http://localhost:8000"));

    let settings = AwsSettings::from_lookup(lookup(&pairs)).unwrap();

    assert_eq!(
        settings.endpoint_for(Service::ObjectStore),
        Some("http://localhost:9000")
    );
    assert_eq!(
        settings.endpoint_for(Service::Queue),
        Some("http://localhost:4566")
    );
    assert_eq!(
        settings.endpoint_for(Service::KeyValueStore),
        Some("http://localhost:8000")
    );
}

#[test]
fn test_missing_required_value_names_the_variable() {
    for missing in ["AWS_REGION", "AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY"] {
        let pairs: Vec<_> = BASE.iter().copied().filter(|(k, _)| *k != missing).collect();

        match AwsSettings::from_lookup(lookup(&pairs)) {
            Err(ProvisionError::Configuration(msg)) => assert!(msg.contains(missing), "{msg}"),
            other => panic!("expected configuration error for {missing}, got {other:?}"),
        }
    }
}

#[test]
fn test_malformed_endpoint_is_a_configuration_error() {
    let mut pairs = BASE.to_vec();
    pairs.push(("DYNAMODB_ENDPOINT_URL", "localhost:8000/no-scheme"));

    let err = AwsSettings::from_lookup(lookup(&pairs)).unwrap_err();
    match err {
        ProvisionError::Configuration(msg) => assert!(msg.contains("DYNAMODB_ENDPOINT_URL")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_new_rejects_empty_values() {
    assert!(matches!(
        AwsSettings::new("", "AKID", "SECRET"),
        Err(ProvisionError::Configuration(_))
    ));
    assert!(matches!(
        AwsSettings::new("us-east-1", "AKID", " "),
        Err(ProvisionError::Configuration(_))
    ));
}

#[test]
fn test_with_endpoint_only_touches_one_service() {
    let settings = AwsSettings::new("eu-central-1", "AKID", "SECRET")
        .unwrap()
        .with_endpoint(Service::Queue, "https://sqs.internal.example.com")
        .unwrap();

    assert_eq!(
        settings.endpoint_for(Service::Queue),
        Some("https://sqs.internal.example.com")
    );
    assert_eq!(settings.endpoint_for(Service::ObjectStore), None);
    assert_eq!(settings.endpoint_for(Service::KeyValueStore), None);
}

#[test]
fn test_debug_output_hides_secrets() {
    let settings = AwsSettings::from_lookup(lookup(&BASE)).unwrap();
    let debug = format!("{settings:?}");

    assert!(!debug.contains("super-secret-value"));
    assert!(!debug.contains("AKIAEXAMPLE1234"));
    assert!(debug.contains("****1234"));
    assert!(debug.contains("us-east-1"));
}

#[test]
fn test_debug_output_hides_short_key_ids_entirely() {
    let settings = AwsSettings::new("us-east-1", "AKID", "S").unwrap();
    let debug = format!("{settings:?}");

    assert!(!debug.contains("AKID"), "{debug}");
    assert!(debug.contains("access_key_id: \"****\""), "{debug}");
}
