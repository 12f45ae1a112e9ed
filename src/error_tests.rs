//! Tests for error

use super::*;

#[test]
fn test_invalid_pattern_message_includes_regex_error() {
    let err = regex::Regex::new("[unclosed").unwrap_err();
    let beacon_err = BeaconError::from(err);
    let message = beacon_err.to_string();
    assert!(message.starts_with("Invalid search pattern:"));
}

#[test]
fn test_io_error_conversion() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let beacon_err = BeaconError::from(err);
    assert!(matches!(beacon_err, BeaconError::Io(_)));
}
