//! Handle lifecycle against real file descriptors
//!
//! No I2C hardware is needed: missing paths, directories and `/dev/null`
//! exercise every open-time failure path.

#![cfg(target_os = "linux")]

use std::fs;
use std::path::PathBuf;

use iicguard_hal_linux::{
    load_config, open, open_bus, open_config, ConfigError, DeviceConfig, Error, OsError,
};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("iicguard-{}-{}.toml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_missing_bus_is_open_failed() {
    let result = open("/dev/i2c-does-not-exist", 0x42);
    assert_eq!(result.unwrap_err(), Error::OpenFailed(OsError::ENOENT));
}

#[test]
fn test_directory_is_open_failed() {
    match open("/", 0x42) {
        Err(Error::OpenFailed(e)) => assert_ne!(e, OsError::ENOENT),
        other => panic!("expected OpenFailed, got {:?}", other),
    }
}

#[test]
fn test_non_i2c_device_is_bind_failed() {
    // /dev/null accepts O_RDWR but has no I2C ioctls
    let result = open("/dev/null", 0x42);
    assert_eq!(result.unwrap_err(), Error::BindFailed(OsError::ENOTTY));
}

#[test]
fn test_out_of_range_address_is_bind_failed() {
    let result = open("/dev/null", 0x80);
    assert_eq!(result.unwrap_err(), Error::BindFailed(OsError::EINVAL));
}

#[test]
fn test_open_bus_uses_dev_path() {
    // Adapter numbers this high do not exist on any test machine
    let result = open_bus(250, 0x42);
    assert!(matches!(result, Err(Error::OpenFailed(_))));
}

#[test]
fn test_open_from_config_file() {
    let path = temp_config(
        "null",
        "[device]\nbus = \"/dev/null\"\naddress = \"0x44\"\n",
    );
    let config: DeviceConfig = load_config(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.bus.as_str(), "/dev/null");
    assert_eq!(config.address.get(), 0x44);
    assert_eq!(
        open_config(&config).unwrap_err(),
        Error::BindFailed(OsError::ENOTTY)
    );
}

#[test]
fn test_load_config_errors() {
    assert_eq!(
        load_config("/nonexistent/iicguard.toml").unwrap_err(),
        ConfigError::Read(OsError::ENOENT)
    );

    let path = temp_config("bad", "[device]\nbus = 3\n");
    let result = load_config(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(result.unwrap_err(), ConfigError::TomlParse);
}
