//! Shared constants for test configuration.

pub static TEST_HOST: &str = "127.0.0.1";
pub static TEST_PORT: u16 = 8080;
pub static TEST_SITE_NAME: &str = "mimir-test";
