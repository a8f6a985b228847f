//! Test utilities for AttrGen tests
//!
//! Configuration bootstrap, a router-backed HTTP client and attribute fixtures.

use crate::config::{ATTRGEN_CONFIG, AttrGenConfig};
use anyhow::Result;
use std::sync::{Arc, Mutex};

pub mod fixtures;
pub mod http;

// Test configuration initialization
static TEST_CONFIG_INIT: Mutex<()> = Mutex::new(());

/// Test-only function to ensure configuration is loaded exactly once per test run
/// Available for both unit tests and integration tests
pub fn load_configuration_for_tests() -> Result<()> {
    let _guard = TEST_CONFIG_INIT
        .lock()
        .map_err(|_| anyhow::anyhow!("Test configuration lock poisoned"))?;

    // If config is already loaded, return success
    if ATTRGEN_CONFIG.get().is_some() {
        return Ok(());
    }

    // Load default configuration for tests
    let config = AttrGenConfig::load()?;
    ATTRGEN_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}
