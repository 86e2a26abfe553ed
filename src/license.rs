// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{Store, StoreError};
use serde_json::Value;

pub const LICENSE_KEY: &str = "license_key";
pub const DEV_KEY: &str = "STAR-PRO";
pub const PRO_PREFIX: &str = "PRO-";
pub const MIN_KEY_CHARS: usize = 6;

fn acceptable(key: &str) -> bool {
    key.chars().count() >= MIN_KEY_CHARS
}

pub fn is_pro_key(key: &str) -> bool {
    key == DEV_KEY || key.starts_with(PRO_PREFIX) || acceptable(key)
}

pub fn check_license(store: &Store) -> bool {
    match store.get_setting(LICENSE_KEY) {
        Some(Value::String(k)) => is_pro_key(&k),
        _ => false,
    }
}

/// Stores keys longer than five characters and returns the resulting
/// pro-status. Shorter keys are rejected with `false` and nothing is stored.
pub fn activate_license(store: &Store, input: &str) -> Result<bool, StoreError> {
    if !acceptable(input) {
        log::info!("license activation rejected");
        return Ok(false);
    }
    store.set_setting(LICENSE_KEY, &Value::String(input.to_string()))?;
    Ok(check_license(store))
}
