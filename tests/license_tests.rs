// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

// The license check is a placeholder: length and prefix rules only, no
// signature verification. These tests pin that behavior as-is.

use misaldo::license::{LICENSE_KEY, activate_license, check_license, is_pro_key};
use misaldo::store::Store;
use serde_json::json;

#[test]
fn no_key_means_trial_mode() {
    let store = Store::in_memory();
    assert!(!check_license(&store));
}

#[test]
fn five_characters_are_rejected_and_not_stored() {
    let store = Store::in_memory();
    assert!(!activate_license(&store, "ABCDE").unwrap());
    assert_eq!(store.get_setting(LICENSE_KEY), None);
    assert!(!check_license(&store));
}

#[test]
fn six_characters_are_accepted_and_stored() {
    let store = Store::in_memory();
    assert!(activate_license(&store, "ABCDEF").unwrap());
    assert_eq!(store.get_setting(LICENSE_KEY), Some(json!("ABCDEF")));
    assert!(check_license(&store));
}

#[test]
fn length_counts_characters_not_bytes() {
    let store = Store::in_memory();
    // five characters, ten bytes
    assert!(!activate_license(&store, "ñññññ").unwrap());
    assert!(activate_license(&store, "ññññññ").unwrap());
}

#[test]
fn recognised_prefixes_are_pro() {
    assert!(is_pro_key("STAR-PRO"));
    assert!(is_pro_key("PRO-1"));
    assert!(!is_pro_key("abc"));

    let store = Store::in_memory();
    store.set_setting(LICENSE_KEY, &json!("PRO-1")).unwrap();
    assert!(check_license(&store));
}

#[test]
fn non_string_setting_is_not_pro() {
    let store = Store::in_memory();
    store.set_setting(LICENSE_KEY, &json!(123456789)).unwrap();
    assert!(!check_license(&store));
}
