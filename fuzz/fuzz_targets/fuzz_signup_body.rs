//! Fuzz target: JSON deserialization and validation of `SignUpBody`.
//!
//! Arbitrary bytes must never panic the parser or `validate`, and any
//! rejection must name one of the required fields.

#![no_main]

use libfuzzer_sys::fuzz_target;
use signup_core::{SignUpBody, REQUIRED_FIELDS};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<SignUpBody>(data) else {
        return;
    };
    if let Err(err) = body.validate() {
        let field = err.field().expect("validation errors always name a field");
        assert!(REQUIRED_FIELDS.contains(&field), "unexpected field '{field}'");
    }
});
