//! Knobs read from the environment by CI jobs.

pub mod property_test_profile;
