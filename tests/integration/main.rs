#[path = "../common/mod.rs"]
mod common;

mod race_tests;
