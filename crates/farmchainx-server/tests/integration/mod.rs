pub mod common;

mod auth_tests;
mod crop_tests;
