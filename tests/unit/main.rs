//! Unit test modules.

mod command_test;
mod config_test;
mod properties_test;
mod store_test;
