// ABOUTME: Command-line host for the display extender
// ABOUTME: Loads option records and header catalogs from JSON files and runs extender operations

pub mod commands;
pub mod logging;
pub mod records;
