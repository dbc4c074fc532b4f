// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod backdrop;
pub mod config;
pub mod greeting;
pub mod runtime;
pub mod time_picker;
pub mod tracker;
pub mod watchdog;
