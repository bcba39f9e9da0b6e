// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod animator;
pub mod config;
pub mod content;
pub mod menu;
pub mod nav;
pub mod runtime;
pub mod theme;
