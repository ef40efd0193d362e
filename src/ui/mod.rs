//! Terminal presentation helpers: design tokens, glyphs, capability detection

pub mod context;
pub mod icon;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
pub use icon::Icon;
