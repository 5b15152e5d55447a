mod events;
mod host;
mod render;
mod state;

// Re-export public types
pub use events::{handle_events, handle_key_event};
pub use host::TuiHost;
pub use render::render;
pub use state::App;
