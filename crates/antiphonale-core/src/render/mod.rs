pub mod display;
pub mod missa_render;

pub use display::{display_antiphona_missa, display_membership, display_suggestion, display_text};
pub use missa_render::render_missa;
