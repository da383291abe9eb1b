//! Reusable UI components

mod banner;
mod button;
mod field;
mod social;

pub use banner::{banner_height, draw_banner};
pub use button::{render_button, BUTTON_HEIGHT};
pub use field::{draw_field, FIELD_HEIGHT, FLAG_FIELD_HEIGHT};
pub use social::{provider_icon, provider_label, render_social_button};
