pub mod formatting;
pub mod table;
pub mod teams;

pub use formatting::FavoriteSide;
pub use table::{RenderOptions, render_quota, render_report};
pub use teams::TeamNames;
