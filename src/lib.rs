//! First-person raycasting demo: a fixed 8x8 tile grid rendered with a
//! per-column ray march, plus a high-score store behind an async boundary.

pub mod core;
pub mod render;
