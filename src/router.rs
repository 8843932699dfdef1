//! History API client-side routing
//!
//! Re-exports `waymark-router`. See [`Router`] for navigation, [`Routes`] for
//! the outlet and [`Link`] / [`NavLink`] for anchors.

pub use waymark_router::*;
