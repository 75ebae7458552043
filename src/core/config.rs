/// Tolerance used for floating-point comparisons throughout the crate.
pub const EPSILON: f32 = 1e-5;

/// Default extent of a freshly constructed [`View`](crate::util::view::View),
/// in world units per axis.
pub const DEFAULT_VIEW_EXTENT: f32 = 1000.0;
