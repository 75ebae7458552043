#[allow(unused_imports)]
use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod linalg;
pub mod rect;
pub mod transformable;
pub mod view;

/// Floating-point helpers shared by the geometry types.
pub mod float {
    use crate::util::linalg::{Mat3x3, Vec2};
    use anyhow::{Result, bail};
    use num_traits::Zero;
    use std::num::FpCategory;

    /// Finiteness check that, unlike [`f32::is_finite`], also rejects
    /// subnormal values; composite types are finite iff every component is.
    pub trait IsFinite {
        fn is_finite(&self) -> bool;
    }

    impl IsFinite for f32 {
        fn is_finite(&self) -> bool {
            is_finite(*self)
        }
    }

    impl IsFinite for Vec2 {
        fn is_finite(&self) -> bool {
            is_finite(self.x) && is_finite(self.y)
        }
    }

    impl IsFinite for Mat3x3 {
        fn is_finite(&self) -> bool {
            [
                self.xx, self.xy, self.xw, self.yx, self.yy, self.yw, self.wx, self.wy, self.ww,
            ]
            .into_iter()
            .all(is_finite)
        }
    }

    pub fn is_finite(x: f32) -> bool {
        matches!(x.classify(), FpCategory::Zero | FpCategory::Normal)
    }

    /// Checked narrowing for sizes and indices that must be non-negative.
    pub fn f32_to_u32(x: f32) -> Result<u32> {
        if x > u32::MAX as f32 || x < 0.0 {
            bail!("{x} does not fit in range of u32");
        }
        #[allow(clippy::cast_sign_loss)]
        Ok(x as u32)
    }

    /// Collapses `-0.0` to `0.0` so that results have a canonical sign bit.
    pub fn force_positive_zero(x: f32) -> f32 {
        if x.is_zero() { 0.0 } else { x }
    }
}

/// Installs a stderr `tracing` subscriber with microsecond timestamps.
///
/// Safe to call more than once; later calls fail with an error rather than
/// panicking, so tests may call this unconditionally.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
