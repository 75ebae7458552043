#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{Context, Result, anyhow, bail};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        float,
        linalg,
        linalg::{Mat3x3, Vec2, Vec2i},
        rect::{Rect, Recti},
        transformable::Transformable,
        view::View,
    },
};
