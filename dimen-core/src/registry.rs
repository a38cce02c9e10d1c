//! Process-wide allocation of base-dimension identities.
//!
//! The registry is the only shared mutable state in the crate. It hands out monotonically increasing ids, so two
//! declarations never collide regardless of which thread performs them.

use crate::base::BaseDimension;
use log::{debug, warn};
use parking_lot::{const_mutex, Mutex};

static DECLARED: Mutex<Vec<BaseDimension>> = const_mutex(Vec::new());

pub(crate) fn allocate(symbol: &'static str) -> BaseDimension {
    let mut declared = DECLARED.lock();

    if declared.iter().any(|dim| dim.symbol() == symbol)
        || BaseDimension::SI.iter().any(|dim| dim.symbol() == symbol)
    {
        warn!(
            "base dimension symbol '{}' is already in use; declaring a distinct dimension with the same symbol",
            symbol
        );
    }

    let id = BaseDimension::FIRST_DECLARED_ID + declared.len() as u32;
    let dim = BaseDimension::from_parts(id, symbol);
    declared.push(dim);
    debug!("declared base dimension '{}' with id {}", symbol, id);
    dim
}

/// Returns every base dimension declared through [`BaseDimension::declare`] so far, in declaration order.
///
/// The predeclared SI dimensions are not included; see [`BaseDimension::SI`].
pub fn declared() -> Vec<BaseDimension> {
    DECLARED.lock().clone()
}
