//! Hashed collections used for node groups and id sets.

/// Fx-hashed maps and sets; the `std-hash` feature switches to the
/// standard SipHash ones.
pub mod map {
    #[cfg(feature = "std-hash")]
    pub use std::collections::{HashMap, HashSet};

    #[cfg(not(feature = "std-hash"))]
    pub use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
}
