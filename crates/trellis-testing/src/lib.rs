//! Testing utilities and harness for Trellis

mod rule;

pub use rule::*;

pub mod prelude {
    pub use crate::rule::UiTestRule;
}
