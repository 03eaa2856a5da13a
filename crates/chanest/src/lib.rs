#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use chanest_linalg as linalg;

#[doc(inline)]
pub use chanest_estimation as estimation;
