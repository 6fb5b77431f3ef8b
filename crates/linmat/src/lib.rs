#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use linmat_grid as grid;

#[doc(inline)]
pub use linmat_ops as ops;

#[doc(inline)]
pub use linmat_algebra as algebra;
