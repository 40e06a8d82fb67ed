pub(crate) mod combine;
pub(crate) mod distinct;
pub(crate) mod element;
pub(crate) mod keyed;
pub(crate) mod ordering;
pub(crate) mod projection;
pub(crate) mod search;
pub(crate) mod sinks;
pub(crate) mod slicing;
pub(crate) mod stdlib;

// Only re-export files with top-level functions
pub use combine::repeat;
pub use stdlib::*;
