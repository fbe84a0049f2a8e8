pub mod layout;
pub mod shape;

pub use layout::*;
pub use shape::*;
