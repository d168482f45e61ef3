//! Safe SQL builder: identifiers from table descriptors only, values as parameters.

mod builder;
pub use builder::*;
