pub mod option;
pub(crate) mod validate;

pub use option::{OptionMap, OptionValue, fragment};
