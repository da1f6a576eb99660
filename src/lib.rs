pub mod element;
pub mod error;

#[cfg(feature = "cli")]
pub mod cli;

pub use element::{
    sort_elements, CustomElement, CustomValue, DynCompare, Element, ElementOps, ElementType,
    OptionNA, NA_MARKER,
};
pub use error::Error;
