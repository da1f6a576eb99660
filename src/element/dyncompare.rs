use std::any::Any;
use std::fmt::Debug;

/// A raw element value that can be tested for equality against any other
/// raw value. Values of different concrete types are never equal.
pub trait DynCompare: Debug {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn DynCompare) -> bool;
}

impl<T: Any + PartialEq + Debug> DynCompare for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynCompare) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}
