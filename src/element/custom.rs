use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::Error;

use super::coercion::is_na_marker;
use super::core::{fail_open, Element, ElementOps};
use super::dyncompare::DynCompare;
use super::types::*;

/// Values that can be stored in a custom element.
///
/// Implementors must keep `rank` a strict total order over every value that
/// will be compared within one column, and values that are equal must share
/// a rank. A payload is shared between an element and all of its copies, so
/// it must not change after it has been wrapped.
pub trait CustomValue: std::fmt::Debug + Send + Sync + 'static {
    /// Canonical text form.
    fn render(&self) -> String;

    /// Key used by every relational comparison.
    fn rank(&self) -> i64;

    /// Underlying payload, used for equality.
    fn value(&self) -> &dyn DynCompare;
}

/// Element variant wrapping a caller supplied [`CustomValue`].
///
/// Recognized inputs to [`ElementOps::set`] are the missing marker `"NaN"`
/// (as `&str` or `String`), an `Arc<dyn CustomValue>`, an
/// `Option<Arc<dyn CustomValue>>` where `None` stands for a null payload, and
/// another `CustomElement` (bare or as [`Element::Custom`]) whose payload is
/// shared. Anything else leaves the element missing. An owned
/// `Box<dyn CustomValue>` cannot be taken through a borrow; convert it with
/// `CustomElement::from` instead.
///
/// ```
/// use std::sync::Arc;
/// use series::{CustomElement, CustomValue, DynCompare, ElementOps};
///
/// #[derive(Debug)]
/// struct Level(i64);
///
/// impl CustomValue for Level {
///     fn render(&self) -> String { format!("L{}", self.0) }
///     fn rank(&self) -> i64 { self.0 }
///     fn value(&self) -> &dyn DynCompare { &self.0 }
/// }
///
/// let mut x = CustomElement::na();
/// x.set(&(Arc::new(Level(2)) as Arc<dyn CustomValue>));
/// assert_eq!(x.render(), "L2");
///
/// x.set(&"NaN");
/// assert_eq!(x.render(), "NaN");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CustomElement(OptionNA<Arc<dyn CustomValue>>);

impl CustomElement {
    pub fn new<T: CustomValue>(value: T) -> Self {
        CustomElement(OptionNA::Some(Arc::new(value)))
    }

    pub fn na() -> Self {
        CustomElement(OptionNA::NA)
    }

    pub fn from_shared(value: Arc<dyn CustomValue>) -> Self {
        CustomElement(OptionNA::Some(value))
    }

    pub fn payload(&self) -> Option<&Arc<dyn CustomValue>> {
        self.0.as_ref().as_option()
    }

    pub fn rank(&self) -> Option<i64> {
        self.payload().map(|v| v.rank())
    }

    // payload of `other` for comparisons that require a present custom
    // element on the right hand side
    fn custom_payload(other: &Element) -> &Arc<dyn CustomValue> {
        match other {
            Element::Custom(CustomElement(OptionNA::Some(v))) => v,
            Element::Custom(_) => panic!("comparison against a missing custom payload"),
            other => panic!(
                "{}",
                Error::TypeMismatch {
                    expected: ElementType::Custom,
                    found: other.kind(),
                }
            ),
        }
    }
}

impl From<Box<dyn CustomValue>> for CustomElement {
    fn from(value: Box<dyn CustomValue>) -> Self {
        CustomElement::from_shared(Arc::from(value))
    }
}

impl ElementOps for CustomElement {
    fn set(&mut self, input: &dyn Any) {
        self.0 = if is_na_marker(input) {
            OptionNA::NA
        } else if let Some(v) = input.downcast_ref::<Arc<dyn CustomValue>>() {
            OptionNA::Some(Arc::clone(v))
        } else if let Some(v) = input.downcast_ref::<Option<Arc<dyn CustomValue>>>() {
            v.clone().into()
        } else if let Some(CustomElement(v)) = input.downcast_ref::<CustomElement>() {
            v.clone()
        } else if let Some(Element::Custom(CustomElement(v))) = input.downcast_ref::<Element>() {
            v.clone()
        } else {
            fail_open(ElementType::Custom, input)
        }
    }

    fn copy(&self) -> Element {
        Element::Custom(self.clone())
    }

    fn is_na(&self) -> bool {
        self.0.is_na()
    }

    fn kind(&self) -> ElementType {
        ElementType::Custom
    }

    fn value(&self) -> Option<&dyn DynCompare> {
        self.payload().map(|v| v.value())
    }

    fn render(&self) -> String {
        match self.payload() {
            Some(v) => v.render(),
            None => NA_MARKER.to_string(),
        }
    }

    // Custom payloads have no numeric or logical projection. Present values
    // convert to zero values without an error.

    fn to_int(&self) -> Result<i64, Error> {
        if self.is_na() {
            return Err(Error::CannotConvertNa("int"));
        }
        Ok(0)
    }

    fn to_float(&self) -> f64 {
        if self.is_na() {
            return f64::NAN;
        }
        0.0
    }

    fn to_bool(&self) -> Result<bool, Error> {
        if self.is_na() {
            return Err(Error::CannotConvertNa("bool"));
        }
        Ok(false)
    }

    /// Rank order of `self` against another custom element. `None` when
    /// either side is missing.
    ///
    /// # Panics
    ///
    /// When `self` is present and `other` is not a custom element.
    fn elem_cmp(&self, other: &Element) -> Option<Ordering> {
        let lhs = self.payload()?;
        if let Element::Custom(CustomElement(OptionNA::NA)) = other {
            return None;
        }
        let rhs = Self::custom_payload(other);
        Some(lhs.rank().cmp(&rhs.rank()))
    }

    /// Compares the raw payload against `other` converted to a boolean.
    /// False when `self` is missing or `other` has no boolean value.
    fn elem_eq(&self, other: &Element) -> bool {
        let Ok(b) = other.to_bool() else {
            return false;
        };
        match self.payload() {
            Some(v) => v.value().dyn_eq(&b),
            None => false,
        }
    }

    /// Compares raw payloads for inequality.
    ///
    /// # Panics
    ///
    /// Unlike the other operators there is no missing-value guard: this
    /// panics when `self` is missing, and when `other` is not a present
    /// custom element.
    fn elem_neq(&self, other: &Element) -> bool {
        let Some(lhs) = self.payload() else {
            panic!("can't compare a {} custom element for inequality", NA_MARKER);
        };
        let rhs = Self::custom_payload(other);
        !lhs.value().dyn_eq(rhs.value())
    }
}
