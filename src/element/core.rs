use std::any::Any;
use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::Error;

use super::custom::CustomElement;
use super::dyncompare::DynCompare;
use super::types::*;

/// Operations every element kind supports.
///
/// Comparison operators take the opposing element as an [`Element`] so a
/// column can compare cells without knowing which variant it holds. The
/// relational operators default to [`ElementOps::elem_cmp`]; a receiver for
/// which `elem_cmp` returns `None` (a missing value, or a failed conversion
/// of `other`) is never less, greater or equal to anything.
pub trait ElementOps {
    /// Replace the element's state from an untyped input. Inputs that are
    /// not understood leave the element missing.
    fn set(&mut self, input: &dyn Any);
    fn copy(&self) -> Element;
    fn is_na(&self) -> bool;
    fn kind(&self) -> ElementType;
    /// Raw value of the payload, `None` when missing.
    fn value(&self) -> Option<&dyn DynCompare>;
    fn render(&self) -> String;

    fn to_int(&self) -> Result<i64, Error>;
    fn to_float(&self) -> f64;
    fn to_bool(&self) -> Result<bool, Error>;

    /// Order of `self` relative to `other`, if one exists.
    fn elem_cmp(&self, other: &Element) -> Option<Ordering>;

    fn elem_eq(&self, other: &Element) -> bool {
        matches!(self.elem_cmp(other), Some(Ordering::Equal))
    }

    fn elem_neq(&self, other: &Element) -> bool {
        matches!(self.elem_cmp(other), Some(Ordering::Less | Ordering::Greater))
    }

    fn elem_lt(&self, other: &Element) -> bool {
        matches!(self.elem_cmp(other), Some(Ordering::Less))
    }

    fn elem_lte(&self, other: &Element) -> bool {
        matches!(self.elem_cmp(other), Some(Ordering::Less | Ordering::Equal))
    }

    fn elem_gt(&self, other: &Element) -> bool {
        matches!(self.elem_cmp(other), Some(Ordering::Greater))
    }

    fn elem_gte(&self, other: &Element) -> bool {
        matches!(self.elem_cmp(other), Some(Ordering::Greater | Ordering::Equal))
    }
}

/// Fallback for inputs `set` does not understand.
pub(crate) fn fail_open<T>(kind: ElementType, input: &dyn Any) -> OptionNA<T> {
    tracing::trace!(
        %kind,
        type_id = ?input.type_id(),
        "unrecognized input, element set to {}",
        NA_MARKER
    );
    OptionNA::NA
}

/// A single cell value of a typed column.
#[derive(Debug, Clone)]
pub enum Element {
    String(Character),
    Int(Integer),
    Float(Double),
    Bool(Logical),
    Custom(CustomElement),
}

impl Element {
    /// A missing element of the given kind.
    pub fn na(kind: ElementType) -> Element {
        match kind {
            ElementType::String => Element::String(OptionNA::NA),
            ElementType::Int => Element::Int(OptionNA::NA),
            ElementType::Float => Element::Float(OptionNA::NA),
            ElementType::Bool => Element::Bool(OptionNA::NA),
            ElementType::Custom => Element::Custom(CustomElement::na()),
        }
    }

    /// Build an element of `kind` and set it from `input`.
    ///
    /// ```
    /// use series::{Element, ElementOps, ElementType};
    ///
    /// let x = Element::new(ElementType::Int, &true);
    /// assert_eq!(x.to_int(), Ok(1));
    ///
    /// let y = Element::new(ElementType::Custom, &"NaN");
    /// assert!(y.is_na());
    /// ```
    pub fn new(kind: ElementType, input: &dyn Any) -> Element {
        let mut elem = Element::na(kind);
        elem.set(input);
        elem
    }
}

impl ElementOps for Element {
    fn set(&mut self, input: &dyn Any) {
        use Element::*;
        match self {
            String(x) => x.set(input),
            Int(x) => x.set(input),
            Float(x) => x.set(input),
            Bool(x) => x.set(input),
            Custom(x) => x.set(input),
        }
    }

    fn copy(&self) -> Element {
        use Element::*;
        match self {
            String(x) => x.copy(),
            Int(x) => x.copy(),
            Float(x) => x.copy(),
            Bool(x) => x.copy(),
            Custom(x) => x.copy(),
        }
    }

    fn is_na(&self) -> bool {
        use Element::*;
        match self {
            String(x) => x.is_na(),
            Int(x) => x.is_na(),
            Float(x) => x.is_na(),
            Bool(x) => x.is_na(),
            Custom(x) => ElementOps::is_na(x),
        }
    }

    fn kind(&self) -> ElementType {
        match self {
            Element::String(_) => ElementType::String,
            Element::Int(_) => ElementType::Int,
            Element::Float(_) => ElementType::Float,
            Element::Bool(_) => ElementType::Bool,
            Element::Custom(_) => ElementType::Custom,
        }
    }

    fn value(&self) -> Option<&dyn DynCompare> {
        use Element::*;
        match self {
            String(x) => x.value(),
            Int(x) => x.value(),
            Float(x) => x.value(),
            Bool(x) => x.value(),
            Custom(x) => x.value(),
        }
    }

    fn render(&self) -> String {
        use Element::*;
        match self {
            String(x) => x.render(),
            Int(x) => x.render(),
            Float(x) => x.render(),
            Bool(x) => x.render(),
            Custom(x) => x.render(),
        }
    }

    fn to_int(&self) -> Result<i64, Error> {
        use Element::*;
        match self {
            String(x) => x.to_int(),
            Int(x) => x.to_int(),
            Float(x) => x.to_int(),
            Bool(x) => x.to_int(),
            Custom(x) => x.to_int(),
        }
    }

    fn to_float(&self) -> f64 {
        use Element::*;
        match self {
            String(x) => x.to_float(),
            Int(x) => x.to_float(),
            Float(x) => x.to_float(),
            Bool(x) => x.to_float(),
            Custom(x) => x.to_float(),
        }
    }

    fn to_bool(&self) -> Result<bool, Error> {
        use Element::*;
        match self {
            String(x) => x.to_bool(),
            Int(x) => x.to_bool(),
            Float(x) => x.to_bool(),
            Bool(x) => x.to_bool(),
            Custom(x) => x.to_bool(),
        }
    }

    fn elem_cmp(&self, other: &Element) -> Option<Ordering> {
        use Element::*;
        match self {
            String(x) => x.elem_cmp(other),
            Int(x) => x.elem_cmp(other),
            Float(x) => x.elem_cmp(other),
            Bool(x) => x.elem_cmp(other),
            Custom(x) => x.elem_cmp(other),
        }
    }

    // equality is dispatched rather than derived from `elem_cmp`, as the
    // custom variant defines it separately

    fn elem_eq(&self, other: &Element) -> bool {
        use Element::*;
        match self {
            String(x) => x.elem_eq(other),
            Int(x) => x.elem_eq(other),
            Float(x) => x.elem_eq(other),
            Bool(x) => x.elem_eq(other),
            Custom(x) => x.elem_eq(other),
        }
    }

    fn elem_neq(&self, other: &Element) -> bool {
        use Element::*;
        match self {
            String(x) => x.elem_neq(other),
            Int(x) => x.elem_neq(other),
            Float(x) => x.elem_neq(other),
            Bool(x) => x.elem_neq(other),
            Custom(x) => x.elem_neq(other),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl From<i64> for Element {
    fn from(x: i64) -> Self {
        Element::new(ElementType::Int, &x)
    }
}

impl From<f64> for Element {
    fn from(x: f64) -> Self {
        Element::new(ElementType::Float, &x)
    }
}

impl From<bool> for Element {
    fn from(x: bool) -> Self {
        Element::new(ElementType::Bool, &x)
    }
}

impl From<String> for Element {
    fn from(x: String) -> Self {
        Element::new(ElementType::String, &x)
    }
}

impl From<&str> for Element {
    fn from(x: &str) -> Self {
        Element::from(x.to_string())
    }
}

impl From<CustomElement> for Element {
    fn from(x: CustomElement) -> Self {
        Element::Custom(x)
    }
}

/// Stable sort of a single-kind slice of elements.
///
/// Present elements are ordered using only [`ElementOps::elem_lt`], missing
/// elements keep their relative order after all present ones. `descending`
/// reverses the present elements only.
///
/// # Panics
///
/// When the slice mixes the custom kind with any other kind.
pub fn sort_elements(elements: &mut [Element], descending: bool) {
    elements.sort_by(|l, r| match (l.is_na(), r.is_na()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = if l.elem_lt(r) {
                Ordering::Less
            } else if r.elem_lt(l) {
                Ordering::Greater
            } else {
                Ordering::Equal
            };
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_from_untyped_input() {
        assert_eq!(Element::new(ElementType::Float, &2_i64).to_float(), 2.0);
        assert_eq!(Element::new(ElementType::String, &1.5_f64).render(), "1.5");
        assert!(Element::new(ElementType::Int, &"NaN").is_na());
        assert!(Element::new(ElementType::Bool, &'x').is_na());
    }

    #[test]
    fn kind_survives_set() {
        let mut x = Element::from(3_i64);
        x.set(&"NaN");
        assert_eq!(x.kind(), ElementType::Int);
        x.set(&4_i64);
        assert_eq!(x.to_int(), Ok(4));
    }

    #[test]
    fn display_uses_render() {
        assert_eq!(Element::from(true).to_string(), "true");
        assert_eq!(Element::na(ElementType::Float).to_string(), "NaN");
    }

    #[test]
    fn sort_puts_na_last() {
        let mut xs: Vec<Element> = vec![
            Element::from(3_i64),
            Element::na(ElementType::Int),
            Element::from(1_i64),
            Element::from(2_i64),
        ];
        sort_elements(&mut xs, false);
        let rendered: Vec<String> = xs.iter().map(|x| x.render()).collect();
        assert_eq!(rendered, vec!["1", "2", "3", "NaN"]);

        sort_elements(&mut xs, true);
        let rendered: Vec<String> = xs.iter().map(|x| x.render()).collect();
        assert_eq!(rendered, vec!["3", "2", "1", "NaN"]);
    }
}
