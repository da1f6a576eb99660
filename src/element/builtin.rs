use std::any::Any;
use std::cmp::Ordering;

use crate::error::Error;

use super::coercion::*;
use super::core::{fail_open, Element, ElementOps};
use super::dyncompare::DynCompare;
use super::types::*;

// Built-in kinds compare by converting `other` into the receiver's kind.
fn compare_with<T: PartialOrd>(lhs: &OptionNA<T>, rhs: Result<T, Error>) -> Option<Ordering> {
    match (lhs, rhs) {
        (OptionNA::Some(l), Ok(r)) => l.partial_cmp(&r),
        _ => None,
    }
}

fn value_of<T: DynCompare>(x: &OptionNA<T>) -> Option<&dyn DynCompare> {
    match x {
        OptionNA::Some(x) => Some(x as &dyn DynCompare),
        OptionNA::NA => None,
    }
}

impl ElementOps for Character {
    fn set(&mut self, input: &dyn Any) {
        *self = if is_na_marker(input) {
            OptionNA::NA
        } else {
            match Primitive::classify(input) {
                Some(Primitive::Str(s)) => OptionNA::Some(s),
                Some(Primitive::Int(i)) => OptionNA::Some(i.coerce_into()),
                Some(Primitive::Float(f)) if f.is_nan() => OptionNA::NA,
                Some(Primitive::Float(f)) => OptionNA::Some(f.coerce_into()),
                Some(Primitive::Bool(b)) => OptionNA::Some(b.coerce_into()),
                None => fail_open(ElementType::String, input),
            }
        }
    }

    fn copy(&self) -> Element {
        Element::String(self.clone())
    }

    fn is_na(&self) -> bool {
        OptionNA::is_na(self)
    }

    fn kind(&self) -> ElementType {
        ElementType::String
    }

    fn value(&self) -> Option<&dyn DynCompare> {
        value_of(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn to_int(&self) -> Result<i64, Error> {
        match self {
            OptionNA::Some(s) => s.as_str().try_coerce_into(),
            OptionNA::NA => Err(Error::CannotConvertNa("int")),
        }
    }

    fn to_float(&self) -> f64 {
        match self {
            OptionNA::Some(s) => {
                TryCoercibleInto::<f64>::try_coerce_into(s.as_str()).unwrap_or(f64::NAN)
            }
            OptionNA::NA => f64::NAN,
        }
    }

    fn to_bool(&self) -> Result<bool, Error> {
        match self {
            OptionNA::Some(s) => s.as_str().try_coerce_into(),
            OptionNA::NA => Err(Error::CannotConvertNa("bool")),
        }
    }

    fn elem_cmp(&self, other: &Element) -> Option<Ordering> {
        if other.is_na() {
            return None;
        }
        compare_with(self, Ok(other.render()))
    }
}

impl ElementOps for Integer {
    fn set(&mut self, input: &dyn Any) {
        *self = if is_na_marker(input) {
            OptionNA::NA
        } else {
            match Primitive::classify(input) {
                Some(Primitive::Int(i)) => OptionNA::Some(i),
                Some(Primitive::Bool(b)) => OptionNA::Some(b.coerce_into()),
                Some(Primitive::Float(f)) => {
                    TryCoercibleInto::<i64>::try_coerce_into(f).ok().into()
                }
                _ => fail_open(ElementType::Int, input),
            }
        }
    }

    fn copy(&self) -> Element {
        Element::Int(self.clone())
    }

    fn is_na(&self) -> bool {
        OptionNA::is_na(self)
    }

    fn kind(&self) -> ElementType {
        ElementType::Int
    }

    fn value(&self) -> Option<&dyn DynCompare> {
        value_of(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn to_int(&self) -> Result<i64, Error> {
        match self {
            OptionNA::Some(i) => Ok(*i),
            OptionNA::NA => Err(Error::CannotConvertNa("int")),
        }
    }

    fn to_float(&self) -> f64 {
        match self {
            OptionNA::Some(i) => (*i).coerce_into(),
            OptionNA::NA => f64::NAN,
        }
    }

    fn to_bool(&self) -> Result<bool, Error> {
        match self {
            OptionNA::Some(i) => Ok((*i).coerce_into()),
            OptionNA::NA => Err(Error::CannotConvertNa("bool")),
        }
    }

    fn elem_cmp(&self, other: &Element) -> Option<Ordering> {
        compare_with(self, other.to_int())
    }
}

impl ElementOps for Double {
    fn set(&mut self, input: &dyn Any) {
        *self = if is_na_marker(input) {
            OptionNA::NA
        } else {
            match Primitive::classify(input) {
                Some(Primitive::Float(f)) if f.is_nan() => OptionNA::NA,
                Some(Primitive::Float(f)) => OptionNA::Some(f),
                Some(Primitive::Int(i)) => OptionNA::Some(i.coerce_into()),
                Some(Primitive::Bool(b)) => OptionNA::Some(b.coerce_into()),
                _ => fail_open(ElementType::Float, input),
            }
        }
    }

    fn copy(&self) -> Element {
        Element::Float(self.clone())
    }

    fn is_na(&self) -> bool {
        OptionNA::is_na(self)
    }

    fn kind(&self) -> ElementType {
        ElementType::Float
    }

    fn value(&self) -> Option<&dyn DynCompare> {
        value_of(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn to_int(&self) -> Result<i64, Error> {
        match self {
            OptionNA::Some(f) => (*f).try_coerce_into(),
            OptionNA::NA => Err(Error::CannotConvertNa("int")),
        }
    }

    fn to_float(&self) -> f64 {
        match self {
            OptionNA::Some(f) => *f,
            OptionNA::NA => f64::NAN,
        }
    }

    fn to_bool(&self) -> Result<bool, Error> {
        match self {
            OptionNA::Some(f) => (*f).try_coerce_into(),
            OptionNA::NA => Err(Error::CannotConvertNa("bool")),
        }
    }

    fn elem_cmp(&self, other: &Element) -> Option<Ordering> {
        if other.is_na() {
            return None;
        }
        compare_with(self, Ok(other.to_float()))
    }
}

impl ElementOps for Logical {
    fn set(&mut self, input: &dyn Any) {
        *self = if is_na_marker(input) {
            OptionNA::NA
        } else {
            match Primitive::classify(input) {
                Some(Primitive::Bool(b)) => OptionNA::Some(b),
                Some(Primitive::Int(i)) => OptionNA::Some(i.coerce_into()),
                Some(Primitive::Float(f)) => {
                    TryCoercibleInto::<bool>::try_coerce_into(f).ok().into()
                }
                _ => fail_open(ElementType::Bool, input),
            }
        }
    }

    fn copy(&self) -> Element {
        Element::Bool(self.clone())
    }

    fn is_na(&self) -> bool {
        OptionNA::is_na(self)
    }

    fn kind(&self) -> ElementType {
        ElementType::Bool
    }

    fn value(&self) -> Option<&dyn DynCompare> {
        value_of(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn to_int(&self) -> Result<i64, Error> {
        match self {
            OptionNA::Some(b) => Ok((*b).coerce_into()),
            OptionNA::NA => Err(Error::CannotConvertNa("int")),
        }
    }

    fn to_float(&self) -> f64 {
        match self {
            OptionNA::Some(b) => (*b).coerce_into(),
            OptionNA::NA => f64::NAN,
        }
    }

    fn to_bool(&self) -> Result<bool, Error> {
        match self {
            OptionNA::Some(b) => Ok(*b),
            OptionNA::NA => Err(Error::CannotConvertNa("bool")),
        }
    }

    fn elem_cmp(&self, other: &Element) -> Option<Ordering> {
        compare_with(self, other.to_bool())
    }
}
