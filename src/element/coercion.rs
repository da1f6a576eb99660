use std::any::Any;

use crate::error::Error;

pub trait CoercibleInto<T>: Sized {
    fn coerce_into(self) -> T;
}

pub trait TryCoercibleInto<T>: Sized {
    fn try_coerce_into(self) -> Result<T, Error>;
}

impl CoercibleInto<i64> for bool {
    #[inline]
    fn coerce_into(self) -> i64 {
        self as i64
    }
}

impl CoercibleInto<f64> for bool {
    #[inline]
    fn coerce_into(self) -> f64 {
        self as i64 as f64
    }
}

impl CoercibleInto<f64> for i64 {
    #[inline]
    fn coerce_into(self) -> f64 {
        self as f64
    }
}

impl CoercibleInto<bool> for i64 {
    #[inline]
    fn coerce_into(self) -> bool {
        self != 0
    }
}

impl CoercibleInto<bool> for f64 {
    #[inline]
    fn coerce_into(self) -> bool {
        !matches!(self.partial_cmp(&0.0), Some(std::cmp::Ordering::Equal))
    }
}

impl CoercibleInto<String> for bool {
    #[inline]
    fn coerce_into(self) -> String {
        self.to_string()
    }
}

impl CoercibleInto<String> for i64 {
    #[inline]
    fn coerce_into(self) -> String {
        self.to_string()
    }
}

impl CoercibleInto<String> for f64 {
    #[inline]
    fn coerce_into(self) -> String {
        self.to_string()
    }
}

impl TryCoercibleInto<i64> for f64 {
    fn try_coerce_into(self) -> Result<i64, Error> {
        // the upper bound, 2^63, is not itself representable
        if (i64::MIN as f64..i64::MAX as f64).contains(&self) {
            Ok(self as i64)
        } else {
            Err(Error::CannotBeCoercedTo("int"))
        }
    }
}

impl TryCoercibleInto<bool> for f64 {
    fn try_coerce_into(self) -> Result<bool, Error> {
        if self.is_nan() {
            Err(Error::CannotBeCoercedTo("bool"))
        } else {
            Ok(self.coerce_into())
        }
    }
}

impl TryCoercibleInto<i64> for &str {
    fn try_coerce_into(self) -> Result<i64, Error> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| Error::CannotBeCoercedTo("int"))
    }
}

impl TryCoercibleInto<f64> for &str {
    fn try_coerce_into(self) -> Result<f64, Error> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| Error::CannotBeCoercedTo("float"))
    }
}

impl TryCoercibleInto<bool> for &str {
    fn try_coerce_into(self) -> Result<bool, Error> {
        match self.trim().to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(Error::CannotBeCoercedTo("bool")),
        }
    }
}

/// An untyped input recognized as one of the built-in primitive types.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Primitive {
    /// Classify an untyped input. Returns `None` for anything that is not a
    /// built-in primitive.
    pub fn classify(input: &dyn Any) -> Option<Primitive> {
        if let Some(s) = input.downcast_ref::<&str>() {
            Some(Primitive::Str(s.to_string()))
        } else if let Some(s) = input.downcast_ref::<String>() {
            Some(Primitive::Str(s.clone()))
        } else if let Some(i) = input.downcast_ref::<i64>() {
            Some(Primitive::Int(*i))
        } else if let Some(i) = input.downcast_ref::<i32>() {
            Some(Primitive::Int(*i as i64))
        } else if let Some(f) = input.downcast_ref::<f64>() {
            Some(Primitive::Float(*f))
        } else {
            input.downcast_ref::<bool>().map(|b| Primitive::Bool(*b))
        }
    }
}

/// Whether an untyped input is the textual missing-value marker.
pub fn is_na_marker(input: &dyn Any) -> bool {
    use super::NA_MARKER;
    if let Some(s) = input.downcast_ref::<&str>() {
        *s == NA_MARKER
    } else if let Some(s) = input.downcast_ref::<String>() {
        s == NA_MARKER
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_to_logical() {
        assert!(CoercibleInto::<bool>::coerce_into(2_i64));
        assert!(!CoercibleInto::<bool>::coerce_into(0_i64));
        assert!(!CoercibleInto::<bool>::coerce_into(0.0_f64));
        assert!(TryCoercibleInto::<bool>::try_coerce_into(f64::NAN).is_err());
    }

    #[test]
    fn float_truncates_into_int() {
        assert_eq!(TryCoercibleInto::<i64>::try_coerce_into(3.9_f64), Ok(3));
        assert_eq!(TryCoercibleInto::<i64>::try_coerce_into(-3.9_f64), Ok(-3));
        assert!(TryCoercibleInto::<i64>::try_coerce_into(f64::INFINITY).is_err());
        assert!(TryCoercibleInto::<i64>::try_coerce_into(f64::NAN).is_err());
        assert!(TryCoercibleInto::<i64>::try_coerce_into(1e20_f64).is_err());
        assert!(TryCoercibleInto::<i64>::try_coerce_into(9.3e18_f64).is_err());
        assert_eq!(
            TryCoercibleInto::<i64>::try_coerce_into(-9_223_372_036_854_775_808.0_f64),
            Ok(i64::MIN)
        );
    }

    #[test]
    fn strings_parse_strictly() {
        assert_eq!(TryCoercibleInto::<i64>::try_coerce_into(" 42 "), Ok(42));
        assert_eq!(TryCoercibleInto::<bool>::try_coerce_into("TRUE"), Ok(true));
        assert!(TryCoercibleInto::<bool>::try_coerce_into("yes").is_err());
        assert!(TryCoercibleInto::<f64>::try_coerce_into("abc").is_err());
    }

    #[test]
    fn classify_untyped_inputs() {
        assert_eq!(Primitive::classify(&"a"), Some(Primitive::Str("a".into())));
        assert_eq!(Primitive::classify(&7_i32), Some(Primitive::Int(7)));
        assert_eq!(Primitive::classify(&true), Some(Primitive::Bool(true)));
        assert_eq!(Primitive::classify(&'c'), None);
        assert_eq!(Primitive::classify(&vec![1_u8]), None);
    }

    #[test]
    fn na_marker_is_exact() {
        assert!(is_na_marker(&"NaN"));
        assert!(is_na_marker(&String::from("NaN")));
        assert!(!is_na_marker(&"nan"));
        assert!(!is_na_marker(&f64::NAN));
    }
}
