use std::fmt::Display;

/// Textual token that stands for a missing value, both when rendering an
/// element and when classifying input passed to `set`.
pub const NA_MARKER: &str = "NaN";

/// Kind tag carried by every element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum ElementType {
    String,
    Int,
    Float,
    Bool,
    Custom,
}

/// Either a missing value or a present payload.
///
/// Elements never carry a separate missing flag next to a payload; the two
/// states are the two variants of this type.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionNA<T> {
    NA,
    Some(T),
}

impl<T> Default for OptionNA<T> {
    fn default() -> Self {
        OptionNA::NA
    }
}

impl<T> OptionNA<T> {
    #[inline]
    pub fn is_na(&self) -> bool {
        matches!(self, OptionNA::NA)
    }

    pub fn map<F, U>(self, f: F) -> OptionNA<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            OptionNA::Some(x) => OptionNA::Some(f(x)),
            OptionNA::NA => OptionNA::NA,
        }
    }

    pub fn as_ref(&self) -> OptionNA<&T> {
        match self {
            OptionNA::Some(x) => OptionNA::Some(x),
            OptionNA::NA => OptionNA::NA,
        }
    }

    pub fn as_option(self) -> Option<T> {
        match self {
            OptionNA::Some(x) => Option::Some(x),
            OptionNA::NA => Option::None,
        }
    }
}

impl<T> From<Option<T>> for OptionNA<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(x) => OptionNA::Some(x),
            Option::None => OptionNA::NA,
        }
    }
}

impl<T> Display for OptionNA<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionNA::Some(x) => write!(f, "{}", x),
            OptionNA::NA => write!(f, "{}", NA_MARKER),
        }
    }
}

pub type Character = OptionNA<String>;
pub type Integer = OptionNA<i64>;
pub type Double = OptionNA<f64>;
pub type Logical = OptionNA<bool>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_tags_are_lowercase() {
        assert_eq!(ElementType::Custom.to_string(), "custom");
        assert_eq!(ElementType::Float.to_string(), "float");
        assert_eq!(ElementType::from_str("bool"), Ok(ElementType::Bool));
        assert!(ElementType::from_str("complex").is_err());
    }

    #[test]
    fn na_renders_marker() {
        let x: Integer = OptionNA::NA;
        assert_eq!(x.to_string(), "NaN");
        assert_eq!(OptionNA::Some(3).to_string(), "3");
    }

    #[test]
    fn option_round_trip() {
        let x: Logical = Some(true).into();
        assert_eq!(x.clone().as_option(), Some(true));
        assert!(OptionNA::<bool>::from(None).is_na());
        assert_eq!(x.map(|b| !b), OptionNA::Some(false));
    }
}
