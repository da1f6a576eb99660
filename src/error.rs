use core::fmt;

use crate::element::ElementType;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    // coercion of a missing value
    CannotConvertNa(&'static str),

    // coercion of a present value that has no representation in the target
    CannotBeCoercedTo(&'static str),

    TypeMismatch {
        expected: ElementType,
        found: ElementType,
    },
}

impl Error {
    fn as_str(&self) -> String {
        match self {
            Error::CannotConvertNa(to) => format!("can't convert NaN to {to}"),
            Error::CannotBeCoercedTo(to) => {
                format!("element cannot be coerced to type '{to}'")
            }
            Error::TypeMismatch { expected, found } => {
                format!("expected a '{expected}' element, found '{found}'")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::error::Error for Error {}
