//! Serialization of BigDouble and Quad.
//! Both types serialize to their round-trip string forms.

use crate::quad::FormatMode;
use crate::{BigDouble, Quad};
use serde::ser::Error;
use serde::{Serialize, Serializer};

impl Serialize for BigDouble {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.format_spec("R") {
            Ok(s) => serializer.serialize_str(&s),
            Err(e) => Err(Error::custom(format!("{e:?}"))),
        }
    }
}

impl Serialize for Quad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(FormatMode::ScientificExact))
    }
}

#[cfg(test)]
mod tests {

    use serde_json::to_string;

    use crate::{BigDouble, Quad};

    #[test]
    fn to_json() {
        assert_eq!(to_string(&BigDouble::ZERO).unwrap(), "\"0\"");
        assert_eq!(
            to_string(&BigDouble::from_f64(317.0)).unwrap(),
            "\"3.17E+2\""
        );
        assert_eq!(to_string(&BigDouble::NAN).unwrap(), "\"NaN\"");
        assert_eq!(to_string(&BigDouble::INFINITY).unwrap(), "\"Infinity\"");

        assert_eq!(to_string(&Quad::ZERO).unwrap(), "\"0\"");
        assert_eq!(to_string(&Quad::from_f64(2.5)).unwrap(), "\"2.5e0\"");
        assert_eq!(to_string(&Quad::NEG_INFINITY).unwrap(), "\"-Infinity\"");
    }
}
