use thiserror::Error;

/// Errors raised when a parameter or range is outside its valid domain.
///
/// Every constructor in this crate validates eagerly and returns one of these
/// before any value is built, so solvers never see partially valid input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("at least 2 samples are required, got {n}")]
    TooFewSamples { n: usize },

    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} is too narrow to hold {samples} distinct samples")]
    Unresolvable { name: &'static str, samples: usize },
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    let value = finite(name, value)?;
    if value <= 0.0 {
        return Err(InvalidArgument::NonPositive { name, value });
    }
    Ok(value)
}

/// Checks that `value` is finite and not negative.
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(InvalidArgument::Negative { name, value });
    }
    Ok(value)
}

/// Checks that `value` is finite.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if !value.is_finite() {
        return Err(InvalidArgument::NonFinite { name, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_nan() {
        assert_eq!(
            positive("k", 0.0),
            Err(InvalidArgument::NonPositive {
                name: "k",
                value: 0.0
            })
        );
        assert!(matches!(
            positive("k", f64::NAN),
            Err(InvalidArgument::NonFinite { name: "k", .. })
        ));
        assert_eq!(positive("k", 3.5), Ok(3.5));
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(non_negative("zeta", 0.0), Ok(0.0));
        assert!(matches!(
            non_negative("zeta", -0.1),
            Err(InvalidArgument::Negative { name: "zeta", .. })
        ));
    }

    #[test]
    fn messages_name_the_parameter() {
        let err = InvalidArgument::NonPositive {
            name: "t_max",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "t_max must be positive, got -1");

        let err = InvalidArgument::Unresolvable {
            name: "t_max",
            samples: 3,
        };
        assert_eq!(err.to_string(), "t_max is too narrow to hold 3 distinct samples");
    }
}
