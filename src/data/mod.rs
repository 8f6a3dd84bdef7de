pub mod builder;
pub mod catalog;
pub mod formula;
pub mod patient;
pub use catalog::{CatalogError, FormulaCatalog};
pub use formula::{Formula, Macronutrient};
pub use patient::{BasalMethod, HeightSource, HeightUsed, PatientInputs, Sex};

/// Keep a raw value only if it is a finite number
///
/// This is the single entry point through which caller-supplied numbers become
/// the crate's "defined or undefined" representation.
#[inline]
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Keep a value only if it is finite and strictly positive
#[inline]
pub fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Division that is undefined for a zero or undefined divisor
#[inline]
pub(crate) fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (n, d) = numerator.zip(denominator)?;
    if d == 0.0 {
        return None;
    }
    finite(n / d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_filters_nan_and_infinity() {
        assert_eq!(finite(1.5), Some(1.5));
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::INFINITY), None);
        assert_eq!(finite(f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive(Some(2.0)), Some(2.0));
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(-3.0)), None);
        assert_eq!(positive(None), None);
    }

    #[test]
    fn test_safe_div() {
        assert_eq!(safe_div(Some(150.0), Some(100.0)), Some(1.5));
        assert_eq!(safe_div(Some(150.0), Some(0.0)), None);
        assert_eq!(safe_div(None, Some(100.0)), None);
        assert_eq!(safe_div(Some(1.0), None), None);
    }
}
