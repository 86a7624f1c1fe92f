use crate::provider::PaymentError;

/// Converts a price in major units (e.g. dollars) to minor units (cents),
/// rounding to the nearest cent.
///
/// # Errors
///
/// Returns [`PaymentError::InvalidAmount`] for non-finite, zero or negative
/// prices, and for prices too large to represent.
pub fn to_minor_units(price: f64) -> Result<i64, PaymentError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(PaymentError::InvalidAmount(price));
    }

    let cents = (price * 100.0).round();
    if cents < 1.0 || cents > i64::MAX as f64 {
        return Err(PaymentError::InvalidAmount(price));
    }

    Ok(cents as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional_prices() {
        assert_eq!(to_minor_units(10.0).unwrap(), 1000);
        assert_eq!(to_minor_units(19.99).unwrap(), 1999);
        assert_eq!(to_minor_units(0.5).unwrap(), 50);
    }

    #[test]
    fn test_rounds_to_nearest_cent() {
        // 0.1 + 0.2 style float noise must not drop a cent
        assert_eq!(to_minor_units(0.1 + 0.2).unwrap(), 30);
        assert_eq!(to_minor_units(12.346).unwrap(), 1235);
        assert_eq!(to_minor_units(12.344).unwrap(), 1234);
    }

    #[test]
    fn test_rejects_invalid_prices() {
        assert!(to_minor_units(0.0).is_err());
        assert!(to_minor_units(-5.0).is_err());
        assert!(to_minor_units(f64::NAN).is_err());
        assert!(to_minor_units(f64::INFINITY).is_err());
        assert!(to_minor_units(0.001).is_err());
    }
}
