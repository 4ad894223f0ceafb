//! Item quantity validation
//!
//! The store accepts any integer; the API only lets non-negative counts in.

use super::ValidationError;

/// Validated, non-negative item quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i64);

impl Quantity {
    /// # Example
    /// ```
    /// use boxkeep_server::models::Quantity;
    ///
    /// assert!(Quantity::new(3).is_ok());
    /// assert!(Quantity::new(0).is_ok());
    /// assert!(Quantity::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 0 {
            return Err(ValidationError::Negative { field: "quantity" });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(Quantity::new(0).unwrap().get(), 0);
        assert_eq!(Quantity::new(12).unwrap().get(), 12);
    }

    #[test]
    fn rejects_negative() {
        let err = Quantity::new(-3).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "quantity" }));
    }
}
