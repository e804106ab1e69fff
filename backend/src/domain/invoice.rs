//! Invoice value types.
//!
//! An invoice has five attributes: identifier, customer reference, amount,
//! status and date. Callers only ever supply the customer, amount and status
//! ([`InvoiceFields`]); the identifier is generated by the store and the date
//! is stamped by the action that writes the row ([`InvoiceRecord`]).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Validation errors for invoice identifiers and references.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvoiceValidationError {
    /// Invoice identifier was blank.
    #[error("invoice id must not be empty")]
    EmptyInvoiceId,
    /// Customer identifier was blank.
    #[error("customer id must not be empty")]
    EmptyCustomerId,
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Construct the identifier after trimming; blank input is rejected.
            pub fn new(value: impl AsRef<str>) -> Result<Self, InvoiceValidationError> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(InvoiceValidationError::$empty);
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvoiceValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

opaque_id!(
    /// Opaque invoice identifier. The store decides its concrete format.
    InvoiceId,
    EmptyInvoiceId
);

opaque_id!(
    /// Opaque reference to a customer row. Existence is enforced by the store.
    CustomerId,
    EmptyCustomerId
);

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Settled.
    Paid,
}

impl InvoiceStatus {
    /// Wire and storage spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is neither `pending` nor `paid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown invoice status: {0}")]
pub struct ParseInvoiceStatusError(String);

impl FromStr for InvoiceStatus {
    type Err = ParseInvoiceStatusError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(ParseInvoiceStatusError(other.to_owned())),
        }
    }
}

/// Reasons an amount cannot be represented in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    /// Amount was zero, negative, or rounded down to zero cents.
    #[error("amount must be greater than zero")]
    NotPositive,
    /// Amount does not fit the store's 32-bit integer column.
    #[error("amount exceeds the largest storable value")]
    TooLarge,
}

/// Invoice amount in integer minor units (cents).
///
/// ## Invariants
/// - Strictly greater than zero.
/// - Fits in an `i32`, matching the `amount` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AmountInCents(i32);

impl AmountInCents {
    /// Largest storable amount in cents.
    pub const MAX: Self = Self(i32::MAX);

    /// Convert a major-unit amount to cents: `round(amount * 100)`, midpoint
    /// away from zero.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    ///
    /// use backend::domain::AmountInCents;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Decimal::from_str("15.50").expect("decimal");
    /// assert_eq!(AmountInCents::from_major_units(amount).expect("positive").value(), 1550);
    /// ```
    pub fn from_major_units(amount: Decimal) -> Result<Self, AmountError> {
        if amount <= Decimal::ZERO {
            return Err(AmountError::NotPositive);
        }
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or(AmountError::TooLarge)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let cents = cents.to_i32().ok_or(AmountError::TooLarge)?;
        if cents == 0 {
            return Err(AmountError::NotPositive);
        }
        Ok(Self(cents))
    }

    /// Raw cents value.
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Validated caller-supplied invoice fields (the mutable subset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceFields {
    /// Referenced customer.
    pub customer_id: CustomerId,
    /// Amount in cents.
    pub amount: AmountInCents,
    /// Payment state.
    pub status: InvoiceStatus,
}

impl InvoiceFields {
    /// Stamp the fields with a date, producing the row values to write.
    pub fn into_record(self, date: NaiveDate) -> InvoiceRecord {
        let Self {
            customer_id,
            amount,
            status,
        } = self;
        InvoiceRecord {
            customer_id,
            amount,
            status,
            date,
        }
    }
}

/// Column values written by insert and update statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceRecord {
    /// Referenced customer.
    pub customer_id: CustomerId,
    /// Amount in cents.
    pub amount: AmountInCents,
    /// Payment state.
    pub status: InvoiceStatus,
    /// Calendar date, rendered as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn cents(raw: &str) -> Result<AmountInCents, AmountError> {
        AmountInCents::from_major_units(Decimal::from_str(raw).expect("decimal literal"))
    }

    #[rstest]
    #[case("15.50", 1550)]
    #[case("0.01", 1)]
    #[case("1", 100)]
    #[case("19.999", 2000)]
    #[case("0.005", 1)]
    #[case("21474836.47", i32::MAX)]
    fn converts_to_rounded_cents(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(cents(raw).expect("valid amount").value(), expected);
    }

    #[rstest]
    #[case("0", AmountError::NotPositive)]
    #[case("-3", AmountError::NotPositive)]
    #[case("0.004", AmountError::NotPositive)]
    #[case("21474836.48", AmountError::TooLarge)]
    fn rejects_unrepresentable_amounts(#[case] raw: &str, #[case] expected: AmountError) {
        assert_eq!(cents(raw).expect_err("invalid amount"), expected);
    }

    #[rstest]
    #[case("pending", Some(InvoiceStatus::Pending))]
    #[case("paid", Some(InvoiceStatus::Paid))]
    #[case("Paid", None)]
    #[case("overdue", None)]
    fn parses_status_exactly(#[case] raw: &str, #[case] expected: Option<InvoiceStatus>) {
        assert_eq!(raw.parse::<InvoiceStatus>().ok(), expected);
    }

    #[rstest]
    fn ids_are_trimmed_and_non_empty() {
        assert_eq!(InvoiceId::new("  abc ").expect("id").as_ref(), "abc");
        assert_eq!(
            CustomerId::new("   ").expect_err("blank"),
            InvoiceValidationError::EmptyCustomerId
        );
    }
}
