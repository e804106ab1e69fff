//! Declarative validation for submitted invoice forms.
//!
//! The full invoice shape has five fields, but `id` and `date` are supplied by
//! the system, so create and update both decode the same three caller-owned
//! fields through [`INVOICE_FORM_SCHEMA`]. Validation is all-or-nothing: every
//! failing field is reported in one pass.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{AmountError, AmountInCents, CustomerId, FormPayload, InvoiceFields};

/// Summary attached to every failed invoice validation, for create and update.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing Fields. Failed to Create Invoice.";

/// Caller-owned invoice form fields, serialised with their form names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum InvoiceField {
    /// `customerId`
    #[serde(rename = "customerId")]
    CustomerId,
    /// `amount`
    #[serde(rename = "amount")]
    Amount,
    /// `status`
    #[serde(rename = "status")]
    Status,
}

impl InvoiceField {
    /// Name of the field in the submitted form.
    pub const fn form_name(self) -> &'static str {
        match self {
            Self::CustomerId => "customerId",
            Self::Amount => "amount",
            Self::Status => "status",
        }
    }
}

/// Per-field error messages produced by a failed validation.
///
/// Serialises as `{"customerId": ["..."], "amount": ["..."]}`; fields that
/// passed are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<InvoiceField, Vec<String>>);

impl FieldErrors {
    fn push(&mut self, field: InvoiceField, message: &str) {
        self.0.entry(field).or_default().push(message.to_owned());
    }

    /// Messages recorded for `field`.
    pub fn get(&self, field: InvoiceField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fields that failed validation, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = InvoiceField> + '_ {
        self.0.keys().copied()
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Immutable rule set for the caller-owned invoice fields.
///
/// Holds only `'static` messages, so one instance is shared by every request.
#[derive(Debug)]
pub struct InvoiceFormSchema {
    customer_message: &'static str,
    amount_message: &'static str,
    amount_too_large_message: &'static str,
    status_message: &'static str,
}

/// The shared schema for the mutable invoice fields (everything except `id`
/// and `date`). Used by both create and update.
pub static INVOICE_FORM_SCHEMA: InvoiceFormSchema = InvoiceFormSchema::mutable_fields();

impl InvoiceFormSchema {
    const fn mutable_fields() -> Self {
        Self {
            customer_message: "Please select a customer.",
            amount_message: "Please enter an amount greater than $0.",
            amount_too_large_message: "Please enter an amount less than $21,474,836.47.",
            status_message: "Please select an invoice status.",
        }
    }

    /// Decode and check the submitted fields.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{FormPayload, InvoiceField, INVOICE_FORM_SCHEMA};
    ///
    /// let form = FormPayload::from_pairs([("customerId", "c1"), ("amount", "0")]);
    /// let errors = INVOICE_FORM_SCHEMA.validate(&form).expect_err("invalid form");
    /// let failed: Vec<_> = errors.fields().collect();
    /// assert_eq!(failed, [InvoiceField::Amount, InvoiceField::Status]);
    /// ```
    pub fn validate(&self, form: &FormPayload) -> Result<InvoiceFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        let customer_id = form
            .get(InvoiceField::CustomerId.form_name())
            .and_then(|raw| CustomerId::new(raw).ok());
        if customer_id.is_none() {
            errors.push(InvoiceField::CustomerId, self.customer_message);
        }

        let amount = match coerce_amount(form.get(InvoiceField::Amount.form_name())) {
            Ok(amount) => Some(amount),
            Err(AmountError::NotPositive) => {
                errors.push(InvoiceField::Amount, self.amount_message);
                None
            }
            Err(AmountError::TooLarge) => {
                errors.push(InvoiceField::Amount, self.amount_too_large_message);
                None
            }
        };

        let status = form
            .get(InvoiceField::Status.form_name())
            .and_then(|raw| raw.parse().ok());
        if status.is_none() {
            errors.push(InvoiceField::Status, self.status_message);
        }

        match (customer_id, amount, status) {
            (Some(customer_id), Some(amount), Some(status)) if errors.is_empty() => {
                Ok(InvoiceFields {
                    customer_id,
                    amount,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Numeric coercion for form input: surrounding whitespace is ignored, an
/// empty string is zero, and scientific notation is accepted. A missing or
/// non-numeric value counts as not positive.
fn coerce_amount(raw: Option<&str>) -> Result<AmountInCents, AmountError> {
    let trimmed = raw.ok_or(AmountError::NotPositive)?.trim();
    if trimmed.is_empty() {
        return Err(AmountError::NotPositive);
    }
    match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) => AmountInCents::from_major_units(value),
        Err(_) if exceeds_decimal_range(trimmed) => Err(AmountError::TooLarge),
        Err(_) => Err(AmountError::NotPositive),
    }
}

/// Whether a value `Decimal` rejects is still a positive number too large to
/// represent, such as `1e30` or `Infinity`.
fn exceeds_decimal_range(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('+').unwrap_or(raw);
    if unsigned == "Infinity" {
        return true;
    }
    // `f64` also accepts spellings like `inf` and `nan` that are not numbers
    // in form input.
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return false;
    }
    unsigned.parse::<f64>().is_ok_and(|value| value >= 1.0)
}
