//! The sale-create form of the discounts section.
//!
//! [`SaleFormData`] is the record the create page edits through a
//! [`FormState`](crate::FormState). On submit it is turned into the
//! `saleCreate` mutation input, and the mutation result is folded back into
//! either a navigation target or a list of field errors for the form.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::errors::RawFieldError;

/// Path of the sales list page.
pub const SALE_SECTION: &str = "/discounts/sales/";

/// Characters left unescaped in a path segment, matching `encodeURIComponent`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// How the sale's value is applied, as chosen on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleType {
    Fixed,
    #[default]
    Percentage,
}

/// How the sale's value is applied, as the mutation expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountValueType {
    Fixed,
    Percentage,
}

/// Maps the form's sale type onto the mutation's discount value type.
pub const fn discount_value_type(sale_type: SaleType) -> DiscountValueType {
    match sale_type {
        SaleType::Fixed => DiscountValueType::Fixed,
        SaleType::Percentage => DiscountValueType::Percentage,
    }
}

/// An empty decimal input means "no value".
pub fn decimal(value: &str) -> Option<String> {
    non_empty(value)
}

/// Form data of the sale-create page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleFormData {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub value: String,
    #[serde(rename = "type")]
    pub sale_type: SaleType,
}

/// Input of the `saleCreate` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreateInput {
    pub name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub value_type: DiscountValueType,
    pub value: Option<String>,
}

impl SaleCreateInput {
    /// Builds the mutation input from submitted form data.
    ///
    /// Empty date and value inputs are sent as `null`.
    pub fn from_form(data: &SaleFormData) -> Self {
        Self {
            name: data.name.clone(),
            start_date: non_empty(&data.start_date),
            end_date: non_empty(&data.end_date),
            value_type: discount_value_type(data.sale_type),
            value: decimal(&data.value),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// The created sale, as returned by the mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
}

/// Payload of the `saleCreate` mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleCreateResult {
    #[serde(default)]
    pub errors: Vec<RawFieldError>,
    #[serde(default)]
    pub sale: Option<Sale>,
}

/// What the page should do after the mutation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleCreateOutcome {
    /// The sale exists; notify and navigate to `url`.
    Created { sale_id: String, url: String },
    /// The server rejected the input; show these errors on the form.
    Rejected(Vec<RawFieldError>),
    /// Neither errors nor a sale came back.
    Empty,
}

/// Interprets a completed `saleCreate` mutation.
pub fn handle_sale_create(result: SaleCreateResult) -> SaleCreateOutcome {
    if !result.errors.is_empty() {
        return SaleCreateOutcome::Rejected(result.errors);
    }
    match result.sale {
        Some(sale) => {
            tracing::info!(sale_id = %sale.id, "Successfully created sale");
            SaleCreateOutcome::Created {
                url: sale_url(&sale.id),
                sale_id: sale.id,
            }
        }
        None => {
            tracing::warn!("saleCreate returned neither errors nor a sale");
            SaleCreateOutcome::Empty
        }
    }
}

/// Path of the sales list page.
pub fn sale_list_url() -> String {
    SALE_SECTION.to_string()
}

/// Path of a single sale's details page.
pub fn sale_url(id: &str) -> String {
    format!("{SALE_SECTION}{}", utf8_percent_encode(id, PATH_SEGMENT))
}
