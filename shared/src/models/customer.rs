//! Customer Model

use crate::error::{OrderError, OrderResult};
use serde::{Deserialize, Serialize};

/// Server-side customer identifier
pub type CustomerId = i64;

/// Customer creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
}

impl CustomerForm {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
            address: address.into(),
        }
    }

    /// Every field is required; the first blank one is reported
    pub fn validate(&self) -> OrderResult<()> {
        for (name, value) in self.fields() {
            if value.trim().is_empty() {
                return Err(OrderError::MissingCustomerField(name));
            }
        }
        Ok(())
    }

    /// Form field names and values in form order
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
            ("email", self.email.as_str()),
            ("address", self.address.as_str()),
        ]
    }
}

/// One entry of the customer picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOption {
    pub id: CustomerId,
    /// Text shown and matched in the picker
    pub label: String,
}

/// Customer picker options for the sale screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerOptions {
    options: Vec<CustomerOption>,
}

impl CustomerOptions {
    pub fn new(options: Vec<CustomerOption>) -> Self {
        Self { options }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomerOption> {
        self.options.iter()
    }

    /// Id of the option whose label equals the typed text exactly.
    ///
    /// Partial or case-different input resolves to nothing, which clears
    /// the hidden id.
    pub fn resolve(&self, typed: &str) -> Option<CustomerId> {
        self.options
            .iter()
            .find(|option| option.label == typed)
            .map(|option| option.id)
    }

    /// Value for the hidden `customerId` field after typing `typed`
    pub fn hidden_value(&self, typed: &str) -> String {
        self.resolve(typed).map(|id| id.to_string()).unwrap_or_default()
    }
}

impl From<Vec<CustomerOption>> for CustomerOptions {
    fn from(options: Vec<CustomerOption>) -> Self {
        Self::new(options)
    }
}
