//! The four-column business card record.

use serde::{Deserialize, Serialize};

/// Column names, in output order.
pub const HEADER: [&str; 4] = ["Name", "Address", "Phone", "Website"];

/// One extracted business card. Absent values are empty strings, so every
/// record has exactly four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Website")]
    pub website: String,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            website: website.into(),
        }
    }
}
