use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized result of every lookup.
///
/// `Default` is the empty response: a valid terminal state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsResponse {
    /// Presentation form of each returned record, protocol order.
    pub full_records: Vec<String>,

    /// Extracted values for the record type, in the order of `full_records`.
    pub values: Vec<String>,

    /// Leading values of the authority-section records of an SOA lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority_values: Option<Vec<String>>,
}

impl DnsResponse {
    pub fn new(full_records: Vec<String>, values: Vec<String>) -> Self {
        Self {
            full_records,
            values,
            authority_values: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.full_records.is_empty() && self.values.is_empty()
    }

    /// Appends `other` after `self` on both fields.
    pub fn extend(&mut self, other: DnsResponse) {
        self.full_records.extend(other.full_records);
        self.values.extend(other.values);
    }
}

impl fmt::Display for DnsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{full_records: {:?}, values: {:?}",
            self.full_records, self.values
        )?;
        if let Some(authority) = &self.authority_values {
            write!(f, ", authority_values: {:?}", authority)?;
        }
        f.write_str("}")
    }
}
