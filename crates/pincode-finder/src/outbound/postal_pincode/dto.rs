//! DTOs for decoding postalpincode.in JSON responses.
//!
//! The service answers with a single-element array whose entry carries a
//! status flag, an optional message and the post office list. The adapter
//! decodes into these transport DTOs first, then maps into domain records in
//! one pass.

use serde::Deserialize;

use crate::domain::ports::PostalLookupError;
use crate::domain::{DeliveryStatus, PostOfficeRecord, PostOffices};

const ERROR_STATUS: &str = "Error";

#[derive(Debug, Deserialize)]
pub(super) struct LookupEntryDto {
    #[serde(rename = "Status", default)]
    pub(super) status: Option<String>,
    #[serde(rename = "Message", default)]
    pub(super) message: Option<String>,
    #[serde(rename = "PostOffice", default)]
    pub(super) post_office: Option<Vec<PostOfficeDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct PostOfficeDto {
    #[serde(default)]
    pub(super) name: Option<String>,
    #[serde(default)]
    pub(super) district: Option<String>,
    #[serde(default)]
    pub(super) state: Option<String>,
    #[serde(default)]
    pub(super) region: Option<String>,
    #[serde(default)]
    pub(super) division: Option<String>,
    #[serde(default)]
    pub(super) circle: Option<String>,
    #[serde(default)]
    pub(super) delivery_status: Option<String>,
}

impl LookupEntryDto {
    /// Apply the status-flag and empty-list rules to one response entry.
    pub(super) fn into_domain(self) -> Result<PostOffices, PostalLookupError> {
        if self.status.as_deref() == Some(ERROR_STATUS) {
            return Err(PostalLookupError::upstream_or_fallback(self.message));
        }

        let records = self
            .post_office
            .unwrap_or_default()
            .into_iter()
            .map(PostOfficeDto::into_domain)
            .collect();
        PostOffices::from_vec(records).ok_or_else(PostalLookupError::not_found)
    }
}

impl PostOfficeDto {
    fn into_domain(self) -> PostOfficeRecord {
        PostOfficeRecord {
            name: self.name.unwrap_or_default(),
            district: self.district.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            region: self.region.unwrap_or_default(),
            division: self.division.unwrap_or_default(),
            circle: self.circle.unwrap_or_default(),
            delivery_status: DeliveryStatus::from_label(
                self.delivery_status.as_deref().unwrap_or_default(),
            ),
        }
    }
}
