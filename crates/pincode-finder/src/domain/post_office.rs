//! Post office records returned by a PIN code lookup and the display shape
//! derived from them.

use std::fmt;

use super::PostalCode;

/// Country label shown for every lookup result.
pub const COUNTRY: &str = "India";

/// Whether a post office handles direct mail delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryStatus {
    /// The office delivers mail.
    Delivery,
    /// The office does not deliver mail.
    NonDelivery,
    /// A label the lookup service returned that is not one of the two above.
    Other(String),
}

impl DeliveryStatus {
    /// Map an upstream label onto a status. Unknown labels are kept verbatim.
    ///
    /// ```
    /// use pincode_finder::domain::DeliveryStatus;
    ///
    /// assert_eq!(DeliveryStatus::from_label("Delivery"), DeliveryStatus::Delivery);
    /// assert_eq!(DeliveryStatus::from_label("Non-Delivery"), DeliveryStatus::NonDelivery);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Delivery" => Self::Delivery,
            "Non-Delivery" => Self::NonDelivery,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Label as shown to the user.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Delivery => "Delivery",
            Self::NonDelivery => "Non-Delivery",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Return `true` only for [`DeliveryStatus::Delivery`].
    #[must_use]
    pub const fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery)
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One post office entry for a PIN code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOfficeRecord {
    /// Post office name.
    pub name: String,
    /// Revenue district.
    pub district: String,
    /// State or union territory.
    pub state: String,
    /// Postal region.
    pub region: String,
    /// Postal division.
    pub division: String,
    /// Postal circle.
    pub circle: String,
    /// Mail delivery status.
    pub delivery_status: DeliveryStatus,
}

/// Non-empty, ordered list of post offices for one PIN code.
///
/// A successful lookup always yields at least one record, so the first
/// record can be taken without a fallible lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOffices {
    first: PostOfficeRecord,
    rest: Vec<PostOfficeRecord>,
}

impl PostOffices {
    /// Wrap `records`, returning `None` when the list is empty.
    ///
    /// ```
    /// use pincode_finder::domain::PostOffices;
    ///
    /// assert!(PostOffices::from_vec(Vec::new()).is_none());
    /// ```
    #[must_use]
    pub fn from_vec(records: Vec<PostOfficeRecord>) -> Option<Self> {
        let mut iter = records.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// The record the form displays.
    #[must_use]
    pub const fn first(&self) -> &PostOfficeRecord {
        &self.first
    }

    /// Consume the list, keeping only the first record.
    #[must_use]
    pub fn into_first(self) -> PostOfficeRecord {
        self.first
    }

    /// Number of records, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over every record in upstream order.
    pub fn iter(&self) -> impl Iterator<Item = &PostOfficeRecord> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Consume the list, yielding every record in upstream order.
    #[must_use]
    pub fn into_vec(self) -> Vec<PostOfficeRecord> {
        let mut records = Vec::with_capacity(self.rest.len() + 1);
        records.push(self.first);
        records.extend(self.rest);
        records
    }
}

/// Display shape for a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDetails {
    /// The PIN code that was looked up.
    pub postal_code: PostalCode,
    /// Post office name.
    pub post_office: String,
    /// Revenue district.
    pub district: String,
    /// State or union territory.
    pub state: String,
    /// Always [`COUNTRY`].
    pub country: &'static str,
    /// Postal region.
    pub region: String,
    /// Mail delivery status.
    pub delivery_status: DeliveryStatus,
    /// Postal division.
    pub division: String,
    /// Postal circle.
    pub circle: String,
}

impl LocationDetails {
    /// Build the display shape from the first record of a lookup.
    #[must_use]
    pub fn from_record(postal_code: PostalCode, record: PostOfficeRecord) -> Self {
        Self {
            postal_code,
            post_office: record.name,
            district: record.district,
            state: record.state,
            country: COUNTRY,
            region: record.region,
            delivery_status: record.delivery_status,
            division: record.division,
            circle: record.circle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(name: &str) -> PostOfficeRecord {
        PostOfficeRecord {
            name: name.to_owned(),
            district: "Central Delhi".to_owned(),
            state: "Delhi".to_owned(),
            region: "Delhi".to_owned(),
            division: "New Delhi Central".to_owned(),
            circle: "Delhi".to_owned(),
            delivery_status: DeliveryStatus::NonDelivery,
        }
    }

    #[rstest]
    #[case("Delivery", DeliveryStatus::Delivery)]
    #[case("Non-Delivery", DeliveryStatus::NonDelivery)]
    #[case("Branch", DeliveryStatus::Other("Branch".to_owned()))]
    fn delivery_status_labels_round_trip(#[case] label: &str, #[case] expected: DeliveryStatus) {
        let status = DeliveryStatus::from_label(label);
        assert_eq!(status, expected);
        assert_eq!(status.label(), label);
    }

    #[test]
    fn only_delivery_counts_as_delivering() {
        assert!(DeliveryStatus::Delivery.is_delivery());
        assert!(!DeliveryStatus::NonDelivery.is_delivery());
        assert!(!DeliveryStatus::from_label("delivery").is_delivery());
    }

    #[test]
    fn post_offices_keep_upstream_order() {
        let offices = PostOffices::from_vec(vec![
            record("Baroda House"),
            record("Bengali Market"),
            record("Connaught Place"),
        ])
        .expect("non-empty list");

        assert_eq!(offices.len(), 3);
        assert_eq!(offices.first().name, "Baroda House");
        let names: Vec<_> = offices.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Baroda House", "Bengali Market", "Connaught Place"]);
        assert_eq!(offices.into_vec().len(), 3);
    }

    #[test]
    fn location_details_use_fixed_country() {
        let code = PostalCode::parse("110001").expect("valid code");
        let details = LocationDetails::from_record(code.clone(), record("Baroda House"));

        assert_eq!(details.postal_code, code);
        assert_eq!(details.post_office, "Baroda House");
        assert_eq!(details.country, "India");
        assert_eq!(details.division, "New Delhi Central");
    }
}
