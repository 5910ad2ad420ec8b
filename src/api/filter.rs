//! Filter parameter handling for the trip endpoint
//!
//! Maps the three recognized query parameters onto upstream filter fields
//! and enforces the one-parameter-per-request policy.

use std::fmt;

/// Upstream field selected by a recognized query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripFilter {
    FareAmount,
    Distance,
    PaymentType,
}

impl TripFilter {
    /// Map an inbound query parameter name to its filter.
    pub fn from_param(name: &str) -> Option<Self> {
        match name {
            "fare_amount" => Some(Self::FareAmount),
            "distance" => Some(Self::Distance),
            "payment_type" => Some(Self::PaymentType),
            _ => None,
        }
    }

    /// Field name used in the upstream query language.
    pub const fn upstream_field(self) -> &'static str {
        match self {
            Self::FareAmount => "fare_amount",
            Self::Distance => "trip_distance",
            Self::PaymentType => "payment_type",
        }
    }
}

/// Reason a query string was rejected before any upstream call.
#[derive(Debug, PartialEq, Eq)]
pub enum FilterError {
    /// More than one query parameter was supplied.
    TooManyParameters,
    /// A filter value failed the character allowlist.
    InvalidValue(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyParameters => {
                write!(f, "Only one parameter should be provided at a time.")
            }
            Self::InvalidValue(name) => write!(f, "Invalid value for parameter '{name}'."),
        }
    }
}

/// Parse a request query string into at most one active filter.
///
/// More than one parameter of any name is rejected outright. A single
/// unrecognized parameter, or a recognized one with an empty value, falls
/// through to the unfiltered path.
pub fn parse_query(query: Option<&str>) -> Result<Option<(TripFilter, String)>, FilterError> {
    let Some(query) = query else {
        return Ok(None);
    };

    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    if pairs.len() > 1 {
        return Err(FilterError::TooManyParameters);
    }

    let Some((name, value)) = pairs.into_iter().next() else {
        return Ok(None);
    };

    let Some(filter) = TripFilter::from_param(&name) else {
        return Ok(None);
    };

    if value.is_empty() {
        return Ok(None);
    }

    if !is_safe_value(&value) {
        return Err(FilterError::InvalidValue(name));
    }

    Ok(Some((filter, value)))
}

/// Conservative allowlist for values placed into the upstream filter
/// expression. The filterable upstream fields hold numeric amounts and
/// codes, so anything beyond `[A-Za-z0-9_.-]` is rejected.
fn is_safe_value(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_recognized_parameter() {
        let parsed = parse_query(Some("fare_amount=10.5")).unwrap();
        assert_eq!(parsed, Some((TripFilter::FareAmount, "10.5".to_string())));

        let parsed = parse_query(Some("payment_type=2")).unwrap();
        assert_eq!(parsed, Some((TripFilter::PaymentType, "2".to_string())));
    }

    #[test]
    fn test_no_query_means_no_filter() {
        assert_eq!(parse_query(None).unwrap(), None);
        assert_eq!(parse_query(Some("")).unwrap(), None);
    }

    #[test]
    fn test_two_parameters_rejected() {
        let err = parse_query(Some("fare_amount=10.5&distance=2.3")).unwrap_err();
        assert_eq!(err, FilterError::TooManyParameters);
    }

    #[test]
    fn test_second_unrecognized_parameter_still_rejected() {
        let err = parse_query(Some("fare_amount=10.5&page=2")).unwrap_err();
        assert_eq!(err, FilterError::TooManyParameters);
    }

    #[test]
    fn test_single_unrecognized_parameter_ignored() {
        assert_eq!(parse_query(Some("page=2")).unwrap(), None);
    }

    #[test]
    fn test_empty_value_treated_as_absent() {
        assert_eq!(parse_query(Some("fare_amount=")).unwrap(), None);
    }

    #[test]
    fn test_injection_shaped_value_rejected() {
        let err = parse_query(Some("payment_type=2%20OR%20true")).unwrap_err();
        assert_eq!(err, FilterError::InvalidValue("payment_type".to_string()));

        let err = parse_query(Some("fare_amount=10.5'")).unwrap_err();
        assert_eq!(err, FilterError::InvalidValue("fare_amount".to_string()));
    }

    #[test]
    fn test_upstream_field_mapping() {
        assert_eq!(TripFilter::FareAmount.upstream_field(), "fare_amount");
        assert_eq!(TripFilter::Distance.upstream_field(), "trip_distance");
        assert_eq!(TripFilter::PaymentType.upstream_field(), "payment_type");
    }
}
