use bon::Builder;
use chrono::NaiveDate;
use serde::Serialize;

/// Dataset the connectivity probe retrieves from.
pub const DEFAULT_DATASET: &str = "reanalysis-era5-pressure-levels";

/// A single CDS retrieval request, serialized as the JSON body the API
/// expects. Field values follow the CDS convention of lists of strings even
/// for single selections.
#[derive(Debug, Clone, PartialEq, Serialize, Builder)]
pub struct RetrievalRequest {
    pub product_type: Vec<String>,
    pub variable: Vec<String>,
    pub year: Vec<String>,
    pub month: Vec<String>,
    pub day: Vec<String>,
    pub time: Vec<String>,
    pub pressure_level: Vec<String>,
    #[builder(into)]
    pub data_format: String,
}

impl RetrievalRequest {
    /// The fixed request used by the connectivity probe: one geopotential
    /// field at 13:00 on the given day, at 1000 hPa, in GRIB format.
    pub fn sample_for(date: NaiveDate) -> Self {
        Self {
            product_type: vec!["reanalysis".to_string()],
            variable: vec!["geopotential".to_string()],
            year: vec![date.format("%Y").to_string()],
            month: vec![date.format("%m").to_string()],
            day: vec![date.format("%d").to_string()],
            time: vec!["13:00".to_string()],
            pressure_level: vec!["1000".to_string()],
            data_format: "grib".to_string(),
        }
    }

    /// The probe's sample request, pinned to 2024-03-01 (a date known to
    /// exist in the ERA5 archive).
    pub fn sample() -> Self {
        Self::sample_for(NaiveDate::from_ymd_opt(2024, 3, 1).expect("fixed probe date is valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_request_matches_the_probe_contract() {
        let request = RetrievalRequest::sample();
        assert_eq!(request.product_type, ["reanalysis"]);
        assert_eq!(request.variable, ["geopotential"]);
        assert_eq!(request.year, ["2024"]);
        assert_eq!(request.month, ["03"]);
        assert_eq!(request.day, ["01"]);
        assert_eq!(request.time, ["13:00"]);
        assert_eq!(request.pressure_level, ["1000"]);
        assert_eq!(request.data_format, "grib");
    }

    #[test]
    fn sample_request_serializes_zero_padded_date_fields() {
        let json = serde_json::to_value(RetrievalRequest::sample()).unwrap();
        assert_eq!(json["month"][0], "03");
        assert_eq!(json["day"][0], "01");
        assert_eq!(json["data_format"], "grib");
    }

    #[test]
    fn builder_covers_non_sample_requests() {
        let request = RetrievalRequest::builder()
            .product_type(vec!["reanalysis".to_string()])
            .variable(vec!["temperature".to_string()])
            .year(vec!["2023".to_string()])
            .month(vec!["12".to_string()])
            .day(vec!["25".to_string()])
            .time(vec!["00:00".to_string()])
            .pressure_level(vec!["850".to_string()])
            .data_format("netcdf")
            .build();
        assert_eq!(request.variable, ["temperature"]);
        assert_eq!(request.data_format, "netcdf");
    }
}
