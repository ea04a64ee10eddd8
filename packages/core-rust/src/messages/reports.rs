//! Report registration types: the telemetry reports this VEN offers.
//!
//! All structs use `#[serde(rename_all = "camelCase")]` to match the
//! `OnRegisterReports` response schema field for field.

use serde::{Deserialize, Serialize};

/// Report duration: a count plus a unit modifier (`"M"` for minutes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDuration {
    pub duration: u32,
    pub duration_modifier: String,
}

/// How often a data channel is sampled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingPeriod {
    pub max_sampling_period: u32,
    pub min_sampling_period: u32,
    pub sampling_period_modifier: String,
    pub on_change: bool,
}

/// Unit metadata for a usage channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Units {
    pub description: String,
    pub si_scale_code: String,
    pub units: String,
    pub unit_type: String,
}

/// Reading metadata carried only by usage-report channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageIntervalProperties {
    pub reading_type: String,
    pub report_type: String,
    pub units: Units,
}

/// One data channel within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalDescription {
    pub rid: String,
    pub sampling_period: SamplingPeriod,
    pub market_context: String,
    pub resource_id: String,
    /// Absent (not `null`) on the wire for non-usage reports.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub usage_interval_properties: Option<UsageIntervalProperties>,
}

/// A telemetry report offered by this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSpecification {
    pub duration: ReportDuration,
    pub report_specifier_id: String,
    pub report_name: String,
    pub interval_descriptions: Vec<IntervalDescription>,
}

/// Body of `onRegisterReportsResponseMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReportsResponse {
    pub telemetry_reports: Vec<ReportSpecification>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn status_channel() -> IntervalDescription {
        IntervalDescription {
            rid: "STATUS".into(),
            sampling_period: SamplingPeriod {
                max_sampling_period: 1,
                min_sampling_period: 1,
                sampling_period_modifier: "M".into(),
                on_change: false,
            },
            market_context: "http://MarketContext1".into(),
            resource_id: String::new(),
            usage_interval_properties: None,
        }
    }

    #[test]
    fn interval_description_omits_absent_usage_properties() {
        let value = serde_json::to_value(status_channel()).unwrap();
        assert_eq!(
            value,
            json!({
                "rid": "STATUS",
                "samplingPeriod": {
                    "maxSamplingPeriod": 1,
                    "minSamplingPeriod": 1,
                    "samplingPeriodModifier": "M",
                    "onChange": false
                },
                "marketContext": "http://MarketContext1",
                "resourceId": ""
            })
        );
    }

    #[test]
    fn usage_properties_use_camel_case_keys() {
        let mut channel = status_channel();
        channel.usage_interval_properties = Some(UsageIntervalProperties {
            reading_type: "Direct Read".into(),
            report_type: "usage".into(),
            units: Units {
                description: "RealPower".into(),
                si_scale_code: "none".into(),
                units: "W".into(),
                unit_type: "POWER_REAL".into(),
            },
        });

        let value = serde_json::to_value(channel).unwrap();
        let props = &value["usageIntervalProperties"];
        assert_eq!(props["readingType"], "Direct Read");
        assert_eq!(props["reportType"], "usage");
        assert_eq!(props["units"]["siScaleCode"], "none");
        assert_eq!(props["units"]["unitType"], "POWER_REAL");
    }
}
