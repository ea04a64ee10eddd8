//! Static telemetry report catalog advertised in `OnRegisterReports` replies.
//!
//! The catalog is built on first access and is read-only for the rest of
//! the process lifetime.

use std::sync::OnceLock;

use crate::messages::{
    IntervalDescription, ReportDuration, ReportSpecification, SamplingPeriod, Units,
    UsageIntervalProperties,
};

pub const TELEMETRY_USAGE: &str = "TELEMETRY_USAGE";
pub const TELEMETRY_STATUS: &str = "TELEMETRY_STATUS";

pub const RID_POWER: &str = "POWER";
pub const RID_ENERGY: &str = "ENERGY";
pub const RID_STATUS: &str = "STATUS";

pub const MARKET_CONTEXT: &str = "http://MarketContext1";

/// Minutes, for both report duration and sampling period.
const MINUTES: &str = "M";

static TELEMETRY_REPORTS: OnceLock<Vec<ReportSpecification>> = OnceLock::new();

/// Returns the reports this endpoint offers: usage (power, energy) then status.
#[must_use]
pub fn telemetry_reports() -> &'static [ReportSpecification] {
    TELEMETRY_REPORTS.get_or_init(build_reports)
}

fn build_reports() -> Vec<ReportSpecification> {
    vec![
        report(
            TELEMETRY_USAGE,
            vec![
                channel(
                    RID_POWER,
                    Some(usage("RealPower", "W", "POWER_REAL")),
                ),
                channel(
                    RID_ENERGY,
                    Some(usage("RealEnergy", "Wh", "ENERGY_REAL")),
                ),
            ],
        ),
        report(TELEMETRY_STATUS, vec![channel(RID_STATUS, None)]),
    ]
}

fn report(name: &str, interval_descriptions: Vec<IntervalDescription>) -> ReportSpecification {
    ReportSpecification {
        duration: ReportDuration {
            duration: 60,
            duration_modifier: MINUTES.to_string(),
        },
        report_specifier_id: name.to_string(),
        report_name: name.to_string(),
        interval_descriptions,
    }
}

fn channel(rid: &str, usage: Option<UsageIntervalProperties>) -> IntervalDescription {
    IntervalDescription {
        rid: rid.to_string(),
        sampling_period: SamplingPeriod {
            max_sampling_period: 1,
            min_sampling_period: 1,
            sampling_period_modifier: MINUTES.to_string(),
            on_change: false,
        },
        market_context: MARKET_CONTEXT.to_string(),
        resource_id: String::new(),
        usage_interval_properties: usage,
    }
}

fn usage(description: &str, units: &str, unit_type: &str) -> UsageIntervalProperties {
    UsageIntervalProperties {
        reading_type: "Direct Read".to_string(),
        report_type: "usage".to_string(),
        units: Units {
            description: description.to_string(),
            si_scale_code: "none".to_string(),
            units: units.to_string(),
            unit_type: unit_type.to_string(),
        },
    }
}
