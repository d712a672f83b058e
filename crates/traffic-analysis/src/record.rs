//! A single survey observation as read from the CSV file.

use serde::{Deserialize, Serialize};
use traffic_common::{hour_label, parse_hour, vehicle, Result, TrafficError};

/// One vehicle passing a surveyed junction.
///
/// Every field is kept as the raw string from the file; numeric fields are
/// parsed on demand so that a bad speed only fails the statistic that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct TrafficRecord {
    #[serde(rename = "VehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "electricHybrid")]
    pub electric_hybrid: String,
    #[serde(rename = "JunctionName")]
    pub junction_name: String,
    #[serde(rename = "travel_Direction_in")]
    pub direction_in: String,
    #[serde(rename = "travel_Direction_out")]
    pub direction_out: String,
    #[serde(rename = "VehicleSpeed")]
    pub vehicle_speed: String,
    #[serde(rename = "JunctionSpeedLimit")]
    pub junction_speed_limit: String,
    #[serde(rename = "timeOfDay")]
    pub time_of_day: String,
    #[serde(rename = "Weather_Conditions")]
    pub weather_conditions: String,
}

impl TrafficRecord {
    /// Whether the vehicle is of the given type.
    pub fn is(&self, vehicle_type: &str) -> bool {
        self.vehicle_type == vehicle_type
    }

    /// Whether the electric/hybrid flag is the literal `TRUE`.
    pub fn is_electric(&self) -> bool {
        self.electric_hybrid == "TRUE"
    }

    /// Bike, motorbike or scooter.
    pub fn is_two_wheeled(&self) -> bool {
        vehicle::TWO_WHEELED.contains(&self.vehicle_type.as_str())
    }

    /// Whether the record was taken at the named junction.
    pub fn at_junction(&self, junction: &str) -> bool {
        self.junction_name == junction
    }

    /// Inbound and outbound directions match exactly.
    pub fn is_non_turning(&self) -> bool {
        self.direction_in == self.direction_out
    }

    /// The hour component of the time of day, as written in the file.
    pub fn hour_label(&self) -> &str {
        hour_label(&self.time_of_day)
    }

    /// Parses the hour component of the time of day.
    ///
    /// `line` is only used to locate the record in the error message.
    pub fn hour(&self, line: u64) -> Result<u32> {
        parse_hour(&self.time_of_day).ok_or_else(|| {
            TrafficError::malformed(
                line,
                format!("timeOfDay '{}' has no numeric hour", self.time_of_day),
            )
        })
    }

    /// Whether the measured speed exceeds the junction limit.
    pub fn is_speeding(&self, line: u64) -> Result<bool> {
        let speed = parse_integer("VehicleSpeed", &self.vehicle_speed, line)?;
        let limit = parse_integer("JunctionSpeedLimit", &self.junction_speed_limit, line)?;
        Ok(speed > limit)
    }
}

fn parse_integer(field: &str, value: &str, line: u64) -> Result<i64> {
    value.trim().parse().map_err(|e| {
        TrafficError::malformed(line, format!("{field} '{value}' is not an integer: {e}"))
    })
}

/// CSV line number of the record at `index`, counting the header as line 1.
pub const fn line_of(index: usize) -> u64 {
    index as u64 + 2
}
