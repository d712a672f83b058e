//! The computed figures for one survey day.

use std::fmt;

/// Report entry names, in report order.
pub mod keys {
    #![allow(missing_docs)]
    pub const TOTAL_VEHICLES: &str = "Total Vehicles";
    pub const TOTAL_TRUCKS: &str = "Total Trucks";
    pub const ELECTRIC_VEHICLES: &str = "Electric Vehicles";
    pub const TWO_WHEELED_VEHICLES: &str = "Two-Wheeled Vehicles";
    pub const BUSES_NORTH: &str = "Buses North";
    pub const NON_TURNING_VEHICLES: &str = "Non-Turning Vehicles";
    pub const TRUCKS_PERCENTAGE: &str = "Trucks Percentage";
    pub const AVG_BICYCLES_PER_HOUR: &str = "Avg Bicycles Per Hour";
    pub const OVER_SPEED: &str = "Over Speed";
    pub const ELM_VEHICLES: &str = "Elm Vehicles";
    pub const HANLEY_VEHICLES: &str = "Hanley Vehicles";
    pub const ELM_SCOOTERS_PERCENTAGE: &str = "Elm Scooters Percentage";
    pub const PEAK_HOUR_HANLEY: &str = "Peak Hour Hanley";
    pub const PEAK_HOUR_TRAFFIC: &str = "Peak Hour Traffic";
    pub const RAIN_HOURS: &str = "Rain Hours";

    pub const ALL: [&str; 15] = [
        TOTAL_VEHICLES,
        TOTAL_TRUCKS,
        ELECTRIC_VEHICLES,
        TWO_WHEELED_VEHICLES,
        BUSES_NORTH,
        NON_TURNING_VEHICLES,
        TRUCKS_PERCENTAGE,
        AVG_BICYCLES_PER_HOUR,
        OVER_SPEED,
        ELM_VEHICLES,
        HANLEY_VEHICLES,
        ELM_SCOOTERS_PERCENTAGE,
        PEAK_HOUR_HANLEY,
        PEAK_HOUR_TRAFFIC,
        RAIN_HOURS,
    ];
}

/// A single report value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    /// A plain count.
    Count(u64),
    /// A rounded whole-number percentage.
    Percent(u64),
    /// Free text such as a peak-hour span.
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) | Self::Percent(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Statistics for one survey day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyStatistics {
    /// Every record in the dataset.
    pub total_vehicles: u64,
    /// Vehicles of type `Truck`.
    pub total_trucks: u64,
    /// Vehicles flagged electric or hybrid.
    pub electric_vehicles: u64,
    /// Bikes, motorbikes and scooters.
    pub two_wheeled_vehicles: u64,
    /// Buses leaving Elm Avenue/Rabbit Road northbound.
    pub buses_north: u64,
    /// Vehicles leaving in the direction they arrived.
    pub non_turning_vehicles: u64,
    /// Trucks as a share of all vehicles.
    pub trucks_percentage: u64,
    /// Bikes averaged over the 24 hours of the day.
    pub avg_bicycles_per_hour: u64,
    /// Vehicles measured above the junction speed limit.
    pub over_speed: u64,
    /// Vehicles at Elm Avenue/Rabbit Road.
    pub elm_vehicles: u64,
    /// Vehicles at Hanley Highway/Westway.
    pub hanley_vehicles: u64,
    /// Scooters as a share of Elm Avenue/Rabbit Road traffic.
    pub elm_scooters_percentage: u64,
    /// Busiest hour at Hanley Highway/Westway.
    pub peak_hour_hanley: String,
    /// Vehicles at Hanley Highway/Westway in that hour.
    pub peak_hour_traffic: u64,
    /// Records taken in rain.
    pub rain_hours: u64,
}

impl SurveyStatistics {
    /// `(name, value)` pairs in report order.
    pub fn entries(&self) -> Vec<(&'static str, StatValue)> {
        use StatValue::{Count, Percent, Text};

        vec![
            (keys::TOTAL_VEHICLES, Count(self.total_vehicles)),
            (keys::TOTAL_TRUCKS, Count(self.total_trucks)),
            (keys::ELECTRIC_VEHICLES, Count(self.electric_vehicles)),
            (keys::TWO_WHEELED_VEHICLES, Count(self.two_wheeled_vehicles)),
            (keys::BUSES_NORTH, Count(self.buses_north)),
            (keys::NON_TURNING_VEHICLES, Count(self.non_turning_vehicles)),
            (keys::TRUCKS_PERCENTAGE, Percent(self.trucks_percentage)),
            (keys::AVG_BICYCLES_PER_HOUR, Count(self.avg_bicycles_per_hour)),
            (keys::OVER_SPEED, Count(self.over_speed)),
            (keys::ELM_VEHICLES, Count(self.elm_vehicles)),
            (keys::HANLEY_VEHICLES, Count(self.hanley_vehicles)),
            (
                keys::ELM_SCOOTERS_PERCENTAGE,
                Percent(self.elm_scooters_percentage),
            ),
            (keys::PEAK_HOUR_HANLEY, Text(self.peak_hour_hanley.clone())),
            (keys::PEAK_HOUR_TRAFFIC, Count(self.peak_hour_traffic)),
            (keys::RAIN_HOURS, Count(self.rain_hours)),
        ]
    }

    /// Looks up one value by report name.
    pub fn get(&self, name: &str) -> Option<StatValue> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SurveyStatistics {
        SurveyStatistics {
            total_vehicles: 10,
            total_trucks: 2,
            electric_vehicles: 2,
            two_wheeled_vehicles: 3,
            buses_north: 1,
            non_turning_vehicles: 7,
            trucks_percentage: 20,
            avg_bicycles_per_hour: 0,
            over_speed: 2,
            elm_vehicles: 6,
            hanley_vehicles: 4,
            elm_scooters_percentage: 17,
            peak_hour_hanley: "Between 17:00 and 18:00".to_string(),
            peak_hour_traffic: 2,
            rain_hours: 2,
        }
    }

    #[test]
    fn test_entries_follow_report_order() {
        let names: Vec<_> = sample().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, keys::ALL);
    }

    #[test]
    fn test_names_have_no_separator() {
        assert!(keys::ALL.iter().all(|k| !k.contains(':')));
    }

    #[test]
    fn test_get() {
        let stats = sample();
        assert_eq!(stats.get(keys::TRUCKS_PERCENTAGE), Some(StatValue::Percent(20)));
        assert_eq!(
            stats.get(keys::PEAK_HOUR_HANLEY).map(|v| v.to_string()),
            Some("Between 17:00 and 18:00".to_string())
        );
        assert_eq!(stats.get("Unknown"), None);
    }
}
