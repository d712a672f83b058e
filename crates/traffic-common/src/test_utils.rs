//! Test utilities and shared fixtures for the traffic survey workspace.
//!
//! Enabled through the `testing` feature so that every crate's integration
//! tests can share the same CSV fixtures, temp-dir helpers and proptest
//! strategies.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `dir/name`, creating `dir` if needed, and return the full path.
pub fn write_fixture_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    std::fs::create_dir_all(dir).expect("Failed to create fixture directory");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// CSV fixtures in the survey file layout.
pub mod csv_fixtures {
    use crate::{vehicle, ELM_AVENUE, HANLEY_HIGHWAY};

    /// Header row with every required column plus the `Date` column the
    /// survey exports carry.
    pub const HEADER: &str = "JunctionName,Date,timeOfDay,travel_Direction_in,travel_Direction_out,Weather_Conditions,JunctionSpeedLimit,VehicleSpeed,VehicleType,electricHybrid";

    /// One survey observation, as written to a fixture file.
    #[derive(Debug, Clone)]
    pub struct CsvRow {
        pub junction: String,
        pub time_of_day: String,
        pub direction_in: String,
        pub direction_out: String,
        pub weather: String,
        pub speed_limit: u32,
        pub speed: u32,
        pub vehicle_type: String,
        pub electric: bool,
    }

    impl CsvRow {
        /// A vehicle passing straight through `junction` at 08:00 within the limit.
        pub fn new(junction: &str, vehicle_type: &str) -> Self {
            Self {
                junction: junction.to_string(),
                time_of_day: "08:00:00".to_string(),
                direction_in: "N".to_string(),
                direction_out: "N".to_string(),
                weather: "Clear".to_string(),
                speed_limit: 30,
                speed: 25,
                vehicle_type: vehicle_type.to_string(),
                electric: false,
            }
        }

        /// Sets the time of day.
        pub fn at(mut self, time_of_day: &str) -> Self {
            self.time_of_day = time_of_day.to_string();
            self
        }

        /// Sets the inbound and outbound directions.
        pub fn heading(mut self, direction_in: &str, direction_out: &str) -> Self {
            self.direction_in = direction_in.to_string();
            self.direction_out = direction_out.to_string();
            self
        }

        /// Sets the weather condition.
        pub fn in_weather(mut self, weather: &str) -> Self {
            self.weather = weather.to_string();
            self
        }

        /// Sets the measured speed and the junction limit.
        pub fn speed(mut self, speed: u32, speed_limit: u32) -> Self {
            self.speed = speed;
            self.speed_limit = speed_limit;
            self
        }

        /// Marks the vehicle as electric or hybrid.
        pub fn electric(mut self) -> Self {
            self.electric = true;
            self
        }

        /// Renders the row in `HEADER` column order.
        pub fn to_line(&self) -> String {
            format!(
                "{},15/06/2024,{},{},{},{},{},{},{},{}",
                self.junction,
                self.time_of_day,
                self.direction_in,
                self.direction_out,
                self.weather,
                self.speed_limit,
                self.speed,
                self.vehicle_type,
                if self.electric { "TRUE" } else { "FALSE" },
            )
        }
    }

    /// Builds a complete CSV document from rows.
    pub fn csv_document(rows: &[CsvRow]) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for row in rows {
            out.push_str(&row.to_line());
            out.push('\n');
        }
        out
    }

    /// A small but representative survey day covering both junctions.
    ///
    /// Expected figures: 10 vehicles, 2 trucks, 2 electric, 3 two-wheeled,
    /// 1 bus north at Elm, 7 non-turning, 2 over the limit, 6 at Elm,
    /// 4 at Hanley, 1 Elm scooter, Hanley peak at 17 with 2 vehicles, 2 in rain.
    pub fn sample_day() -> Vec<CsvRow> {
        vec![
            CsvRow::new(ELM_AVENUE, "Car").at("07:10:00"),
            CsvRow::new(ELM_AVENUE, vehicle::TRUCK).at("08:05:00").electric(),
            CsvRow::new(ELM_AVENUE, vehicle::BUS).at("08:30:00").heading("S", "N"),
            CsvRow::new(ELM_AVENUE, vehicle::SCOOTER).at("09:00:00").in_weather("Rain"),
            CsvRow::new(ELM_AVENUE, vehicle::BIKE).at("12:45:00"),
            CsvRow::new(ELM_AVENUE, "Car").at("17:20:00").speed(45, 30).heading("E", "W"),
            CsvRow::new(HANLEY_HIGHWAY, vehicle::TRUCK).at("06:00:00").in_weather("Rain"),
            CsvRow::new(HANLEY_HIGHWAY, vehicle::MOTORBIKE).at("17:05:00").speed(70, 60),
            CsvRow::new(HANLEY_HIGHWAY, "Car").at("17:40:00").electric(),
            CsvRow::new(HANLEY_HIGHWAY, "Car").at("18:15:00").heading("W", "S"),
        ]
    }

    /// The sample day as CSV text.
    pub fn sample_csv() -> String {
        csv_document(&sample_day())
    }
}

/// Property-based testing strategies using proptest.
pub mod property_testing {
    use crate::{vehicle, ELM_AVENUE, HANLEY_HIGHWAY};
    use proptest::prelude::*;

    /// Strategy for valid hours of the day.
    pub fn hour_strategy() -> impl Strategy<Value = u32> {
        0u32..24
    }

    /// Strategy for `HH:MM:SS` time strings.
    pub fn time_of_day_strategy() -> impl Strategy<Value = String> {
        (hour_strategy(), 0u32..60, 0u32..60)
            .prop_map(|(h, m, s)| format!("{h:02}:{m:02}:{s:02}"))
    }

    /// Strategy for junction names, including one outside the two surveyed junctions.
    pub fn junction_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(ELM_AVENUE.to_string()),
            Just(HANLEY_HIGHWAY.to_string()),
            Just("Station Road/Park Lane".to_string()),
        ]
    }

    /// Strategy for vehicle type labels.
    pub fn vehicle_type_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(vehicle::TRUCK.to_string()),
            Just(vehicle::BUS.to_string()),
            Just(vehicle::BIKE.to_string()),
            Just(vehicle::MOTORBIKE.to_string()),
            Just(vehicle::SCOOTER.to_string()),
            Just("Car".to_string()),
            Just("Van".to_string()),
        ]
    }

    /// Strategy for compass directions.
    pub fn direction_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("N".to_string()),
            Just("E".to_string()),
            Just("S".to_string()),
            Just("W".to_string()),
        ]
    }

    /// Strategy for weather conditions.
    pub fn weather_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Clear".to_string()),
            Just("Rain".to_string()),
            Just("Fog".to_string()),
            Just("Heavy rain".to_string()),
        ]
    }
}
