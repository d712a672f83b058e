//! Computes [`SurveyStatistics`] from a day's records.

use crate::peak_hour::peak_hour;
use crate::record::{line_of, TrafficRecord};
use crate::statistics::SurveyStatistics;
use tracing::{debug, instrument};
use traffic_common::{
    percentage, rounded_average, vehicle, Result, TrafficError, ELM_AVENUE, HANLEY_HIGHWAY,
    HOURS_PER_DAY,
};

fn count_where<F>(records: &[TrafficRecord], predicate: F) -> u64
where
    F: Fn(&TrafficRecord) -> bool,
{
    records.iter().filter(|&r| predicate(r)).count() as u64
}

/// Aggregates a day's records into the report statistics.
///
/// # Errors
///
/// [`TrafficError::EmptyDataset`] for no records,
/// [`TrafficError::NoJunctionRecords`] when either surveyed junction has no
/// traffic, and [`TrafficError::MalformedRecord`] for an unparsable speed or hour.
#[instrument(skip_all, fields(records = records.len()))]
pub fn analyze(records: &[TrafficRecord]) -> Result<SurveyStatistics> {
    let total_vehicles = records.len() as u64;
    let total_trucks = count_where(records, |r| r.is(vehicle::TRUCK));
    let trucks_percentage = percentage(total_trucks, total_vehicles).ok_or_else(|| {
        TrafficError::empty_dataset("no records to compute a truck percentage from")
    })?;

    let electric_vehicles = count_where(records, TrafficRecord::is_electric);
    let two_wheeled_vehicles = count_where(records, TrafficRecord::is_two_wheeled);
    let buses_north = count_where(records, |r| {
        r.at_junction(ELM_AVENUE) && r.direction_out == "N" && r.is(vehicle::BUS)
    });
    let non_turning_vehicles = count_where(records, TrafficRecord::is_non_turning);

    let bikes = count_where(records, |r| r.is(vehicle::BIKE));
    let avg_bicycles_per_hour = rounded_average(bikes, HOURS_PER_DAY as u64).unwrap_or(0);

    let mut over_speed = 0;
    for (index, record) in records.iter().enumerate() {
        if record.is_speeding(line_of(index))? {
            over_speed += 1;
        }
    }

    let elm_vehicles = count_where(records, |r| r.at_junction(ELM_AVENUE));
    let hanley_vehicles = count_where(records, |r| r.at_junction(HANLEY_HIGHWAY));
    let elm_scooters = count_where(records, |r| {
        r.at_junction(ELM_AVENUE) && r.is(vehicle::SCOOTER)
    });
    let elm_scooters_percentage = percentage(elm_scooters, elm_vehicles)
        .ok_or_else(|| TrafficError::no_junction_records(ELM_AVENUE))?;

    let peak = peak_hour(records, HANLEY_HIGHWAY)?;
    let rain_hours = count_where(records, |r| r.weather_conditions == "Rain");

    debug!(
        total_vehicles,
        elm_vehicles,
        hanley_vehicles,
        peak_hour = peak.hour,
        "Aggregated survey statistics"
    );

    Ok(SurveyStatistics {
        total_vehicles,
        total_trucks,
        electric_vehicles,
        two_wheeled_vehicles,
        buses_north,
        non_turning_vehicles,
        trucks_percentage,
        avg_bicycles_per_hour,
        over_speed,
        elm_vehicles,
        hanley_vehicles,
        elm_scooters_percentage,
        peak_hour_hanley: peak.describe(),
        peak_hour_traffic: peak.count,
        rain_hours,
    })
}
