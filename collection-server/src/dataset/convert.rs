//! Conversion from dataset records to domain types.

use crate::domain::{Day, DayId, Route, RouteId, Schedule, Stop};

use super::error::DatasetError;
use super::types::{DayRecord, RouteRecord};

/// Convert parsed day records into a validated schedule.
///
/// Record order is kept as schedule order; the schedule itself checks
/// that ids match positions.
pub fn convert_schedule(records: Vec<DayRecord>) -> Result<Schedule, DatasetError> {
    let days = records
        .into_iter()
        .map(convert_day)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Schedule::new(days)?)
}

fn convert_day(record: DayRecord) -> Result<Day, DatasetError> {
    let id = DayId::new(record.id);
    let routes = record
        .routes
        .into_iter()
        .map(|r| convert_route(id, r))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Day::new(id, record.day, routes))
}

fn convert_route(day: DayId, record: RouteRecord) -> Result<Route, DatasetError> {
    let mut stops = Vec::with_capacity(record.places.len());

    for (index, place) in record.places.into_iter().enumerate() {
        let len = place.len();
        let Ok([street, detail]) = <[String; 2]>::try_from(place) else {
            return Err(DatasetError::MalformedPlace {
                day,
                route: record.id,
                index,
                len,
            });
        };
        stops.push(Stop::new(street, detail));
    }

    Ok(Route {
        id: RouteId::new(record.id),
        name: record.name,
        stops,
    })
}
