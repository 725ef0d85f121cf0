//! Domain types for the collection schedule.
//!
//! These types represent validated schedule data. [`Schedule`] enforces its
//! invariants at construction time, so code that receives one can trust
//! day ids, route ids and route names without checking again.

mod day;
mod error;
mod route;
mod schedule;
mod stop;

pub use day::{Day, DayId};
pub use error::ScheduleError;
pub use route::{ALL_ROUTES, ALL_ROUTES_LABEL, Route, RouteId, is_reserved_route_name};
pub use schedule::Schedule;
pub use stop::Stop;
