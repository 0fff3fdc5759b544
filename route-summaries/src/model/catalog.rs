use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::event_log::EventLog;
use crate::model::{Direction, NegativeLoadPolicy, Route};

/// the root of the ridership model for one summary run: a map from
/// (route number, direction) to exactly one [`Route`]. the composite key is
/// ordered, so report iteration is deterministic. the catalog is owned by
/// the run that built it; nothing here is process-global.
#[derive(Debug, Default)]
pub struct RidershipCatalog {
    routes: BTreeMap<(u32, Direction), Route>,
    city_name: Option<String>,
}

impl RidershipCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_route(&mut self, route_number: u32, direction: Direction) -> &mut Route {
        let city_name = self.city_name.clone();
        self.routes
            .entry((route_number, direction))
            .or_insert_with(|| {
                let mut route = Route::new(route_number, direction);
                if let Some(city) = &city_name {
                    route.set_city_name(city);
                }
                route
            })
    }

    /// adds a stop from topology data, lazily creating the route.
    pub fn add_stop(
        &mut self,
        route_number: u32,
        direction: Direction,
        stop_number: u32,
        street: Option<String>,
        cross_street: Option<String>,
        is_timed: bool,
        log: &mut EventLog,
    ) {
        self.ensure_route(route_number, direction).add_stop(
            stop_number,
            street,
            cross_street,
            is_timed,
            log,
        );
    }

    /// records one validated observation. routes are never created here:
    /// observation rows that reference an unknown route are rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn add_observation(
        &mut self,
        route_number: u32,
        direction: Direction,
        stop_number: u32,
        departure: NaiveDateTime,
        run: Option<String>,
        arrival: Option<NaiveDateTime>,
        schedule: Option<NaiveDateTime>,
        offs: Option<i64>,
        ons: Option<i64>,
        onboard: Option<i64>,
        log: &mut EventLog,
    ) -> bool {
        let Some(route) = self.routes.get_mut(&(route_number, direction)) else {
            log.error(format!(
                "Tried to add data to nonexistent route: {} {}",
                route_number, direction
            ));
            return false;
        };
        route.add_observation(
            stop_number, departure, run, arrival, schedule, offs, ons, onboard, log,
        )
    }

    /// upserts the route descriptor, lazily creating the route.
    pub fn set_route_metadata(&mut self, route_number: u32, direction: Direction, descriptor: &str) {
        self.ensure_route(route_number, direction)
            .set_route_metadata(descriptor);
    }

    /// broadcasts the project-wide city name to every current and future route.
    pub fn set_city_name(&mut self, name: &str) {
        self.city_name = Some(name.to_string());
        for route in self.routes.values_mut() {
            route.set_city_name(name);
        }
    }

    /// flags a stop as a schedule checkpoint; unknown routes are ignored.
    pub fn mark_timed_stop(&mut self, route_number: u32, direction: Direction, stop_number: u32) {
        if let Some(route) = self.routes.get_mut(&(route_number, direction)) {
            route.mark_timed(stop_number);
        }
    }

    /// runs the load-propagation sweep over every route independently.
    pub fn build_loads(&mut self, policy: NegativeLoadPolicy, log: &mut EventLog) {
        for route in self.routes.values_mut() {
            route.build_loads(policy, log);
        }
    }

    /// routes in ascending (route number, direction) order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    pub fn route(&self, route_number: u32, direction: Direction) -> Option<&Route> {
        self.routes.get(&(route_number, direction))
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
