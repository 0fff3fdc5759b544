use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};

use crate::event_log::EventLog;
use crate::model::{direction::Direction, truncated_label, NegativeLoadPolicy, Stop};

/// descriptor sentinel used until topology data supplies a route name.
pub const DESCRIPTOR_UNSET: &str = "Descriptor Unset";
/// city sentinel used until the topology header supplies one.
pub const CITY_NAME_UNSET: &str = "City Name Unset";

/// one route/direction combination: its stops, the departures observed for
/// it, and the carried-over onboard counts per departure.
#[derive(Debug, Clone)]
pub struct Route {
    route_number: u32,
    direction: Direction,
    descriptor: String,
    city_name: String,
    stops: BTreeMap<u32, Stop>,
    timed_stops: Vec<u32>,
    // sorted by (time-of-day, date): repeated days of data collection are
    // repeated samples of the same scheduled run
    departures: Vec<NaiveDateTime>,
    onboard_by_departure: HashMap<NaiveDateTime, i64>,
}

impl Route {
    pub fn new(route_number: u32, direction: Direction) -> Self {
        Self {
            route_number,
            direction,
            descriptor: String::from(DESCRIPTOR_UNSET),
            city_name: String::from(CITY_NAME_UNSET),
            stops: BTreeMap::new(),
            timed_stops: Vec::new(),
            departures: Vec::new(),
            onboard_by_departure: HashMap::new(),
        }
    }

    pub fn route_number(&self) -> u32 {
        self.route_number
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    pub fn descriptor_direction(&self) -> String {
        format!("{} {}", self.descriptor, self.direction.code())
    }

    pub fn descriptor_direction_trunc(&self, width: usize) -> String {
        truncated_label(&self.descriptor, self.direction, width)
    }

    /// adds a stop from topology data. a stop number already present on this
    /// route is a duplicate topology row: logged, and the original retained.
    pub fn add_stop(
        &mut self,
        stop_number: u32,
        street: Option<String>,
        cross_street: Option<String>,
        is_timed: bool,
        log: &mut EventLog,
    ) {
        if self.stops.contains_key(&stop_number) {
            log.error(format!(
                "Tried to add stop {} to route {} {} when it already exists.",
                stop_number, self.route_number, self.direction
            ));
            return;
        }

        if is_timed {
            self.timed_stops.push(stop_number);
            self.timed_stops.sort_unstable();
        }

        let mut stop = Stop::new(self.route_number, stop_number, street, cross_street);
        stop.set_route_metadata(&self.descriptor, self.direction);
        self.stops.insert(stop_number, stop);
    }

    /// flags an existing stop as a schedule checkpoint. used by the
    /// arrival-time detection policy; unknown stop numbers are ignored.
    pub fn mark_timed(&mut self, stop_number: u32) {
        if self.stops.contains_key(&stop_number) && !self.timed_stops.contains(&stop_number) {
            self.timed_stops.push(stop_number);
            self.timed_stops.sort_unstable();
        }
    }

    /// records one validated observation. fails when the stop is unknown or
    /// the stop already holds data for this departure; the departure registry
    /// and onboard map are only touched on success.
    #[allow(clippy::too_many_arguments)]
    pub fn add_observation(
        &mut self,
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
        let Some(stop) = self.stops.get_mut(&stop_number) else {
            log.error(format!(
                "Tried to add data to stop {} in route {} {} when stop does not exist.",
                stop_number, self.route_number, self.direction
            ));
            return false;
        };

        if !stop.add_observation(departure, run, arrival, schedule, offs, ons, log) {
            return false;
        }

        self.register_departure(departure);

        if let Some(onboard) = onboard {
            if let Some(previous) = self.onboard_by_departure.get(&departure) {
                if *previous != onboard {
                    log.warning(format!(
                        "Route {} {} time {} stop {}: overriding onboard value {} with new value {}",
                        self.route_number, self.direction, departure, stop_number, previous, onboard
                    ));
                }
            }
            // last write wins
            self.onboard_by_departure.insert(departure, onboard);
        }

        true
    }

    fn register_departure(&mut self, departure: NaiveDateTime) {
        if !self.departures.contains(&departure) {
            self.departures.push(departure);
            self.departures.sort_by_key(|d| (d.time(), d.date()));
        }
    }

    pub fn set_route_metadata(&mut self, descriptor: &str) {
        self.descriptor = descriptor.to_string();
        for stop in self.stops.values_mut() {
            stop.set_route_metadata(descriptor, self.direction);
        }
    }

    pub fn set_city_name(&mut self, name: &str) {
        self.city_name = name.to_string();
    }

    /// departures in (time-of-day, date) order.
    pub fn departures(&self) -> &[NaiveDateTime] {
        &self.departures
    }

    /// stops in ascending stop-number order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    pub fn stop(&self, stop_number: u32) -> Option<&Stop> {
        self.stops.get(&stop_number)
    }

    pub fn timed_stops(&self) -> &[u32] {
        &self.timed_stops
    }

    pub fn onboard_value(&self, departure: &NaiveDateTime) -> Option<i64> {
        self.onboard_by_departure.get(departure).copied()
    }

    pub fn onboard_total(&self) -> i64 {
        self.onboard_by_departure.values().sum()
    }

    /// summed (offs, ons, offs + ons) over all stops and departures.
    pub fn total_offs_ons(&self) -> (u64, u64, u64) {
        let (offs, ons) = self
            .stops
            .values()
            .map(|s| s.total_offs_ons())
            .fold((0, 0), |(fo, fn_), (o, n)| (fo + o, fn_ + n));
        (offs, ons, offs + ons)
    }

    /// the load-propagation sweep: for each departure, the running passenger
    /// count starts from the onboard carry-over and accumulates ons minus
    /// offs through the stops in stop-number order. the result is written
    /// into every stop, including stops with no observation for the
    /// departure.
    pub fn build_loads(&mut self, policy: NegativeLoadPolicy, log: &mut EventLog) {
        let departures = self.departures.clone();
        for departure in departures {
            let mut running = self.onboard_by_departure.get(&departure).copied().unwrap_or(0);
            for (stop_number, stop) in self.stops.iter_mut() {
                let (offs, ons) = stop.offs_ons(&departure);
                running += i64::from(ons) - i64::from(offs);
                if running < 0 {
                    log.warning(format!(
                        "Route {} {} {} stop {}: the load has dropped below 0 (check for bad data)",
                        self.route_number, self.direction, departure, stop_number
                    ));
                }
                running = policy.apply(running);
                stop.set_load(departure, running);
            }
        }
    }
}
