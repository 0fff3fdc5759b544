use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::event_log::EventLog;
use crate::model::{direction::Direction, truncated_label};

/// one ride-check record at a stop for a single departure. `load` is zero
/// until the load propagation sweep fills it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopObservation {
    pub run: Option<String>,
    pub arrival: Option<NaiveDateTime>,
    pub schedule: Option<NaiveDateTime>,
    pub offs: u32,
    pub ons: u32,
    pub load: i64,
}

/// a single physical stop location on one route.
#[derive(Debug, Clone)]
pub struct Stop {
    route_number: u32,
    stop_number: u32,
    street: Option<String>,
    cross_street: Option<String>,
    descriptor: String,
    direction: Direction,
    observations: HashMap<NaiveDateTime, StopObservation>,
}

/// ride-check counts are lenient by design: a missing or negative value
/// reads as zero rather than rejecting the row.
fn coerce_count(value: Option<i64>) -> u32 {
    match value {
        Some(v) => u32::try_from(v).unwrap_or(0),
        None => 0,
    }
}

impl Stop {
    pub fn new(
        route_number: u32,
        stop_number: u32,
        street: Option<String>,
        cross_street: Option<String>,
    ) -> Self {
        Self {
            route_number,
            stop_number,
            street,
            cross_street,
            descriptor: String::from(super::route::DESCRIPTOR_UNSET),
            direction: Direction::Unknown,
            observations: HashMap::new(),
        }
    }

    pub fn stop_number(&self) -> u32 {
        self.stop_number
    }

    pub fn set_route_metadata(&mut self, descriptor: &str, direction: Direction) {
        self.descriptor = descriptor.to_string();
        self.direction = direction;
    }

    pub fn descriptor_direction_trunc(&self, width: usize) -> String {
        truncated_label(&self.descriptor, self.direction, width)
    }

    pub fn street_trunc(&self, width: usize) -> Option<String> {
        self.street.as_ref().map(|s| s.chars().take(width).collect())
    }

    pub fn cross_street_trunc(&self, width: usize) -> Option<String> {
        self.cross_street
            .as_ref()
            .map(|s| s.chars().take(width).collect())
    }

    pub fn has_observation(&self, departure: &NaiveDateTime) -> bool {
        self.observations.contains_key(departure)
    }

    /// records one ride-check observation. a second observation for the same
    /// departure is a duplicate input row: it is logged and rejected, and the
    /// first record is retained unchanged.
    #[allow(clippy::too_many_arguments)]
    pub fn add_observation(
        &mut self,
        departure: NaiveDateTime,
        run: Option<String>,
        arrival: Option<NaiveDateTime>,
        schedule: Option<NaiveDateTime>,
        offs: Option<i64>,
        ons: Option<i64>,
        log: &mut EventLog,
    ) -> bool {
        if self.observations.contains_key(&departure) {
            log.error(format!(
                "Route {} stop {} at {}: tried to overwrite existing data. Check input for duplicate rows.",
                self.route_number, self.stop_number, departure
            ));
            return false;
        }

        self.observations.insert(
            departure,
            StopObservation {
                run,
                arrival,
                schedule,
                offs: coerce_count(offs),
                ons: coerce_count(ons),
                load: 0,
            },
        );
        true
    }

    /// stores the propagated load for a departure. departures this stop never
    /// observed still carry a load past it, so a zero-count record is created
    /// when none exists.
    pub fn set_load(&mut self, departure: NaiveDateTime, load: i64) {
        self.observations.entry(departure).or_default().load = load;
    }

    pub fn run(&self, departure: &NaiveDateTime) -> Option<&str> {
        self.observations
            .get(departure)
            .and_then(|o| o.run.as_deref())
    }

    pub fn offs_ons(&self, departure: &NaiveDateTime) -> (u32, u32) {
        match self.observations.get(departure) {
            Some(o) => (o.offs, o.ons),
            None => (0, 0),
        }
    }

    pub fn offs_ons_load(&self, departure: &NaiveDateTime) -> (u32, u32, i64) {
        match self.observations.get(departure) {
            Some(o) => (o.offs, o.ons, o.load),
            None => (0, 0, 0),
        }
    }

    pub fn observation(&self, departure: &NaiveDateTime) -> Option<&StopObservation> {
        self.observations.get(departure)
    }

    /// summed offs and ons over every departure observed at this stop.
    pub fn total_offs_ons(&self) -> (u64, u64) {
        self.observations.values().fold((0, 0), |(offs, ons), o| {
            (offs + u64::from(o.offs), ons + u64::from(o.ons))
        })
    }

    /// summed propagated load over every departure at this stop.
    pub fn total_load(&self) -> i64 {
        self.observations.values().map(|o| o.load).sum()
    }

    /// minutes behind schedule at this stop for a departure, rounded to the
    /// nearest minute; early arrivals are negative. `None` when the departure
    /// was not observed here or either time is missing.
    pub fn minutes_late(&self, departure: &NaiveDateTime) -> Option<i64> {
        let observation = self.observations.get(departure)?;
        let arrival = observation.arrival?;
        let schedule = observation.schedule?;
        let seconds = (arrival - schedule).num_seconds();
        Some((seconds as f64 / 60.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn departure(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn stop() -> Stop {
        Stop::new(5, 100, Some(String::from("Main St")), Some(String::from("1st Ave")))
    }

    #[test]
    fn duplicate_observation_is_rejected_and_original_retained() {
        let mut log = EventLog::new();
        let mut stop = stop();
        let dep = departure(8, 0);

        assert!(stop.add_observation(dep, None, None, None, Some(1), Some(3), &mut log));
        assert!(!stop.add_observation(dep, None, None, None, Some(9), Some(9), &mut log));

        assert_eq!(log.error_count(), 1);
        assert_eq!(stop.offs_ons(&dep), (1, 3));
    }

    #[test]
    fn negative_and_missing_counts_coerce_to_zero() {
        let mut log = EventLog::new();
        let mut stop = stop();
        let dep = departure(8, 0);

        assert!(stop.add_observation(dep, None, None, None, Some(-4), None, &mut log));
        assert_eq!(stop.offs_ons(&dep), (0, 0));
        assert_eq!(log.error_count(), 0);
    }

    #[test]
    fn set_load_creates_record_for_unobserved_departure() {
        let mut stop = stop();
        let dep = departure(9, 30);
        stop.set_load(dep, 7);
        assert_eq!(stop.offs_ons_load(&dep), (0, 0, 7));
    }

    #[test]
    fn minutes_late_rounds_and_signs() {
        let mut log = EventLog::new();
        let mut stop = stop();
        let dep = departure(8, 0);
        let schedule = departure(8, 10);
        let arrival = departure(8, 12) + chrono::Duration::seconds(40);

        stop.add_observation(dep, None, Some(arrival), Some(schedule), None, None, &mut log);
        // 2m40s late rounds to 3
        assert_eq!(stop.minutes_late(&dep), Some(3));

        let dep_early = departure(9, 0);
        stop.add_observation(
            dep_early,
            None,
            Some(departure(9, 5)),
            Some(departure(9, 9)),
            None,
            None,
            &mut log,
        );
        assert_eq!(stop.minutes_late(&dep_early), Some(-4));
    }

    #[test]
    fn minutes_late_requires_both_times() {
        let mut log = EventLog::new();
        let mut stop = stop();
        let dep = departure(8, 0);
        stop.add_observation(dep, None, Some(departure(8, 5)), None, None, None, &mut log);
        assert_eq!(stop.minutes_late(&dep), None);
        assert_eq!(stop.minutes_late(&departure(22, 0)), None);
    }

    #[test]
    fn street_truncation_is_char_safe() {
        let stop = Stop::new(5, 100, Some(String::from("Grand Blvd")), None);
        assert_eq!(stop.street_trunc(7), Some(String::from("Grand B")));
        assert_eq!(stop.cross_street_trunc(7), None);
    }
}
