//! The `DaySimulator` and its minute loop.

use fc_charging::{demand_per_minute, distribute, ChargerBank, WaitQueue};
use fc_core::{ClockTime, SimulationConfig, TruckId, TruckStatus, MINUTES_PER_DAY};
use fc_fleet::FleetStore;
use fc_schedule::{Phase, Schedule};
use tracing::trace;

use crate::{DayResult, LoadProfile, MinuteRecord, SimObserver, StatusCounters, TruckMinute};

// ── DaySimulator ──────────────────────────────────────────────────────────────

/// Runs one operating day, minute by minute.
///
/// Each minute:
///
/// 1. **Phase**: resolve Work/Break for the minute.
/// 2. **Trucks** (ascending `TruckId`):
///    - Work, battery above the critical level and not mid-session → drive,
///      draining the per-minute consumption.
///    - Work, battery at or above the ok level → drive; a session ends here
///      but the truck draws nothing this minute.
///    - Break, battery full → idle.
///    - Otherwise request a slot at the tier's rate.  Trucks already charging
///      keep their slot; others are admitted only when no earlier queued
///      truck is waiting and a slot is free after the sessions still to be
///      processed this minute.  A refused truck joins the wait queue and
///      keeps its place there until served, even while it drives or idles.
/// 3. **Distribute**: each charger's budget is split over its guns, scaled
///    down proportionally when oversubscribed.
/// 4. **Drain**: free slots go to the wait queue head(s) regardless of
///    phase, since a queued truck already qualified.  Those trucks are
///    recorded as `Charging` with a slot but receive power from the next
///    minute on.  Heads that are already full are dropped.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct DaySimulator<'a> {
    config:   &'a SimulationConfig,
    schedule: &'a Schedule,
    day:      usize,

    /// Truck batteries and statuses, updated in place every minute.
    pub fleet: FleetStore,

    /// Trucks refused a slot and not yet served, oldest first.
    pub queue: WaitQueue,

    bank:            ChargerBank,
    counters:        StatusCounters,
    load_profile:    LoadProfile,
    start_batteries: Vec<f64>,
    records:         Vec<MinuteRecord>,
    next_minute:     u16,
}

impl<'a> DaySimulator<'a> {
    pub(crate) fn new(
        config:   &'a SimulationConfig,
        schedule: &'a Schedule,
        fleet:    FleetStore,
        day:      usize,
    ) -> Self {
        Self {
            config,
            schedule,
            day,
            queue:           WaitQueue::with_fleet_size(fleet.count),
            bank:            ChargerBank::from_config(config),
            counters:        StatusCounters::new(fleet.count),
            load_profile:    LoadProfile::default(),
            start_batteries: fleet.batteries(),
            records:         Vec::with_capacity(usize::from(MINUTES_PER_DAY)),
            next_minute:     0,
            fleet,
        }
    }

    /// The minute [`step`](Self::step) will simulate next.
    pub fn current_time(&self) -> ClockTime {
        ClockTime(self.next_minute)
    }

    pub fn is_finished(&self) -> bool {
        self.next_minute >= MINUTES_PER_DAY
    }

    pub fn counters(&self) -> &StatusCounters {
        &self.counters
    }

    pub fn load_profile(&self) -> &LoadProfile {
        &self.load_profile
    }

    /// Minutes simulated so far.
    pub fn records(&self) -> &[MinuteRecord] {
        &self.records
    }

    /// Simulate the next minute.  Returns `None` once the day is over.
    pub fn step(&mut self) -> Option<&MinuteRecord> {
        if self.is_finished() {
            return None;
        }
        let record = self.simulate_minute(ClockTime(self.next_minute));
        self.next_minute += 1;
        self.records.push(record);
        self.records.last()
    }

    /// Simulate every remaining minute and return the finished day.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> DayResult {
        while let Some(record) = self.step() {
            observer.on_minute_end(record);
        }
        let day = self.day;
        let result = self.into_result();
        observer.on_day_end(day, result.drift());
        result
    }

    pub fn day_index(&self) -> usize {
        self.day
    }

    /// Consume the simulator, keeping the minutes simulated so far.
    pub fn into_result(self) -> DayResult {
        DayResult {
            end_batteries:   self.fleet.batteries(),
            start_batteries: self.start_batteries,
            records:         self.records,
            counters:        self.counters,
            load_profile:    self.load_profile,
        }
    }

    // ── Minute loop ───────────────────────────────────────────────────────

    fn simulate_minute(&mut self, time: ClockTime) -> MinuteRecord {
        let config = self.config;
        let phase = self.schedule.resolve(time);
        let capacity = config.max_battery_capacity;
        let critical = config.critical_energy();
        let ok = config.ok_energy();

        self.bank.clear();
        // Sessions carried over from last minute not yet processed this minute.
        let mut reserved = self.fleet.count_in(TruckStatus::Charging);
        let mut trucks = Vec::with_capacity(self.fleet.count);

        // ── ② State machine ───────────────────────────────────────────────
        for truck in self.fleet.truck_ids() {
            let i = truck.index();
            let battery = self.fleet.battery[i];
            let in_session = self.fleet.status[i] == TruckStatus::Charging;
            if in_session {
                reserved -= 1;
            }

            let mut minute = TruckMinute::starting_at(battery);
            let wants_slot = match phase {
                Phase::Work => battery <= critical || in_session,
                Phase::Break => battery < capacity,
            };

            if !wants_slot {
                minute.status = match phase {
                    Phase::Work => {
                        self.fleet.adjust_battery(truck, -config.consumption_per_minute());
                        TruckStatus::Running
                    }
                    Phase::Break => TruckStatus::Idle,
                };
            } else if phase == Phase::Work && battery >= ok {
                minute.status = TruckStatus::Running;
            } else {
                let requested = demand_per_minute(&config.power_tiers, battery, capacity);
                let admitted = in_session
                    || (self.queue.is_next(truck)
                        && self.bank.occupied() + reserved < self.bank.total_slots());
                let slot = if admitted { self.bank.assign(truck, requested) } else { None };

                match slot {
                    Some(slot) => {
                        self.queue.remove(truck);
                        minute.status = TruckStatus::Charging;
                        minute.requested_power = requested;
                        minute.slot = Some(slot);
                    }
                    None => {
                        self.queue.push(truck);
                        minute.status = TruckStatus::Waiting;
                        trace!(%time, truck = %truck.label(), queued = self.queue.len(), "no charger slot");
                    }
                }
            }

            minute.battery_end = self.fleet.battery[i];
            trucks.push(minute);
        }

        // ── ③ Distribute ──────────────────────────────────────────────────
        let mut total_delivered = 0.0;
        for delivery in distribute(&self.bank) {
            let end = self.fleet.adjust_battery(delivery.truck, delivery.delivered);
            let minute = &mut trucks[delivery.truck.index()];
            minute.delivered_power = delivery.delivered;
            minute.battery_end = end;
            total_delivered += delivery.delivered;
        }

        // ── ④ Drain the wait queue into free slots ────────────────────────
        while !self.bank.is_full() {
            let Some(truck) = self.queue.pop_front() else { break };
            let battery = self.fleet.battery[truck.index()];
            if battery >= capacity {
                continue;
            }
            let requested = demand_per_minute(&config.power_tiers, battery, capacity);
            match self.bank.assign(truck, requested) {
                Some(slot) => {
                    let minute = &mut trucks[truck.index()];
                    minute.status = TruckStatus::Charging;
                    minute.slot = Some(slot);
                }
                None => {
                    self.queue.push_front(truck);
                    break;
                }
            }
        }

        // ── ⑤ Record ──────────────────────────────────────────────────────
        for (i, minute) in trucks.iter_mut().enumerate() {
            minute.state_of_charge = minute.battery_end / capacity * 100.0;
            self.fleet.status[i] = minute.status;
            self.counters.record(TruckId(i as u32), minute.status);
        }
        self.load_profile.record(time, total_delivered);

        MinuteRecord { time, phase, trucks, total_delivered }
    }
}
