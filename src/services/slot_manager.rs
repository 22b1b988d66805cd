//! Slot collection manager
//!
//! Owns the fixed-size slot array of one station for an editing session and
//! is the only place slot state is mutated. Every successful mutation
//! notifies the slot-changed listeners with the post-mutation record; failed
//! operations return `false` and touch nothing.
//!
//! `slot` and `all_slots` hand out shared borrows of the live records, so the
//! borrow checker keeps callers from mutating manager state through them.
//! `export_slots` returns owned copies.

use tracing::{debug, info, warn};

use crate::models::constants::{
    CATEGORY_COUNT, DEFAULT_SLOT_COUNT, MIN_LOAD_PERCENT_MAX, MIN_LOAD_PERCENT_MIN, MIN_QUANTITY,
};
use crate::models::slot::SlotRecord;
use crate::models::station::{category_base, local_remote_counterpart, StationKind};
use crate::services::listeners::{ListenerId, ListenerRegistry};

pub type SlotChangedListener = dyn FnMut(usize, &SlotRecord);
pub type ValidationListener = dyn FnMut(bool, &str);

/// Outcome of [`SlotManager::validate_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// One `"Slot {index}: {message}"` entry per failing slot, in index order.
    pub errors: Vec<String>,
}

impl ValidationSummary {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message(&self) -> String {
        self.errors.join("\n")
    }
}

pub struct SlotManager {
    station_kind: StationKind,
    configured_count: usize,
    slots: Vec<SlotRecord>,
    slot_changed: ListenerRegistry<SlotChangedListener>,
    validation_complete: ListenerRegistry<ValidationListener>,
}

impl Default for SlotManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotManager {
    /// An uninitialized planetary manager: no slots, room for the default count.
    pub fn new() -> Self {
        Self {
            station_kind: StationKind::Planetary,
            configured_count: DEFAULT_SLOT_COUNT,
            slots: Vec::new(),
            slot_changed: ListenerRegistry::new(),
            validation_complete: ListenerRegistry::new(),
        }
    }

    // ========== Lifecycle ==========

    /// Replace every slot with `count` default records of `kind`. Listeners are kept.
    pub fn initialize(&mut self, kind: StationKind, count: usize) {
        self.station_kind = kind;
        self.configured_count = count;
        self.slots = vec![SlotRecord::for_kind(kind); count];
        info!(kind = %kind, count, "slot manager initialized");
    }

    /// Copy `records` into slots `0..n`, where `n` is capped at the configured count.
    ///
    /// Slots past `n` keep their current state; extra records are dropped.
    pub fn load_slots(&mut self, records: &[SlotRecord]) {
        if records.is_empty() {
            return;
        }

        let n = records.len().min(self.configured_count);
        for (index, record) in records.iter().take(n).enumerate() {
            match self.slots.get_mut(index) {
                Some(slot) => *slot = record.clone(),
                None => self.slots.push(record.clone()),
            }
        }

        if records.len() > n {
            warn!(
                supplied = records.len(),
                kept = n,
                "discarded records beyond configured slot count"
            );
        }
        debug!(loaded = n, "slots loaded");
    }

    // ========== Accessors ==========

    pub fn station_kind(&self) -> StationKind {
        self.station_kind
    }

    pub fn configured_count(&self) -> usize {
        self.configured_count
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot(&self, index: usize) -> Option<&SlotRecord> {
        self.slots.get(index)
    }

    pub fn all_slots(&self) -> &[SlotRecord] {
        &self.slots
    }

    /// True for unconfigured indices as well as slots without an item.
    pub fn is_slot_empty(&self, index: usize) -> bool {
        self.slots.get(index).map_or(true, SlotRecord::is_empty)
    }

    /// Owned copies of every slot, safe to hand to the host.
    pub fn export_slots(&self) -> Vec<SlotRecord> {
        self.slots.clone()
    }

    // ========== Listeners ==========

    pub fn on_slot_changed(&mut self, listener: Box<SlotChangedListener>) -> ListenerId {
        self.slot_changed.subscribe(listener)
    }

    pub fn unsubscribe_slot_changed(&mut self, id: ListenerId) -> bool {
        self.slot_changed.unsubscribe(id)
    }

    pub fn on_validation_complete(&mut self, listener: Box<ValidationListener>) -> ListenerId {
        self.validation_complete.subscribe(listener)
    }

    pub fn unsubscribe_validation_complete(&mut self, id: ListenerId) -> bool {
        self.validation_complete.unsubscribe(id)
    }

    fn notify_slot_changed(&mut self, index: usize) {
        if let Some(slot) = self.slots.get(index) {
            for listener in self.slot_changed.iter_mut() {
                listener(index, slot);
            }
        }
    }

    // ========== Mutations ==========

    /// Store `item_id` as given. Range checks are left to validation.
    pub fn set_item(&mut self, index: usize, item_id: i32) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "set_item");
        };
        slot.item_id = item_id;
        debug!(index, item_id, "slot item set");
        self.notify_slot_changed(index);
        true
    }

    /// Store `quantity` clamped into `1..=max` for the slot's kind.
    pub fn set_quantity(&mut self, index: usize, quantity: i32) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "set_quantity");
        };
        slot.quantity = quantity.clamp(MIN_QUANTITY, slot.max_quantity());
        debug!(index, requested = quantity, stored = slot.quantity, "slot quantity set");
        self.notify_slot_changed(index);
        true
    }

    /// Advance to the next mode of the slot's kind.
    pub fn toggle_mode(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "toggle_mode");
        };
        slot.mode = slot.station_kind.next_mode(slot.mode);
        debug!(index, mode = slot.mode, "slot mode toggled");
        self.notify_slot_changed(index);
        true
    }

    /// Store `mode` if it is legal for the slot's kind.
    pub fn set_mode(&mut self, index: usize, mode: i32) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "set_mode");
        };

        let candidate = SlotRecord {
            mode,
            ..slot.clone()
        };
        if !candidate.is_mode_legal() {
            debug!(index, mode, kind = %slot.station_kind, "rejected illegal mode");
            return false;
        }

        slot.mode = mode;
        debug!(index, mode, "slot mode set");
        self.notify_slot_changed(index);
        true
    }

    /// Swap between the local and remote flavour of the current mode.
    ///
    /// Interstellar only. Modes without a counterpart are left as they are,
    /// but the call still succeeds and notifies.
    pub fn toggle_local_remote(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "toggle_local_remote");
        };
        if slot.station_kind != StationKind::Interstellar {
            debug!(index, kind = %slot.station_kind, "local/remote toggle needs an interstellar slot");
            return false;
        }

        slot.mode = local_remote_counterpart(slot.mode);
        debug!(index, mode = slot.mode, "slot local/remote toggled");
        self.notify_slot_changed(index);
        true
    }

    /// Step Supply -> Demand -> Storage while keeping the local/remote half.
    ///
    /// Interstellar only. Goes through [`SlotManager::set_mode`].
    pub fn cycle_category(&mut self, index: usize) -> bool {
        let Some(slot) = self.slots.get(index) else {
            return self.missing(index, "cycle_category");
        };
        if slot.station_kind != StationKind::Interstellar {
            debug!(index, kind = %slot.station_kind, "category cycle needs an interstellar slot");
            return false;
        }

        let base = category_base(slot.mode);
        let next = base + (slot.mode - base + 1).rem_euclid(CATEGORY_COUNT);
        self.set_mode(index, next)
    }

    /// Store `percent` clamped into `0..=100`. Interstellar only.
    pub fn set_min_load(&mut self, index: usize, percent: i32) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "set_min_load");
        };
        if !slot.station_kind.supports_min_load() {
            debug!(index, kind = %slot.station_kind, "min load needs an interstellar slot");
            return false;
        }

        slot.min_load_percent = percent.clamp(MIN_LOAD_PERCENT_MIN, MIN_LOAD_PERCENT_MAX);
        debug!(index, stored = slot.min_load_percent, "slot min load set");
        self.notify_slot_changed(index);
        true
    }

    /// Reset the slot to a default record of the manager's active kind.
    pub fn clear_slot(&mut self, index: usize) -> bool {
        let kind = self.station_kind;
        let Some(slot) = self.slots.get_mut(index) else {
            return self.missing(index, "clear_slot");
        };
        *slot = SlotRecord::for_kind(kind);
        debug!(index, "slot cleared");
        self.notify_slot_changed(index);
        true
    }

    /// Validate every slot independently, applying each slot's auto-corrections.
    ///
    /// Validation-complete listeners are notified whatever the outcome.
    pub fn validate_all(&mut self) -> ValidationSummary {
        let errors: Vec<String> = self
            .slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.validate()
                    .err()
                    .map(|err| format!("Slot {}: {}", index, err))
            })
            .collect();

        let summary = ValidationSummary { errors };
        let valid = summary.is_valid();
        let message = summary.message();

        if valid {
            debug!(slots = self.slots.len(), "all slots valid");
        } else {
            warn!(failed = summary.errors.len(), "slot validation failed");
        }

        for listener in self.validation_complete.iter_mut() {
            listener(valid, &message);
        }
        summary
    }

    fn missing(&self, index: usize, operation: &str) -> bool {
        debug!(index, operation, count = self.slots.len(), "no such slot");
        false
    }
}
