use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_ITEM_ID, DEFAULT_MIN_LOAD_PERCENT, DEFAULT_MODE, DEFAULT_QUANTITY,
    MIN_LOAD_PERCENT_MAX, MIN_LOAD_PERCENT_MIN, MIN_QUANTITY,
};
use super::errors::SlotValidationError;
use super::station::StationKind;

/// One storage slot of a logistics station.
///
/// Field limits depend on `station_kind` and are only checked by
/// [`SlotRecord::validate`]; plain field writes are never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotRecord {
    /// 0 = empty slot.
    pub item_id: i32,
    /// Supply/demand mode, see [`StationKind::mode_labels`].
    pub mode: i32,
    pub quantity: i32,
    /// Minimum load before ships depart. Only used by interstellar stations.
    pub min_load_percent: i32,
    pub station_kind: StationKind,
}

impl Default for SlotRecord {
    fn default() -> Self {
        SlotRecord {
            item_id: DEFAULT_ITEM_ID,
            mode: DEFAULT_MODE,
            quantity: DEFAULT_QUANTITY,
            min_load_percent: DEFAULT_MIN_LOAD_PERCENT,
            station_kind: StationKind::Planetary,
        }
    }
}

impl SlotRecord {
    pub fn new(
        item_id: i32,
        mode: i32,
        quantity: i32,
        min_load_percent: i32,
        station_kind: StationKind,
    ) -> Self {
        SlotRecord {
            item_id,
            mode,
            quantity,
            min_load_percent,
            station_kind,
        }
    }

    /// Default record stamped with `kind`.
    pub fn for_kind(kind: StationKind) -> Self {
        SlotRecord {
            station_kind: kind,
            ..SlotRecord::default()
        }
    }

    pub fn max_quantity(&self) -> i32 {
        self.station_kind.max_quantity()
    }

    pub fn is_mode_legal(&self) -> bool {
        self.station_kind.is_mode_legal(self.mode)
    }

    pub fn describe_mode(&self) -> &'static str {
        self.station_kind.describe_mode(self.mode)
    }

    pub fn is_empty(&self) -> bool {
        self.item_id == 0
    }

    /// Check the slot against its kind's limits, stopping at the first problem.
    ///
    /// Out-of-range quantity and min-load values are clamped in place before
    /// the error is returned, so the record is usable afterwards even though
    /// the call reports failure. Negative item ids and illegal modes are left
    /// untouched.
    pub fn validate(&mut self) -> Result<(), SlotValidationError> {
        if self.item_id < 0 {
            return Err(SlotValidationError::NegativeItemId);
        }

        if self.quantity < MIN_QUANTITY {
            self.quantity = MIN_QUANTITY;
            return Err(SlotValidationError::QuantityTooLow);
        }

        let max = self.max_quantity();
        if self.quantity > max {
            self.quantity = max;
            return Err(SlotValidationError::QuantityTooHigh {
                max,
                kind: self.station_kind,
            });
        }

        if !(MIN_LOAD_PERCENT_MIN..=MIN_LOAD_PERCENT_MAX).contains(&self.min_load_percent) {
            self.min_load_percent = self
                .min_load_percent
                .clamp(MIN_LOAD_PERCENT_MIN, MIN_LOAD_PERCENT_MAX);
            return Err(SlotValidationError::MinLoadOutOfRange);
        }

        if !self.is_mode_legal() {
            return Err(SlotValidationError::InvalidMode {
                mode: self.mode,
                kind: self.station_kind,
            });
        }

        Ok(())
    }
}
