//! Station kinds and their lookup tables
//!
//! Each kind carries its own capacity limit, legal mode range and mode
//! vocabulary. All of it is table-driven so the manager never matches on
//! raw mode numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::constants::{
    DISTRIBUTOR_MAX_QUANTITY, DISTRIBUTOR_MODE_CYCLE, DISTRIBUTOR_MODE_LABELS,
    INTERSTELLAR_MAX_QUANTITY, INTERSTELLAR_MODE_CYCLE, INTERSTELLAR_MODE_LABELS,
    LOCAL_CATEGORY_BASE, LOCAL_REMOTE_PAIRS, PLANETARY_MAX_QUANTITY, PLANETARY_MODE_CYCLE,
    PLANETARY_MODE_LABELS, REMOTE_CATEGORY_BASE, UNKNOWN_MODE_LABEL,
};
use super::errors::EditorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StationKind {
    #[default]
    Planetary = 0,
    Interstellar = 1,
    Distributor = 2,
}

impl StationKind {
    pub const ALL: [StationKind; 3] = [
        StationKind::Planetary,
        StationKind::Interstellar,
        StationKind::Distributor,
    ];

    pub fn max_quantity(&self) -> i32 {
        match self {
            StationKind::Planetary => PLANETARY_MAX_QUANTITY,
            StationKind::Interstellar => INTERSTELLAR_MAX_QUANTITY,
            StationKind::Distributor => DISTRIBUTOR_MAX_QUANTITY,
        }
    }

    /// Label for every legal mode, indexed by mode value.
    pub fn mode_labels(&self) -> &'static [&'static str] {
        match self {
            StationKind::Planetary => &PLANETARY_MODE_LABELS,
            StationKind::Interstellar => &INTERSTELLAR_MODE_LABELS,
            StationKind::Distributor => &DISTRIBUTOR_MODE_LABELS,
        }
    }

    pub fn mode_cycle(&self) -> &'static [i32] {
        match self {
            StationKind::Planetary => &PLANETARY_MODE_CYCLE,
            StationKind::Interstellar => &INTERSTELLAR_MODE_CYCLE,
            StationKind::Distributor => &DISTRIBUTOR_MODE_CYCLE,
        }
    }

    /// Highest legal mode value. The lowest is always 0.
    pub fn max_mode(&self) -> i32 {
        self.mode_labels().len() as i32 - 1
    }

    pub fn is_mode_legal(&self, mode: i32) -> bool {
        (0..=self.max_mode()).contains(&mode)
    }

    pub fn describe_mode(&self, mode: i32) -> &'static str {
        usize::try_from(mode)
            .ok()
            .and_then(|i| self.mode_labels().get(i).copied())
            .unwrap_or(UNKNOWN_MODE_LABEL)
    }

    /// Next mode in this kind's toggle cycle. Values outside the cycle map to 0.
    pub fn next_mode(&self, mode: i32) -> i32 {
        let cycle = self.mode_cycle();
        match cycle.iter().position(|&m| m == mode) {
            Some(pos) => cycle[(pos + 1) % cycle.len()],
            None => 0,
        }
    }

    pub fn supports_min_load(&self) -> bool {
        matches!(self, StationKind::Interstellar)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StationKind::Planetary => "Planetary Logistics Station",
            StationKind::Interstellar => "Interstellar Logistics Station",
            StationKind::Distributor => "Logistics Distributor",
        }
    }
}

/// Capacity limit for a raw station code from the host. Unrecognized codes
/// fall back to the planetary limit.
pub fn max_quantity_for_code(code: i32) -> i32 {
    StationKind::try_from(code)
        .map(|kind| kind.max_quantity())
        .unwrap_or(PLANETARY_MAX_QUANTITY)
}

/// Swap a local mode for its remote twin and back. Anything else is returned as is.
pub fn local_remote_counterpart(mode: i32) -> i32 {
    for (local, remote) in LOCAL_REMOTE_PAIRS {
        if mode == local {
            return remote;
        }
        if mode == remote {
            return local;
        }
    }
    mode
}

pub fn is_remote_mode(mode: i32) -> bool {
    LOCAL_REMOTE_PAIRS.iter().any(|&(_, remote)| remote == mode)
}

/// Supply/Demand/Storage half of an interstellar mode.
pub fn mode_category(mode: i32) -> &'static str {
    match LOCAL_REMOTE_PAIRS
        .iter()
        .position(|&(local, remote)| mode == local || mode == remote)
    {
        Some(0) => "Supply",
        Some(1) => "Demand",
        Some(2) => "Storage",
        _ => "None",
    }
}

/// Base mode (first category) of the local or remote half `mode` belongs to.
pub fn category_base(mode: i32) -> i32 {
    if is_remote_mode(mode) {
        REMOTE_CATEGORY_BASE
    } else {
        LOCAL_CATEGORY_BASE
    }
}

impl TryFrom<i32> for StationKind {
    type Error = EditorError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(StationKind::Planetary),
            1 => Ok(StationKind::Interstellar),
            2 => Ok(StationKind::Distributor),
            other => Err(EditorError::UnknownStationKind(other.to_string())),
        }
    }
}

impl FromStr for StationKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "planetary" | "pls" => Ok(StationKind::Planetary),
            "interstellar" | "ils" => Ok(StationKind::Interstellar),
            "distributor" => Ok(StationKind::Distributor),
            _ => Err(EditorError::UnknownStationKind(s.to_string())),
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StationKind::Planetary => "Planetary",
            StationKind::Interstellar => "Interstellar",
            StationKind::Distributor => "Distributor",
        };
        write!(f, "{}", name)
    }
}
