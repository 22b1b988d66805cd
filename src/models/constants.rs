pub const PLANETARY_MAX_QUANTITY: i32 = 5000;
pub const INTERSTELLAR_MAX_QUANTITY: i32 = 10000;
pub const DISTRIBUTOR_MAX_QUANTITY: i32 = 1000;

pub const MIN_QUANTITY: i32 = 1;
pub const MIN_LOAD_PERCENT_MIN: i32 = 0;
pub const MIN_LOAD_PERCENT_MAX: i32 = 100;

pub const DEFAULT_ITEM_ID: i32 = 0;
pub const DEFAULT_MODE: i32 = 0;
pub const DEFAULT_QUANTITY: i32 = 1000;
pub const DEFAULT_MIN_LOAD_PERCENT: i32 = 0;

/// Slot count used when neither the config file nor the command line sets one.
pub const DEFAULT_SLOT_COUNT: usize = 12;

pub const UNKNOWN_MODE_LABEL: &str = "Unknown";

/// Mode labels indexed by mode value.
pub const PLANETARY_MODE_LABELS: [&str; 4] = ["None", "Local Supply", "Local Demand", "Local Storage"];

pub const INTERSTELLAR_MODE_LABELS: [&str; 7] = [
    "None",
    "Local Supply",
    "Local Demand",
    "Local Storage",
    "Remote Supply",
    "Remote Demand",
    "Remote Storage",
];

pub const DISTRIBUTOR_MODE_LABELS: [&str; 4] = [
    "None",
    "Provide to other distributors",
    "Request from other distributors",
    "Both",
];

/// Toggle order for each kind. The value after the last entry wraps to the first.
pub const PLANETARY_MODE_CYCLE: [i32; 4] = [0, 1, 2, 3];
pub const INTERSTELLAR_MODE_CYCLE: [i32; 7] = [0, 1, 2, 3, 4, 5, 6];
pub const DISTRIBUTOR_MODE_CYCLE: [i32; 4] = [0, 1, 2, 3];

/// Interstellar (local, remote) mode pairs: supply, demand, storage.
pub const LOCAL_REMOTE_PAIRS: [(i32, i32); 3] = [(1, 4), (2, 5), (3, 6)];

pub const LOCAL_CATEGORY_BASE: i32 = 1;
pub const REMOTE_CATEGORY_BASE: i32 = 4;
pub const CATEGORY_COUNT: i32 = 3;
