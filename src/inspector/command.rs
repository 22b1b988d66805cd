use std::str::FromStr;

use crate::models::errors::{EditorError, EditorResult};

/// One line of editor input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotCommand {
    SetItem { index: usize, item_id: i32 },
    SetQuantity { index: usize, quantity: i32 },
    SetMode { index: usize, mode: i32 },
    ToggleMode { index: usize },
    ToggleLocalRemote { index: usize },
    CycleCategory { index: usize },
    SetMinLoad { index: usize, percent: i32 },
    Clear { index: usize },
    Validate,
    Export,
    Show,
    Help,
    Quit,
}

impl FromStr for SlotCommand {
    type Err = EditorError;

    fn from_str(line: &str) -> EditorResult<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, rest)) = words.split_first() else {
            return Ok(SlotCommand::Help);
        };

        let command = match (verb.to_ascii_lowercase().as_str(), rest) {
            ("item", [index, id]) => SlotCommand::SetItem {
                index: index.parse()?,
                item_id: id.parse()?,
            },
            ("qty" | "quantity", [index, quantity]) => SlotCommand::SetQuantity {
                index: index.parse()?,
                quantity: quantity.parse()?,
            },
            ("mode", [index, mode]) => SlotCommand::SetMode {
                index: index.parse()?,
                mode: mode.parse()?,
            },
            ("toggle", [index]) => SlotCommand::ToggleMode {
                index: index.parse()?,
            },
            ("lr" | "local-remote", [index]) => SlotCommand::ToggleLocalRemote {
                index: index.parse()?,
            },
            ("cat" | "category", [index]) => SlotCommand::CycleCategory {
                index: index.parse()?,
            },
            ("minload", [index, percent]) => SlotCommand::SetMinLoad {
                index: index.parse()?,
                percent: percent.parse()?,
            },
            ("clear", [index]) => SlotCommand::Clear {
                index: index.parse()?,
            },
            ("validate", []) => SlotCommand::Validate,
            ("export", []) => SlotCommand::Export,
            ("show", []) => SlotCommand::Show,
            ("help" | "?", []) => SlotCommand::Help,
            ("quit" | "q", []) => SlotCommand::Quit,
            _ => return Err(EditorError::InvalidCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

pub const COMMAND_HELP: [&str; 13] = [
    "   item <slot> <id>        SET ITEM (0 = EMPTY)",
    "   qty <slot> <n>          SET QUANTITY",
    "   mode <slot> <m>         SET MODE",
    "   toggle <slot>           NEXT MODE",
    "   lr <slot>               LOCAL/REMOTE (INTERSTELLAR)",
    "   cat <slot>              SUPPLY/DEMAND/STORAGE (INTERSTELLAR)",
    "   minload <slot> <pct>    MIN LOAD (INTERSTELLAR)",
    "   clear <slot>            RESET SLOT",
    "   validate                CHECK ALL SLOTS",
    "   export                  PRINT SLOTS AS JSON",
    "   show                    SHOW PANEL",
    "   help                    THIS LIST",
    "   quit                    LEAVE EDITOR",
];
