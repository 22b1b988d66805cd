use crate::io::OutputWriter;
use crate::models::slot::SlotRecord;
use crate::models::station::{is_remote_mode, mode_category, StationKind};
use crate::services::slot_manager::{SlotManager, ValidationSummary};

pub struct SlotPanelPresenter;

impl SlotPanelPresenter {
    pub fn show_panel(
        manager: &SlotManager,
        summary: &ValidationSummary,
        output: &mut dyn OutputWriter,
    ) {
        Self::show_header(manager.station_kind(), output);
        for (index, slot) in manager.all_slots().iter().enumerate() {
            Self::show_slot(index, slot, output);
        }
        Self::show_footer(summary, output);
    }

    pub fn show_header(kind: StationKind, output: &mut dyn OutputWriter) {
        output.writeln(&format!("=== {} Configuration ===", kind.display_name()));
    }

    pub fn show_slot(index: usize, slot: &SlotRecord, output: &mut dyn OutputWriter) {
        output.writeln(&format!("  Slot {}: {}", index, item_label(slot)));

        if slot.station_kind == StationKind::Interstellar {
            let side = if is_remote_mode(slot.mode) { "Remote" } else { "Local" };
            output.writeln(&format!(
                "    Mode: {} [{} / {}]",
                slot.describe_mode(),
                side,
                mode_category(slot.mode)
            ));
        } else {
            output.writeln(&format!("    Mode: {}", slot.describe_mode()));
        }

        output.writeln(&format!("    Quantity: {}/{}", slot.quantity, slot.max_quantity()));

        if slot.station_kind.supports_min_load() {
            output.writeln(&format!("    Min Load: {}%", slot.min_load_percent));
        }
    }

    pub fn show_footer(summary: &ValidationSummary, output: &mut dyn OutputWriter) {
        if !summary.is_valid() {
            output.writeln("=== Validation Errors ===");
            for error in &summary.errors {
                output.writeln(&format!("  ! {}", error));
            }
        }
        output.writeln("=== End Panel ===");
    }
}

pub fn item_label(slot: &SlotRecord) -> String {
    if slot.is_empty() {
        "Empty".to_string()
    } else {
        format!("Item {}", slot.item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::CapturedOutput;

    #[test]
    fn interstellar_rows_show_side_and_min_load() {
        let slot = SlotRecord::new(1101, 5, 8000, 75, StationKind::Interstellar);
        let mut out = CapturedOutput::new();
        SlotPanelPresenter::show_slot(4, &slot, &mut out);

        assert_eq!(
            out.lines,
            vec![
                "  Slot 4: Item 1101".to_string(),
                "    Mode: Remote Demand [Remote / Demand]".to_string(),
                "    Quantity: 8000/10000".to_string(),
                "    Min Load: 75%".to_string(),
            ]
        );
    }

    #[test]
    fn distributor_rows_skip_min_load() {
        let slot = SlotRecord::for_kind(StationKind::Distributor);
        let mut out = CapturedOutput::new();
        SlotPanelPresenter::show_slot(0, &slot, &mut out);

        assert!(out.contains("Slot 0: Empty"));
        assert!(out.contains("Quantity: 1000/1000"));
        assert!(!out.contains("Min Load"));
    }

    #[test]
    fn panel_lists_validation_errors() {
        let mut manager = SlotManager::new();
        manager.initialize(StationKind::Planetary, 2);
        let summary = ValidationSummary {
            errors: vec!["Slot 1: Quantity must be at least 1".to_string()],
        };
        let mut out = CapturedOutput::new();
        SlotPanelPresenter::show_panel(&manager, &summary, &mut out);

        assert_eq!(out.lines[0], "=== Planetary Logistics Station Configuration ===");
        assert!(out.contains("  ! Slot 1: Quantity must be at least 1"));
        assert_eq!(out.lines.last().unwrap(), "=== End Panel ===");
    }
}
