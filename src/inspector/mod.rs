//! Editing session
//!
//! A `SlotInspector` drives one [`SlotManager`] for the lifetime of an
//! editing session. It turns parsed commands into manager calls, reports the
//! outcome and forwards the whole slot list to blueprint listeners after
//! every change, so the host's copy stays live.

pub mod command;

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{EditorError, EditorResult};
use crate::models::slot::SlotRecord;
use crate::models::station::StationKind;
use crate::services::listeners::{ListenerId, ListenerRegistry};
use crate::services::slot_manager::{SlotManager, ValidationSummary};
use crate::ui::presenters::{item_label, SlotPanelPresenter};

pub use command::{SlotCommand, COMMAND_HELP};

pub type BlueprintListener = dyn FnMut(&[SlotRecord]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

pub struct SlotInspector {
    manager: SlotManager,
    /// Indices reported by the manager since the last flush.
    changed: Rc<RefCell<Vec<usize>>>,
    blueprint_changed: ListenerRegistry<BlueprintListener>,
}

impl Default for SlotInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotInspector {
    pub fn new() -> Self {
        let mut manager = SlotManager::new();
        let changed = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&changed);
        manager.on_slot_changed(Box::new(move |index: usize, slot: &SlotRecord| {
            info!(
                index,
                mode = slot.describe_mode(),
                quantity = slot.quantity,
                "slot updated"
            );
            sink.borrow_mut().push(index);
        }));
        manager.on_validation_complete(Box::new(|valid: bool, message: &str| {
            if !valid {
                warn!(%message, "validation failed");
            }
        }));

        Self {
            manager,
            changed,
            blueprint_changed: ListenerRegistry::new(),
        }
    }

    /// Start a session for `kind`, seeding it with `existing` when non-empty.
    pub fn open(&mut self, kind: StationKind, existing: &[SlotRecord], slot_count: usize) {
        self.manager.initialize(kind, slot_count);
        self.manager.load_slots(existing);
        self.changed.borrow_mut().clear();
    }

    pub fn manager(&self) -> &SlotManager {
        &self.manager
    }

    pub fn station_kind(&self) -> StationKind {
        self.manager.station_kind()
    }

    pub fn on_blueprint_changed(&mut self, listener: Box<BlueprintListener>) -> ListenerId {
        self.blueprint_changed.subscribe(listener)
    }

    pub fn unsubscribe_blueprint_changed(&mut self, id: ListenerId) -> bool {
        self.blueprint_changed.unsubscribe(id)
    }

    pub fn export_configuration(&self) -> Vec<SlotRecord> {
        self.manager.export_slots()
    }

    pub fn export_json(&self) -> EditorResult<String> {
        Ok(serde_json::to_string_pretty(&self.export_configuration())?)
    }

    /// Execute one command and write its result.
    pub fn apply(
        &mut self,
        command: SlotCommand,
        output: &mut dyn OutputWriter,
    ) -> EditorResult<CommandOutcome> {
        let (index, accepted) = match command {
            SlotCommand::SetItem { index, item_id } => (index, self.manager.set_item(index, item_id)),
            SlotCommand::SetQuantity { index, quantity } => {
                (index, self.manager.set_quantity(index, quantity))
            }
            SlotCommand::SetMode { index, mode } => (index, self.manager.set_mode(index, mode)),
            SlotCommand::ToggleMode { index } => (index, self.manager.toggle_mode(index)),
            SlotCommand::ToggleLocalRemote { index } => {
                (index, self.manager.toggle_local_remote(index))
            }
            SlotCommand::CycleCategory { index } => (index, self.manager.cycle_category(index)),
            SlotCommand::SetMinLoad { index, percent } => {
                (index, self.manager.set_min_load(index, percent))
            }
            SlotCommand::Clear { index } => (index, self.manager.clear_slot(index)),
            SlotCommand::Validate => {
                let summary = self.validate_and_forward();
                Self::report_validation(&summary, output);
                return Ok(CommandOutcome::Continue);
            }
            SlotCommand::Export => {
                output.writeln(&self.export_json()?);
                return Ok(CommandOutcome::Continue);
            }
            SlotCommand::Show => {
                let summary = self.validate_and_forward();
                SlotPanelPresenter::show_panel(&self.manager, &summary, output);
                return Ok(CommandOutcome::Continue);
            }
            SlotCommand::Help => {
                Self::print_command_menu(output);
                return Ok(CommandOutcome::Continue);
            }
            SlotCommand::Quit => return Ok(CommandOutcome::Quit),
        };

        match self.manager.slot(index) {
            Some(slot) if accepted => output.writeln(&format!(
                "Slot {} updated: {}, {}, Qty: {}",
                index,
                item_label(slot),
                slot.describe_mode(),
                slot.quantity
            )),
            Some(_) => output.writeln(&format!(
                "Slot {}: not available for {}",
                index,
                self.manager.station_kind().display_name()
            )),
            None => output.writeln(&format!(
                "Slot {} does not exist ({} slots)",
                index,
                self.manager.slot_count()
            )),
        }

        self.flush_changes();
        Ok(CommandOutcome::Continue)
    }

    /// Read and apply commands until `quit` or end of input.
    pub fn run(
        &mut self,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> EditorResult<()> {
        SlotPanelPresenter::show_header(self.station_kind(), output);
        Self::print_command_menu(output);

        while let Some(line) = io.read_line("COMMAND")? {
            let result = line
                .parse::<SlotCommand>()
                .and_then(|command| self.apply(command, output));

            match result {
                Ok(CommandOutcome::Quit) => break,
                Ok(CommandOutcome::Continue) => {}
                Err(e @ (EditorError::Parse(_) | EditorError::InvalidCommand(_))) => {
                    output.writeln(&format!("Error: {}", e));
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Run validation and forward the slot list if auto-correction changed it.
    ///
    /// Corrections made by validation fire no slot-changed event, so they are
    /// detected by comparing against a snapshot.
    fn validate_and_forward(&mut self) -> ValidationSummary {
        let before = self.manager.export_slots();
        let summary = self.manager.validate_all();
        if before.as_slice() != self.manager.all_slots() {
            debug!("validation corrected slots");
            self.changed.borrow_mut().clear();
            self.forward_slots();
        } else {
            self.flush_changes();
        }
        summary
    }

    fn flush_changes(&mut self) {
        let pending = std::mem::take(&mut *self.changed.borrow_mut());
        if !pending.is_empty() {
            self.forward_slots();
        }
    }

    fn forward_slots(&mut self) {
        let slots = self.manager.all_slots();
        for listener in self.blueprint_changed.iter_mut() {
            listener(slots);
        }
    }

    fn report_validation(summary: &ValidationSummary, output: &mut dyn OutputWriter) {
        if summary.is_valid() {
            output.writeln("ALL SLOTS VALID");
        } else {
            for error in &summary.errors {
                output.writeln(&format!("  ! {}", error));
            }
        }
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        for line in COMMAND_HELP {
            output.writeln(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{CapturedOutput, ScriptedInput};

    fn inspector(kind: StationKind) -> SlotInspector {
        let mut inspector = SlotInspector::new();
        inspector.open(kind, &[], 12);
        inspector
    }

    #[test]
    fn open_loads_existing_slots() {
        let mut inspector = SlotInspector::new();
        let existing = vec![SlotRecord::new(1101, 4, 2000, 20, StationKind::Interstellar)];
        inspector.open(StationKind::Interstellar, &existing, 10);

        assert_eq!(inspector.manager().slot_count(), 10);
        assert_eq!(inspector.manager().slot(0), Some(&existing[0]));
        assert_eq!(inspector.export_configuration().len(), 10);
    }

    #[test]
    fn blueprint_listeners_get_full_slot_list_after_change() {
        let mut inspector = inspector(StationKind::Planetary);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        inspector.on_blueprint_changed(Box::new(move |slots: &[SlotRecord]| {
            sink.borrow_mut().push(slots.to_vec());
        }));

        let mut out = CapturedOutput::new();
        inspector
            .apply(SlotCommand::SetItem { index: 2, item_id: 1001 }, &mut out)
            .unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].len(), 12);
        assert_eq!(seen[0][2].item_id, 1001);
        assert!(out.contains("Slot 2 updated: Item 1001, None, Qty: 1000"));
    }

    #[test]
    fn validation_corrections_reach_blueprint_listeners() {
        let mut inspector = SlotInspector::new();
        inspector.open(
            StationKind::Planetary,
            &[SlotRecord::new(1001, 1, 0, 0, StationKind::Planetary)],
            2,
        );
        let host = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&host);
        inspector.on_blueprint_changed(Box::new(move |slots: &[SlotRecord]| {
            *sink.borrow_mut() = slots.to_vec();
        }));

        let mut out = CapturedOutput::new();
        inspector
            .apply(SlotCommand::SetItem { index: 1, item_id: 5 }, &mut out)
            .unwrap();
        assert_eq!(host.borrow()[0].quantity, 0);

        inspector.apply(SlotCommand::Validate, &mut out).unwrap();
        assert_eq!(host.borrow()[0].quantity, 1);
        assert_eq!(*host.borrow(), inspector.export_configuration());
    }

    #[test]
    fn clean_validation_does_not_notify_blueprint() {
        let mut inspector = inspector(StationKind::Interstellar);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        inspector.on_blueprint_changed(Box::new(move |_: &[SlotRecord]| *sink.borrow_mut() += 1));

        let mut out = CapturedOutput::new();
        inspector.apply(SlotCommand::Validate, &mut out).unwrap();
        inspector.apply(SlotCommand::Show, &mut out).unwrap();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn unsubscribed_blueprint_listener_is_not_called() {
        let mut inspector = inspector(StationKind::Planetary);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let id = inspector.on_blueprint_changed(Box::new(move |_: &[SlotRecord]| *sink.borrow_mut() += 1));

        let mut out = CapturedOutput::new();
        inspector
            .apply(SlotCommand::SetItem { index: 0, item_id: 1001 }, &mut out)
            .unwrap();
        assert!(inspector.unsubscribe_blueprint_changed(id));
        assert!(!inspector.unsubscribe_blueprint_changed(id));
        inspector
            .apply(SlotCommand::SetItem { index: 0, item_id: 1002 }, &mut out)
            .unwrap();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn rejected_command_does_not_notify_blueprint() {
        let mut inspector = inspector(StationKind::Planetary);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        inspector.on_blueprint_changed(Box::new(move |_: &[SlotRecord]| *sink.borrow_mut() += 1));

        let mut out = CapturedOutput::new();
        inspector
            .apply(SlotCommand::SetMinLoad { index: 0, percent: 50 }, &mut out)
            .unwrap();
        inspector
            .apply(SlotCommand::Clear { index: 40 }, &mut out)
            .unwrap();

        assert_eq!(*calls.borrow(), 0);
        assert!(out.contains("Slot 0: not available for Planetary Logistics Station"));
        assert!(out.contains("Slot 40 does not exist (12 slots)"));
    }

    #[test]
    fn export_json_round_trips_through_serde() {
        let mut inspector = inspector(StationKind::Distributor);
        let mut out = CapturedOutput::new();
        inspector
            .apply(SlotCommand::SetItem { index: 0, item_id: 1203 }, &mut out)
            .unwrap();

        let json = inspector.export_json().unwrap();
        let parsed: Vec<SlotRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inspector.export_configuration());
    }

    #[test]
    fn run_applies_script_until_quit() {
        let mut inspector = inspector(StationKind::Interstellar);
        let mut input = ScriptedInput::new(vec![
            "item 0 1101",
            "mode 0 2",
            "lr 0",
            "minload 0 140",
            "bogus",
            "quit",
            "item 1 9999",
        ]);
        let mut out = CapturedOutput::new();

        inspector.run(&mut input, &mut out).unwrap();

        let slot = inspector.manager().slot(0).unwrap();
        assert_eq!(slot.item_id, 1101);
        assert_eq!(slot.mode, 5);
        assert_eq!(slot.min_load_percent, 100);
        assert!(out.contains("Error: Invalid command: bogus"));
        // Nothing after quit is applied.
        assert!(inspector.manager().is_slot_empty(1));
    }

    #[test]
    fn show_renders_panel_with_corrections() {
        let mut inspector = SlotInspector::new();
        inspector.open(
            StationKind::Planetary,
            &[SlotRecord::new(1001, 1, 0, 0, StationKind::Planetary)],
            2,
        );
        let mut out = CapturedOutput::new();
        inspector.apply(SlotCommand::Show, &mut out).unwrap();

        assert!(out.contains("=== Planetary Logistics Station Configuration ==="));
        assert!(out.contains("  ! Slot 0: Quantity must be at least 1"));
        assert_eq!(inspector.manager().slot(0).unwrap().quantity, 1);
    }
}
