//! Modal form for adding an option to a slot.

use egui::{Context, RichText};

use crate::models::schedule::SlotKey;

#[derive(Debug, Clone, Default)]
pub struct OptionDialogState {
    /// Slot the new option goes to; `None` while the dialog is closed
    target: Option<SlotKey>,
    pub title_input: String,
    pub code_input: String,
    focus_pending: bool,
}

/// Result from the option dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionDialogResult {
    /// Still open, or nothing acceptable submitted yet
    None,
    Cancelled,
    Submitted {
        key: SlotKey,
        title: String,
        code: String,
    },
}

impl OptionDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, key: SlotKey) {
        self.target = Some(key);
        self.title_input.clear();
        self.code_input.clear();
        self.focus_pending = true;
    }

    pub fn close(&mut self) {
        self.target = None;
        self.title_input.clear();
        self.code_input.clear();
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&SlotKey> {
        self.target.as_ref()
    }

    /// Accepts the current inputs. A blank title is simply not accepted:
    /// the dialog stays open and nothing is returned.
    pub fn submit(&mut self) -> OptionDialogResult {
        let title = self.title_input.trim();
        if title.is_empty() {
            return OptionDialogResult::None;
        }
        let Some(key) = self.target.clone() else {
            return OptionDialogResult::None;
        };

        let result = OptionDialogResult::Submitted {
            key,
            title: title.to_string(),
            code: self.code_input.trim().to_string(),
        };
        self.close();
        result
    }
}

/// Renders the add-option dialog when it is open.
pub fn render_option_dialog(ctx: &Context, state: &mut OptionDialogState) -> OptionDialogResult {
    if !state.is_open() {
        return OptionDialogResult::None;
    }
    let Some(target) = state.target().cloned() else {
        return OptionDialogResult::None;
    };

    let mut result = OptionDialogResult::None;
    let mut open = true;

    egui::Window::new("Add Option")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.label(RichText::new(target.to_string()).weak());
            ui.add_space(8.0);

            egui::Grid::new("option_dialog_grid")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Title:");
                    let title = ui.text_edit_singleline(&mut state.title_input);
                    if state.focus_pending {
                        title.request_focus();
                        state.focus_pending = false;
                    }
                    ui.end_row();

                    ui.label("Code:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.code_input).hint_text("optional"),
                    );
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let submit_requested = ui.button("Add").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Enter));
                if submit_requested {
                    result = state.submit();
                }

                if ui.button("Cancel").clicked() {
                    result = OptionDialogResult::Cancelled;
                }
            });
        });

    if !open || result == OptionDialogResult::Cancelled {
        state.close();
        result = OptionDialogResult::Cancelled;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SlotKey {
        SlotKey::new("day1", "hour1")
    }

    #[test]
    fn test_blank_title_keeps_dialog_open() {
        let mut state = OptionDialogState::new();
        state.open(key());
        state.title_input = "   ".to_string();
        state.code_input = "101".to_string();

        assert_eq!(state.submit(), OptionDialogResult::None);
        assert!(state.is_open());
    }

    #[test]
    fn test_submit_trims_and_closes() {
        let mut state = OptionDialogState::new();
        state.open(key());
        state.title_input = " Math ".to_string();
        state.code_input = " 201".to_string();

        assert_eq!(
            state.submit(),
            OptionDialogResult::Submitted {
                key: key(),
                title: "Math".to_string(),
                code: "201".to_string(),
            }
        );
        assert!(!state.is_open());
        assert!(state.title_input.is_empty());
    }

    #[test]
    fn test_open_resets_inputs() {
        let mut state = OptionDialogState::new();
        state.title_input = "stale".to_string();
        state.open(key());
        assert!(state.title_input.is_empty());
        assert_eq!(state.target(), Some(&key()));
    }

    #[test]
    fn test_closed_dialog_never_submits() {
        let mut state = OptionDialogState::new();
        state.title_input = "Math".to_string();
        assert_eq!(state.submit(), OptionDialogResult::None);
    }
}
