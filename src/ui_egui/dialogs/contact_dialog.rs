//! Contact form and the success/failure modals shown after sending.

use egui::{Color32, Context, RichText};

use crate::services::contact::{ContactMessage, SubmissionOutcome};

#[derive(Debug, Clone, Default)]
pub struct ContactDialogState {
    pub open: bool,
    pub message: ContactMessage,
    /// Validation message shown above the buttons
    pub error_message: Option<String>,
    /// A submission is in flight; the form is read-only meanwhile
    pub sending: bool,
}

impl ContactDialogState {
    pub fn open(&mut self) {
        self.open = true;
        self.error_message = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.error_message = None;
    }

    /// Clears the form after a successful submission.
    pub fn reset(&mut self) {
        self.message = ContactMessage::default();
        self.error_message = None;
        self.sending = false;
        self.open = false;
    }
}

pub enum ContactDialogResult {
    None,
    Send(ContactMessage),
}

pub fn render_contact_dialog(ctx: &Context, state: &mut ContactDialogState) -> ContactDialogResult {
    if !state.open {
        return ContactDialogResult::None;
    }

    let mut result = ContactDialogResult::None;
    let mut open = true;

    egui::Window::new("✉ Contact")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(340.0);
            ui.add_enabled_ui(!state.sending, |ui| {
                egui::Grid::new("contact_form_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Name:");
                        ui.text_edit_singleline(&mut state.message.name);
                        ui.end_row();

                        ui.label("Email:");
                        ui.text_edit_singleline(&mut state.message.email);
                        ui.end_row();

                        ui.label("Message:");
                        ui.add(
                            egui::TextEdit::multiline(&mut state.message.message)
                                .desired_rows(4),
                        );
                        ui.end_row();
                    });
            });

            if let Some(ref error) = state.error_message {
                ui.add_space(4.0);
                ui.colored_label(Color32::RED, error.as_str());
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if state.sending {
                    ui.spinner();
                    ui.label("Sending…");
                    return;
                }

                if ui.button("Send").clicked() {
                    match state.message.validate() {
                        Ok(()) => {
                            state.error_message = None;
                            state.sending = true;
                            result = ContactDialogResult::Send(state.message.clone());
                        }
                        Err(reason) => state.error_message = Some(reason),
                    }
                }

                if ui.button("Cancel").clicked() {
                    state.close();
                }
            });
        });

    if !open {
        state.close();
    }

    result
}

/// Shows the confirmation or error modal for a finished submission.
/// Clears `outcome` once the user dismisses it.
pub fn render_outcome_modal(ctx: &Context, outcome: &mut Option<SubmissionOutcome>) {
    let Some(current) = outcome.as_ref() else {
        return;
    };

    let (title, text, color) = match current {
        SubmissionOutcome::Sent => (
            "Message sent",
            "Thanks! Your message was delivered.".to_string(),
            Color32::from_rgb(30, 120, 50),
        ),
        SubmissionOutcome::Failed(reason) => (
            "Message not sent",
            format!("Sending failed, please try again later.\n\n{}", reason),
            Color32::from_rgb(180, 40, 40),
        ),
    };

    let mut open = true;
    let mut dismissed = false;
    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(text).color(color));
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if !open || dismissed {
        *outcome = None;
    }
}
