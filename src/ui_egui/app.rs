mod contact;
mod export;
mod lifecycle;
mod toast;

use self::contact::ContactWorker;
use self::toast::ToastManager;
use crate::models::grid::{GridKind, GridLayout};
use crate::models::schedule::{ScheduleCommand, ScheduleError};
use crate::models::settings::Settings;
use crate::services::schedule::ScheduleService;
use crate::services::contact::SubmissionOutcome;
use crate::ui_egui::dialogs::contact_dialog::{
    render_contact_dialog, render_outcome_modal, ContactDialogResult, ContactDialogState,
};
use crate::ui_egui::dialogs::option_dialog::{
    render_option_dialog, OptionDialogResult, OptionDialogState,
};
use crate::ui_egui::theme::ScheduleTheme;
use crate::ui_egui::views::schedule_grid::{render_schedule_grid, GridAction};

pub struct ScheduleApp {
    /// Live model plus its stored mirror
    service: ScheduleService<'static>,
    settings: Settings,
    options_layout: GridLayout,
    chosen_layout: GridLayout,
    /// Appearance for this session only
    dark_mode: bool,
    theme: ScheduleTheme,
    option_dialog: OptionDialogState,
    contact_dialog: ContactDialogState,
    contact_worker: ContactWorker,
    contact_outcome: Option<SubmissionOutcome>,
    /// Screen rect of the chosen grid from the last frame, used for export
    chosen_grid_rect: Option<egui::Rect>,
    export_pending: bool,
    toasts: ToastManager,
}

impl eframe::App for ScheduleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);
        self.poll_contact_worker(ctx);

        self.render_top_bar(ctx);
        let actions = self.render_grids(ctx);
        for action in actions {
            self.handle_grid_action(action);
        }

        self.render_dialogs(ctx);
        self.toasts.render(ctx, self.theme.is_dark);
    }
}

impl ScheduleApp {
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Class Schedule");
                ui.separator();

                if ui.checkbox(&mut self.dark_mode, "🌙 Dark").changed() {
                    self.theme = ScheduleTheme::for_mode(self.dark_mode);
                    self.theme.apply_to_context(ctx);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✉ Contact").clicked() {
                        self.contact_dialog.open();
                    }
                    if ui
                        .add_enabled(!self.export_pending, egui::Button::new("🖼 Export image"))
                        .clicked()
                    {
                        self.request_export(ctx);
                    }
                });
            });
        });
    }

    fn render_grids(&mut self, ctx: &egui::Context) -> Vec<GridAction> {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let schedule = self.service.schedule();

                ui.heading(GridKind::Options.title());
                ui.label("Click + to add a course, click a course to choose it.");
                let (options_actions, _) =
                    render_schedule_grid(ui, &self.options_layout, schedule, &self.theme);
                actions.extend(options_actions);

                ui.add_space(16.0);
                ui.heading(GridKind::Chosen.title());
                let (chosen_actions, chosen_rect) =
                    render_schedule_grid(ui, &self.chosen_layout, schedule, &self.theme);
                actions.extend(chosen_actions);
                self.chosen_grid_rect = Some(chosen_rect);
            });
        });

        actions
    }

    fn handle_grid_action(&mut self, action: GridAction) {
        if let GridAction::RequestAdd(key) = &action {
            self.option_dialog.open(key.clone());
            return;
        }

        if let Some(command) = action.into_command() {
            self.apply_command(command);
        }
    }

    fn apply_command(&mut self, command: ScheduleCommand) {
        if let Err(err) = self.service.apply(command) {
            match err.downcast_ref::<ScheduleError>() {
                // Rejected input: nothing changes, nothing to report.
                Some(ScheduleError::EmptyTitle) => {}
                _ => {
                    log::error!("Failed to update schedule: {:#}", err);
                    self.toasts.error("Could not save the schedule");
                }
            }
        }
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let OptionDialogResult::Submitted { key, title, code } =
            render_option_dialog(ctx, &mut self.option_dialog)
        {
            self.apply_command(ScheduleCommand::AddOption { key, title, code });
        }

        if let ContactDialogResult::Send(message) =
            render_contact_dialog(ctx, &mut self.contact_dialog)
        {
            self.contact_worker
                .spawn(self.settings.contact_endpoint.clone(), message);
        }

        render_outcome_modal(ctx, &mut self.contact_outcome);
    }

    fn poll_contact_worker(&mut self, ctx: &egui::Context) {
        if !self.contact_worker.is_pending() {
            return;
        }

        match self.contact_worker.poll() {
            Some(outcome) => {
                if outcome.is_sent() {
                    self.contact_dialog.reset();
                } else {
                    self.contact_dialog.sending = false;
                }
                self.contact_outcome = Some(outcome);
            }
            None => ctx.request_repaint_after(std::time::Duration::from_millis(100)),
        }
    }
}
