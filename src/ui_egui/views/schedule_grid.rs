//! Grid rendering for the options and chosen tables.
//!
//! Draws a [`GridLayout`] against the current [`Schedule`] and reports what
//! the user clicked as [`GridAction`]s. Actions carry the slot key and
//! option index, never widget references, so they remain valid after the
//! grid is redrawn.

use egui::{Color32, RichText, Stroke, Vec2};

use crate::models::grid::{GridCell, GridKind, GridLayout};
use crate::models::schedule::{Schedule, ScheduleCommand, SlotKey};
use crate::ui_egui::theme::ScheduleTheme;

const CELL_MIN_WIDTH: f32 = 120.0;
const CELL_MIN_HEIGHT: f32 = 56.0;
const HEADER_WIDTH: f32 = 90.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// The "+" control of an options cell.
    RequestAdd(SlotKey),
    Promote { key: SlotKey, index: usize },
    RemoveOption { key: SlotKey, index: usize },
    RemoveChosen(SlotKey),
}

impl GridAction {
    /// Schedule command for this action. Opening the entry form is a UI
    /// concern and has none.
    pub fn into_command(self) -> Option<ScheduleCommand> {
        match self {
            GridAction::RequestAdd(_) => None,
            GridAction::Promote { key, index } => Some(ScheduleCommand::Promote { key, index }),
            GridAction::RemoveOption { key, index } => {
                Some(ScheduleCommand::RemoveOption { key, index })
            }
            GridAction::RemoveChosen(key) => Some(ScheduleCommand::ClearChosen { key }),
        }
    }
}

/// Renders one grid and returns the actions triggered this frame together
/// with the screen rect it occupied.
pub fn render_schedule_grid(
    ui: &mut egui::Ui,
    layout: &GridLayout,
    schedule: &Schedule,
    theme: &ScheduleTheme,
) -> (Vec<GridAction>, egui::Rect) {
    let mut actions = Vec::new();

    let response = egui::Grid::new(("schedule_grid", layout.kind))
        .spacing([4.0, 4.0])
        .min_col_width(CELL_MIN_WIDTH)
        .show(ui, |ui| {
            for row in &layout.rows {
                for cell in row {
                    match cell {
                        GridCell::Corner => {
                            ui.allocate_exact_size(Vec2::new(HEADER_WIDTH, 0.0), egui::Sense::hover());
                        }
                        GridCell::HourHeader(label) | GridCell::DayHeader(label) => {
                            render_header(ui, label, theme);
                        }
                        GridCell::Slot { key, add_affordance } => match layout.kind {
                            GridKind::Options => {
                                render_options_cell(ui, key, *add_affordance, schedule, theme, &mut actions)
                            }
                            GridKind::Chosen => render_chosen_cell(ui, key, schedule, theme, &mut actions),
                        },
                    }
                }
                ui.end_row();
            }
        });

    (actions, response.response.rect)
}

fn cell_frame(fill: Color32, theme: &ScheduleTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .stroke(Stroke::new(1.0, theme.cell_border))
        .rounding(4.0)
        .inner_margin(egui::Margin::same(4.0))
}

fn render_header(ui: &mut egui::Ui, label: &str, theme: &ScheduleTheme) {
    cell_frame(theme.header_background, theme).show(ui, |ui| {
        ui.set_min_size(Vec2::new(HEADER_WIDTH - 8.0, 20.0));
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(label).strong().color(theme.text_primary));
        });
    });
}

fn render_options_cell(
    ui: &mut egui::Ui,
    key: &SlotKey,
    add_affordance: bool,
    schedule: &Schedule,
    theme: &ScheduleTheme,
    actions: &mut Vec<GridAction>,
) {
    cell_frame(theme.cell_background, theme).show(ui, |ui| {
        ui.set_min_size(Vec2::new(CELL_MIN_WIDTH - 8.0, CELL_MIN_HEIGHT));
        ui.vertical(|ui| {
            for (index, option) in schedule.options_at(key).iter().enumerate() {
                cell_frame(theme.option_background, theme).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let chip = ui
                            .vertical(|ui| {
                                let title = ui.add(
                                    egui::Button::new(
                                        RichText::new(&option.title).color(theme.text_primary),
                                    )
                                    .frame(false),
                                );
                                let code = ui.add(
                                    egui::Button::new(
                                        RichText::new(option.display_code())
                                            .small()
                                            .color(theme.text_secondary),
                                    )
                                    .frame(false),
                                );
                                title.clicked() || code.clicked()
                            })
                            .inner;

                        if delete_button(ui, theme).clicked() {
                            actions.push(GridAction::RemoveOption {
                                key: key.clone(),
                                index,
                            });
                        } else if chip {
                            actions.push(GridAction::Promote {
                                key: key.clone(),
                                index,
                            });
                        }
                    });
                })
                .response
                .on_hover_text("Click to choose this option");
            }

            if add_affordance && ui.small_button("+").on_hover_text("Add option").clicked() {
                actions.push(GridAction::RequestAdd(key.clone()));
            }
        });
    });
}

fn render_chosen_cell(
    ui: &mut egui::Ui,
    key: &SlotKey,
    schedule: &Schedule,
    theme: &ScheduleTheme,
    actions: &mut Vec<GridAction>,
) {
    let chosen = schedule.chosen_at(key);
    let fill = if chosen.is_some() {
        theme.chosen_background
    } else {
        theme.cell_background
    };

    cell_frame(fill, theme).show(ui, |ui| {
        ui.set_min_size(Vec2::new(CELL_MIN_WIDTH - 8.0, CELL_MIN_HEIGHT));
        if let Some(item) = chosen {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&item.title).color(theme.text_primary));
                    ui.label(
                        RichText::new(item.display_code())
                            .small()
                            .color(theme.text_secondary),
                    );
                });
                if delete_button(ui, theme).clicked() {
                    actions.push(GridAction::RemoveChosen(key.clone()));
                }
            });
        }
    });
}

fn delete_button(ui: &mut egui::Ui, theme: &ScheduleTheme) -> egui::Response {
    ui.add(egui::Button::new(RichText::new("×").color(theme.danger)).small())
        .on_hover_text("Remove")
}
