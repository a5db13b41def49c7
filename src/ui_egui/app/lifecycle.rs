use anyhow::{Context, Result};

use super::contact::ContactWorker;
use super::toast::ToastManager;
use super::ScheduleApp;
use crate::models::grid::{GridKind, GridLayout};
use crate::models::settings::Settings;
use crate::services::database::Database;
use crate::services::schedule::ScheduleService;
use crate::services::settings::resolve_database_path;
use crate::ui_egui::dialogs::contact_dialog::ContactDialogState;
use crate::ui_egui::dialogs::option_dialog::OptionDialogState;
use crate::ui_egui::theme::{initial_dark_mode, ScheduleTheme};

impl ScheduleApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        // Leaked for the 'static lifetime the eframe app needs
        let database = initialize_database(&settings)?;

        let vocabulary = settings.vocabulary.clone();
        let service = ScheduleService::load(database, vocabulary);
        let vocabulary = service.schedule().vocabulary();
        let options_layout = GridLayout::build(vocabulary, GridKind::Options);
        let chosen_layout = GridLayout::build(vocabulary, GridKind::Chosen);

        let dark_mode = initial_dark_mode(settings.dark_mode);
        let theme = ScheduleTheme::for_mode(dark_mode);
        theme.apply_to_context(&cc.egui_ctx);

        Ok(Self {
            service,
            settings,
            options_layout,
            chosen_layout,
            dark_mode,
            theme,
            option_dialog: OptionDialogState::new(),
            contact_dialog: ContactDialogState::default(),
            contact_worker: ContactWorker::default(),
            contact_outcome: None,
            chosen_grid_rect: None,
            export_pending: false,
            toasts: ToastManager::new(),
        })
    }
}

fn initialize_database(settings: &Settings) -> Result<&'static Database> {
    let db_path = resolve_database_path(settings)?;
    log::info!("Using database at {}", db_path.display());

    let db = Database::new(&db_path.to_string_lossy())?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;

    Ok(Box::leak(Box::new(db)))
}
