use crate::api::StashApi;
use crate::config::Config;
use crate::form::SceneForm;
use crate::gui::logging::{GuiLogLayer, LogEntry};
use once_cell::sync::OnceCell;
use std::fs;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Install the process subscriber: stderr output plus the window's log buffer.
///
/// `level` is an `EnvFilter` directive such as `info` or `stash_qmt=debug`.
pub fn init_gui_logging(level: &str) {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Keep windowing and HTTP internals quiet regardless of the chosen level.
        let directives = format!(
            "{level},eframe=info,egui_glow=info,winit=info,hyper_util=info,reqwest=info"
        );
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("Invalid log filter {directives:?} ({e}), falling back to info");
            EnvFilter::new("info")
        });

        let subscriber = Registry::default()
            .with(filter)
            .with(gui_layer)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn level_name(level: Level) -> &'static str {
    match level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARN",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

pub struct QmtGui {
    pub config: Config,
    pub config_path: PathBuf,
    pub api: Box<dyn StashApi>,
    pub form: SceneForm,

    // Log view
    pub min_log_level: Level,
    pub log_messages: Vec<LogEntry>,
}

impl QmtGui {
    pub fn new(config: Config, config_path: PathBuf, api: Box<dyn StashApi>) -> Self {
        let form = SceneForm::new(&config);
        Self {
            config,
            config_path,
            api,
            form,
            min_log_level: Level::INFO,
            log_messages: Vec::new(),
        }
    }

    /// "Get Scene": fetch the entered scene and rebuild the checklist.
    pub fn fetch_scene(&mut self) {
        self.form.load_scene(self.api.as_ref(), &self.config);
    }

    /// "Set tags": push the merged tag set to the loaded scene.
    pub fn set_tags(&mut self) {
        self.form.submit(self.api.as_ref());
    }

    pub fn template_changed(&mut self) {
        tracing::debug!("Template switched to {:?}", self.form.template);
        if let Err(e) = self.form.rebuild_checklist(&self.config) {
            tracing::warn!("{}", e);
        }
    }

    /// Entries at or above the selected severity; TRACE shows everything.
    pub fn visible_logs(&self) -> impl Iterator<Item = &LogEntry> {
        let min = self.min_log_level;
        self.log_messages.iter().filter(move |entry| entry.level <= min)
    }

    pub fn save_logs_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        let filtered_logs: Vec<&LogEntry> = self.visible_logs().collect();

        if filtered_logs.is_empty() {
            return Err("No logs match the current filter level".into());
        }

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("Log files", &["log"])
            .set_file_name("stash-qmt.log")
            .save_file()
        {
            let mut log_content = String::new();
            log_content.push_str("=== stash-qmt Log File ===\n");
            log_content.push_str(&format!("Generated: {}\n", chrono::Local::now().to_rfc3339()));
            log_content.push_str(&format!("Filter Level: {}\n", level_name(self.min_log_level)));
            log_content.push_str(&format!("Total Logs: {}\n", filtered_logs.len()));
            log_content.push_str("==========================\n\n");

            for entry in &filtered_logs {
                log_content.push_str(&format!(
                    "[{}] {} {}: {}\n",
                    entry.timestamp,
                    level_name(entry.level),
                    entry.target,
                    entry.message
                ));
            }

            fs::write(&save_path, log_content)?;

            tracing::info!(
                "Logs saved to: {:?} ({} entries)",
                save_path,
                filtered_logs.len()
            );
            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }
}
