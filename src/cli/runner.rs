use stash_qmt::{Config, StashClient, default_config_path};

use super::args::CliArgs;

#[cfg(feature = "gui")]
pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    use eframe::{NativeOptions, egui::ViewportBuilder};
    use stash_qmt::gui::{QmtGui, init_gui_logging};
    use tracing::{error, info};

    init_gui_logging(&args.log_level);

    let config_path = args.config.unwrap_or_else(default_config_path);
    info!("Using config {}", config_path.display());

    let (config, client) = Config::load_or_init(&config_path, |creds| {
        StashClient::new(&creds.stash_url, &creds.api_key)
    })
    .inspect_err(|e| error!("{}", e))?;

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("stash-qmt")
            .with_inner_size([420.0, 640.0])
            .with_min_inner_size([320.0, 400.0]),
        ..Default::default()
    };

    let app = QmtGui::new(config, config_path, Box::new(client));
    eframe::run_native("stash-qmt", options, Box::new(move |_cc| Ok(Box::new(app))))?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    let config_path = args.config.unwrap_or_else(default_config_path);
    let (config, _client) = Config::load_or_init(&config_path, |creds| {
        StashClient::new(&creds.stash_url, &creds.api_key)
    })?;
    tracing::info!(
        "Resolved {} template(s); build with --features gui to open the form",
        config.templates.len()
    );
    Ok(())
}
