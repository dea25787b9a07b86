//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use oersted_cli::presenter::CliPresenter;
use oersted_cli::ui::print_header;
use oersted_core::field::FieldSnapshot;
use oersted_core::tabs::{DemoSettings, Tab, TabContainer};
use oersted_tui::{TuiApp, TuiMessage};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        oersted_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let tab = config.initial_tab()?;
    let settings = config.settings()?;

    if config.dump_field {
        if !config.json {
            print_header(&format!(
                "Magnetic field at {}%",
                settings.initial_intensity.percent()
            ));
        }
        return dump_field(config, &settings, &mut io::stdout().lock());
    }

    if config.list_questions {
        if !config.json {
            print_header("Right-hand rule questions");
        }
        return list_questions(config, &settings, &mut io::stdout().lock());
    }

    run_tui(config, settings, tab)
}

/// Write the field snapshot for the configured intensity and seed.
pub fn dump_field(config: &AppConfig, settings: &DemoSettings, out: &mut dyn Write) -> Result<()> {
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let snapshot = FieldSnapshot::generate(settings.initial_intensity, &mut rng);
    CliPresenter::new(config.json, config.verbose).present_field(&snapshot, out)?;
    Ok(())
}

/// Write the question bank.
pub fn list_questions(
    config: &AppConfig,
    settings: &DemoSettings,
    out: &mut dyn Write,
) -> Result<()> {
    CliPresenter::new(config.json, config.verbose).present_questions(
        &settings.bank,
        settings.policy,
        out,
    )?;
    Ok(())
}

fn run_tui(config: &AppConfig, settings: DemoSettings, tab: Tab) -> Result<()> {
    let frame_interval = config.frame_interval_duration();
    tracing::info!(%tab, ?frame_interval, "starting TUI");

    let (tx, rx) = crossbeam_channel::unbounded::<TuiMessage>();

    // Ctrl+C outside raw mode
    let quit_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = quit_tx.send(TuiMessage::Quit);
    })?;

    let intensity = settings.initial_intensity.percent();
    let mut app = TuiApp::new(TabContainer::new(settings, tab), rx);
    let _ = tx.send(TuiMessage::Log(format!(
        "[INFO] showing {}, intensity {intensity}%",
        tab.title()
    )));

    app.run(frame_interval)
        .map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
