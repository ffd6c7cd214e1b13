// ============================================================================
// Price Ticker - bandeau de prix défilant dans le terminal
// ============================================================================
// Programme TUI qui fait défiler une liste de prix en boucle, sans trou,
// quelle que soit la largeur du terminal.
//
// CONCEPTS RUST CLÉS :
// 1. Terminal raw mode : contrôle total du terminal
// 2. Event loop : render → mesure → input → update
// 3. Mesure différée : le layout est recalculé après le draw du frame
// ============================================================================

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, error, info, warn};

use price_ticker::app::App;
use price_ticker::config::TickerConfig;
use price_ticker::ticker::{Measurement, TickerWidget, ViewportObserver};
use price_ticker::ui::{events::EventHandler, render};

// ============================================================================
// Initialisation du logging
// ============================================================================
// CONCEPT : Logging dans une app TUI
// - Les println! ne fonctionnent pas une fois le TUI lancé
// - On log vers un fichier à la place, avec rotation quotidienne
// ============================================================================

/// Répertoire des logs : ~/.local/share/price-ticker/logs (ou ./logs)
fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("price-ticker").join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialise le système de logging vers fichier
///
/// # Utilisation
/// ```bash
/// # Voir les logs en temps réel
/// tail -f ~/.local/share/price-ticker/logs/price-ticker.log.*
///
/// # Contrôler le niveau de log
/// RUST_LOG=price_ticker=trace cargo run
/// ```
fn init_logging() -> Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir).context("Échec de la création du répertoire de logs")?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir.clone(), "price-ticker.log");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // Pas de codes couleur dans le fichier
                .with_target(true)
                .with_line_number(true),
        )
        .with(
            // Par défaut : debug pour price_ticker, info pour les dépendances
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "price_ticker=debug,info".into()),
        )
        .try_init()
        .context("Échec de l'installation du subscriber tracing")?;

    info!(?log_dir, "Logging initialisé");
    Ok(())
}

// ============================================================================
// Point d'entrée du programme
// ============================================================================

fn main() -> Result<()> {
    // Si init échoue, on affiche l'erreur et continue quand même
    init_logging().unwrap_or_else(|e| {
        eprintln!("⚠️  Warning: Failed to initialize logging: {}", e);
        eprintln!("   Continuing without logging...");
    });

    info!("Price ticker starting up");

    let (config, source) = TickerConfig::load().context("Échec du chargement de la configuration")?;
    info!(
        ?source,
        target_speed = config.target_speed,
        tick_rate_ms = config.tick_rate_ms,
        "Configuration loaded"
    );

    let entries = config.entries();
    info!(entries = entries.len(), "Price entries loaded");

    let mut app = App::new(TickerWidget::new(entries, config.target_speed));
    let events = EventHandler::new(config.tick_rate());

    debug!("Setting up terminal");
    let mut terminal = setup_terminal()?;

    info!("Starting event loop");
    let result = run(&mut terminal, &mut app, &events);

    // Restaure le terminal (même en cas d'erreur)
    debug!("Restoring terminal");
    restore_terminal(&mut terminal)?;

    match &result {
        Ok(_) => info!("Application exited normally"),
        Err(e) => error!(error = ?e, "Application exited with error"),
    }

    result
}

// ============================================================================
// Event Loop Principal
// ============================================================================
// À chaque itération :
//   1. RENDER : dessine l'interface et mesure le bandeau
//   2. MESURE : transmet les largeurs au ticker (après le commit du frame)
//   3. INPUT : traite un événement (ou un tick après timeout)
//   4. UPDATE : avance l'animation du temps écoulé
// ============================================================================

/// Exécute la boucle principale de l'application
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while app.is_running() {
        // 1. RENDER
        let mut measurement = Measurement::default();
        terminal.draw(|frame| measurement = render(frame, &*app))?;

        // 2. MESURE : premier frame, resize, ou bloc reprojeté
        app.ticker.viewport_changed(measurement);

        // 3. INPUT
        match events.next() {
            Ok(event) => handle_event(app, event),
            Err(e) => warn!(error = ?e, "Failed to read terminal event"),
        }

        // 4. UPDATE
        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    Ok(())
}

// ============================================================================
// Gestion des événements
// ============================================================================

/// Traite un événement et met à jour l'état de l'application
fn handle_event(app: &mut App, event: price_ticker::ui::events::Event) {
    use price_ticker::ui::events::{
        is_faster_event, is_pause_event, is_quit_event, is_slower_event, Event,
    };

    match event {
        Event::Key(_) if is_quit_event(&event) => {
            // Two-step : première pression demande, deuxième quitte
            if app.is_awaiting_quit_confirmation() {
                info!("User confirmed quit");
                app.quit();
            } else {
                info!("User requested quit (awaiting confirmation)");
                app.request_quit();
            }
        }

        Event::Key(_) if is_faster_event(&event) => {
            app.cancel_quit();
            app.speed_up();
        }

        Event::Key(_) if is_slower_event(&event) => {
            app.cancel_quit();
            app.slow_down();
        }

        Event::Key(_) if is_pause_event(&event) => {
            app.cancel_quit();
            app.toggle_pause();
        }

        Event::Resize(width, height) => {
            app.on_resize(width, height);
        }

        Event::Key(_) => {
            // Toute autre touche : annule la confirmation si active
            app.cancel_quit();
        }

        Event::Tick => {}
    }
}

// ============================================================================
// Setup et restauration du terminal
// ============================================================================
// IMPORTANT : Toujours restaurer le terminal avant de quitter !
// ============================================================================

/// Configure le terminal en mode TUI
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Impossible d'activer le raw mode")?;

    // Alternate screen : quand on quitte, l'écran précédent est restauré
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

/// Restaure le terminal à son état normal
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
