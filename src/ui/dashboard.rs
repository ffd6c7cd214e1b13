// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Header (titre + heure), bandeau défilant, footer (raccourcis + layout)
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Layout : découpage de l'espace en zones
// 3. Style : couleurs et attributs de texte
// ============================================================================

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ticker::Measurement;
use crate::ui::marquee::render_marquee;

/// Dessine l'interface complète
///
/// Retourne la mesure du bandeau : main la transmet au ticker une fois le
/// frame dessiné (le calcul du layout est différé après le rendu).
pub fn render(frame: &mut Frame, app: &App) -> Measurement {
    let size = frame.size();
    let chunks = create_layout(size);

    render_header(frame, chunks[0]);
    let measurement = render_marquee(frame, &app.ticker, chunks[1]);
    render_footer(frame, app, chunks[2]);

    measurement
}

/// Crée le layout principal (header, bandeau, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(3),    // Bandeau : tout le reste
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec() // Convertit Rc<[Rect]> en Vec<Rect>
}

/// Dessine le header avec le titre et l'heure locale
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Price Ticker ")
        .title_alignment(Alignment::Center);

    let text = vec![Line::from(vec![
        Span::styled(
            "Marchés",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            Local::now().format("%H:%M:%S").to_string(),
            Style::default().fg(Color::Yellow),
        ),
    ])];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Dessine le footer : raccourcis, état du layout ou confirmation de quit
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let layout = app.ticker.layout();

        let mut spans = vec![
            Span::styled("[q]", key),
            Span::raw(" Quit  "),
            Span::styled("[+/-]", key),
            Span::raw(" Vitesse  "),
            Span::styled("[Espace]", key),
            Span::raw(" Pause    "),
            Span::styled(
                format!(
                    "x{}  {:.1}s/cycle  {:.0} col/s",
                    layout.multiplier,
                    layout.animation_duration,
                    app.ticker.target_speed()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        if app.ticker.is_paused() {
            spans.push(Span::styled(
                "  [PAUSE]",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }

        Line::from(spans)
    };

    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_entries;
    use crate::ticker::TickerWidget;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> (Measurement, String) {
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let mut measurement = Measurement::default();
        terminal.draw(|frame| measurement = render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|cell| cell.symbol()).collect();
        (measurement, text)
    }

    #[test]
    fn test_render_returns_marquee_measurement() {
        let app = App::new(TickerWidget::new(sample_entries(), 12.0));
        let (measurement, text) = screen(&app);

        // 100 colonnes moins les deux bordures
        assert_eq!(measurement.container_width, 98.0);
        assert!(measurement.block_width > 0.0);
        assert!(text.contains("Price Ticker"));
        assert!(text.contains("x1"));
    }

    #[test]
    fn test_footer_shows_quit_confirmation() {
        let mut app = App::new(TickerWidget::new(sample_entries(), 12.0));
        app.request_quit();
        let (_, text) = screen(&app);

        assert!(text.contains("à nouveau pour quitter"));
    }

    #[test]
    fn test_footer_shows_pause() {
        let mut app = App::new(TickerWidget::new(sample_entries(), 12.0));
        app.toggle_pause();
        let (_, text) = screen(&app);

        assert!(text.contains("[PAUSE]"));
    }
}
