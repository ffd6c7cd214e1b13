// ============================================================================
// Marquee - Rendu du bandeau défilant
// ============================================================================
// Dessine deux copies du bloc côte à côte et les décale vers la gauche.
// Quand le décalage atteint une largeur de bloc, la phase revient à 0 :
// la deuxième copie a pris exactement la place de la première.
//
// CONCEPTS RATATUI :
// 1. Paragraph::scroll((y, x)) : défilement horizontal sans wrap
// 2. Line::width() : largeur affichée en colonnes (sert de mesure)
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{PriceEntry, Trend};
use crate::ticker::{Measurement, TickerWidget};

/// Séparateur entre deux entrées
const SEPARATOR: &str = "   •   ";

/// Couleur associée à une tendance
pub fn trend_style(trend: Trend) -> Style {
    match trend {
        Trend::Up => Style::default().fg(Color::Green),
        Trend::Down => Style::default().fg(Color::Red),
        Trend::Neutral => Style::default().fg(Color::Gray),
    }
}

/// Spans d'une entrée : label, prix, variation, plus haut / plus bas
fn entry_spans(entry: &PriceEntry) -> Vec<Span<'static>> {
    let style = trend_style(entry.trend());

    vec![
        Span::styled(
            entry.label.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(entry.price_text(), style.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(entry.change_text(), style),
        Span::raw("  "),
        Span::styled(entry.range_text(), Style::default().fg(Color::DarkGray)),
        Span::styled(SEPARATOR, Style::default().fg(Color::Cyan)),
    ]
}

/// Spans d'un bloc complet (la liste répétée)
fn block_spans(display: &[PriceEntry]) -> Vec<Span<'static>> {
    display.iter().flat_map(entry_spans).collect()
}

/// Dessine le bandeau et retourne les largeurs mesurées
///
/// La mesure porte sur le bloc réellement construit pour ce frame, au
/// multiplier courant. L'appelant la transmet au ticker après le draw.
pub fn render_marquee(frame: &mut Frame, ticker: &TickerWidget, area: Rect) -> Measurement {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Prix ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spans = block_spans(ticker.display_list());
    let block_width = Line::from(spans.clone()).width();
    let measurement = Measurement::new(f64::from(inner.width), block_width as f64);

    // Centre verticalement la ligne dans la zone
    let padding = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();

    if block_width == 0 {
        lines.push(Line::from(Span::styled(
            "Aucun prix à afficher",
            Style::default().fg(Color::Gray),
        )));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return measurement;
    }

    // Deux copies adjacentes du bloc
    let mut strip = spans.clone();
    strip.extend(spans);
    lines.push(Line::from(strip));

    let offset = u16::try_from(ticker.scroll_offset(block_width)).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((0, offset)), inner);

    measurement
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_entries;
    use crate::ticker::ViewportObserver;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer.get(x, y).symbol().to_string())
            .collect()
    }

    fn draw(ticker: &TickerWidget, width: u16, height: u16) -> (Measurement, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut measurement = Measurement::default();
        terminal
            .draw(|frame| {
                let area = frame.size();
                measurement = render_marquee(frame, ticker, area);
            })
            .unwrap();
        (measurement, terminal.backend().buffer().clone())
    }

    #[test]
    fn test_measurement_matches_widths() {
        let ticker = TickerWidget::new(sample_entries(), 10.0);
        let (measurement, _) = draw(&ticker, 60, 3);

        assert_eq!(measurement.container_width, 58.0);
        let expected = Line::from(block_spans(ticker.display_list())).width();
        assert_eq!(measurement.block_width, expected as f64);
        assert!(measurement.block_width > 0.0);
    }

    #[test]
    fn test_first_label_visible_at_phase_zero() {
        let ticker = TickerWidget::new(sample_entries(), 10.0);
        let (_, buffer) = draw(&ticker, 60, 3);

        assert!(row(&buffer, 1).contains("Barclays PLC"));
    }

    #[test]
    fn test_entry_text_comes_from_price_entry() {
        let entry = PriceEntry::new("Apple Inc", 180.50, 179.30, 182.00, 179.00).unwrap();
        let text: String = entry_spans(&entry)
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert_eq!(
            text,
            format!(
                "Apple Inc  {} {}  {}{}",
                entry.price_text(),
                entry.change_text(),
                entry.range_text(),
                SEPARATOR
            )
        );
    }

    #[test]
    fn test_strip_scrolls_with_phase() {
        let mut ticker = TickerWidget::new(sample_entries(), 10.0);
        let (measurement, before) = draw(&ticker, 60, 3);
        ticker.viewport_changed(measurement);

        ticker.advance(Duration::from_secs(1));
        let (_, after) = draw(&ticker, 60, 3);

        assert_ne!(row(&before, 1), row(&after, 1));
    }

    #[test]
    fn test_multiplier_grows_block_width() {
        let mut ticker = TickerWidget::new(sample_entries(), 10.0);
        let (first, _) = draw(&ticker, 200, 3);
        ticker.viewport_changed(first);

        let (second, _) = draw(&ticker, 200, 3);
        assert_eq!(
            second.block_width,
            first.block_width * f64::from(ticker.multiplier())
        );
        assert!(second.block_width > second.container_width);
    }

    #[test]
    fn test_empty_ticker_measures_zero() {
        let ticker = TickerWidget::new(Vec::new(), 10.0);
        let (measurement, buffer) = draw(&ticker, 40, 3);

        assert_eq!(measurement.block_width, 0.0);
        assert!(row(&buffer, 1).contains("Aucun prix"));
    }
}
