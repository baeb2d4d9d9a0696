//! TUI Views
//!
//! View components for rendering different parts of the dashboard:
//! chart, card grid, and table. `render` lays out the whole screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::colors;
use super::state::{AppState, InteractionMode};
use crate::domain::ChartPoint;
use crate::selector::{CardModel, CharacteristicsCell, Presentation, TableRow};

const TITLE: &str = "Image Models Dashboard";
const SEARCH_PLACEHOLDER: &str = "Search tools & characteristics...";
const LOADING: &str = "Loading data…";
const NO_RESULTS: &str = "No results. Try a different search.";
const CHART_HEIGHT: u16 = 12;

/// Trait for renderable views
pub trait View {
    /// Render the view to the frame
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState);

    /// Get the view title
    fn title(&self) -> &'static str;
}

/// Render the full dashboard
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(CHART_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);
    render_search(frame, chunks[1], state);
    render_status(frame, chunks[2], state);
    ChartView.render(frame, chunks[3], state);
    render_records(frame, chunks[4], state);
    render_footer(frame, chunks[5], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = Line::from(vec![
        Span::styled(" IM ", Style::default().fg(colors::HEADER).add_modifier(Modifier::REVERSED | Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  [{}]", state.view_mode.name()), Style::default().fg(colors::HEADER)),
        Span::styled(format!("  {}", state.source), Style::default().fg(colors::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_search(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.interaction_mode == InteractionMode::Search;
    let border_style = if editing {
        Style::default().fg(colors::KEYBIND)
    } else {
        Style::default().fg(colors::DIM)
    };

    let content = if state.query().is_empty() && !editing {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(colors::DIM))
    } else {
        Span::raw(state.query())
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search "),
    );
    frame.render_widget(search, area);

    if editing {
        frame.set_cursor_position(search_cursor(area, state.search.cursor_column()));
    }
}

/// Cursor cell inside the search box, pinned to its last column
fn search_cursor(area: Rect, column: usize) -> (u16, u16) {
    let column = u16::try_from(column).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(1).saturating_add(column).min(area.right().saturating_sub(2));
    (x, area.y.saturating_add(1))
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = state.status_line();
    let mut spans = Vec::new();
    for badge in status.badges() {
        let style = if badge == "offline mode" {
            Style::default().fg(colors::OFFLINE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::BADGE)
        };
        spans.push(Span::styled(format!(" {} ", badge), style.add_modifier(Modifier::REVERSED)));
        spans.push(Span::raw(" "));
    }

    if let Some(loaded_at) = state.loaded_at() {
        spans.push(Span::styled(
            format!("loaded {}", loaded_at.format("%H:%M:%S")),
            Style::default().fg(colors::DIM),
        ));
    }
    if let Some(error) = state.load_error() {
        spans.push(Span::styled(format!("  {}", error), Style::default().fg(colors::OFFLINE)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_records(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.is_loading() {
        render_notice(frame, area, LOADING);
        return;
    }
    match state.presentation() {
        Presentation::NoResults => render_notice(frame, area, NO_RESULTS),
        Presentation::Cards(cards) => CardsView::new(cards).render(frame, area, state),
        Presentation::Table(rows) => TableView::new(rows).render(frame, area, state),
    }
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let notice = Paragraph::new(text)
        .style(Style::default().fg(colors::DIM))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints: &[(&str, &str)] = match state.interaction_mode {
        InteractionMode::Normal => &[
            ("/", "search"),
            ("tab", "cards/table"),
            ("r", "reload"),
            ("j/k", "scroll"),
            ("esc", "clear"),
            ("q", "quit"),
        ],
        InteractionMode::Search => &[("enter/esc", "done"), ("ctrl+u", "clear")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" <{}>", key), Style::default().fg(colors::KEYBIND)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(colors::DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Bar chart of bullets per visible tool
pub struct ChartView;

impl ChartView {
    /// Bar width that fits `count` bars into `width` columns
    fn bar_width(width: u16, count: usize) -> u16 {
        if count == 0 {
            return 1;
        }
        let per_bar = width.saturating_sub(2) as usize / count;
        (per_bar.saturating_sub(1) as u16).clamp(1, 12)
    }

    fn bars(points: &[ChartPoint], bar_width: u16) -> Vec<Bar<'static>> {
        points
            .iter()
            .map(|point| {
                let label: String = point.tool.chars().take(bar_width as usize).collect();
                Bar::default()
                    .value(point.items as u64)
                    .label(Line::from(label))
                    .style(Style::default().fg(colors::BAR))
            })
            .collect()
    }
}

impl View for ChartView {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title()));

        let points = state.chart();
        if points.is_empty() {
            frame.render_widget(Paragraph::new("No data").style(Style::default().fg(colors::DIM)).block(block), area);
            return;
        }

        let bar_width = Self::bar_width(area.width, points.len());
        let bars = Self::bars(&points, bar_width);
        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1)
            .value_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(chart, area);
    }

    fn title(&self) -> &'static str {
        "Characteristics per tool"
    }
}

/// Responsive grid of detail cards
pub struct CardsView {
    cards: Vec<CardModel>,
}

impl CardsView {
    /// Create a cards view
    pub fn new(cards: Vec<CardModel>) -> Self {
        Self { cards }
    }

    /// Columns that fit in `width`
    fn columns(width: u16) -> usize {
        match width {
            w if w >= 120 => 3,
            w if w >= 80 => 2,
            _ => 1,
        }
    }

    /// Lines inside one card
    fn card_lines(card: &CardModel) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = card.body_lines().into_iter().map(Line::from).collect();

        let link_style = Style::default().fg(colors::LINK);
        if let Some(url) = &card.how_to_url {
            lines.push(Line::from(vec![Span::raw("How-to: "), Span::styled(url.clone(), link_style)]));
        }
        if let Some(url) = &card.site_url {
            lines.push(Line::from(vec![Span::raw("Site: "), Span::styled(url.clone(), link_style)]));
        }
        if let Some(url) = &card.icon_url {
            lines.push(Line::from(Span::styled(format!("Icon: {}", url), Style::default().fg(colors::DIM))));
        }
        lines
    }

    fn render_card(frame: &mut Frame, area: Rect, card: &CardModel) {
        let title = Line::from(vec![
            Span::styled(format!(" [{}] ", card.monogram), Style::default().fg(colors::HEADER)),
            Span::styled(format!("{} ", card.title), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let body = Paragraph::new(Text::from(Self::card_lines(card)))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(body, area);
    }
}

impl View for CardsView {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title(format!(" {} ({}) ", self.title(), self.cards.len()))
            .border_style(Style::default().fg(colors::DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let area = inner;

        let columns = Self::columns(area.width);
        let rows: Vec<&[CardModel]> = self.cards.chunks(columns).collect();
        let start = state.scroll.min(rows.len().saturating_sub(1));

        let mut y = area.y;
        for row in &rows[start..] {
            if y >= area.bottom() {
                break;
            }
            let tallest = row.iter().map(|card| Self::card_lines(card).len()).max().unwrap_or(0);
            let height = (tallest as u16 + 2).min(area.bottom() - y);

            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_area);
            for (card, cell) in row.iter().zip(cells.iter()) {
                Self::render_card(frame, *cell, card);
            }
            y += height;
        }
    }

    fn title(&self) -> &'static str {
        "Cards"
    }
}

/// Four-column table of records
pub struct TableView {
    rows: Vec<TableRow>,
}

impl TableView {
    /// Create a table view
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    fn characteristics_text(cell: &CharacteristicsCell) -> Text<'static> {
        match cell {
            CharacteristicsCell::Bullets(bullets) => {
                Text::from(bullets.iter().map(|b| Line::from(format!("• {}", b))).collect::<Vec<_>>())
            }
            CharacteristicsCell::Text(text) => Text::from(text.clone()),
        }
    }

    fn row(row: &TableRow) -> Row<'static> {
        let characteristics = Self::characteristics_text(&row.characteristics);
        let height = characteristics.height().max(1) as u16;
        let link = |label: &'static str| {
            if label == "Open" {
                Cell::from(label).style(Style::default().fg(colors::LINK))
            } else {
                Cell::from(label).style(Style::default().fg(colors::DIM))
            }
        };

        Row::new(vec![
            Cell::from(row.tool.clone()),
            Cell::from(characteristics),
            link(row.how_to.label()),
            link(row.site.label()),
        ])
        .height(height)
    }
}

impl View for TableView {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let start = state.scroll.min(self.rows.len().saturating_sub(1));
        let rows: Vec<Row> = self.rows[start..].iter().map(Self::row).collect();

        let header = Row::new(TableRow::HEADERS)
            .style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD));
        let widths = [
            Constraint::Length(20),
            Constraint::Min(30),
            Constraint::Length(8),
            Constraint::Length(8),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ({}) ", self.title(), self.rows.len())),
            );
        frame.render_widget(table, area);
    }

    fn title(&self) -> &'static str {
        "Table"
    }
}
