//! Stateless rendering of the board, message line and statistics panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Player, Position, Square, StatisticsStore};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const STATS_WIDTH: u16 = 28;

/// Screen regions for a given terminal area.
///
/// Rendering and mouse hit-testing both use this, so a click always lands
/// on the cell drawn under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// The nine cells, by cell index.
    pub cells: [Rect; 9],
    /// Statistics panel.
    pub stats: Rect,
    /// Status message line.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let [title, body, status, help] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(CELL_HEIGHT * 3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(area);

        let [board_pane, stats_pane] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(CELL_WIDTH * 3),
                Constraint::Length(STATS_WIDTH),
            ])
            .areas(body);

        let board = center_rect(board_pane, CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let mut cells = [Rect::default(); 9];
        for position in Position::ALL {
            cells[position.to_index()] = Rect::new(
                board.x + position.col() as u16 * CELL_WIDTH,
                board.y + position.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board);
        }

        Self {
            title,
            cells,
            stats: center_rect(stats_pane, STATS_WIDTH, 5),
            status,
            help,
        }
    }

    /// The cell drawn at terminal coordinates (`column`, `row`).
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|r| {
                column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
            })
            .and_then(Position::from_index)
    }
}

const HELP: &str = "click/key: place | arrows+Enter: move | r: new game | s: reset stats | q: quit";

/// Renders the whole screen.
pub fn draw<S: StatisticsStore>(frame: &mut Frame, app: &App<S>) {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(bold(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let winning_line = app.session().engine().winning_line();
    for position in Position::ALL {
        let area = layout.cells[position.to_index()];
        let highlight = winning_line.is_some_and(|line| line.contains(&position));
        draw_cell(frame, area, app, position, highlight);
    }

    let stats = Paragraph::new(app.session().statistics_text())
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(stats, layout.stats);

    let status = Paragraph::new(app.session().message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_cell<S: StatisticsStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    position: Position,
    highlight: bool,
) {
    let square = app.session().engine().board().get(position);
    let mut style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => bold(Color::Blue),
        Square::Occupied(Player::O) => bold(Color::Red),
    };
    if highlight {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border_style = if position == app.cursor() {
        bold(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(key) = app.bindings().key_for(position) {
        block = block.title(key.to_string());
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(square.label(), style)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellBindings, GameSession};
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_core::{MemoryStore, Statistics};

    fn render(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_cells_tile_the_board() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        for (i, cell) in layout.cells.iter().enumerate() {
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
            assert_eq!(layout.cell_at(cell.x, cell.y), Position::from_index(i));
            assert_eq!(
                layout.cell_at(cell.x + CELL_WIDTH - 1, cell.y + CELL_HEIGHT - 1),
                Position::from_index(i)
            );
        }
        assert_eq!(layout.cells[1].x, layout.cells[0].x + CELL_WIDTH);
        assert_eq!(layout.cells[3].y, layout.cells[0].y + CELL_HEIGHT);
    }

    #[test]
    fn test_cell_at_misses_outside_board() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.cell_at(0, 0), None);
        assert_eq!(layout.cell_at(79, 23), None);
        assert_eq!(ScreenLayout::new(Rect::default()).cell_at(0, 0), None);
    }

    #[test]
    fn test_renders_statistics_summary() {
        let store = MemoryStore::with_statistics(&Statistics::new(3, 1, 2));
        let app = App::new(GameSession::start(store), CellBindings::default());
        let screen = render(&app);
        assert!(screen.contains("Player X Wins: 3"));
        assert!(screen.contains("Player O Wins: 1"));
        assert!(screen.contains("Draws: 2"));
    }

    #[test]
    fn test_renders_marks_and_message() {
        let session = GameSession::start(MemoryStore::new());
        let mut app = App::new(session, CellBindings::default());
        app.activate(Position::Center);
        let screen = render(&app);
        assert!(screen.contains("Player O's turn"));
        assert!(screen.contains("X"));
    }
}
