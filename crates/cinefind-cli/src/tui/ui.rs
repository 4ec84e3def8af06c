//! TUI rendering logic for the browser.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use super::state::{BrowserState, FilterDimension, InputMode, Phase};

/// Draws the browser UI.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &BrowserState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Length(3), // filter bar
            Constraint::Min(5),    // result grid
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_search_bar(frame, chunks[0], state);
    draw_filter_bar(frame, chunks[1], state);
    draw_grid(frame, chunks[2], state);
    draw_footer(frame, chunks[3], state);

    if let InputMode::Menu(dimension) = state.input_mode {
        draw_menu(frame, dimension, state);
    }
    if let Some(url) = &state.trailer {
        draw_trailer_modal(frame, url);
    }
    if let Some(notice) = &state.notice {
        draw_notice_modal(frame, notice);
    }
}

/// Draws the search input and the result heading.
#[allow(clippy::indexing_slicing)]
fn draw_search_bar(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let search_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let search_style = if state.input_mode == InputMode::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search_text = if state.search.input.is_empty() && state.input_mode != InputMode::Search {
        Span::styled("Search movies...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(state.search.input.as_str())
    };
    let search = Paragraph::new(Line::from(search_text))
        .style(search_style)
        .block(Block::default().borders(Borders::ALL).title(" Search: / "));
    frame.render_widget(search, search_chunks[0]);

    let heading = Paragraph::new(state.heading())
        .block(Block::default().borders(Borders::ALL).title(" cinefind "));
    frame.render_widget(heading, search_chunks[1]);
}

/// Draws the filter bar showing the value set for each dimension.
fn draw_filter_bar(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let unset = || Span::styled("-", Style::default().fg(Color::DarkGray));
    let set = |value: String| Span::styled(value, Style::default().fg(Color::Green));

    let mut spans = vec![Span::raw(" [g] Genre: ")];
    spans.push(state.filters.genre.clone().map_or_else(unset, set));
    spans.push(Span::raw("  [y] Year: "));
    spans.push(state.filters.year.clone().map_or_else(unset, set));
    spans.push(Span::raw("  [l] Language: "));
    spans.push(
        state
            .filters
            .language
            .as_ref()
            .map_or_else(unset, |lang| set(lang.label.clone())),
    );
    spans.push(Span::raw("  [t] Type: "));
    spans.push(
        state
            .filters
            .media_type
            .map_or_else(unset, |t| set(String::from(t.label()))),
    );

    let filters = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Filters "));
    frame.render_widget(filters, area);
}

/// Draws the result grid, or the loading/empty placeholder.
fn draw_grid(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let block = Block::default().borders(Borders::ALL).title(" Results ");

    match state.phase {
        Phase::Idle | Phase::Loading => {
            let loading = Paragraph::new("Loading...").block(block);
            frame.render_widget(loading, area);
            return;
        }
        Phase::Loaded if state.results.is_empty() => {
            let empty = Paragraph::new("No movies found.").block(block);
            frame.render_widget(empty, area);
            return;
        }
        Phase::Loaded => {}
    }

    let row_size = state.row_size.max(1);
    let rows: Vec<Row> = state
        .results
        .chunks(row_size)
        .enumerate()
        .map(|(row_idx, chunk)| {
            let cells: Vec<Cell> = chunk
                .iter()
                .enumerate()
                .map(|(col_idx, item)| {
                    let index = row_idx.saturating_mul(row_size).saturating_add(col_idx);
                    let style = if index == state.cursor {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    let year = item.date().map_or(String::new(), |d| {
                        format!(" ({})", d.chars().take(4).collect::<String>())
                    });
                    Cell::from(format!("{}{year}", item.display_title())).style(style)
                })
                .collect();
            Row::new(cells).height(2)
        })
        .collect();

    #[allow(
        clippy::cast_possible_truncation,
        clippy::arithmetic_side_effects,
        clippy::as_conversions
    )]
    let widths = vec![Constraint::Percentage(100 / row_size as u16); row_size];
    let table = Table::new(rows, widths).block(block);
    frame.render_widget(table, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect, state: &BrowserState) {
    let help_text = match state.input_mode {
        InputMode::Search => "Type to search | Enter: submit | Esc: back",
        InputMode::Menu(_) => "\u{2191}\u{2193}/j/k: move | Enter: pick | c: clear | Esc: close",
        InputMode::Grid => {
            "\u{2190}\u{2191}\u{2192}\u{2193}: move  Enter: trailer  /: search  g/y/l/t: filters  H: home  q: quit"
        }
    };

    let footer = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Draws the filter picker menu as a centered overlay.
fn draw_menu(frame: &mut Frame, dimension: FilterDimension, state: &BrowserState) {
    let title = match dimension {
        FilterDimension::Genre => " Genre ",
        FilterDimension::Year => " Year ",
        FilterDimension::Language => " Language ",
        FilterDimension::Type => " Type ",
    };

    let lines: Vec<Line> = (0..state.menu_len(dimension))
        .filter_map(|index| {
            let label = state.menu_label(dimension, index)?;
            let (marker, style) = if index == state.menu_cursor {
                (
                    "\u{25b8} ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };
            Some(Line::from(vec![
                Span::raw(String::from(marker)),
                Span::styled(label, style),
            ]))
        })
        .collect();

    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    let height = (lines.len() as u16).saturating_add(2);
    let area = centered_rect(24, height, frame.area());
    frame.render_widget(Clear, area);
    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title),
    );
    frame.render_widget(menu, area);
}

/// Draws the trailer modal with the embeddable URL.
fn draw_trailer_modal(frame: &mut Frame, url: &str) {
    let area = centered_rect(64, 5, frame.area());
    frame.render_widget(Clear, area);
    let modal = Paragraph::new(vec![
        Line::from(Span::styled(url, Style::default().fg(Color::Green))),
        Line::from(Span::styled(
            "o: open in browser   Esc: close",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Trailer "),
    );
    frame.render_widget(modal, area);
}

/// Draws the blocking notice modal.
fn draw_notice_modal(frame: &mut Frame, notice: &str) {
    let area = centered_rect(40, 4, frame.area());
    frame.render_widget(Clear, area);
    let modal = Paragraph::new(vec![
        Line::from(notice),
        Line::from(Span::styled(
            "Esc/Enter: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Notice "),
    );
    frame.render_widget(modal, area);
}

/// Centers a `width` x `height` rect within `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x.saturating_add(area.width.saturating_sub(width) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(height) / 2);
    Rect::new(x, y, width, height)
}
