use crate::list::ListState;
use crate::models::{Dataset, VocabEntry};
use crate::ui::layout::{calculate_list_chunks, grid_columns, grid_rows, CARD_HEIGHT};
use crate::utils::{display_width, truncate_to_width};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Search box plus a grid with one card per matching entry. The grid is
/// rebuilt from the filter on every draw.
pub fn draw_list(f: &mut Frame, area: Rect, dataset: &Dataset, list: &mut ListState) {
    let layout = calculate_list_chunks(area);

    let search_text = if list.filter.is_empty() {
        Span::styled(
            "Type to search...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::from(list.filter.as_str())
    };
    let search = Paragraph::new(Line::from(search_text))
        .block(Block::default().borders(Borders::ALL).title("Search"));
    f.render_widget(search, layout.search_area);

    let filter_width = u16::try_from(display_width(&list.filter)).unwrap_or(u16::MAX);
    let cursor_x = layout
        .search_area
        .x
        .saturating_add(1)
        .saturating_add(filter_width);
    f.set_cursor_position((
        cursor_x.min(layout.search_area.right().saturating_sub(2)),
        layout.search_area.y + 1,
    ));

    let visible = list.visible(dataset);
    if visible.is_empty() {
        let empty = Paragraph::new("No matches")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .alignment(Alignment::Center);
        f.render_widget(empty, layout.grid_area);
        return;
    }

    let grid = layout.grid_area;
    let columns = grid_columns(grid.width);
    let rows_on_screen = grid_rows(grid.height);
    list.columns = columns;
    list.selected = list.selected.min(visible.len() - 1);

    // keep the selected card's row on screen
    let selected_row = list.selected / columns;
    if selected_row < list.scroll_row {
        list.scroll_row = selected_row;
    } else if selected_row >= list.scroll_row + rows_on_screen {
        list.scroll_row = selected_row + 1 - rows_on_screen;
    }

    let card_width = grid.width / columns as u16;
    for (slot, &entry_index) in visible.iter().enumerate() {
        let row = slot / columns;
        if row < list.scroll_row || row >= list.scroll_row + rows_on_screen {
            continue;
        }
        let col = slot % columns;
        let top = grid.y + (row - list.scroll_row) as u16 * CARD_HEIGHT;
        let cell = Rect::new(grid.x + col as u16 * card_width, top, card_width, CARD_HEIGHT)
            .intersection(grid);
        draw_card(f, cell, &dataset[entry_index], slot == list.selected);
    }
}

fn draw_card(f: &mut Frame, area: Rect, entry: &VocabEntry, selected: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        truncate_to_width(&format!("{} 🔊", entry.term), inner_width),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(Span::styled(
        truncate_to_width(&entry.phonetic, inner_width),
        Style::default().fg(Color::Gray),
    )));
    text.push_line(Line::from(truncate_to_width(&entry.translation, inner_width)));
    text.push_line(Line::from(Span::styled(
        truncate_to_width(&entry.image_ref, inner_width),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    let border_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let card = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(card, area);
}
