use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::app::{App, DetailState, Focus, PopupState, SearchState};
use crate::constants::{
    CARD_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT, MSG_IDLE, MSG_LOADING, SEARCH_BAR_HEIGHT,
};
use crate::meal::Meal;

/// Render the entire application UI.
pub fn render(app: &mut App, frame: &mut Frame) {
    let size = frame.area();

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(size);

    render_header(frame, chunks[0]);
    render_search_bar(app, frame, chunks[1]);
    render_results(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    match &app.popup_state {
        PopupState::Detail(detail) => render_detail_popup(frame, size, detail),
        PopupState::Message(message) => render_message_popup(frame, size, message),
        PopupState::None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title = Line::from(vec![
        "[".into(),
        "lazy".green().bold(),
        "meal".yellow().bold(),
        "]".into(),
    ]);
    let title_paragraph = Paragraph::new(title).alignment(Alignment::Left);
    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        12.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(title_paragraph, title_area);

    if area.width > 40 {
        let source_label = Paragraph::new("Recipes: TheMealDB")
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Right);
        let label_area = Rect::new(area.right() - 22, area.y + 1, 20, 1);
        frame.render_widget(source_label, label_area);
    }
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus == Focus::SearchBar;
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search_block = Block::default()
        .borders(Borders::ALL)
        .title(" Search ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_set(border::ROUNDED)
        .border_style(style);

    let cursor = if is_focused { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", app.search_input, cursor))
        .block(search_block)
        .wrap(Wrap { trim: true });

    frame.render_widget(input, area);
}

fn render_results(app: &mut App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus == Focus::Results;
    let style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let results_block = Block::default()
        .borders(Borders::ALL)
        .title(" Recipes ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_set(border::ROUNDED)
        .border_style(style);

    frame.render_widget(results_block.clone(), area);
    let inner_area = results_block.inner(area);

    match &app.search_state {
        SearchState::Idle => render_centered_note(frame, inner_area, MSG_IDLE),
        SearchState::Loading => render_centered_note(frame, inner_area, MSG_LOADING),
        SearchState::Message(message) => render_centered_note(frame, inner_area, message),
        SearchState::Results(meals) => {
            let items: Vec<ListItem> = meals
                .iter()
                .enumerate()
                .map(|(i, meal)| recipe_card(meal, app.list_state.selected() == Some(i)))
                .collect();

            let list = List::new(items).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );
            frame.render_stateful_widget(list, inner_area, &mut app.list_state);
        }
    }
}

fn render_centered_note(frame: &mut Frame, area: Rect, text: &str) {
    let note = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    // Vertically center the single note line when there is room.
    let note_area = if area.height > 2 {
        Rect::new(area.x, area.y + area.height / 2, area.width, 1)
    } else {
        area
    };
    frame.render_widget(note, note_area);
}

/// One result card: name, tags, thumbnail link, the fixed descriptive
/// sentence and the two constant placeholder badges.
fn recipe_card(meal: &Meal, is_selected: bool) -> ListItem<'static> {
    let marker: Span = if is_selected { "▶ ".into() } else { "⬚ ".into() };

    let lines = vec![
        Line::from(vec![
            marker,
            Span::styled(
                meal.name.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            "  ".into(),
            Span::styled(format!("[{}]", meal.area), Style::default().fg(Color::Green)),
            " ".into(),
            Span::styled(
                format!("[{}]", meal.category),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(vec![
            "  ".into(),
            Span::styled(meal.thumbnail.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            "  ".into(),
            Span::raw(format!(
                "Delicious {} from {} cuisine. Perfect for any occasion!",
                meal.name, meal.area
            )),
        ]),
        // Constant placeholders, never derived from the record.
        Line::from(vec![
            "  ".into(),
            Span::styled("⏱ 30 mins", Style::default().fg(Color::Green)),
            "   ".into(),
            Span::styled("★ Medium", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
    ];

    ListItem::new(lines).style(if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    })
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match (&app.popup_state, app.focus) {
        (PopupState::Detail(_), _) => "↑↓:Scroll  c:Copy Ingredients  o:Open Source  Esc:Close",
        (PopupState::Message(_), _) => "Esc:Dismiss",
        (PopupState::None, Focus::SearchBar) => "Enter:Search  Tab:Results  Esc:Quit",
        (PopupState::None, Focus::Results) => {
            "Enter:View Recipe  ↑↓:Move  r:Random  c:Copy  o:Source  /:Search  q:Quit"
        }
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Render the recipe detail popup: ingredients first, then instructions.
fn render_detail_popup(frame: &mut Frame, area: Rect, detail: &DetailState) {
    let popup_area = centered_popup_area(area, 76, 25);

    let popup_block = Block::default()
        .title(format!(" {} ", detail.meal.name))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    let content = detail_lines(&detail.meal);

    let body = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0));
    frame.render_widget(body, inner_area);

    render_popup_help(frame, popup_area, "↑↓:Scroll  Esc:Close");
}

/// The text body of the detail view, in display order.
fn detail_lines(meal: &Meal) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Ingredients",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];

    for entry in meal.ingredient_list() {
        lines.push(Line::from(format!("  • {entry}")));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Instructions:",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));

    for text_line in meal.instructions.lines() {
        lines.push(Line::from(text_line.to_string()));
    }

    lines
}

/// Render a message popup.
fn render_message_popup(frame: &mut Frame, area: Rect, message: &str) {
    let popup_area = centered_popup_area(area, 46, 6);

    let popup_block = Block::default()
        .title(" Message ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    let prompt = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, inner_area);

    render_popup_help(frame, popup_area, "Press Esc to continue");
}

fn render_popup_help(frame: &mut Frame, popup_area: Rect, help_text: &str) {
    let width = (help_text.chars().count() as u16).min(popup_area.width);
    let text_area = Rect::new(
        popup_area.x + (popup_area.width.saturating_sub(width)) / 2,
        popup_area.y + popup_area.height.saturating_sub(2),
        width,
        1,
    );

    let help_msg = Paragraph::new(help_text.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(help_msg, text_area);
}

/// Helper function to create a centered popup area.
fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MealMother;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_buffer(app: &mut App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn cards_show_name_tags_and_placeholder_badges() {
        let mut app = App::new();
        app.search_state = SearchState::Results(vec![MealMother::with_name("Arrabiata")]);
        app.list_state.select(Some(0));

        let screen = render_to_buffer(&mut app);
        assert!(screen.contains("Arrabiata"));
        assert!(screen.contains("[Italian]"));
        assert!(screen.contains("[Pasta]"));
        assert!(screen.contains("30 mins"));
        assert!(screen.contains("Medium"));
        assert!(screen.contains("Delicious Arrabiata from Italian cuisine."));
    }

    #[test]
    fn detail_popup_lists_ingredients_before_instructions() {
        let meal = MealMother::with_ingredients("Layered Cake", 3);
        let lines = detail_lines(&meal);
        let text: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        let ingredients_at = text.iter().position(|l| l == "Ingredients").unwrap();
        let instructions_at = text.iter().position(|l| l == "Instructions:").unwrap();
        assert!(ingredients_at < instructions_at);
        assert_eq!(
            text.iter().filter(|l| l.starts_with("  • ")).count(),
            3,
            "one bullet per populated slot"
        );
    }

    #[test]
    fn message_state_replaces_the_card_list() {
        let mut app = App::new();
        app.search_state =
            SearchState::Message(crate::constants::MSG_NO_RESULTS.to_string());

        let screen = render_to_buffer(&mut app);
        assert!(screen.contains("No recipes found."));
    }

    #[test]
    fn popup_area_is_clamped_to_small_terminals() {
        let parent = Rect::new(0, 0, 20, 10);
        let popup = centered_popup_area(parent, 76, 25);
        assert!(popup.width <= parent.width);
        assert!(popup.height <= parent.height);
    }
}
