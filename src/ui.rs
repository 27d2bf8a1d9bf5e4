use chrono::Local;
use ratatui::{prelude::*, widgets::*};

use crate::constants::FAVORITE_MARKER;
use crate::messages::render::ListRow;
use crate::messages::ui_events::AppTab;
use crate::messages::RenderState;

/// Draw the whole screen from a render snapshot
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let titles = [AppTab::Posts.title(), AppTab::Favorites.title()];
    f.render_widget(render_tabs(&titles, state.active_tab.index()), chunks[0]);

    draw_list(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

/// Renders tabs
pub fn render_tabs<'a>(titles: &[&'a str], selected: usize) -> Tabs<'a> {
    let titles: Vec<Line> = titles
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!(" {}:{} ", i + 1, t)))
        .collect();

    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        .divider("|")
}

/// One list line; the star only shows on the posts tab
fn row_item(row: &ListRow, show_marker: bool) -> ListItem<'_> {
    if show_marker && row.favorited {
        ListItem::new(Line::from(vec![
            Span::styled(FAVORITE_MARKER, Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}", row.title)),
        ]))
    } else {
        ListItem::new(format!("  {}", row.title))
    }
}

fn draw_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let (rows, selected) = state.active_list();
    let is_posts = state.active_tab == AppTab::Posts;

    let title = match state.active_tab {
        AppTab::Posts => format!(" Posts ({}) - Enter: favorite ", rows.len()),
        AppTab::Favorites => format!(" Favorites ({}) - Enter: remove ", rows.len()),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if rows.is_empty() {
        let hint = match state.active_tab {
            AppTab::Posts if state.last_fetch_time.is_none() => "Loading posts...",
            AppTab::Posts => "No posts.",
            AppTab::Favorites => "No favorites yet. Press Enter on a post to add it.",
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| row_item(row, is_posts)).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let fetched = match state.last_fetch_time {
        Some(at) => format!("Fetched {}", at.with_timezone(&Local).format("%H:%M:%S")),
        None => String::from("Loading..."),
    };
    let status = format!(
        " {} | 1/2:tab | ↑/↓:select | Enter:toggle | ?:help | q:quit ",
        fetched
    );

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 POSTBOARD - Keyboard Shortcuts

 TABS
   1 / 2              Posts / Favorites
   Tab / ← / →        Switch tab

 LIST
   ↑ / ↓  (k / j)     Move selection
   Enter / Space      Posts: toggle favorite
                      Favorites: remove

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
