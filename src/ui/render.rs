use crate::testament::Testament;
use crate::ui::app::{App, ReaderFocus, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, reader_columns, search_rows};
use crate::ui::status::ViewStatus;
use crate::ui::theme::{
    ACCENT, CURSOR_ROW, FOCUS_BORDER, PANEL_BORDER, BODY_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_LOADING,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let session = app.store().snapshot();
    frame.render_widget(Header::widget(&session), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Home => draw_home(frame, app, body),
        Screen::Reader => draw_reader(frame, app, body),
        Screen::Search => draw_search(frame, app, body),
    }

    frame.render_widget(Footer::widget(app.screen(), app.notice(), footer), footer);
}

fn panel(title: String, focused: bool) -> Block<'static> {
    let border = if focused { FOCUS_BORDER } else { PANEL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Placeholder body for every status except `Ready`.
fn status_paragraph<T>(status: &ViewStatus<T>, empty: &str) -> Paragraph<'static> {
    let line = match status {
        ViewStatus::Idle | ViewStatus::Ready(_) => Line::from(""),
        ViewStatus::Loading => Line::styled("Loading…", Style::default().fg(STATUS_LOADING)),
        ViewStatus::Empty => Line::styled(empty.to_string(), Style::default().fg(MUTED_TEXT)),
        ViewStatus::Failed(message) => {
            Line::styled(message.clone(), Style::default().fg(STATUS_ERROR))
        }
    };
    Paragraph::new(line).wrap(Wrap { trim: true })
}

fn highlighted_list(items: Vec<ListItem<'static>>, block: Block<'static>) -> List<'static> {
    List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(CURSOR_ROW)
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
}

fn draw_home(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let pager = app.translation_pager();
    let title = if pager.total_pages() > 1 {
        format!(" Bibles (page {} of {}) ", pager.page(), pager.total_pages())
    } else {
        " Bibles ".to_string()
    };
    let block = panel(title, true);

    let status = app.translations();
    let ViewStatus::Ready(translations) = &status else {
        frame.render_widget(
            status_paragraph(&status, "No Bibles available.").block(block),
            area,
        );
        return;
    };

    let selected_id = app.store().selection().translation_id().map(str::to_string);
    let items: Vec<ListItem> = pager
        .items(*translations)
        .iter()
        .map(|t| {
            let marker = if selected_id.as_deref() == Some(t.id.as_str()) {
                "● "
            } else {
                "  "
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(ACCENT)),
                Span::styled(
                    format!("{:<10}", t.abbreviation),
                    Style::default().fg(BODY_TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(t.name.clone(), Style::default().fg(BODY_TEXT)),
                Span::styled(
                    format!("  ({})", t.language_name()),
                    Style::default().fg(MUTED_TEXT),
                ),
            ]))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.translation_cursor()));
    frame.render_stateful_widget(highlighted_list(items, block), area, &mut state);
}

fn draw_reader(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (books_area, chapters_area, content_area) = reader_columns(area);
    draw_books(frame, app, books_area);
    draw_chapters(frame, app, chapters_area);
    draw_content(frame, app, content_area);
}

fn draw_books(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = panel(" Books ".to_string(), app.focus() == ReaderFocus::Books);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let tabs_area = Rect { height: 1, ..inner };
    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };

    let selected_tab = match app.book_tab() {
        Testament::Old => 0,
        Testament::New => 1,
    };
    let tabs = Tabs::new(vec!["Old", "New"])
        .select(selected_tab)
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    let status = app.books();
    if !matches!(status, ViewStatus::Ready(_)) {
        frame.render_widget(status_paragraph(&status, "No books found."), list_area);
        return;
    }

    let selected_id = app.store().selection().book_id().map(str::to_string);
    let items: Vec<ListItem> = app
        .tab_books()
        .into_iter()
        .map(|book| {
            let style = if selected_id.as_deref() == Some(book.id.as_str()) {
                Style::default().fg(ACCENT)
            } else {
                Style::default().fg(BODY_TEXT)
            };
            ListItem::new(Span::styled(book.name, style))
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.book_cursor()));
    frame.render_stateful_widget(
        highlighted_list(items, Block::default()),
        list_area,
        &mut state,
    );
}

fn draw_chapters(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = panel(" Chapter ".to_string(), app.focus() == ReaderFocus::Chapters);

    if app.store().book().is_none() {
        let hint = Paragraph::new(Line::styled("Pick a book", Style::default().fg(MUTED_TEXT)))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let status = app.chapters();
    let ViewStatus::Ready(chapters) = &status else {
        frame.render_widget(
            status_paragraph(&status, "No chapters.").block(block),
            area,
        );
        return;
    };

    let items: Vec<ListItem> = chapters
        .iter()
        .map(|c| ListItem::new(Span::styled(c.number.clone(), Style::default().fg(BODY_TEXT))))
        .collect();
    let mut state = ListState::default().with_selected(Some(app.chapter_cursor()));
    frame.render_stateful_widget(highlighted_list(items, block), area, &mut state);
}

fn draw_content(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == ReaderFocus::Content;
    let Some(chapter) = app.store().chapter() else {
        let hint = Paragraph::new(Line::styled(
            "Pick a chapter to start reading.",
            Style::default().fg(MUTED_TEXT),
        ))
        .block(panel(" Text ".to_string(), focused));
        frame.render_widget(hint, area);
        return;
    };

    let status = app.content();
    let title = match &status {
        ViewStatus::Ready(content) if !content.reference.is_empty() => {
            format!(" {} ", content.reference)
        }
        _ => format!(" {} ", chapter.reference),
    };
    let block = panel(title, focused);

    let ViewStatus::Ready(content) = &status else {
        frame.render_widget(
            status_paragraph(&status, "This chapter has no text.").block(block),
            area,
        );
        return;
    };

    let mut lines: Vec<Line> = content
        .content
        .lines()
        .map(|line| Line::styled(line.trim_end().to_string(), Style::default().fg(BODY_TEXT)))
        .collect();
    if !content.copyright.trim().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            content.copyright.trim().to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ));
    }

    let max_scroll = (lines.len() as u16).saturating_sub(1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.content_scroll().min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (input_area, results_area) = search_rows(area);
    let search = app.search_state();

    let input = Paragraph::new(Line::from(vec![
        Span::styled(search.input.clone(), Style::default().fg(BODY_TEXT)),
        Span::styled("▏", Style::default().fg(ACCENT)),
    ]))
    .block(panel(" Search ".to_string(), true));
    frame.render_widget(input, input_area);

    let Some(query) = search.query() else {
        let hint = Paragraph::new(Line::styled(
            "Type a word or phrase and press Enter.",
            Style::default().fg(MUTED_TEXT),
        ))
        .block(panel(" Results ".to_string(), false));
        frame.render_widget(hint, results_area);
        return;
    };

    let status = app.search_results();
    let paginator = app.search_paginator();
    let title = match paginator {
        Some(pages) if pages.total_pages() > 1 => format!(
            " Results for \"{}\" (page {} of {}) ",
            query,
            search.page,
            pages.total_pages()
        ),
        _ => format!(" Results for \"{}\" ", query),
    };
    let block = panel(title, false);

    let (ViewStatus::Ready(hits), Some(pages)) = (&status, paginator) else {
        let empty = format!("No results found for \"{}\"", query);
        frame.render_widget(status_paragraph(&status, &empty).block(block), results_area);
        return;
    };

    let mut lines = Vec::new();
    for hit in pages.page_items(*hits, search.page).unwrap_or(&[]) {
        lines.push(Line::styled(
            hit.reference.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::styled(
            format!("  {}", hit.text.trim()),
            Style::default().fg(BODY_TEXT),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        results_area,
    );
}
