use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::app::{Model, Prompt};

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut all_lines: Vec<Line> = Vec::new();

    all_lines.push(Line::styled(
        format!("{} {}", crate::editor::APP_NAME, env!("CARGO_PKG_VERSION")),
        section_style,
    ));
    all_lines.push(Line::raw("  Ultra-minimal text editor"));
    all_lines.push(Line::raw("  No Markdown, no nonsense."));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("File", section_style));
    all_lines.push(Line::raw("  Ctrl+N              New"));
    all_lines.push(Line::raw("  Ctrl+O              Open"));
    all_lines.push(Line::raw("  Ctrl+S              Save"));
    all_lines.push(Line::raw("  Ctrl+Shift+S / F12  Save As"));
    all_lines.push(Line::raw("  Ctrl+Q              Quit"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Edit", section_style));
    all_lines.push(Line::raw("  Ctrl+X / C / V      Cut / Copy / Paste"));
    all_lines.push(Line::raw("  Ctrl+A              Select all"));
    all_lines.push(Line::raw("  Shift+Arrows        Extend selection"));
    all_lines.push(Line::raw("  Ctrl+Left/Right     Word movement"));
    all_lines.push(Line::raw("  Ctrl+Home/End       Document start / end"));
    all_lines.push(Line::raw("  Mouse drag          Select text"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("View", section_style));
    all_lines.push(Line::raw("  Ctrl+W / Alt+Z      Toggle word wrap"));
    all_lines.push(Line::raw("  F1                  Toggle help"));
    all_lines.push(Line::raw(""));

    all_lines.push(Line::styled("Config", section_style));
    all_lines.push(Line::raw(format!("  Global: {global_cfg}")));
    all_lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    // Inner area: border(1) + padding(1) on each side = 4
    let inner = Rect::new(
        popup.x + 2,
        popup.y + 2,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(4),
    );

    // Reserve 1 row at bottom for footer hint
    let content_height = inner.height.saturating_sub(1);
    let visible: Vec<Line> = all_lines
        .into_iter()
        .take(usize::from(content_height))
        .collect();
    let content_area = Rect::new(inner.x, inner.y, inner.width, content_height);
    frame.render_widget(Paragraph::new(visible), content_area);

    let footer_area = Rect::new(inner.x, inner.y + content_height, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled("Esc closes", dim_style)),
        footer_area,
    );
}

pub fn render_prompt_overlay(prompt: &Prompt, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(16).clamp(24, 72);
    let popup = centered_popup_rect(popup_width, 9, area);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines = vec![Line::raw(prompt.message())];
    if let Some(input) = prompt.input() {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.to_string()),
            Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(prompt.hint(), dim_style));

    let block = Block::default()
        .title(prompt.title())
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        popup,
    );
}

pub fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
