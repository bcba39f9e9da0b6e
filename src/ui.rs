use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeStore;
use crate::content::BodyLine;
use crate::menu::MENU_BREAKPOINT;
use crate::nav;
use crate::theme::{MOON_ICON, SUN_ICON};
use crate::App;

/// Screen regions that react to clicks, recorded on every draw so the
/// dispatcher can hit-test the most recent frame.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    pub theme_toggle: Option<Rect>,
    pub menu_toggle: Option<Rect>,
    pub nav_panel: Option<Rect>,
    pub nav_links: Vec<(usize, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn hit(rect: Option<Rect>, x: u16, y: u16) -> bool {
        rect.is_some_and(|r| r.contains(Position::new(x, y)))
    }

    pub fn hits_theme_toggle(&self, x: u16, y: u16) -> bool {
        Self::hit(self.theme_toggle, x, y)
    }

    pub fn hits_menu_toggle(&self, x: u16, y: u16) -> bool {
        Self::hit(self.menu_toggle, x, y)
    }

    pub fn inside_nav_panel(&self, x: u16, y: u16) -> bool {
        Self::hit(self.nav_panel, x, y)
    }

    pub fn nav_link_at(&self, x: u16, y: u16) -> Option<usize> {
        self.nav_links
            .iter()
            .find(|(_, rect)| rect.contains(Position::new(x, y)))
            .map(|(idx, _)| *idx)
    }
}

pub fn draw<S: ThemeStore>(app: &mut App<S>, f: &mut Frame) {
    let palette = app.theme.palette();
    let area = f.area();
    app.hits.clear();

    // whole-frame fill so the theme change is visible everywhere
    f.render_widget(Block::new().style(palette.base), area);

    let nav_visible = !app.site.nav.is_empty()
        && (area.width > MENU_BREAKPOINT || app.menu.as_ref().is_some_and(|m| m.is_open()));
    let terminal_visible = app.animator.is_some() && app.current_file() == nav::HOME_PAGE;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                    // header
            Constraint::Length(if nav_visible { 1 } else { 0 }),      // nav bar
            Constraint::Length(if terminal_visible { 3 } else { 0 }), // typed skills
            Constraint::Min(1),                                       // body
            Constraint::Length(1),                                    // help line
        ])
        .split(area);

    draw_header(app, f, chunks[0]);
    if nav_visible {
        draw_nav(app, f, chunks[1]);
    }
    if terminal_visible {
        draw_terminal(app, f, chunks[2]);
    }
    draw_body(app, f, chunks[3]);

    let help = Paragraph::new(" q quit · t theme · m menu · 1-9 links · ↑/↓ scroll")
        .style(palette.dim)
        .alignment(Alignment::Left);
    f.render_widget(help, chunks[4]);

    app.set_body_height(chunks[3].height.saturating_sub(1));
}

fn draw_header<S: ThemeStore>(app: &mut App<S>, f: &mut Frame, area: Rect) {
    let palette = app.theme.palette();

    let brand = format!(" {} · {}", app.site.brand, app.site.tagline);
    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(brand, palette.accent)])),
        area,
    );

    // right-aligned controls: [theme indicator] [menu toggle]
    let mut right = area.x + area.width;

    if app.menu.is_some() {
        let glyph = if app.menu.as_ref().is_some_and(|m| m.is_open()) {
            " ✕ "
        } else {
            " ≡ "
        };
        let w = glyph.width() as u16;
        right = right.saturating_sub(w);
        let rect = Rect::new(right, area.y, w, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                glyph,
                palette.accent.add_modifier(Modifier::REVERSED),
            )),
            rect,
        );
        app.hits.menu_toggle = Some(rect);
    }

    let icon = match app.theme.state().icons() {
        Some(icons) if icons.sun_visible => SUN_ICON,
        Some(_) => MOON_ICON,
        // control still works without the indicator pair
        None => "◐",
    };
    let label = format!(" {icon} ");
    let w = label.width() as u16;
    right = right.saturating_sub(w + 1);
    let rect = Rect::new(right, area.y, w, 1);
    f.render_widget(Paragraph::new(Span::styled(label, palette.text)), rect);
    app.hits.theme_toggle = Some(rect);
}

fn draw_nav<S: ThemeStore>(app: &mut App<S>, f: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    let current = app.current_file().to_string();

    let mut spans = vec![Span::raw(" ")];
    let mut x = area.x + 1;
    let mut links = Vec::new();

    for (idx, link) in app.site.nav.iter().enumerate() {
        let label = format!("{}:{}", idx + 1, link.label);
        let width = label.width() as u16;
        let style = if nav::is_active(&link.href, &current) {
            palette.accent.add_modifier(Modifier::UNDERLINED)
        } else {
            palette.text
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
        links.push((idx, Rect::new(x, area.y, width, 1)));
        x += width + 2;
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(palette.dim.add_modifier(Modifier::REVERSED)),
        area,
    );
    app.hits.nav_panel = Some(area);
    app.hits.nav_links = links;
}

fn draw_terminal<S: ThemeStore>(app: &mut App<S>, f: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    let typed = app
        .animator
        .as_ref()
        .map(|a| a.display().to_string())
        .unwrap_or_default();

    let block = Block::new()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(" skills ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("$ "),
            Span::raw(typed),
            Span::styled("█", palette.terminal.add_modifier(Modifier::SLOW_BLINK)),
        ]))
        .style(palette.terminal),
        inner,
    );
}

fn draw_body<S: ThemeStore>(app: &mut App<S>, f: &mut Frame, area: Rect) {
    let palette = app.theme.palette();
    let page = app.page();

    let lines: Vec<Line> = page
        .lines()
        .into_iter()
        .map(|line| match line {
            BodyLine::Heading(text) => Line::from(Span::styled(
                format!("## {text}"),
                palette.accent.add_modifier(Modifier::UNDERLINED),
            )),
            BodyLine::Text(text) => Line::from(Span::styled(text, palette.text)),
            BodyLine::Blank => Line::default(),
        })
        .collect();

    let body = Paragraph::new(lines)
        .block(
            Block::new()
                .borders(Borders::TOP)
                .border_style(palette.border)
                .title(format!(" {} ", page.title)),
        )
        .scroll((app.scroll.offset(), 0));
    f.render_widget(body, area);
}
