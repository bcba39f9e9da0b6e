pub mod animator;
pub mod config;
pub mod content;
pub mod menu;
pub mod nav;
pub mod runtime;
pub mod theme;
pub mod ui;

use crate::{
    animator::Animator,
    config::{FileThemeStore, ThemeStore},
    content::{Page, Site},
    menu::MenuController,
    nav::{LinkTarget, SmoothScroll},
    runtime::{CrosstermEventSource, FixedTicker, FolioEvent, Runner},
    theme::{Theme, ThemeController},
    ui::HitMap,
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};
use webbrowser::Browser;

const TICK_RATE_MS: u64 = 50;

/// terminal portfolio with a typed-skills animation and light/dark theming
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal portfolio that renders its pages in a TUI: a typed-skills animation, a persisted light/dark theme, a collapsible navigation menu, and mouse-driven links."
)]
pub struct Cli {
    /// page to open at startup, by file name (e.g. "projects.html")
    #[clap(short, long, default_value = "")]
    page: String,

    /// force a theme for this run instead of the saved preference
    #[clap(short, long, value_enum)]
    theme: Option<CliTheme>,

    /// disable the typed-skills animation
    #[clap(long)]
    no_typing: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum CliTheme {
    Light,
    Dark,
}

impl CliTheme {
    fn as_theme(&self) -> Theme {
        match self {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug)]
pub struct App<S: ThemeStore> {
    pub site: Site,
    pub current_page: usize,
    pub theme: ThemeController<S>,
    pub menu: Option<MenuController>,
    pub animator: Option<Animator>,
    pub scroll: SmoothScroll,
    pub hits: HitMap,
    anim_wait: Duration,
    body_height: u16,
}

impl<S: ThemeStore> App<S> {
    pub fn new(site: Site, store: S, cli: &Cli) -> Self {
        let mut theme = ThemeController::init(store, true);
        if let Some(forced) = cli.theme {
            theme.apply(forced.as_theme());
        }

        let current_page = site
            .page(nav::file_name(&cli.page))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let animator = (!cli.no_typing)
            .then(|| Animator::new(site.skills.clone()))
            .flatten();
        let menu = (!site.nav.is_empty()).then(MenuController::new);

        Self {
            site,
            current_page,
            theme,
            menu,
            animator,
            scroll: SmoothScroll::default(),
            hits: HitMap::default(),
            anim_wait: animator::BOOT_DELAY,
            body_height: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.site.pages[self.current_page]
    }

    pub fn current_file(&self) -> &str {
        &self.page().file
    }

    pub fn set_body_height(&mut self, height: u16) {
        self.body_height = height;
    }

    fn max_scroll(&self) -> u16 {
        let lines = self.page().line_count().min(usize::from(u16::MAX)) as u16;
        lines.saturating_sub(self.body_height)
    }

    /// Advance the timer-driven pieces. Returns true when something
    /// visible changed and a redraw is due.
    pub fn on_tick(&mut self, elapsed: Duration) -> bool {
        let mut dirty = false;
        if let Some(animator) = self.animator.as_mut() {
            if self.anim_wait <= elapsed {
                self.anim_wait = animator.step();
                dirty = true;
            } else {
                self.anim_wait -= elapsed;
            }
        }
        if self.scroll.on_tick() {
            dirty = true;
        }
        dirty
    }

    pub fn on_resize(&mut self, width: u16) {
        if let Some(menu) = self.menu.as_mut() {
            menu.on_resize(width);
        }
    }

    /// Click dispatch in listener-registration order. The menu toggle
    /// consumes its click, so opening the menu can never fall through
    /// to the outside-click rule that would immediately re-close it.
    pub fn on_click(&mut self, x: u16, y: u16) {
        if self.hits.hits_menu_toggle(x, y) {
            if let Some(menu) = self.menu.as_mut() {
                menu.toggle();
            }
            return;
        }
        if self.hits.hits_theme_toggle(x, y) {
            self.theme.toggle();
            return;
        }
        if let Some(idx) = self.hits.nav_link_at(x, y) {
            self.activate_link(idx);
            return;
        }
        if !self.hits.inside_nav_panel(x, y) {
            if let Some(menu) = self.menu.as_mut() {
                menu.on_outside_click();
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Esc | KeyCode::Char('q') => return false,
            KeyCode::Char('t') => self.theme.toggle(),
            KeyCode::Char('m') => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.toggle();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                self.activate_link(usize::from(c as u8 - b'1'));
            }
            KeyCode::Up => self.scroll_by(-1),
            KeyCode::Down => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-10),
            KeyCode::PageDown => self.scroll_by(10),
            KeyCode::Home => self.scroll.reset(),
            _ => {}
        }
        true
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll();
        self.scroll.nudge(delta, max);
    }

    /// Follow the navigation link at `idx`; any activation also closes
    /// an open menu.
    pub fn activate_link(&mut self, idx: usize) {
        let Some(link) = self.site.nav.get(idx) else {
            return;
        };
        let href = link.href.clone();
        match nav::classify(&href) {
            LinkTarget::BareFragment => {}
            LinkTarget::Fragment(id) => {
                if let Some(offset) = self.page().section_offset(id) {
                    let line = offset.min(usize::from(u16::MAX)) as u16;
                    self.scroll.glide_to(line.min(self.max_scroll()));
                }
            }
            LinkTarget::Page(dest) => {
                if let Some((idx, _)) = self.site.page(nav::file_name(dest)) {
                    self.current_page = idx;
                    self.scroll.reset();
                }
            }
            LinkTarget::External(url) => {
                if Browser::is_available() {
                    webbrowser::open(url).unwrap_or_default();
                }
            }
        }
        if let Some(menu) = self.menu.as_mut() {
            menu.on_link_activated();
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let site = Site::load()?;
    let mut app = App::new(site, FileThemeStore::new(), &cli);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend, S: ThemeStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), Box<dyn Error>> {
    let events = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );
    let tick = events.tick_interval();

    terminal.draw(|f| ui::draw(app, f))?;

    loop {
        match events.step() {
            FolioEvent::Tick => {
                if app.on_tick(tick) {
                    terminal.draw(|f| ui::draw(app, f))?;
                }
            }
            FolioEvent::Resize(width, _) => {
                app.on_resize(width);
                terminal.draw(|f| ui::draw(app, f))?;
            }
            FolioEvent::Click(x, y) => {
                app.on_click(x, y);
                terminal.draw(|f| ui::draw(app, f))?;
            }
            FolioEvent::Key(key) => {
                if !app.on_key(key) {
                    break;
                }
                terminal.draw(|f| ui::draw(app, f))?;
            }
        }
    }

    Ok(())
}
