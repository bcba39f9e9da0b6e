use crate::config::ThemeStore;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub const SUN_ICON: &str = "☀";
pub const MOON_ICON: &str = "☾";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn inverted(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Visibility of the sun/moon indicator pair. Exactly one is visible
/// for any applied theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeIcons {
    pub sun_visible: bool,
    pub moon_visible: bool,
}

/// The rendered surface's view of the theme: the applied marker plus
/// the optional indicator pair. This is what the renderer consults,
/// and what a toggle inspects — never the store.
#[derive(Debug)]
pub struct ThemeState {
    applied: Theme,
    icons: Option<ThemeIcons>,
}

impl ThemeState {
    pub fn new(icons_present: bool) -> Self {
        Self {
            applied: Theme::default(),
            icons: icons_present.then_some(ThemeIcons {
                sun_visible: true,
                moon_visible: false,
            }),
        }
    }

    pub fn applied(&self) -> Theme {
        self.applied
    }

    pub fn icons(&self) -> Option<ThemeIcons> {
        self.icons
    }

    fn apply(&mut self, theme: Theme) {
        self.applied = theme;
        if let Some(icons) = &mut self.icons {
            icons.sun_visible = theme == Theme::Light;
            icons.moon_visible = theme == Theme::Dark;
        }
    }
}

/// Keeps the persisted preference and the rendered surface in
/// agreement. All mutations go through [`apply`](ThemeController::apply).
#[derive(Debug)]
pub struct ThemeController<S: ThemeStore> {
    store: S,
    state: ThemeState,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Loads the saved preference (default light) and applies it before
    /// anything is drawn.
    pub fn init(store: S, icons_present: bool) -> Self {
        let saved = store.load().unwrap_or_default();
        let mut controller = Self {
            store,
            state: ThemeState::new(icons_present),
        };
        controller.apply(saved);
        controller
    }

    pub fn theme(&self) -> Theme {
        self.state.applied()
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    /// Persist `theme`, then mirror it onto the surface state and the
    /// indicator pair. Applying the same value twice is observably the
    /// same as applying it once.
    pub fn apply(&mut self, theme: Theme) {
        let _ = self.store.save(theme);
        self.state.apply(theme);
    }

    /// Invert whatever the surface currently shows. Deliberately does
    /// not re-read the store, so a drifted store can never make the
    /// toggle disagree with the displayed state.
    pub fn toggle(&mut self) {
        self.apply(self.state.applied().inverted());
    }

    pub fn palette(&self) -> Palette {
        Palette::of(self.state.applied())
    }
}

/// Resolved ratatui styles for the applied theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Whole-frame background fill.
    pub base: Style,
    /// Regular body text.
    pub text: Style,
    /// Brand, headings, active nav link.
    pub accent: Style,
    /// Help line, separators, de-emphasized chrome.
    pub dim: Style,
    /// Panel borders.
    pub border: Style,
    /// The typed-skills terminal panel interior.
    pub terminal: Style,
}

impl Palette {
    pub fn of(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                base: Style::new().bg(Color::White).fg(Color::Black),
                text: Style::new().fg(Color::Black),
                accent: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
                dim: Style::new().fg(Color::DarkGray),
                border: Style::new().fg(Color::DarkGray),
                terminal: Style::new().bg(Color::Black).fg(Color::Green),
            },
            Theme::Dark => Self {
                base: Style::new().bg(Color::Black).fg(Color::Gray),
                text: Style::new().fg(Color::Gray),
                accent: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                dim: Style::new().fg(Color::DarkGray),
                border: Style::new().fg(Color::DarkGray),
                terminal: Style::new().bg(Color::Black).fg(Color::Green),
            },
        }
    }
}
