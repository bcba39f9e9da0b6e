/// Canonical file name the empty path resolves to.
pub const HOME_PAGE: &str = "index.html";

/// What a navigation link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// `"#"` — points nowhere, activation is a no-op.
    BareFragment,
    /// `"#id"` — a section on the current page.
    Fragment(&'a str),
    /// `http(s)://…` — opened in the system browser.
    External(&'a str),
    /// Anything else — another content page.
    Page(&'a str),
}

pub fn classify(href: &str) -> LinkTarget<'_> {
    if href == "#" {
        LinkTarget::BareFragment
    } else if let Some(id) = href.strip_prefix('#') {
        LinkTarget::Fragment(id)
    } else if href.starts_with("http://") || href.starts_with("https://") {
        LinkTarget::External(href)
    } else {
        LinkTarget::Page(href)
    }
}

/// Reduce a location path to a file name: final `/`-separated segment,
/// defaulting to the home page when empty.
pub fn file_name(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.is_empty() {
        HOME_PAGE
    } else {
        name
    }
}

/// Whether a navigation link should be marked active for the current
/// location. Only page links are ever active; the comparison is by
/// file name on both sides, so re-evaluation marks the same single
/// link every time.
pub fn is_active(href: &str, current_path: &str) -> bool {
    match classify(href) {
        LinkTarget::Page(dest) => file_name(dest) == file_name(current_path),
        _ => false,
    }
}

/// Body viewport offset that glides toward a requested target line a
/// bit each tick instead of jumping.
#[derive(Debug, Default)]
pub struct SmoothScroll {
    offset: u16,
    target: Option<u16>,
}

impl SmoothScroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_gliding(&self) -> bool {
        self.target.is_some()
    }

    /// Begin gliding toward `line`.
    pub fn glide_to(&mut self, line: u16) {
        self.target = Some(line);
    }

    /// Manual scrolling: move immediately and cancel any pending glide.
    pub fn nudge(&mut self, delta: i32, max: u16) {
        self.target = None;
        let next = i64::from(self.offset) + i64::from(delta);
        self.offset = next.clamp(0, i64::from(max)) as u16;
    }

    /// Reset to the top, cancelling any glide.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.target = None;
    }

    /// Advance one tick of the glide. Returns true when the offset
    /// moved, so the caller knows a redraw is due.
    pub fn on_tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        if target == self.offset {
            self.target = None;
            return false;
        }
        let distance = i32::from(target) - i32::from(self.offset);
        // quarter of the remaining distance per tick, at least one line
        let step = (distance.abs() / 4).max(1) * distance.signum();
        self.offset = (i32::from(self.offset) + step) as u16;
        if self.offset == target {
            self.target = None;
        }
        true
    }
}
