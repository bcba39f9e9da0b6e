use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static CONTENT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/content");

#[derive(Deserialize, Clone, Debug)]
pub struct Site {
    pub brand: String,
    pub tagline: String,
    /// Phrases cycled by the typed-skills panel on the home page.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    pub pages: Vec<Page>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Page {
    /// File name the page answers to, e.g. `"index.html"`.
    pub file: String,
    pub title: String,
    pub sections: Vec<Section>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Section {
    pub id: String,
    pub heading: String,
    pub body: Vec<String>,
}

/// One rendered line of a page body. The flattened form is shared by
/// the renderer and the fragment resolver so scroll targets line up
/// with what is drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyLine {
    Heading(String),
    Text(String),
    Blank,
}

impl Site {
    pub fn load() -> Result<Self, Box<dyn Error>> {
        read_site_file("site.json")
    }

    /// Look up a page by file name.
    pub fn page(&self, file: &str) -> Option<(usize, &Page)> {
        self.pages.iter().find_position(|p| p.file == file)
    }
}

impl Page {
    /// Flatten the sections into the exact line sequence the renderer
    /// draws: heading, blank, body lines, trailing blank.
    pub fn lines(&self) -> Vec<BodyLine> {
        let mut lines = Vec::new();
        for section in &self.sections {
            lines.push(BodyLine::Heading(section.heading.clone()));
            lines.push(BodyLine::Blank);
            for text in &section.body {
                lines.push(BodyLine::Text(text.clone()));
            }
            lines.push(BodyLine::Blank);
        }
        lines
    }

    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.body.len() + 3).sum()
    }

    /// Line offset of the section with the given id, i.e. the index of
    /// its heading within [`lines`](Self::lines).
    pub fn section_offset(&self, id: &str) -> Option<usize> {
        let mut offset = 0;
        for section in &self.sections {
            if section.id == id {
                return Some(offset);
            }
            offset += section.body.len() + 3;
        }
        None
    }
}

fn read_site_file(file_name: &str) -> Result<Site, Box<dyn Error>> {
    let file = CONTENT_DIR
        .get_file(file_name)
        .ok_or("site content file not found")?;

    let file_as_str = file
        .contents_utf8()
        .ok_or("unable to interpret site content as a string")?;

    let site: Site = from_str(file_as_str)?;
    if site.pages.is_empty() {
        return Err("site content declares no pages".into());
    }
    Ok(site)
}
