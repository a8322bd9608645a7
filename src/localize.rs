// This file is part of lovemarble-site-tools.
//
// lovemarble-site-tools is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// lovemarble-site-tools is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use regex::{NoExpand, Regex};

use crate::{
    locale::{PAGE_LOCALES, is_page, locale_for_page},
    phrases::{Phrasebook, Phrases},
    rules::{Matcher, RULES},
};

/// The `folder:` entry of the in-page `IMG_CONFIG` object.
const IMG_CONFIG_FOLDER: &str = r#"folder:\s*"\./images/.{0,10}","#;
const HTML_LANG: &str = r#"<html lang="[^"]+">"#;

/// The default app icon, optionally already under a page locale's folder.
fn icon_path_pattern() -> String {
    let mut locales: Vec<&str> = PAGE_LOCALES.iter().map(|(_, locale)| *locale).collect();
    locales.sort_unstable();
    locales.dedup();

    let locales: Vec<String> = locales.into_iter().map(regex::escape).collect();
    format!(r"images/(?:(?:{})/)?icon\.png", locales.join("|"))
}

enum Compiled {
    Literal(&'static str),
    Pattern(Regex),
}

pub struct Localizer {
    icon_path: Regex,
    img_config_folder: Regex,
    html_lang: Regex,
    rules: Vec<(Compiled, fn(&Phrases) -> String)>,
}

impl Localizer {
    /// # Errors
    ///
    /// If one of the patterns fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(RULES.len());

        for rule in RULES {
            let compiled = match rule.matcher {
                Matcher::Literal(source) => Compiled::Literal(source),
                Matcher::Pattern(pattern) => Compiled::Pattern(Regex::new(pattern)?),
            };
            rules.push((compiled, rule.render));
        }

        Ok(Self {
            icon_path: Regex::new(&icon_path_pattern())?,
            img_config_folder: Regex::new(IMG_CONFIG_FOLDER)?,
            html_lang: Regex::new(HTML_LANG)?,
            rules,
        })
    }

    /// Translates one page's text. Rules whose English source is absent are
    /// skipped.
    #[must_use]
    pub fn localize(&self, text: &str, phrases: &Phrases) -> String {
        let lang = phrases.lang.as_str();

        let icon = format!("images/{lang}/icon.png");
        let mut text = self
            .icon_path
            .replace_all(text, NoExpand(&icon))
            .into_owned();

        // Always overwritten with the current locale, whatever it held before.
        let folder = format!(r#"folder: "./images/{lang}/","#);
        text = self
            .img_config_folder
            .replace_all(&text, NoExpand(&folder))
            .into_owned();

        for (matcher, render) in &self.rules {
            match matcher {
                Compiled::Literal(source) => {
                    if text.contains(*source) {
                        text = text.replace(*source, &render(phrases));
                    }
                }
                Compiled::Pattern(regex) => {
                    let replacement = render(phrases);
                    text = regex
                        .replace_all(&text, NoExpand(&replacement))
                        .into_owned();
                }
            }
        }

        let html = format!(r#"<html lang="{lang}">"#);
        self.html_lang
            .replace_all(&text, NoExpand(&html))
            .into_owned()
    }

    /// Translates the page at `path` in place.
    ///
    /// # Errors
    ///
    /// If the page can't be read as UTF-8 or can't be written back.
    pub fn localize_file(&self, path: &Path, phrases: &Phrases) -> io::Result<()> {
        let text = fs::read_to_string(path)?;
        let localized = self.localize(&text, phrases);

        if localized == text {
            debug!("{} is already up to date", path.display());
            return Ok(());
        }

        fs::write(path, localized)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub translated: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Translates every mapped `lovemarble_*.html` page directly under `root`.
///
/// Unmapped pages, pages whose locale has no phrases, and pages that fail to
/// read or write are logged and left alone.
///
/// # Errors
///
/// If `root` can't be listed.
pub fn localize_pages(
    root: &Path,
    phrasebook: &Phrasebook,
    localizer: &Localizer,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut pages = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                error!("Error listing {}: {err}", root.display());
                continue;
            }
        };
        let name = entry.file_name();

        let Some(name) = name.to_str().filter(|name| is_page(name)) else {
            continue;
        };

        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => pages.push((name.to_string(), entry.path())),
            Ok(_) => {}
            Err(err) => {
                error!("Error reading {name}: {err}");
                summary.failed.push(entry.path());
            }
        }
    }
    pages.sort();

    for (name, path) in pages {
        let Some(locale) = locale_for_page(&name) else {
            info!("Skipping {name}");
            summary.skipped.push(path);
            continue;
        };

        let Some(phrases) = phrasebook.get(locale) else {
            warn!("No translations for {locale}, skipping {name}");
            summary.skipped.push(path);
            continue;
        };

        info!("Translating {name} -> {locale}");
        match localizer.localize_file(&path, phrases) {
            Ok(()) => summary.translated.push(path),
            Err(err) => {
                error!("Error translating {name}: {err}");
                summary.failed.push(path);
            }
        }
    }

    Ok(summary)
}
