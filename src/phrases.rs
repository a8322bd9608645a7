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

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../locales/phrases.ron");

/// The localized strings for one locale.
///
/// Every field is required, so a locale that is missing a key fails to load
/// instead of leaving English text half translated.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Phrases {
    /// The locale code written into `lang` attributes and image paths.
    pub lang: String,
    pub title: String,
    pub meta_desc: String,
    pub og_title: String,
    pub og_desc: String,
    pub twitter_title: String,
    pub twitter_desc: String,
    pub hero_sub: String,
    pub banner_alt: String,
    pub play_now: String,
    pub preview_title: String,
    pub pc_msg: String,
    pub mobile_msg: String,
    pub packs_title: String,
    pub card_1_title: String,
    pub card_1_sub: String,
    pub card_1_desc: String,
    pub ready_title: String,
    pub available: String,
    pub appstore_alt: String,
    pub playstore_alt: String,
    pub back: String,
    pub footer_dev: String,
}

#[derive(Error, Debug)]
pub enum PhrasebookError {
    #[error("phrasebook: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("phrasebook: '{code}' declares lang '{lang}'")]
    LangMismatch { code: String, lang: String },
}

/// Locale code to phrases.
#[derive(Clone, Debug, Default)]
pub struct Phrasebook(BTreeMap<String, Phrases>);

impl Phrasebook {
    /// Loads the phrasebook compiled into the binary.
    ///
    /// # Errors
    ///
    /// If `locales/phrases.ron` is malformed or a locale is missing a key.
    pub fn embedded() -> Result<Self, PhrasebookError> {
        Self::from_ron(EMBEDDED)
    }

    /// # Errors
    ///
    /// If `source` is malformed, a locale is missing a key, or a locale's
    /// `lang` disagrees with its own code.
    pub fn from_ron(source: &str) -> Result<Self, PhrasebookError> {
        let book: BTreeMap<String, Phrases> = ron::from_str(source)?;

        for (code, phrases) in &book {
            if *code != phrases.lang {
                return Err(PhrasebookError::LangMismatch {
                    code: code.clone(),
                    lang: phrases.lang.clone(),
                });
            }
        }

        Ok(Self(book))
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Phrases> {
        self.0.get(code)
    }

    pub fn insert(&mut self, phrases: Phrases) {
        self.0.insert(phrases.lang.clone(), phrases);
    }

    #[must_use]
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
