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

pub const PAGE_PREFIX: &str = "lovemarble_";
pub const PAGE_SUFFIX: &str = ".html";

/// Every localized page and the phrasebook locale it is translated into.
///
/// Both Spanish pages share the `es` phrases.
pub const PAGE_LOCALES: [(&str, &str); 15] = [
    ("lovemarble_de.html", "de"),
    ("lovemarble_fr.html", "fr"),
    ("lovemarble_es-ES.html", "es"),
    ("lovemarble_es-MX.html", "es"),
    ("lovemarble_it.html", "it"),
    ("lovemarble_ja.html", "ja"),
    ("lovemarble_zh-TW.html", "zh-TW"),
    ("lovemarble_th.html", "th"),
    ("lovemarble_vi.html", "vi"),
    ("lovemarble_id.html", "id"),
    ("lovemarble_hi.html", "hi"),
    ("lovemarble_pt-BR.html", "pt-BR"),
    ("lovemarble_ru.html", "ru"),
    ("lovemarble_tr.html", "tr"),
    ("lovemarble_ko.html", "ko"),
];

#[must_use]
pub fn locale_for_page(file_name: &str) -> Option<&'static str> {
    PAGE_LOCALES
        .iter()
        .find(|(page, _)| *page == file_name)
        .map(|(_, locale)| *locale)
}

/// Whether `file_name` looks like a site page, `lovemarble_*.html`.
#[must_use]
pub fn is_page(file_name: &str) -> bool {
    file_name.len() >= PAGE_PREFIX.len() + PAGE_SUFFIX.len()
        && file_name.starts_with(PAGE_PREFIX)
        && file_name.ends_with(PAGE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::Phrasebook;

    #[test]
    fn spanish_pages_share_phrases() {
        assert_eq!(locale_for_page("lovemarble_es-ES.html"), Some("es"));
        assert_eq!(locale_for_page("lovemarble_es-MX.html"), Some("es"));
    }

    #[test]
    fn english_page_is_not_mapped() {
        assert!(is_page("lovemarble_en.html"));
        assert_eq!(locale_for_page("lovemarble_en.html"), None);
        assert_eq!(locale_for_page("lovemarble.html"), None);
    }

    #[test]
    fn page_names() {
        assert!(is_page("lovemarble_.html"));
        assert!(!is_page("lovemarble.html"));
        assert!(!is_page("lovemarble_de.htm"));
        assert!(!is_page("index.html"));
    }

    #[test]
    fn every_mapped_locale_has_phrases() -> anyhow::Result<()> {
        let book = Phrasebook::embedded()?;

        for (page, locale) in PAGE_LOCALES {
            assert!(book.get(locale).is_some(), "{page} maps to {locale}");
        }

        Ok(())
    }
}
