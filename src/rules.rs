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

use crate::phrases::Phrases;

/// What a rule looks for in the English page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Matcher {
    /// Every exact occurrence of the string.
    Literal(&'static str),
    /// Every match of the regular expression.
    Pattern(&'static str),
}

impl Matcher {
    #[must_use]
    pub fn source(&self) -> &'static str {
        match self {
            Self::Literal(source) | Self::Pattern(source) => source,
        }
    }
}

/// An English source and the function that renders its localized form.
#[derive(Clone, Copy)]
pub struct Rule {
    pub matcher: Matcher,
    pub render: fn(&Phrases) -> String,
}

impl Rule {
    #[must_use]
    pub fn render(&self, phrases: &Phrases) -> String {
        (self.render)(phrases)
    }
}

/// Applied in order; a later rule sees the output of the earlier ones.
pub const RULES: [Rule; 22] = [
    Rule {
        matcher: Matcher::Literal(r#"<html lang="en">"#),
        render: |p| format!(r#"<html lang="{}">"#, p.lang),
    },
    Rule {
        matcher: Matcher::Literal("<title>Love Marble - The Ultimate Couple Game</title>"),
        render: |p| format!("<title>{}</title>", p.title),
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<meta name="description" content="An offline couple board game for 2 players on 1 device. Roll the dice, complete sweet missions, and build intimacy. Available on App Store and Google Play.">"#,
        ),
        render: |p| format!(r#"<meta name="description" content="{}">"#, p.meta_desc),
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<meta property="og:title" content="Love Marble - The Ultimate Couple Board Game">"#,
        ),
        render: |p| format!(r#"<meta property="og:title" content="{}">"#, p.og_title),
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<meta property="og:description" content="Spark your romance with the ultimate board game for couples! 16 languages supported. 100% private & no server required.">"#,
        ),
        render: |p| format!(r#"<meta property="og:description" content="{}">"#, p.og_desc),
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<meta name="twitter:title" content="Love Marble - Spark the Romance">"#,
        ),
        render: |p| format!(r#"<meta name="twitter:title" content="{}">"#, p.twitter_title),
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<meta name="twitter:description" content="The best board game for couples. Roll the dice and start your journey now!">"#,
        ),
        render: |p| {
            format!(
                r#"<meta name="twitter:description" content="{}">"#,
                p.twitter_desc
            )
        },
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<p style="font-size: 1.2rem; color: var(--text-secondary);">Roll the dice. Spark the romance.</p>"#,
        ),
        render: |p| {
            format!(
                r#"<p style="font-size: 1.2rem; color: var(--text-secondary);">{}</p>"#,
                p.hero_sub
            )
        },
    },
    Rule {
        matcher: Matcher::Literal(r#"<span class="alt-text">Main Banner Loading...</span>"#),
        render: |p| {
            let loading = if p.lang.starts_with("ko") {
                "로딩 중..."
            } else {
                "Loading..."
            };
            format!(r#"<span class="alt-text">{} {loading}</span>"#, p.banner_alt)
        },
    },
    Rule {
        matcher: Matcher::Literal(r##"<a href="#download" id="hero-down-btn" class="btn">Play Now</a>"##),
        render: |p| {
            format!(
                r##"<a href="#download" id="hero-down-btn" class="btn">{}</a>"##,
                p.play_now
            )
        },
    },
    Rule {
        matcher: Matcher::Literal(r#"<h2 class="section-title"><span>In-Game Preview</span></h2>"#),
        render: |p| {
            format!(
                r#"<h2 class="section-title"><span>{}</span></h2>"#,
                p.preview_title
            )
        },
    },
    Rule {
        matcher: Matcher::Literal(r#"<span class="pc-msg">&lt; Click Arrows to Scroll &gt;</span>"#),
        render: |p| format!(r#"<span class="pc-msg">{}</span>"#, p.pc_msg),
    },
    Rule {
        matcher: Matcher::Literal(r#"<span class="mobile-msg">Swipe left to explore -></span>"#),
        render: |p| format!(r#"<span class="mobile-msg">{}</span>"#, p.mobile_msg),
    },
    Rule {
        matcher: Matcher::Literal(
            r#"<h2 class="section-title"><span>Card Packs Collection</span></h2>"#,
        ),
        render: |p| {
            format!(
                r#"<h2 class="section-title"><span>{}</span></h2>"#,
                p.packs_title
            )
        },
    },
    Rule {
        matcher: Matcher::Literal("Ready to Play?"),
        render: |p| p.ready_title.clone(),
    },
    Rule {
        matcher: Matcher::Literal("Available on iOS & Android"),
        render: |p| p.available.clone(),
    },
    Rule {
        matcher: Matcher::Literal(r#"alt="Download on the App Store""#),
        render: |p| format!(r#"alt="{}""#, p.appstore_alt),
    },
    Rule {
        matcher: Matcher::Literal(r#"alt="Get it on Google Play""#),
        render: |p| format!(r#"alt="{}""#, p.playstore_alt),
    },
    Rule {
        matcher: Matcher::Literal("&copy; 2026 TERRION Games. <br>\n        Developed by Ian & Zonk."),
        render: |p| format!("&copy; 2026 TERRION Games. <br>\n        {}", p.footer_dev),
    },
    // Card packs
    Rule {
        matcher: Matcher::Pattern(r">🍭 SWEET</h3>"),
        render: |p| format!(">🍭 {}</h3>", p.card_1_title),
    },
    Rule {
        matcher: Matcher::Pattern(r">Romantic Spark</span>"),
        render: |p| format!(">{}</span>", p.card_1_sub),
    },
    Rule {
        matcher: Matcher::Pattern(
            r">Remember that first-date flutter\? Dive into sweet talk and romantic touches!</p>",
        ),
        render: |p| format!(">{}</p>", p.card_1_desc),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrases::Phrasebook;

    fn phrases(code: &str) -> anyhow::Result<Phrases> {
        Phrasebook::embedded()?
            .get(code)
            .cloned()
            .ok_or_else(|| anyhow::Error::msg(format!("no phrases for {code}")))
    }

    #[test]
    fn german_title() -> anyhow::Result<()> {
        let german = phrases("de")?;
        let rule = RULES
            .iter()
            .find(|rule| rule.matcher.source().starts_with("<title>"))
            .ok_or_else(|| anyhow::Error::msg("no title rule"))?;

        assert_eq!(
            rule.render(&german),
            "<title>Love Marble - Das ultimative Spiel für Paare</title>"
        );
        Ok(())
    }

    #[test]
    fn korean_banner_is_fully_translated() -> anyhow::Result<()> {
        let banner = &RULES[8];
        assert_eq!(
            banner.matcher,
            Matcher::Literal(r#"<span class="alt-text">Main Banner Loading...</span>"#)
        );

        assert_eq!(
            banner.render(&phrases("ko")?),
            r#"<span class="alt-text">메인 배너 로딩 중...</span>"#
        );
        assert_eq!(
            banner.render(&phrases("fr")?),
            r#"<span class="alt-text">Bannière principale Loading...</span>"#
        );
        Ok(())
    }

    #[test]
    fn patterns_compile() -> anyhow::Result<()> {
        for rule in RULES {
            if let Matcher::Pattern(pattern) = rule.matcher {
                regex::Regex::new(pattern)?;
            }
        }

        Ok(())
    }

    #[test]
    fn rendering_never_reproduces_a_source() -> anyhow::Result<()> {
        let book = Phrasebook::embedded()?;

        for code in book.locales() {
            let Some(phrases) = book.get(code) else {
                continue;
            };

            for rule in RULES {
                if let Matcher::Literal(source) = rule.matcher {
                    assert_ne!(rule.render(phrases), source, "{code}");
                }
            }
        }

        Ok(())
    }
}
