// crates/countrypicker-core/src/locale.rs

//! # Locale
//!
//! A small, dependency-free locale value: a lower-case language subtag and an
//! optional upper-case region subtag. It is all the picker needs to pick a
//! translation, tailor case folding and choose a default country.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variables consulted by [`Locale::from_env`], in POSIX priority order.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Build a locale from a language and optional region subtag.
    ///
    /// Subtags are normalized: language to lower case, region to upper case.
    pub fn new(language: &str, region: Option<&str>) -> Self {
        let language = language.trim().to_ascii_lowercase();
        let region = region
            .map(|r| r.trim().to_ascii_uppercase())
            .filter(|r| !r.is_empty());
        Locale { language, region }
    }

    /// Parse a BCP 47 tag (`pt-BR`, `zh-Hant-TW`) or a POSIX locale name
    /// (`de_CH.UTF-8`, `sr_RS@latin`).
    ///
    /// Parsing never fails: `C`, `POSIX` and empty input map to plain `en`.
    ///
    /// ```rust
    /// use countrypicker_core::Locale;
    ///
    /// let l = Locale::parse("de_CH.UTF-8");
    /// assert_eq!(l.language(), "de");
    /// assert_eq!(l.region(), Some("CH"));
    /// assert_eq!(Locale::parse("zh-Hant-TW").tag(), "zh-TW");
    /// ```
    pub fn parse(tag: &str) -> Self {
        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());
        let language = parts.next().unwrap_or_default();
        if language.is_empty()
            || language.eq_ignore_ascii_case("c")
            || language.eq_ignore_ascii_case("posix")
        {
            return Locale::new("en", None);
        }

        let region = parts.find(|p| is_region_subtag(p));
        Locale::new(language, region)
    }

    /// The locale of the running process, read from `LC_ALL`, `LC_MESSAGES`
    /// and `LANG`. Falls back to [`Locale::default`] (`en-US`).
    pub fn from_env() -> Self {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|v| !v.trim().is_empty())
            .map(|v| Locale::parse(&v))
            .unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Region subtag, e.g. `"NG"`; doubles as the ISO 3166-1 code of the
    /// user's country when choosing a default selection.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Normalized tag in `language-REGION` form.
    pub fn tag(&self) -> String {
        match &self.region {
            Some(region) => format!("{}-{}", self.language, region),
            None => self.language.clone(),
        }
    }

    /// Turkish and Azerbaijani map `i`/`I` to dotted/dotless forms.
    pub(crate) fn has_turkic_casing(&self) -> bool {
        matches!(self.language.as_str(), "tr" | "az")
    }
}

fn is_region_subtag(p: &str) -> bool {
    (p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
        || (p.len() == 3 && p.chars().all(|c| c.is_ascii_digit()))
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en", Some("US"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

impl FromStr for Locale {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::parse(s))
    }
}

impl From<String> for Locale {
    fn from(s: String) -> Self {
        Locale::parse(&s)
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Locale::parse(s)
    }
}

impl From<Locale> for String {
    fn from(l: Locale) -> Self {
        l.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_posix_and_bcp47_forms() {
        assert_eq!(Locale::parse("en_GB.UTF-8"), Locale::new("en", Some("GB")));
        assert_eq!(Locale::parse("pt-br"), Locale::new("pt", Some("BR")));
        assert_eq!(Locale::parse("sr_RS@latin").tag(), "sr-RS");
        assert_eq!(Locale::parse("es-419").region(), Some("419"));
        assert_eq!(Locale::parse("fr").region(), None);
    }

    #[test]
    fn c_locale_is_plain_english() {
        assert_eq!(Locale::parse("C"), Locale::new("en", None));
        assert_eq!(Locale::parse("POSIX.UTF-8"), Locale::new("en", None));
        assert_eq!(Locale::parse(""), Locale::new("en", None));
    }

    #[cfg(feature = "json")]
    #[test]
    fn serde_uses_the_tag() {
        let json = serde_json::to_string(&Locale::new("tr", Some("tr"))).unwrap();
        assert_eq!(json, "\"tr-TR\"");
        let back: Locale = serde_json::from_str("\"de_AT\"").unwrap();
        assert_eq!(back, Locale::new("de", Some("AT")));
    }
}
