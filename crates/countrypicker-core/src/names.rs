// crates/countrypicker-core/src/names.rs
use crate::locale::Locale;
use crate::model::Country;
use serde::{Deserialize, Serialize};

/// Resolves the name shown for a country under a locale.
///
/// Implementations must be pure and must always return a non-empty name;
/// the natural fallback is [`Country::name`].
///
/// # Examples
/// ```rust
/// use countrypicker_core::{Country, Locale, NameResolver, NameStyle};
///
/// let de = Country::new("Germany", "DE", "+49").with_translation("de", "Deutschland");
/// let locale = Locale::parse("de_AT");
///
/// assert_eq!(NameStyle::Localized.display_name(&de, &locale), "Deutschland");
/// assert_eq!(NameStyle::Localized.display_name(&de, &Locale::parse("sw")), "Germany");
/// assert_eq!(NameStyle::Canonical.display_name(&de, &locale), "Germany");
/// ```
pub trait NameResolver {
    fn display_name<'a>(&self, country: &'a Country, locale: &Locale) -> &'a str;
}

/// Built-in naming strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// Translation for the locale's full tag, then its language, then the
    /// canonical name.
    #[default]
    Localized,
    /// The country's own name for itself, then the canonical name.
    Native,
    /// Always the canonical dataset name.
    Canonical,
}

impl NameResolver for NameStyle {
    fn display_name<'a>(&self, country: &'a Country, locale: &Locale) -> &'a str {
        let resolved = match self {
            NameStyle::Localized => country
                .translation(&locale.tag())
                .or_else(|| country.translation(locale.language())),
            NameStyle::Native => country.native_name(),
            NameStyle::Canonical => None,
        };
        resolved
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| country.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brazil() -> Country {
        Country::new("Brazil", "BR", "+55")
            .with_native_name("Brasil")
            .with_translation("pt", "Brasil")
            .with_translation("pt-PT", "Brasil (PT)")
            .with_translation("fr", "Brésil")
    }

    #[test]
    fn full_tag_wins_over_language() {
        let c = brazil();
        assert_eq!(
            NameStyle::Localized.display_name(&c, &Locale::parse("pt_PT")),
            "Brasil (PT)"
        );
        assert_eq!(
            NameStyle::Localized.display_name(&c, &Locale::parse("pt-BR")),
            "Brasil"
        );
    }

    #[test]
    fn native_falls_back_to_canonical() {
        let c = brazil();
        let plain = Country::new("Chad", "TD", "+235");
        let en = Locale::default();
        assert_eq!(NameStyle::Native.display_name(&c, &en), "Brasil");
        assert_eq!(NameStyle::Native.display_name(&plain, &en), "Chad");
    }
}
