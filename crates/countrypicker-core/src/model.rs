// crates/countrypicker-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Raw country record as it comes from the dataset JSON:
///
/// ```json
/// { "name": "Nigeria", "dial_code": "+234", "code": "NG",
///   "native": "Nigeria", "translations": { "fr": "Nigéria" } }
/// ```
///
/// Every field is optional at this level so that one broken record can be
/// skipped without failing the whole catalog. It is also the serialized form
/// of [`Country`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CountryRaw {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
    /// translations: { "de": "Deutschland", "pt-BR": "Alemanha", ... }
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, String>,
}

impl CountryRaw {
    /// Convert into a [`Country`], or `None` when `name`, `code` or
    /// `dial_code` is missing or blank.
    pub fn into_country(self) -> Option<Country> {
        let name = non_blank(self.name)?;
        let code = non_blank(self.code)?;
        let phone_code = non_blank(self.dial_code)?;

        let mut country = Country::new(name, code, phone_code);
        if let Some(native) = non_blank(self.native) {
            country = country.with_native_name(native);
        }
        for (tag, value) in self.translations {
            country = country.with_translation(&tag, value);
        }
        Some(country)
    }
}

impl TryFrom<CountryRaw> for Country {
    type Error = String;

    fn try_from(raw: CountryRaw) -> Result<Self, Self::Error> {
        raw.into_country()
            .ok_or_else(|| "country record needs a name, code and dial_code".to_owned())
    }
}

impl From<Country> for CountryRaw {
    fn from(c: Country) -> Self {
        CountryRaw {
            name: Some(c.name),
            dial_code: Some(c.phone_code),
            code: Some(c.code),
            native: c.native_name,
            translations: c.translations.into_iter().collect(),
        }
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// A country entry of the catalog.
///
/// Countries are immutable values; equality and hashing use the ISO code
/// only, so two entries with the same code are the same country whatever
/// their names or dial codes say.
///
/// Serializes in the dataset record format; deserializing goes through
/// [`CountryRaw`], so codes are normalized the same way as in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "CountryRaw", into = "CountryRaw")]
pub struct Country {
    name: String,
    code: String,
    phone_code: String,
    native_name: Option<String>,
    /// Sorted list of (language tag, translation).
    translations: Vec<(String, String)>,
}

impl Country {
    /// Create a country. The code is upper-cased.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        phone_code: impl Into<String>,
    ) -> Self {
        Country {
            name: name.into(),
            code: code.into().trim().to_ascii_uppercase(),
            phone_code: phone_code.into(),
            native_name: None,
            translations: Vec::new(),
        }
    }

    pub fn with_native_name(mut self, native: impl Into<String>) -> Self {
        self.native_name = Some(native.into()).filter(|n| !n.trim().is_empty());
        self
    }

    /// Add (or replace) the translation for a language tag such as `de` or
    /// `pt-BR`. Blank translations are ignored.
    pub fn with_translation(mut self, tag: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            return self;
        }
        let tag = normalize_tag(tag);
        match self.translations.binary_search_by(|(t, _)| t.as_str().cmp(tag.as_str())) {
            Ok(i) => self.translations[i].1 = value,
            Err(i) => self.translations.insert(i, (tag, value)),
        }
        self
    }

    /// Canonical (English) name from the dataset.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-2 code, upper case (e.g. "NG").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// International dialing code with leading "+" (e.g. "+234").
    pub fn phone_code(&self) -> &str {
        &self.phone_code
    }

    /// The country's own name for itself, when the dataset has one.
    pub fn native_name(&self) -> Option<&str> {
        self.native_name.as_deref()
    }

    /// Translation for an exact language tag (`de`, `pt-BR`).
    pub fn translation(&self, tag: &str) -> Option<&str> {
        let tag = normalize_tag(tag);
        self.translations
            .binary_search_by(|(t, _)| t.as_str().cmp(tag.as_str()))
            .ok()
            .map(|i| self.translations[i].1.as_str())
    }

    pub fn translations(&self) -> &[(String, String)] {
        &self.translations
    }

    /// Lookup key of the flag image in the host's asset bundle.
    ///
    /// The engine never loads the image; rendering layers resolve this key.
    pub fn flag_asset(&self) -> String {
        self.code.to_uppercase()
    }
}

/// `pt_br` / `PT-br` -> `pt-BR`
fn normalize_tag(tag: &str) -> String {
    let mut parts = tag.trim().split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => {
            format!("{}-{}", language, region.to_ascii_uppercase())
        }
        _ => language,
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
