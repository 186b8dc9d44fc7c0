//! Default resolver
//!
//! `content[key]` when an override exists, the catalog default otherwise.
//! A missing key is the normal case, not an error.

use super::codec::{ContentValue, ListValue};
use super::defaults::{DefaultCatalog, DefaultValue, DEFAULTS};
use super::map::ContentMap;
use tracing::debug;

/// Resolves field values against an injected default catalog
#[derive(Clone, Copy)]
pub struct DefaultResolver<'a> {
    catalog: &'a DefaultCatalog,
}

impl<'a> DefaultResolver<'a> {
    pub fn new(catalog: &'a DefaultCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a DefaultCatalog {
        self.catalog
    }

    /// Stored override, else encoded default; `None` only for unknown keys
    ///
    /// A stored empty string still counts as an override.
    pub fn resolve<'c>(&self, key: &str, content: &'c ContentMap) -> Option<&'c str>
    where
        'a: 'c,
    {
        content.get(key).or_else(|| self.catalog.encoded(key))
    }

    /// Text value for a field, `""` for keys outside the catalog
    pub fn text<'c>(&self, key: &str, content: &'c ContentMap) -> &'c str
    where
        'a: 'c,
    {
        self.resolve(key, content).unwrap_or_else(|| {
            debug!("No override or default for content key {}", key);
            ""
        })
    }

    /// Catalog default for a list field
    pub fn default_list(&self, key: &str) -> Option<ListValue> {
        match self.catalog.get(key)?.default {
            DefaultValue::List(f) => Some(f()),
            DefaultValue::Text(_) => None,
        }
    }

    /// Typed value for a catalog key
    ///
    /// List fields decode the stored JSON with the catalog list as fallback.
    /// Unknown keys with an override resolve as scalars.
    pub fn value(&self, key: &str, content: &ContentMap) -> Option<ContentValue> {
        let Some(entry) = self.catalog.get(key) else {
            return content.get(key).map(|s| ContentValue::Scalar(s.to_string()));
        };

        let value = match entry.default {
            DefaultValue::List(f) => ContentValue::List(f().decode_or(content.get(key))),
            DefaultValue::Text(_) => ContentValue::Scalar(self.text(key, content).to_string()),
        };
        Some(value)
    }
}

impl DefaultResolver<'static> {
    /// Resolver over the process-wide catalog
    pub fn global() -> Self {
        Self::new(&DEFAULTS)
    }
}

impl Default for DefaultResolver<'static> {
    fn default() -> Self {
        Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_key_resolves_non_empty_on_empty_store() {
        let resolver = DefaultResolver::global();
        let empty = ContentMap::new();
        for entry in resolver.catalog().iter() {
            let value = resolver.resolve(entry.key, &empty);
            assert!(
                value.is_some_and(|v| !v.is_empty()),
                "{} resolved blank on empty store",
                entry.key
            );
        }
    }

    #[test]
    fn test_override_wins() {
        let resolver = DefaultResolver::global();
        let content = ContentMap::from([("home.hero.title", "Custom Title")]);
        assert_eq!(resolver.text("home.hero.title", &content), "Custom Title");
        assert_eq!(
            resolver.text("home.hero.subtitle", &content),
            "Keynotes, workshops and panels from the people building the future of artificial intelligence."
        );
    }

    #[test]
    fn test_empty_override_is_kept() {
        let resolver = DefaultResolver::global();
        let content = ContentMap::from([("home.hero.subtitle", "")]);
        assert_eq!(resolver.resolve("home.hero.subtitle", &content), Some(""));
    }

    #[test]
    fn test_unknown_key() {
        let resolver = DefaultResolver::global();
        let empty = ContentMap::new();
        assert_eq!(resolver.resolve("home.nowhere.field", &empty), None);
        assert_eq!(resolver.text("home.nowhere.field", &empty), "");

        let content = ContentMap::from([("home.nowhere.field", "x")]);
        assert_eq!(
            resolver.value("home.nowhere.field", &content),
            Some(ContentValue::Scalar("x".to_string()))
        );
    }

    #[test]
    fn test_value_decodes_list_override() {
        let resolver = DefaultResolver::global();
        let content = ContentMap::from([(
            "home.client-logos.logos",
            r#"[{"name":"Acme","src":"/a.png"}]"#,
        )]);

        match resolver.value("home.client-logos.logos", &content) {
            Some(ContentValue::List(ListValue::Logos(logos))) => {
                assert_eq!(logos.len(), 1);
                assert_eq!(logos[0].name, "Acme");
            }
            other => panic!("unexpected value: {:?}", other),
        }
    }

    #[test]
    fn test_value_malformed_list_falls_back() {
        let resolver = DefaultResolver::global();
        let content = ContentMap::from([("home.client-logos.logos", "{not json")]);
        let value = resolver.value("home.client-logos.logos", &content);
        let expected = resolver.default_list("home.client-logos.logos").map(ContentValue::List);
        assert_eq!(value, expected);
    }
}
