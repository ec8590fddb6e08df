//! Vocabulary providers for tagsense
//!
//! Static tables of tag names, attribute names, attribute value domains and
//! character entities, plus the [`Configuration`] that selects which of them
//! a completion request sees.
//!
//! ```text
//! Configuration ──▶ Vocabulary::enabled() ──▶ [html5, ionic, angular] providers
//! ```
//!
//! The tables are built once per process and shared read-only:
//!
//! ```
//! use tagsense_vocab::{Configuration, Vocabulary};
//!
//! let config = Configuration { ionic: false, ..Configuration::default() };
//! let providers: Vec<_> = Vocabulary::global().enabled(&config).collect();
//! assert_eq!(providers.len(), 2);
//! ```

pub mod angular;
pub mod config;
pub mod entities;
pub mod html5;
pub mod ionic;
pub mod provider;

use std::sync::LazyLock;

use tracing::debug;

pub use config::{ConfigError, Configuration, Quotes};
pub use entities::{entities_with_prefix, EntitySpec};
pub use provider::{AttributeSpec, Provider, Subset, TagSpec, ValueDomain};

static BUILTIN: LazyLock<Vocabulary> = LazyLock::new(Vocabulary::builtin);

/// Every provider, in the order candidates are offered.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    providers: Vec<Provider>,
}

impl Vocabulary {
    pub fn new(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// HTML5, then Ionic, then Angular.
    pub fn builtin() -> Self {
        let vocabulary = Self::new(vec![html5::provider(), ionic::provider(), angular::provider()]);
        debug!(
            providers = vocabulary.providers.len(),
            tags = vocabulary.providers.iter().map(|p| p.tags().len()).sum::<usize>(),
            "loaded builtin vocabulary"
        );
        vocabulary
    }

    /// The shared builtin vocabulary.
    pub fn global() -> &'static Vocabulary {
        &BUILTIN
    }

    /// Providers switched on by `config`.
    pub fn enabled<'a>(&'a self, config: &'a Configuration) -> impl Iterator<Item = &'a Provider> {
        self.providers
            .iter()
            .filter(move |p| p.subset().is_enabled(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn subsets(config: &Configuration) -> Vec<Subset> {
        Vocabulary::global().enabled(config).map(|p| p.subset()).collect()
    }

    #[test]
    fn test_default_enables_everything() {
        assert_eq!(
            subsets(&Configuration::default()),
            vec![Subset::Html5, Subset::Ionic, Subset::Angular]
        );
    }

    #[test]
    fn test_html5_toggle() {
        let config = Configuration {
            html5: false,
            ..Configuration::default()
        };
        assert_eq!(subsets(&config), vec![Subset::Ionic, Subset::Angular]);
    }

    #[test]
    fn test_angular_ignores_its_flag() {
        let config = Configuration {
            angular1: false,
            ..Configuration::default()
        };
        assert!(subsets(&config).contains(&Subset::Angular));
    }

    #[test]
    fn test_tag_names_disjoint_across_providers() {
        let html5 = html5::provider();
        for tag in ionic::provider().tags() {
            assert!(html5.tag(tag.name).is_none(), "{} in both", tag.name);
        }
    }
}
