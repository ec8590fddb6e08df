//! Table-backed vocabulary providers.
//!
//! Each provider is declared as plain `'static` data: a tag list with
//! per-tag attribute entries, a list of global attribute entries and a set of
//! named value domains. Attribute entries use the compact `name:domain`
//! notation:
//!
//! - `title` has a free-form value,
//! - `disabled:v` is a boolean flag written without a value,
//! - `onclick:h` is an event handler,
//! - `type:t` takes its values from the value set named `t`.

use std::collections::HashMap;

use crate::config::Configuration;

/// The vocabulary subsets a [`Configuration`] can switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subset {
    Html5,
    Ionic,
    Angular,
}

impl Subset {
    /// Angular attributes are offered whatever `angular1` says; the flag is
    /// parsed and kept for hosts that read it.
    pub fn is_enabled(self, config: &Configuration) -> bool {
        match self {
            Subset::Html5 => config.html5,
            Subset::Ionic => config.ionic,
            Subset::Angular => true,
        }
    }
}

/// What an attribute accepts as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    FreeForm,
    /// Boolean attribute, written as a bare name.
    Flag,
    /// Script run on an event.
    Handler,
    /// Values listed in the named value set.
    Set(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub domain: ValueDomain,
}

impl AttributeSpec {
    /// Parse a `name:domain` table entry.
    pub fn parse(entry: &'static str) -> Self {
        let (name, domain) = match entry.split_once(':') {
            None => (entry, ValueDomain::FreeForm),
            Some((name, "v")) => (name, ValueDomain::Flag),
            Some((name, "h")) => (name, ValueDomain::Handler),
            Some((name, set)) => (name, ValueDomain::Set(set)),
        };
        Self { name, domain }
    }

    /// Whether completing the name should also open a value.
    pub fn takes_value(&self) -> bool {
        self.domain != ValueDomain::Flag
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpec {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub attributes: Vec<AttributeSpec>,
}

/// Static declaration of one provider.
pub struct ProviderTable {
    pub tags: &'static [(&'static str, &'static str, &'static [&'static str])],
    pub globals: &'static [&'static str],
    pub value_sets: &'static [(&'static str, &'static [&'static str])],
}

/// A read-only vocabulary table for one subset.
#[derive(Debug, Clone)]
pub struct Provider {
    subset: Subset,
    tags: Vec<TagSpec>,
    tag_index: HashMap<&'static str, usize>,
    globals: Vec<AttributeSpec>,
    value_sets: HashMap<&'static str, &'static [&'static str]>,
}

impl Provider {
    pub fn from_table(subset: Subset, table: &ProviderTable) -> Self {
        let tags: Vec<TagSpec> = table
            .tags
            .iter()
            .map(|&(name, description, attributes)| TagSpec {
                name,
                description: (!description.is_empty()).then_some(description),
                attributes: attributes.iter().copied().map(AttributeSpec::parse).collect(),
            })
            .collect();
        let tag_index = tags.iter().enumerate().map(|(i, t)| (t.name, i)).collect();

        Self {
            subset,
            tags,
            tag_index,
            globals: table.globals.iter().copied().map(AttributeSpec::parse).collect(),
            value_sets: table.value_sets.iter().copied().collect(),
        }
    }

    pub fn subset(&self) -> Subset {
        self.subset
    }

    pub fn tags(&self) -> &[TagSpec] {
        &self.tags
    }

    /// Look up a tag, ignoring ASCII case.
    pub fn tag(&self, name: &str) -> Option<&TagSpec> {
        let i = self.tag_index.get(name.to_ascii_lowercase().as_str())?;
        Some(&self.tags[*i])
    }

    /// Attributes applicable to `tag`: its own first, then the globals.
    pub fn attributes<'a>(&'a self, tag: &str) -> impl Iterator<Item = &'a AttributeSpec> {
        let own = self.tag(tag).map(|t| t.attributes.as_slice()).unwrap_or_default();
        own.iter().chain(self.globals.iter())
    }

    pub fn attribute(&self, tag: &str, name: &str) -> Option<&AttributeSpec> {
        self.attributes(tag).find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// The value domain of `tag`/`attribute`, if this provider enumerates one.
    pub fn values(&self, tag: &str, attribute: &str) -> &'static [&'static str] {
        match self.attribute(tag, attribute).map(|a| a.domain) {
            Some(ValueDomain::Set(set)) => self.value_sets.get(set).copied().unwrap_or_default(),
            _ => &[],
        }
    }
}
