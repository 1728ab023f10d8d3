use std::collections::{HashMap, HashSet};

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::warn;

use super::record::ServiceRecord;

#[derive(Debug, Default)]
struct Group<T> {
    names: Vec<String>,
    index: HashMap<String, usize>,
    items: Vec<T>,
}

impl<T: Default> Group<T> {
    fn entry(&mut self, name: &str) -> &mut T {
        let idx = match self.index.get(name).copied() {
            Some(idx) => idx,
            None => {
                self.names.push(name.to_string());
                self.items.push(T::default());
                self.index.insert(name.to_string(), self.items.len() - 1);
                self.items.len() - 1
            }
        };
        &mut self.items[idx]
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.names.iter().zip(self.items.iter())
    }
}

type Services = Vec<ServiceRecord>;
type Subcategories = Group<Services>;

/// category → subcategory → services. Both mapping levels keep the order in
/// which names were first seen; only the leaf lists are ever reordered.
#[derive(Debug, Default)]
pub struct Catalog {
    categories: Group<Subcategories>,
    seen_ids: HashSet<String>,
    duplicate_ids: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ServiceRecord) {
        if !self.seen_ids.insert(record.id.clone()) {
            self.duplicate_ids += 1;
            warn!(id = %record.id, title = %record.title, "duplicate service id");
        }
        self.categories
            .entry(&record.category)
            .entry(&record.subcategory)
            .push(record);
    }

    /// Stable sort of every leaf list by title, in code-point order.
    pub fn finalize_sort(&mut self) {
        for subs in &mut self.categories.items {
            for services in &mut subs.items {
                services.sort_by(|a, b| a.title.cmp(&b.title));
            }
        }
    }

    pub fn category_count(&self) -> usize {
        self.categories.items.len()
    }

    pub fn record_count(&self) -> usize {
        self.categories
            .items
            .iter()
            .flat_map(|subs| &subs.items)
            .map(Vec::len)
            .sum()
    }

    pub fn duplicate_ids(&self) -> usize {
        self.duplicate_ids
    }

    pub fn services(&self, category: &str, subcategory: &str) -> Option<&[ServiceRecord]> {
        let subs = &self.categories.items[*self.categories.index.get(category)?];
        subs.index.get(subcategory).map(|&i| subs.items[i].as_slice())
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.names.iter().map(String::as_str)
    }

    pub fn subcategory_names(&self, category: &str) -> Vec<&str> {
        self.categories
            .index
            .get(category)
            .map(|&i| self.categories.items[i].names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Pretty-printed JSON, two-space indent, non-ASCII left unescaped.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.category_count()))?;
        for (name, subs) in self.categories.iter() {
            map.serialize_entry(name, &SubcategoryMap(subs))?;
        }
        map.end()
    }
}

struct SubcategoryMap<'a>(&'a Subcategories);

impl Serialize for SubcategoryMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.items.len()))?;
        for (name, services) in self.0.iter() {
            map.serialize_entry(name, services)?;
        }
        map.end()
    }
}
