#![deny(missing_docs)]

//! # Resource Groups
//!
//! Tag occurrence counting plus a keyword-driven category breakdown.
//! A tag belongs to the first category whose keyword list matches it,
//! so a name touching several domains lands in exactly one place.

use indexmap::IndexMap;

use super::{strip_tag_prefix, QueryEngine, TagCount};

/// Category name for tags no keyword rule claims.
pub const OTHER_CATEGORY: &str = "Other";

/// Category keyword rules. Evaluated top-down; order is part of the
/// contract, so `fortnox_Invoices` is Financial even though archive
/// documents also mention invoices.
const CATEGORY_RULES: [(&str, &[&str]); 4] = [
    (
        "Core Business",
        &[
            "customer", "supplier", "article", "order", "offer", "project", "contract",
            "employee",
        ],
    ),
    (
        "Financial",
        &[
            "invoice", "voucher", "account", "payment", "expense", "salar", "tax", "currenc",
            "cost", "asset",
        ],
    ),
    ("Documents", &["archive", "inbox", "attachment", "file"]),
    (
        "Configuration",
        &[
            "settings", "unit", "price", "term", "way", "label", "print", "mode",
        ],
    ),
];

/// One category with the tags it claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// Category display name.
    pub name: String,

    /// Claimed tags with counts, first-seen order.
    pub tags: Vec<TagCount>,
}

/// Full tag census of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroups {
    /// Non-empty categories in rule order, `Other` last.
    pub categories: Vec<CategoryGroup>,

    /// Every tag with its count, alphabetical by prefix-stripped name.
    pub tags: Vec<TagCount>,
}

impl QueryEngine<'_> {
    /// Counts endpoint occurrences per tag and groups tags by category.
    ///
    /// Always succeeds; an empty document yields empty lists.
    pub fn list_resource_groups(&self) -> ResourceGroups {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for ep in self.index.all() {
            for tag in &ep.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }

        // One slot per rule plus the trailing Other slot.
        let mut slots: Vec<Vec<TagCount>> = vec![Vec::new(); CATEGORY_RULES.len() + 1];
        for (tag, count) in &counts {
            slots[category_for(tag)].push(TagCount {
                name: tag.to_string(),
                count: *count,
            });
        }

        let mut categories: Vec<CategoryGroup> = CATEGORY_RULES
            .iter()
            .map(|(name, _)| *name)
            .chain(std::iter::once(OTHER_CATEGORY))
            .zip(slots)
            .map(|(name, tags)| CategoryGroup {
                name: name.to_string(),
                tags,
            })
            .collect();
        categories.retain(|category| !category.tags.is_empty());

        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(name, count)| TagCount {
                name: name.to_string(),
                count,
            })
            .collect();
        tags.sort_by(|a, b| strip_tag_prefix(&a.name).cmp(strip_tag_prefix(&b.name)));

        ResourceGroups { categories, tags }
    }
}

/// Slot index of the first rule whose keywords match the stripped,
/// lowercased tag; the last slot when none do.
fn category_for(tag: &str) -> usize {
    let name = strip_tag_prefix(tag).to_lowercase();
    CATEGORY_RULES
        .iter()
        .position(|(_, keywords)| keywords.iter().any(|kw| name.contains(kw)))
        .unwrap_or(CATEGORY_RULES.len())
}
