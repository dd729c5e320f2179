//! Catalog Filter Pipeline
//!
//! One generic, pure derivation engine shared by the documents, events,
//! members and projects pages. Each page supplies a `FilterConfig`
//! naming its searchable fields and category key(s); the pipeline turns
//! the raw fetched list plus the user's predicates into the visible list.
//! No side effects, no hidden state: identical inputs yield identical
//! output.

use crate::categories;

/// User-controlled filter inputs for one page instance
#[derive(Debug, Clone, PartialEq)]
pub struct Predicates {
    pub search_text: String,
    pub category: String,
}

impl Default for Predicates {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: categories::ALL_KEY.to_string(),
        }
    }
}

/// How a selected category key is compared against item keys
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CategoryMode {
    /// Direct equality against each configured category field. Selecting
    /// a parent tree node matches only items tagged with the parent key
    /// itself, never its children.
    #[default]
    Flat,
    /// A parent key also matches items tagged with any of its descendant
    /// keys in the document category tree.
    Expand,
}

/// Per-collection accessor configuration for the generic filter
pub struct FilterConfig<T: 'static> {
    /// Fields matched case-insensitively against the search text
    pub searchable: &'static [fn(&T) -> &str],
    /// Fields compared against the selected category key
    pub category_keys: &'static [fn(&T) -> &str],
    /// Category comparison mode
    pub category_mode: CategoryMode,
    /// Optional score; when present the visible list is sorted by it,
    /// descending, with ties keeping fetch order
    pub ordering: Option<fn(&T) -> i64>,
}

impl<T> FilterConfig<T> {
    pub const fn new(
        searchable: &'static [fn(&T) -> &str],
        category_keys: &'static [fn(&T) -> &str],
    ) -> Self {
        Self {
            searchable,
            category_keys,
            category_mode: CategoryMode::Flat,
            ordering: None,
        }
    }

    pub fn with_mode(mut self, mode: CategoryMode) -> Self {
        self.category_mode = mode;
        self
    }

    pub fn with_ordering(mut self, ordering: fn(&T) -> i64) -> Self {
        self.ordering = Some(ordering);
        self
    }
}

fn matches_category<T>(item: &T, active: &str, config: &FilterConfig<T>) -> bool {
    if active == categories::ALL_KEY {
        return true;
    }
    match config.category_mode {
        CategoryMode::Flat => config
            .category_keys
            .iter()
            .any(|key_of| key_of(item) == active),
        CategoryMode::Expand => {
            let expanded = categories::descendant_keys(active);
            config
                .category_keys
                .iter()
                .any(|key_of| expanded.contains(&key_of(item)))
        }
    }
}

fn matches_search<T>(item: &T, search_text: &str, config: &FilterConfig<T>) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    config
        .searchable
        .iter()
        .any(|field_of| field_of(item).to_lowercase().contains(&needle))
}

/// Derive the visible list from the raw list and the current predicates.
///
/// An item passes when the category filter passes AND at least one
/// searchable field contains the search text case-insensitively. The
/// result keeps fetch order unless the config carries an ordering score.
pub fn apply<T: Clone>(raw: &[T], predicates: &Predicates, config: &FilterConfig<T>) -> Vec<T> {
    let mut visible: Vec<T> = raw
        .iter()
        .filter(|item| matches_category(*item, &predicates.category, config))
        .filter(|item| matches_search(*item, &predicates.search_text, config))
        .cloned()
        .collect();
    if let Some(score_of) = config.ordering {
        // Stable sort: ties keep their fetch order
        visible.sort_by_key(|item| std::cmp::Reverse(score_of(item)));
    }
    visible
}

/// Exclude a distinguished hero item from the general list by identity.
pub fn excluding_id<T: Clone>(raw: &[T], hero_id: u32, id_of: fn(&T) -> u32) -> Vec<T> {
    raw.iter().filter(|item| id_of(item) != hero_id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, Member, MemberLinks};

    fn make_doc(id: u32, title: &str, category: &str, sub_category: &str) -> Document {
        Document {
            id,
            title: title.to_string(),
            description: format!("About {title}"),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            file_url: String::new(),
            file_type: "PDF".to_string(),
            file_size: "1 MB".to_string(),
            upload_date: "2024-01-01".to_string(),
            downloads: 0,
        }
    }

    const DOC_SEARCHABLE: &[fn(&Document) -> &str] = &[
        |d: &Document| d.title.as_str(),
        |d: &Document| d.description.as_str(),
    ];
    const DOC_CATEGORY_KEYS: &[fn(&Document) -> &str] = &[
        |d: &Document| d.category.as_str(),
        |d: &Document| d.sub_category.as_str(),
    ];

    fn doc_config() -> FilterConfig<Document> {
        FilterConfig::new(DOC_SEARCHABLE, DOC_CATEGORY_KEYS)
    }

    fn sample_docs() -> Vec<Document> {
        vec![
            make_doc(1, "Docker Basics", "docker", ""),
            make_doc(2, "Git Workflow", "git", ""),
            make_doc(3, "SQL Joins", "sql", ""),
        ]
    }

    #[test]
    fn test_all_and_empty_search_is_identity() {
        let docs = sample_docs();
        let visible = apply(&docs, &Predicates::default(), &doc_config());
        assert_eq!(visible, docs);
    }

    #[test]
    fn test_flat_category_selects_exact_tag_only() {
        let docs = sample_docs();
        let predicates = Predicates {
            search_text: String::new(),
            category: "docker".to_string(),
        };
        let visible = apply(&docs, &predicates, &doc_config());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_flat_parent_key_matches_nothing() {
        // Faithful source behavior: selecting the parent node compares the
        // parent key directly against category/subCategory, so items tagged
        // with child keys do not appear.
        let docs = sample_docs();
        let predicates = Predicates {
            search_text: String::new(),
            category: "container".to_string(),
        };
        let visible = apply(&docs, &predicates, &doc_config());
        assert!(visible.is_empty());
    }

    #[test]
    fn test_expand_parent_key_includes_children() {
        let docs = sample_docs();
        let predicates = Predicates {
            search_text: String::new(),
            category: "container".to_string(),
        };
        let config = doc_config().with_mode(CategoryMode::Expand);
        let visible = apply(&docs, &predicates, &config);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn test_search_is_case_insensitive_and_sound() {
        let docs = sample_docs();
        let predicates = Predicates {
            search_text: "GIT".to_string(),
            category: "all".to_string(),
        };
        let config = doc_config();
        let visible = apply(&docs, &predicates, &config);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);

        // Every visible item holds the needle in some searchable field,
        // every excluded item in none.
        for doc in &docs {
            let contained = config
                .searchable
                .iter()
                .any(|f| f(doc).to_lowercase().contains("git"));
            assert_eq!(contained, visible.iter().any(|v| v.id == doc.id));
        }
    }

    #[test]
    fn test_search_matches_description_field() {
        let docs = sample_docs();
        let predicates = Predicates {
            search_text: "about sql".to_string(),
            category: "all".to_string(),
        };
        let visible = apply(&docs, &predicates, &doc_config());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }

    #[test]
    fn test_idempotent_for_identical_predicates() {
        let docs = sample_docs();
        let predicates = Predicates {
            search_text: "docker".to_string(),
            category: "docker".to_string(),
        };
        let config = doc_config();
        let first = apply(&docs, &predicates, &config);
        let second = apply(&docs, &predicates, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_raw_list_and_unknown_key() {
        let config = doc_config();
        assert!(apply(&[], &Predicates::default(), &config).is_empty());

        let docs = sample_docs();
        let predicates = Predicates {
            search_text: String::new(),
            category: "no-such-key".to_string(),
        };
        assert!(apply(&docs, &predicates, &config).is_empty());
    }

    fn make_member(id: u32, team: &str, role: &str, year: Option<&str>) -> Member {
        Member {
            id,
            name: format!("Member {id}"),
            role: role.to_string(),
            avatar: String::new(),
            team: team.to_string(),
            department: String::new(),
            year: year.map(str::to_string),
            skills: vec![],
            links: MemberLinks::default(),
        }
    }

    #[test]
    fn test_ordering_is_descending_and_stable() {
        let members = vec![
            make_member(1, "academic", "Member", Some("2023-2024")),
            make_member(2, "lead", "Member", Some("2023-2024")),
            make_member(3, "academic", "Member", Some("2023-2024")),
            make_member(4, "media", "Member", None),
        ];
        const MEMBER_SEARCHABLE: &[fn(&Member) -> &str] = &[|m: &Member| m.name.as_str()];
        const MEMBER_CATEGORY_KEYS: &[fn(&Member) -> &str] = &[|m: &Member| m.team.as_str()];
        let config = FilterConfig::new(MEMBER_SEARCHABLE, MEMBER_CATEGORY_KEYS)
            .with_ordering(|m: &Member| m.priority_score());
        let visible = apply(&members, &Predicates::default(), &config);
        let ids: Vec<u32> = visible.iter().map(|m| m.id).collect();
        // Lead first, then the two equal-score academics in fetch order,
        // then the member with no tenure.
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_excluding_id_removes_hero_only() {
        let members = vec![
            make_member(1, "lead", "Member", None),
            make_member(2, "lead", "Member", None),
        ];
        let rest = excluding_id(&members, 1, |m| m.id);
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].id, 2);
    }
}
