pub mod templates;

use serde::Serialize;

use templates::{DAILY_ACTIONS, DAILY_OBJECTS, DAILY_SUBJECTS, CURATED, EXPANSIONS, FILLER, PHRASES};

/// Minimum number of cards the catalog is grown to at startup.
pub const CATALOG_MIN_SIZE: usize = 320;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flashcard {
    pub fr: String,
    pub en: String,
    pub category: String,
}

impl Flashcard {
    fn new(fr: impl Into<String>, en: impl Into<String>, category: &str) -> Self {
        Self {
            fr: fr.into(),
            en: en.into(),
            category: category.to_string(),
        }
    }
}

/// Filter and page selection for [`Catalog::query`].
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub page: usize,
    pub page_size: usize,
    pub q: String,
    pub category: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            q: String::new(),
            category: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub items: Vec<Flashcard>,
}

/// The in-memory flashcard collection. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Flashcard>,
}

impl Catalog {
    pub fn build() -> Self {
        Self::build_with_min(CATALOG_MIN_SIZE)
    }

    pub fn build_with_min(min_size: usize) -> Self {
        let mut builder = Builder {
            cards: Vec::with_capacity(min_size),
            target: min_size,
        };

        for (category, pairs) in CURATED {
            for (fr, en) in pairs.iter() {
                builder.cards.push(Flashcard::new(*fr, *en, category));
            }
        }

        builder.expand();

        while builder.cards.len() < min_size {
            let (fr, en, category) = FILLER[builder.cards.len() % FILLER.len()];
            builder.cards.push(Flashcard::new(fr, en, category));
        }

        tracing::debug!("Catalog built with {} cards", builder.cards.len());

        Self {
            cards: builder.cards,
        }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for card in &self.cards {
            if !seen.iter().any(|c| c == &card.category) {
                seen.push(card.category.clone());
            }
        }
        seen
    }

    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        let page = query.page.max(1);
        let page_size = query.page_size.max(1);
        let needle = query.q.trim().to_lowercase();
        let category = query.category.trim().to_lowercase();

        let filtered: Vec<&Flashcard> = self
            .cards
            .iter()
            .filter(|card| {
                needle.is_empty()
                    || card.fr.to_lowercase().contains(&needle)
                    || card.en.to_lowercase().contains(&needle)
            })
            .filter(|card| category.is_empty() || card.category.to_lowercase() == category)
            .collect();

        let total = filtered.len();
        let items = filtered
            .into_iter()
            .skip(page_size.saturating_mul(page - 1))
            .take(page_size)
            .cloned()
            .collect();

        CatalogPage {
            page,
            page_size,
            total,
            items,
        }
    }
}

struct Builder {
    cards: Vec<Flashcard>,
    target: usize,
}

impl Builder {
    /// Appends a card and reports whether the target size has been reached.
    fn push(&mut self, fr: String, en: String, category: &str) -> bool {
        self.cards.push(Flashcard::new(fr, en, category));
        self.cards.len() >= self.target
    }

    fn expand(&mut self) {
        if self.cards.len() >= self.target {
            return;
        }

        for subject in DAILY_SUBJECTS {
            for action in DAILY_ACTIONS {
                for object in DAILY_OBJECTS {
                    // Same text on both sides; kept for repetition practice.
                    let text = format!("{} {} {}.", subject, action, object);
                    if self.push(text.clone(), text, "Daily Life") {
                        return;
                    }
                }
            }
        }

        for expansion in EXPANSIONS {
            for action in expansion.actions {
                for object in expansion.objects {
                    let (fr, en) = expansion.render(action, object);
                    if self.push(fr, en, expansion.category) {
                        return;
                    }
                }
            }
        }

        for (category, phrases) in PHRASES {
            for phrase in phrases.iter() {
                let text = format!("{}.", phrase);
                if self.push(text.clone(), text, category) {
                    return;
                }
            }
        }
    }
}
