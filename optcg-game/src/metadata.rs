//! Summary facts derived from a finished catalog.

use std::collections::BTreeSet;

use optcg_catalog::CanonicalCard;

/// Distinct values and counts across the catalog. Lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMetadata {
    pub colors: Vec<String>,
    pub categories: Vec<String>,
    pub rarities: Vec<String>,
    pub total: usize,
    pub leaders: usize,
    pub non_leaders: usize,
}

pub fn collect_metadata(cards: &[CanonicalCard]) -> GameMetadata {
    let mut colors = BTreeSet::new();
    let mut categories = BTreeSet::new();
    let mut rarities = BTreeSet::new();

    for card in cards {
        colors.extend(card.colors.iter().filter(|c| !c.is_empty()).cloned());
        if !card.category.is_empty() {
            categories.insert(card.category.clone());
        }
        if !card.rarity.is_empty() {
            rarities.insert(card.rarity.clone());
        }
    }

    let leaders = cards.iter().filter(|c| c.is_leader()).count();

    GameMetadata {
        colors: colors.into_iter().collect(),
        categories: categories.into_iter().collect(),
        rarities: rarities.into_iter().collect(),
        total: cards.len(),
        leaders,
        non_leaders: cards.len().saturating_sub(leaders),
    }
}
