//! Mapping of (merged) raw records onto the canonical card schema.

use crate::coerce::{
    canonical_category, collapse_whitespace, numeric_text, parse_int, resolve_image, split_multi,
};
use crate::fields::*;
use crate::types::{CanonicalCard, CardFace, CardFaces, CardType, RawCardRecord};

/// Normalize one raw record into a canonical card.
///
/// Identifiers are re-derived from the record's fields rather than reused from
/// the merge key, so the emitted `id` always reflects the final field set.
/// `card_back` is the image placed on every back face.
pub fn normalize_card(record: &RawCardRecord, card_back: &str) -> CanonicalCard {
    let fields = record.fields();

    let id = card_identifier(record).unwrap_or_default();
    let number = card_number(record);
    let name = collapse_whitespace(&first_text(fields, NAME_KEYS));
    let category = canonical_category(&first_text(fields, CATEGORY_KEYS));

    let card_type = if category == "Leader" {
        CardType::Leader
    } else {
        let explicit = first_text(fields, TYPE_KEYS);
        CardType::Named(if explicit.is_empty() {
            category.clone()
        } else {
            explicit
        })
    };

    let cost_value = first_populated(fields, COST_KEYS);
    let cost = cost_value.and_then(parse_int);
    let cost_text = numeric_text(cost_value);

    let multi = |keys: &[&str]| {
        first_populated(fields, keys)
            .map(split_multi)
            .unwrap_or_default()
    };

    let effect = first_text(fields, EFFECT_KEYS);
    let image = resolve_image(fields);

    let face = CardFaces {
        front: CardFace {
            name: name.clone(),
            card_type: card_type.clone(),
            cost,
            image: image.clone(),
            is_horizontal: false,
        },
        back: CardFace {
            name: name.clone(),
            card_type: card_type.for_back(),
            cost,
            image: card_back.to_string(),
            is_horizontal: false,
        },
    };

    CanonicalCard {
        id,
        number,
        name,
        category,
        card_type,
        cost,
        cost_text,
        power: numeric_text(first_populated(fields, POWER_KEYS)),
        counter: numeric_text(first_populated(fields, COUNTER_KEYS)),
        life: numeric_text(first_populated(fields, LIFE_KEYS)),
        colors: multi(COLOR_KEYS),
        attributes: multi(ATTRIBUTE_KEYS),
        types: multi(TYPES_KEYS),
        rarity: first_text(fields, RARITY_KEYS),
        block_number: first_text(fields, BLOCK_KEYS),
        pack_id: first_text(fields, PACK_KEYS),
        text: effect.clone(),
        effect,
        trigger: first_text(fields, TRIGGER_KEYS),
        image,
        source_file: record.source_file().unwrap_or_default().to_string(),
        face,
    }
}
