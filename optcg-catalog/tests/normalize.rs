use optcg_catalog::{CardType, RawCardRecord, normalize_card, to_pretty_json};
use serde_json::{Value, json};

const BACK: &str = "https://example.com/back.png";

fn record(value: Value) -> RawCardRecord {
    match value {
        Value::Object(map) => RawCardRecord::with_source(map, "en/op01.json"),
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn leader_type_is_false_on_front_and_empty_on_back() {
    let card = normalize_card(
        &record(json!({
            "id": "OP01-001",
            "name": "Roronoa Zoro",
            "category": "LEADER",
            "type": "Leader"
        })),
        BACK,
    );
    assert_eq!(card.category, "Leader");
    assert_eq!(card.card_type, CardType::Leader);
    assert_eq!(card.face.front.card_type, CardType::Leader);
    assert_eq!(card.face.back.card_type, CardType::Named(String::new()));

    let value = serde_json::to_value(&card).unwrap();
    assert_eq!(value["type"], json!(false));
    assert_eq!(value["face"]["front"]["type"], json!(false));
    assert_eq!(value["face"]["back"]["type"], json!(""));
}

#[test]
fn type_falls_back_to_category() {
    let card = normalize_card(
        &record(json!({"id": "OP01-016", "name": "Nami", "category": "character"})),
        BACK,
    );
    assert_eq!(card.card_type, CardType::Named("Character".into()));
    assert_eq!(
        card.face.back.card_type,
        CardType::Named("Character".into())
    );
}

#[test]
fn explicit_type_wins_over_category() {
    let card = normalize_card(
        &record(json!({"id": "X-1", "category": "event", "type": "Counter Event"})),
        BACK,
    );
    assert_eq!(card.category, "Event");
    assert_eq!(card.card_type.as_str(), Some("Counter Event"));
}

#[test]
fn name_whitespace_is_collapsed() {
    let card = normalize_card(
        &record(json!({"id": "OP01-002", "name": "", "card_name": "  Trafalgar   Law\n"})),
        BACK,
    );
    assert_eq!(card.name, "Trafalgar Law");
    assert_eq!(card.face.front.name, "Trafalgar Law");
    assert_eq!(card.face.back.name, "Trafalgar Law");
}

#[test]
fn multi_valued_fields() {
    let card = normalize_card(
        &record(json!({
            "id": "OP01-003",
            "colors": "Red/Green",
            "attribute": ["Slash", " ", "Strike"],
            "types": "Supernovas,Heart Pirates"
        })),
        BACK,
    );
    assert_eq!(card.colors, vec!["Red", "Green"]);
    assert_eq!(card.attributes, vec!["Slash", "Strike"]);
    assert_eq!(card.types, vec!["Supernovas", "Heart Pirates"]);
}

#[test]
fn numeric_coercion() {
    let card = normalize_card(
        &record(json!({
            "id": "OP01-004",
            "cost": "+3",
            "power": 5000,
            "counter": "-",
            "life": null
        })),
        BACK,
    );
    assert_eq!(card.cost, Some(3));
    assert_eq!(card.cost_text, "+3");
    assert_eq!(card.power, "5000");
    assert_eq!(card.counter, "");
    assert_eq!(card.life, "");
    assert_eq!(card.face.front.cost, Some(3));

    let dash = normalize_card(&record(json!({"id": "OP01-005", "cost": "-"})), BACK);
    assert_eq!(dash.cost, None);
    assert_eq!(dash.cost_text, "");
}

#[test]
fn image_resolution_and_back_face() {
    let card = normalize_card(
        &record(json!({"id": "OP01-006", "images": {"small": "s.png", "large": "l.png"}})),
        BACK,
    );
    assert_eq!(card.image, "l.png");
    assert_eq!(card.face.front.image, "l.png");
    assert_eq!(card.face.back.image, BACK);
    assert!(!card.face.front.is_horizontal);
}

#[test]
fn missing_fields_use_empty_defaults() {
    let card = normalize_card(&record(json!({"foo": "bar"})), BACK);
    assert_eq!(card.id, "");
    assert_eq!(card.name, "");
    assert_eq!(card.category, "");
    assert_eq!(card.card_type, CardType::Named(String::new()));
    assert_eq!(card.cost, None);
    assert!(card.colors.is_empty());
    assert_eq!(card.image, "");
    assert_eq!(card.source_file, "en/op01.json");
}

#[test]
fn text_fields_and_identifiers() {
    let card = normalize_card(
        &record(json!({
            "code": "ST01-012",
            "cardNumber": "ST01-012",
            "rarity": "SR",
            "block": 1,
            "pack_id": "569001",
            "effect": "[On Play] Draw 1 card.",
            "trigger": "[Trigger] Play this card."
        })),
        BACK,
    );
    assert_eq!(card.id, "ST01-012");
    assert_eq!(card.number, "ST01-012");
    assert_eq!(card.rarity, "SR");
    assert_eq!(card.block_number, "1");
    assert_eq!(card.pack_id, "569001");
    assert_eq!(card.effect, "[On Play] Draw 1 card.");
    assert_eq!(card.text, card.effect);
    assert_eq!(card.trigger, "[Trigger] Play this card.");
}

#[test]
fn serialized_card_keeps_unicode_and_trailing_newline() {
    let card = normalize_card(
        &record(json!({"id": "OP05-119", "name": "Monkey.D.Luffy ☆", "category": "Character"})),
        BACK,
    );
    let text = to_pretty_json(&card).unwrap();
    assert!(text.contains("Monkey.D.Luffy ☆"));
    assert!(text.ends_with("}\n"));
    assert!(text.contains("\n  \"id\": \"OP05-119\""));
}

#[test]
fn canonical_card_reads_back() {
    let card = normalize_card(
        &record(json!({"id": "OP01-001", "name": "Zoro", "category": "leader", "colors": "Red"})),
        BACK,
    );
    let text = to_pretty_json(&card).unwrap();
    let parsed: optcg_catalog::CanonicalCard = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, card);
}
