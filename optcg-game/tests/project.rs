use std::fs;

use optcg_catalog::{CanonicalCard, CardType};
use optcg_game::*;
use serde_json::json;
use tempfile::TempDir;

fn card(id: &str, category: &str, colors: &[&str], rarity: &str) -> CanonicalCard {
    CanonicalCard {
        id: id.to_string(),
        category: category.to_string(),
        card_type: if category == "Leader" {
            CardType::Leader
        } else {
            CardType::Named(category.to_string())
        },
        colors: colors.iter().map(|c| c.to_string()).collect(),
        rarity: rarity.to_string(),
        ..Default::default()
    }
}

fn sample_cards() -> Vec<CanonicalCard> {
    vec![
        card("OP01-001", "Leader", &["Red"], "L"),
        card("OP01-002", "Leader", &["Green", "Red"], "L"),
        card("OP01-016", "Character", &["Blue"], "C"),
        card("OP01-029", "Event", &["Red"], "UC"),
        card("OP01-030", "Stage", &[], ""),
    ]
}

#[test]
fn metadata_counts_and_distinct_values() {
    let meta = collect_metadata(&sample_cards());
    assert_eq!(meta.colors, vec!["Blue", "Green", "Red"]);
    assert_eq!(
        meta.categories,
        vec!["Character", "Event", "Leader", "Stage"]
    );
    assert_eq!(meta.rarities, vec!["C", "L", "UC"]);
    assert_eq!(meta.total, 5);
    assert_eq!(meta.leaders, 2);
    assert_eq!(meta.non_leaders, 3);
}

#[test]
fn metadata_of_empty_catalog() {
    let meta = collect_metadata(&[]);
    assert_eq!(meta, GameMetadata::default());
}

#[test]
fn game_document_shape() {
    let options = GameOptions::new("https://example.com/cards.json");
    let doc = build_game(&sample_cards(), &options);
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(value["name"], json!("One Piece Card Game"));
    assert_eq!(value["cardRotation"], json!(90));
    assert_eq!(
        value["cards"]["dataUrl"],
        json!("https://example.com/cards.json")
    );
    assert_eq!(value["defaultRessources"]["decksUrl"], json!(""));
    assert_eq!(value["metadata"]["cardsCount"], json!(5));
    assert_eq!(value["metadata"]["leadersCount"], json!(2));
    assert_eq!(value["metadata"]["mainDeckPoolCount"], json!(3));
    assert_eq!(
        value["metadata"]["detectedRarities"],
        json!(["C", "L", "UC"])
    );

    let rules = &value["deckBuilding"]["formatsDict"]["Classic"]["rules"];
    assert_eq!(
        rules["leader"],
        json!({"min": 1, "max": 1, "category": "Leader"})
    );
    assert_eq!(rules["mainDeck"]["size"], json!(50));
    assert_eq!(rules["mainDeck"]["colorsMustBeSubsetOfLeader"], json!(true));
    assert_eq!(rules["donDeck"]["size"], json!(10));

    let filters = &value["deckBuilding"]["filtersDict"];
    assert_eq!(filters["block"]["field"], json!("block_number"));
    assert_eq!(filters["cost"]["type"], json!("range"));
    assert_eq!(value["deckBuilding"]["mainFilters"][0], json!("color"));
}

#[test]
fn board_layout_and_sections() {
    let doc = build_game(&[], &GameOptions::new("u"));
    let value = serde_json::to_value(&doc).unwrap();
    let sections = &value["gameplay"]["Classic"]["sections"];

    let layout = &sections["layout"];
    assert_eq!(layout["direction"], json!("row"));
    assert_eq!(layout["isSymetricalForOpponents"], json!(true));
    assert_eq!(layout["content"][0]["content"], json!(["Life", "DonDeck"]));
    assert_eq!(
        layout["content"][1]["content"][1]["content"],
        json!(["Leader", "Stage", "Deck"])
    );
    assert!(layout["content"][0].get("isSymetricalForOpponents").is_none());

    let dict = &sections["sectionsDict"];
    assert_eq!(dict["Life"]["isHidden"], json!("yes"));
    assert_eq!(dict["Characters"]["maxCards"], json!(5));
    assert_eq!(dict["Characters"]["height"], json!("LARGE"));
    assert_eq!(dict["Cost"]["noAutoPayTo"], json!("true"));
    assert_eq!(dict["Leader"]["alignment"], json!("CENTER"));
    assert!(dict["Trash"].get("maxCards").is_none());
    assert_eq!(
        sections["autoPlayFromHand"]["Character"],
        json!("Characters")
    );
}

#[test]
fn load_keyed_catalog_and_write_game() {
    let tmp = TempDir::new().unwrap();
    let cards_path = tmp.path().join("cards.json");
    let catalog = json!({
        "OP01-001": {
            "id": "OP01-001",
            "category": "Leader",
            "type": false,
            "colors": ["Red"]
        },
        "OP01-016": {
            "id": "OP01-016",
            "category": "Character",
            "type": "Character",
            "rarity": "C"
        },
        "junk": 7
    });
    fs::write(&cards_path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();

    let cards = load_catalog(&cards_path).unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards[0].card_type.is_leader());

    let out = tmp.path().join("game/game.json");
    let doc = build_game(&cards, &GameOptions::new("https://example.com/cards.json"));
    write_game(&doc, &out).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["metadata"]["leadersCount"], json!(1));
    assert_eq!(value["metadata"]["detectedColors"], json!(["Red"]));
}

#[test]
fn legacy_card_list_is_normalized() {
    let cards = cards_from_value(json!({
        "game": "one-piece-card-game",
        "cards": [
            {
                "id": "OP01-001",
                "name": "Zoro",
                "category": "leader",
                "colors": "Red/Green",
                "power": 5000
            },
            "skip me"
        ]
    }));
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].category, "Leader");
    assert_eq!(cards[0].colors, vec!["Red", "Green"]);
    assert_eq!(cards[0].power, "5000");
}

#[test]
fn missing_or_invalid_catalog_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.json");
    assert!(matches!(load_catalog(&missing), Err(ProjectError::Io { .. })));

    let bad = tmp.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(matches!(load_catalog(&bad), Err(ProjectError::Parse { .. })));
}
