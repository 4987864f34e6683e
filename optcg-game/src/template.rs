//! TCG Arena game document schema and the static One Piece rule set.
//!
//! Field names follow the runtime's camelCase format, including its spelling
//! of `defaultRessources` and `isSymetricalForOpponents`.

use std::collections::BTreeMap;

use serde::Serialize;

// ── Document ────────────────────────────────────────────────────────────────

/// A complete `game.json` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDocument {
    pub name: String,
    pub menu_background_image: String,
    pub default_ressources: DefaultResources,
    pub custom_help: String,
    pub card_rotation: u32,
    pub cards: CardsSource,
    pub deck_building: DeckBuilding,
    pub gameplay: BTreeMap<String, Gameplay>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultResources {
    pub backgrounds: Vec<String>,
    pub decks_url: String,
}

/// Where the runtime fetches card data, and the shared card back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardsSource {
    pub data_url: String,
    pub card_back: String,
}

/// Derived catalog facts embedded in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub generated_by: String,
    pub cards_count: usize,
    pub leaders_count: usize,
    pub main_deck_pool_count: usize,
    pub detected_colors: Vec<String>,
    pub detected_categories: Vec<String>,
    pub detected_rarities: Vec<String>,
}

// ── Deck building ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckBuilding {
    pub main_filters: Vec<String>,
    pub formats: Vec<String>,
    pub filters_dict: BTreeMap<String, Filter>,
    pub formats_dict: BTreeMap<String, Format>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Multi,
    Range,
}

/// A deck-builder filter over one canonical card field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub label: String,
    pub field: String,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub is_dictionary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Format {
    pub name: String,
    pub rules: FormatRules,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatRules {
    pub leader: LeaderRule,
    pub main_deck: MainDeckRule,
    pub don_deck: DonDeckRule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderRule {
    pub min: u32,
    pub max: u32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainDeckRule {
    pub size: u32,
    pub allowed_categories: Vec<String>,
    pub max_same_card_number: u32,
    pub colors_must_be_subset_of_leader: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonDeckRule {
    pub size: u32,
    pub name: String,
}

// ── Gameplay ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gameplay {
    pub mulligan: Mulligan,
    pub new_turn: NewTurn,
    pub default_notes: String,
    pub tokens: Vec<Token>,
    pub counters_starting_values: Vec<i32>,
    pub hide_faced_down_cards: bool,
    pub sections: Sections,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mulligan {
    pub info: String,
    pub starting_hand_size: u32,
    pub draw_new_hand: bool,
    pub put_selection_at_bottom: bool,
    pub draw_new_selected_cards: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTurn {
    pub draw_on_start: bool,
    pub shared_turn: bool,
    pub first_player_token_name: String,
    pub draw_per_turn: u32,
    pub first_player_skips_draw_first_turn: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub custom_sections: Vec<String>,
    pub layout: Layout,
    pub categories_already_on_board: Vec<String>,
    pub auto_play_from_hand: BTreeMap<String, String>,
    pub auto_play_from_stack: BTreeMap<String, String>,
    pub sections_dict: BTreeMap<String, Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

/// A board layout node: a row or column of sections and nested layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub direction: Direction,
    pub content: Vec<LayoutItem>,
    pub no_quick_actions: bool,
    #[serde(
        rename = "isSymetricalForOpponents",
        skip_serializing_if = "Option::is_none"
    )]
    pub symmetrical_for_opponents: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayoutItem {
    Section(String),
    Nested(Layout),
}

impl From<&str> for LayoutItem {
    fn from(name: &str) -> Self {
        LayoutItem::Section(name.to_string())
    }
}

impl From<Layout> for LayoutItem {
    fn from(layout: Layout) -> Self {
        LayoutItem::Nested(layout)
    }
}

impl Layout {
    pub fn row(content: Vec<LayoutItem>) -> Self {
        Self::new(Direction::Row, content)
    }

    pub fn column(content: Vec<LayoutItem>) -> Self {
        Self::new(Direction::Column, content)
    }

    fn new(direction: Direction, content: Vec<LayoutItem>) -> Self {
        Self {
            direction,
            content,
            no_quick_actions: false,
            symmetrical_for_opponents: None,
        }
    }

    pub fn symmetrical(mut self, symmetrical: bool) -> Self {
        self.symmetrical_for_opponents = Some(symmetrical);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Visibility {
    #[serde(rename = "yes")]
    Hidden,
    #[serde(rename = "no")]
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Height {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Alignment {
    Start,
    Center,
}

/// Display and behavior properties of one board section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub is_hidden: Visibility,
    pub height: Height,
    pub alignment: Alignment,
    pub opponent_alignment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_auto_pay_to: Option<String>,
    pub is_horizontal_allowed: bool,
    pub displayed_title: String,
    pub enter_tapped: bool,
    pub enter_spun: bool,
    pub is_group_forbidden: bool,
    pub keep_tapped_new_turn: bool,
    pub show_hidden_card_in_history: bool,
    pub no_quick_actions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cards: Option<u32>,
}

impl Section {
    /// A visible, left-aligned section; callers override what differs.
    fn base(title: &str, displayed_title: &str, height: Height) -> Self {
        Self {
            title: title.to_string(),
            is_hidden: Visibility::Visible,
            height,
            alignment: Alignment::Start,
            opponent_alignment: false,
            no_auto_pay_to: None,
            is_horizontal_allowed: true,
            displayed_title: displayed_title.to_string(),
            enter_tapped: false,
            enter_spun: false,
            is_group_forbidden: false,
            keep_tapped_new_turn: false,
            show_hidden_card_in_history: true,
            no_quick_actions: false,
            max_cards: None,
        }
    }
}

// ── One Piece rule set ──────────────────────────────────────────────────────

pub const DEFAULT_GAME_NAME: &str = "One Piece Card Game";
pub const DEFAULT_MENU_BACKGROUND: &str = "https://files.catbox.moe/kqvbme.png";
pub const CLASSIC_FORMAT: &str = "Classic";

pub const CUSTOM_HELP: &str = "Victory: defeat opponent by dealing damage to their Leader when they have 0 Life, \
or when their deck reaches 0 cards. Setup: 1 Leader, 50-card deck (Characters/Events/Stages), \
10-card DON!! deck. Opening hand 5; mulligan once. Turn: Refresh (set rested to active; return \
given DON!! to cost rested), Draw (skip for first player on first turn), DON!! phase (+1 for \
first player T1, otherwise +2), Main, End.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Deck-builder filters and the Classic format.
pub fn deck_building() -> DeckBuilding {
    let filters: [(&str, &str, &str, FilterKind); 8] = [
        ("color", "Color", "colors", FilterKind::Multi),
        ("category", "Category", "category", FilterKind::Multi),
        ("cost", "Cost", "cost", FilterKind::Range),
        ("power", "Power", "power", FilterKind::Range),
        ("attribute", "Attribute", "attributes", FilterKind::Multi),
        ("type", "Type", "types", FilterKind::Multi),
        ("rarity", "Rarity", "rarity", FilterKind::Multi),
        ("block", "Block", "block_number", FilterKind::Multi),
    ];

    let filters_dict = filters
        .iter()
        .map(|&(key, label, field, kind)| {
            (
                key.to_string(),
                Filter {
                    label: label.to_string(),
                    field: field.to_string(),
                    kind,
                    is_dictionary: false,
                },
            )
        })
        .collect();

    let classic = Format {
        name: CLASSIC_FORMAT.to_string(),
        rules: FormatRules {
            leader: LeaderRule {
                min: 1,
                max: 1,
                category: "Leader".to_string(),
            },
            main_deck: MainDeckRule {
                size: 50,
                allowed_categories: strings(&["Character", "Event", "Stage"]),
                max_same_card_number: 4,
                colors_must_be_subset_of_leader: true,
            },
            don_deck: DonDeckRule {
                size: 10,
                name: "DON!! Deck".to_string(),
            },
        },
    };

    DeckBuilding {
        main_filters: filters.iter().map(|f| f.0.to_string()).collect(),
        formats: vec![CLASSIC_FORMAT.to_string()],
        filters_dict,
        formats_dict: BTreeMap::from([(CLASSIC_FORMAT.to_string(), classic)]),
    }
}

/// Turn structure, tokens, and board layout for the Classic format.
pub fn classic_gameplay() -> Gameplay {
    Gameplay {
        mulligan: Mulligan {
            info: "Each player draws 5. Starting with the first player, each may return all \
                   cards, shuffle, and redraw 5 once."
                .to_string(),
            starting_hand_size: 5,
            draw_new_hand: true,
            put_selection_at_bottom: false,
            draw_new_selected_cards: false,
        },
        new_turn: NewTurn {
            draw_on_start: true,
            shared_turn: false,
            first_player_token_name: "First Player".to_string(),
            draw_per_turn: 1,
            first_player_skips_draw_first_turn: true,
        },
        default_notes: "Characters cannot attack the turn they are played. You can have max 5 \
                        Characters and max 1 Stage on the field. You can attack Leader or a \
                        rested Character."
            .to_string(),
        tokens: vec![
            Token {
                name: "First Player".to_string(),
                count: 1,
            },
            Token {
                name: "DON!!".to_string(),
                count: 10,
            },
        ],
        counters_starting_values: vec![0],
        hide_faced_down_cards: false,
        sections: classic_sections(),
    }
}

fn classic_sections() -> Sections {
    let layout = Layout::row(vec![
        Layout::column(vec!["Life".into(), "DonDeck".into()]).into(),
        Layout::column(vec![
            "Characters".into(),
            Layout::row(vec!["Leader".into(), "Stage".into(), "Deck".into()]).into(),
            "Cost".into(),
        ])
        .into(),
        Layout::column(vec!["Trash".into()]).into(),
    ])
    .symmetrical(true);

    let sections = [
        Section {
            is_hidden: Visibility::Hidden,
            is_horizontal_allowed: false,
            keep_tapped_new_turn: true,
            show_hidden_card_in_history: false,
            ..Section::base("Life", "Life", Height::Medium)
        },
        Section {
            is_hidden: Visibility::Hidden,
            is_horizontal_allowed: false,
            is_group_forbidden: true,
            keep_tapped_new_turn: true,
            show_hidden_card_in_history: false,
            ..Section::base("Deck", "Deck", Height::Small)
        },
        Section {
            keep_tapped_new_turn: true,
            ..Section::base("Trash", "Trash", Height::Small)
        },
        Section {
            alignment: Alignment::Center,
            is_group_forbidden: true,
            ..Section::base("Leader", "Leader", Height::Small)
        },
        Section {
            alignment: Alignment::Center,
            is_group_forbidden: true,
            ..Section::base("Stage", "Stage", Height::Small)
        },
        Section {
            max_cards: Some(5),
            ..Section::base("Character Area", "Character Area (max 5)", Height::Large)
        },
        Section {
            no_auto_pay_to: Some("true".to_string()),
            ..Section::base("Cost Area", "Cost (DON!!)", Height::Medium)
        },
        Section {
            is_horizontal_allowed: false,
            is_group_forbidden: true,
            keep_tapped_new_turn: true,
            ..Section::base("DON!! Deck", "DON!! Deck (open)", Height::Small)
        },
    ];
    let keys = [
        "Life",
        "Deck",
        "Trash",
        "Leader",
        "Stage",
        "Characters",
        "Cost",
        "DonDeck",
    ];

    Sections {
        custom_sections: strings(&keys),
        layout,
        categories_already_on_board: Vec::new(),
        auto_play_from_hand: BTreeMap::from([
            ("Character".to_string(), "Characters".to_string()),
            ("Stage".to_string(), "Stage".to_string()),
        ]),
        auto_play_from_stack: BTreeMap::new(),
        sections_dict: keys
            .iter()
            .map(|k| k.to_string())
            .zip(sections)
            .collect(),
    }
}
