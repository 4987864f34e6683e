mod cards;
mod game;

pub(crate) use cards::run_cards;
pub(crate) use game::run_game;
