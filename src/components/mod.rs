pub mod box_score;
pub mod details;
pub mod diamond;
pub mod game_list;
pub mod palette;
