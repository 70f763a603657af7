pub mod challenge_board;
pub mod consent_modal;
pub mod password_input;
pub mod rule_card;
pub mod rule_list;
pub mod victory_overlay;
