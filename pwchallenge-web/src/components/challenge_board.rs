use crate::components::password_input::PasswordInput;
use crate::components::rule_list::RuleList;
use crate::components::victory_overlay::VictoryOverlay;
use pwchallenge_game::RuleStatus;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct ChallengeBoardProps {
    pub input: AttrValue,
    pub statuses: Rc<Vec<RuleStatus>>,
    pub won: bool,
    pub on_input: Callback<String>,
}

impl PartialEq for ChallengeBoardProps {
    fn eq(&self, other: &Self) -> bool {
        self.input == other.input
            && Rc::ptr_eq(&self.statuses, &other.statuses)
            && self.won == other.won
            && self.on_input == other.on_input
    }
}

#[function_component(ChallengeBoard)]
pub fn challenge_board(props: &ChallengeBoardProps) -> Html {
    html! {
        <section class="challenge-board" data-won={props.won.to_string()}>
            <h1 class="challenge-board__title">{ "The Ultimate Password Challenge" }</h1>
            <PasswordInput value={props.input.clone()} on_input={props.on_input.clone()} />
            <RuleList statuses={props.statuses.clone()} />
            <VictoryOverlay open={props.won} />
        </section>
    }
}
