use crate::components::rule_card::RuleCard;
use pwchallenge_game::RuleStatus;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub statuses: Rc<Vec<RuleStatus>>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.statuses, &other.statuses)
    }
}

#[function_component(RuleList)]
pub fn rule_list(props: &Props) -> Html {
    html! {
        <ol class="rule-list" aria-label="Password rules">
            { for props.statuses.iter().map(|status| html! {
                <RuleCard key={status.order} status={status.clone()} />
            }) }
        </ol>
    }
}
