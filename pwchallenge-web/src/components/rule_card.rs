use pwchallenge_game::RuleStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub status: RuleStatus,
}

#[function_component(RuleCard)]
pub fn rule_card(props: &Props) -> Html {
    let status = &props.status;
    let (mark, state_class) = if status.passed {
        ("✓", "rule-card--pass")
    } else {
        ("×", "rule-card--fail")
    };
    html! {
        <li
            class={classes!("rule-card", state_class)}
            data-rule={status.order.to_string()}
            data-key={status.kind.key()}
            data-passed={status.passed.to_string()}
        >
            <span class="rule-card__mark" aria-hidden="true">{ mark }</span>
            <span class="rule-card__text">{ status.description.clone() }</span>
        </li>
    }
}
