use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
}

/// Terminal celebration. There is no dismiss control.
#[function_component(VictoryOverlay)]
pub fn victory_overlay(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }
    html! {
        <div id="victory" class="victory-overlay" role="alertdialog" aria-modal="true" aria-labelledby="victory-title">
            <div class="victory-overlay__box">
                <div class="victory-overlay__icon" aria-hidden="true">{ "🎉" }</div>
                <h2 id="victory-title">{ "Congratulations!" }</h2>
                <p>{ "You've mastered the Ultimate Password Challenge!" }</p>
                <p>{ "Team Error404 will vote for your project!" }</p>
            </div>
        </div>
    }
}
