use yew::prelude::*;

pub const TERMS: [&str; 4] = [
    "If you successfully complete all 25 password rules and win the game, Team Error404 commits to voting for your project.",
    "However, if you fail to complete all rules or give up, you agree to vote for Team Error404's project.",
    "This is a challenging game designed to test your problem-solving skills. Only 1% of players are expected to complete it successfully.",
    "Your progress cannot be saved, and you must complete the challenge in one session.",
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_accept: Callback<()>,
}

/// One-time terms gate shown before the challenge mounts. It has no close
/// button; accepting is the only way forward.
#[function_component(ConsentModal)]
pub fn consent_modal(props: &Props) -> Html {
    let on_click = {
        let cb = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="modal modal-open consent-modal" role="dialog" aria-modal="true" aria-labelledby="consent-title">
            <div class="modal-box">
                <h2 id="consent-title" class="consent-modal__title">{ "Terms and Conditions" }</h2>
                <p class="consent-modal__intro">
                    { "Welcome to \"The Ultimate Password Challenge\" by Team Error404! Before you proceed, please read and agree to the following terms:" }
                </p>
                <ol class="consent-modal__terms">
                    { for TERMS.iter().map(|term| html! { <li>{ *term }</li> }) }
                </ol>
                <div class="modal-action">
                    <button id="accept-terms" class="btn btn-primary" onclick={on_click}>
                        { "I Accept the Challenge" }
                    </button>
                </div>
            </div>
        </div>
    }
}
