use crate::clock::SharedClock;
use crate::components::challenge_board::ChallengeBoard;
use crate::components::consent_modal::ConsentModal;
use pwchallenge_game::RuleCatalog;
use std::rc::Rc;
use yew::prelude::*;

pub mod state;
pub mod test_bridge;

/// Overrides for hosting the shell outside the default page, e.g. in tests.
#[derive(Properties, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub catalog: Option<Rc<RuleCatalog>>,
    #[prop_or_default]
    pub clock: Option<SharedClock>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        let same_catalog = match (&self.catalog, &other.catalog) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        let same_clock = match (&self.clock, &other.clock) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_catalog && same_clock
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let app_state = state::use_app_state(props.catalog.clone(), props.clock.clone());
    test_bridge::use_test_bridge(&app_state);

    let model = &app_state.model;
    let body = if model.consent_accepted {
        let on_input = {
            let app_state = app_state.clone();
            Callback::from(move |value: String| app_state.type_input(value))
        };
        html! {
            <ChallengeBoard
                input={AttrValue::from(model.session.input().to_string())}
                statuses={model.statuses.clone()}
                won={model.session.is_won()}
                {on_input}
            />
        }
    } else {
        let on_accept = {
            let app_state = app_state.clone();
            Callback::from(move |()| app_state.accept())
        };
        html! { <ConsentModal {on_accept} /> }
    };

    html! {
        <main id="main" class="app-shell" role="main">
            { body }
        </main>
    }
}
