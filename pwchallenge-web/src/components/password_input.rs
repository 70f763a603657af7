use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub on_input: Callback<String>,
}

#[function_component(PasswordInput)]
pub fn password_input(props: &Props) -> Html {
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let length = props.value.chars().count();

    html! {
        <div class="password-input">
            <input
                id="password"
                type="text"
                class="input input-bordered w-full"
                placeholder="Enter your password..."
                aria-label="Password"
                autocomplete="off"
                value={props.value.clone()}
                {oninput}
            />
            <span id="password-length" class="password-input__length" aria-live="polite">
                { format!("Length: {length}") }
            </span>
        </div>
    }
}
