use leptos::prelude::*;

#[component]
pub fn QuestionField(
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] help: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                type="text"
                id=name.clone()
                name=name
                class="field__input"
                placeholder=placeholder
                required=required
            />
            <small class="field__help">{help}</small>
        </label>
    }
}
