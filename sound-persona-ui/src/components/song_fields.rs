use leptos::prelude::*;

/// One "title | artist" row. Field names are `song{n}_title` and `song{n}_artist`.
#[component]
pub fn SongFields(
    number: usize,
    #[prop(optional, into)] title_placeholder: String,
    #[prop(optional, into)] artist_placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let title_id = format!("song{}_title", number);
    let artist_id = format!("song{}_artist", number);

    view! {
        <div class="song-row">
            <label class="song-row__title">
                <span class="field__label">{format!("{}曲目: タイトル", number)}</span>
                <input
                    type="text"
                    id=title_id.clone()
                    name=title_id
                    class="field__input"
                    placeholder=title_placeholder
                    required=required
                />
            </label>
            <label class="song-row__artist">
                <span class="field__label">"アーティスト"</span>
                <input
                    type="text"
                    id=artist_id.clone()
                    name=artist_id
                    class="field__input"
                    placeholder=artist_placeholder
                />
            </label>
        </div>
    }
}
