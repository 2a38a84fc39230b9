use crate::components::{AxesGuide, QuestionField, SongFields};
use leptos::prelude::*;
use sound_persona_app::domain::PersonaReport;
use server_fn::ServerFnError;

#[server(AnalyzePersonaFn, "/api", endpoint = "analyze_persona")]
pub async fn analyze_persona(
    #[server(default)] song1_title: String,
    #[server(default)] song1_artist: String,
    #[server(default)] song2_title: String,
    #[server(default)] song2_artist: String,
    #[server(default)] song3_title: String,
    #[server(default)] song3_artist: String,
    #[server(default)] element: String,
    #[server(default)] situation: String,
    #[server(default)] value: String,
) -> Result<PersonaReport, ServerFnError> {
    use sound_persona_app::domain::{Song, UserInput};
    use sound_persona_app::AppContext;
    use sound_persona_errors::AppError;

    let ctx = expect_context::<AppContext>();

    let input = UserInput::new([
        Song::new(song1_title, song1_artist),
        Song::new(song2_title, song2_artist),
        Song::new(song3_title, song3_artist),
    ])
    .with_element(element)
    .with_situation(situation)
    .with_value(value);

    ctx.analyze_persona
        .execute(input)
        .await
        .map_err(|e: AppError| {
            tracing::warn!("analyze_persona failed: {}", e);
            ServerFnError::new(e.user_message())
        })
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="hero__title">"🎧 Sound Persona"</h1>
            <p class="hero__caption">"Music Personality Analysis AI / 音楽性格診断"</p>
            <p class="hero__subtitle">
                "あなたの「人生の3曲」から、隠された人格と魂の色を分析します。"
            </p>
        </div>

        <AxesGuide/>

        <form action="/analyze" method="post" class="persona-form">
            <h3 class="persona-form__step">"💿 Step 1: 人生の3曲"</h3>
            <SongFields number=1 title_placeholder="例: Creep" artist_placeholder="Radiohead" required=true/>
            <SongFields number=2/>
            <SongFields number=3/>

            <hr/>

            <h3 class="persona-form__step">"🔍 Step 2: 音楽の価値観"</h3>
            <QuestionField
                name="element"
                label="Q1. 音楽で一番重視するのは？"
                placeholder="例: 歌詞、メロディ、リズム"
                help="歌詞、メロディ、リズム、演奏技術、世界観など"
            />
            <QuestionField
                name="situation"
                label="Q2. どんな時に聴きたくなりますか？"
                placeholder="例: 深夜、失恋した時"
                help="具体的なシチュエーションを書くと分析精度が上がります"
            />
            <QuestionField
                name="value"
                label="Q3. あなたにとって「音楽」とは？"
                placeholder="例: 逃避場所、エネルギー源"
                help="直感で答えてください"
                required=true
            />

            <p class="persona-form__warning" id="form-warning" hidden>
                "⚠️ 少なくとも「1曲目」と「音楽とは」は入力してください。"
            </p>
            <button type="submit" class="persona-form__button">
                "Sound Persona を解析する"
            </button>
        </form>
    }
}
