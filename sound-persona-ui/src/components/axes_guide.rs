use leptos::prelude::*;
use sound_persona_app::domain::AXES;

#[component]
pub fn AxesGuide() -> impl IntoView {
    view! {
        <details class="axes">
            <summary class="axes__summary">"📊 分析軸について"</summary>
            <p>"あなたの音楽の好みを4つの軸で分析します："</p>
            <table class="axes__table">
                <thead>
                    <tr><th>"軸"</th><th>"説明"</th></tr>
                </thead>
                <tbody>
                    {AXES.iter().map(|axis| view! {
                        <tr>
                            <td>
                                <strong>{axis.left.to_string()}</strong>
                                {format!("({}) vs ", axis.left_label)}
                                <strong>{axis.right.to_string()}</strong>
                                {format!("({})", axis.right_label)}
                            </td>
                            <td>{axis.description}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
            <p class="axes__example">
                "例：" <strong>"LEMD"</strong> " = 歌詞重視・感情的・メインストリーム・ダーク"
            </p>
        </details>
    }
}
