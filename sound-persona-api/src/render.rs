use crate::markdown::{escape_html, markdown_to_html};
use sound_persona_app::domain::PersonaReport;
use sound_persona_errors::AppError;

const ICON: &str = "data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🎧</text></svg>";

pub fn render_result_page(report: &PersonaReport) -> String {
    let analysis = &report.analysis;
    let html_content = markdown_to_html(&analysis.raw_text);

    let persona = match (&report.persona, &report.soulmate) {
        (Some(persona), Some(soulmate)) => format!(
            r#"<p class="persona__type">{code} / {name}</p>
            <p class="persona__soulmate">最高の相性: {soulmate_code} / {soulmate_name}</p>"#,
            code = persona.code,
            name = persona.name,
            soulmate_code = soulmate.code,
            soulmate_name = soulmate.name,
        ),
        _ => String::new(),
    };

    let color_card = analysis
        .color_hex
        .as_deref()
        .map(|hex| render_color_card(hex, analysis.color_name.as_deref()))
        .unwrap_or_default();

    let title = analysis
        .title
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "診断結果".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Sound Persona: {title}</title>
    <link rel="icon" href="{ICON}">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <p class="success">Analysis Complete.</p>
        <div class="persona">
            {persona}
            <div class="persona__content">{html_content}</div>
            {color_card}
            <div class="persona__actions">
                <a href="{share_url}" class="persona__share" target="_blank" rel="noopener">🐦 結果をX(Twitter)でポストする</a>
                <a href="/" class="persona__again">もう一度診断する</a>
            </div>
            <p class="persona__timestamp">{analyzed_at}</p>
        </div>
    </main>
</body>
</html>"#,
        title = title,
        ICON = ICON,
        CSS = CSS,
        persona = persona,
        html_content = html_content,
        color_card = color_card,
        share_url = escape_html(&report.share_url),
        analyzed_at = report.analyzed_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

fn render_color_card(hex: &str, color_name: Option<&str>) -> String {
    let name = color_name
        .map(|n| format!(r#"<p class="soul-color__name">{}</p>"#, escape_html(n)))
        .unwrap_or_default();

    format!(
        r#"<div class="soul-color" style="background-color: {hex};">
                <h3 class="soul-color__title">Your Soul Color</h3>
                {name}
                <p class="soul-color__hex">{hex}</p>
            </div>"#,
        hex = escape_html(hex),
        name = name,
    )
}

pub fn render_error_page(error: &AppError) -> String {
    let (class, title) = if error.is_recoverable() {
        ("warning", "入力を確認してください")
    } else {
        ("error", "エラーが発生しました")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Sound Persona</title>
    <link rel="icon" href="{ICON}">
    <style>{CSS}</style>
</head>
<body>
    <main class="container">
        <div class="{class}">
            <p class="{class}__title">{title}</p>
            <p class="{class}__message">{message}</p>
            <a href="/" class="{class}__retry">フォームに戻る</a>
        </div>
    </main>
</body>
</html>"#,
        class = class,
        title = title,
        message = escape_html(&error.user_message()),
        ICON = ICON,
        CSS = CSS,
    )
}

pub const CSS: &str = r#"
:root {
    --base: #f0f2f6;
    --surface: #ffffff;
    --overlay: #e3e6ec;
    --muted: #9a9ca5;
    --text: #31333f;
    --label: #4a4a4a;
    --accent: #ff4b4b;
    --success: #21c354;
    --warning: #faca2b;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: 'Noto Sans JP', -apple-system, sans-serif;
    background: var(--base);
    color: var(--text);
    min-height: 100vh;
}
.container { max-width: 720px; margin: 0 auto; padding: 1.5rem; }
.hero { padding: 2.5rem 0 1.5rem; }
.hero__title { font-size: clamp(2rem, 5vw, 2.75rem); font-weight: 800; }
.hero__caption { color: var(--muted); font-size: 0.9rem; margin: 0.25rem 0 0.75rem; }
.axes { background: var(--surface); border: 1px solid var(--overlay); border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1.5rem; }
.axes__summary { cursor: pointer; font-weight: 600; }
.axes__table { width: 100%; border-collapse: collapse; margin: 0.75rem 0; }
.axes__table th, .axes__table td { border-bottom: 1px solid var(--overlay); padding: 0.4rem; text-align: left; }
.persona-form { display: flex; flex-direction: column; gap: 1rem; }
.persona-form__step { margin-top: 0.5rem; }
.persona-form hr { border: none; border-top: 1px solid var(--overlay); }
.song-row { display: grid; grid-template-columns: 1.5fr 1fr; gap: 0.75rem; }
.field, .song-row label { display: flex; flex-direction: column; gap: 0.3rem; }
.field__label { font-size: 105%; font-weight: bold; color: var(--label); }
.field__input { padding: 0.65rem 0.8rem; border: 1px solid var(--overlay); border-radius: 6px; background: var(--surface); font-size: 1rem; }
.field__input:focus { outline: none; border-color: var(--accent); }
.field__help { color: var(--muted); }
.persona-form__warning { background: #fffbe6; border: 1px solid var(--warning); border-radius: 6px; padding: 0.75rem; }
.persona-form__button { padding: 0.9rem; background: var(--accent); color: #fff; border: none; border-radius: 8px; font-size: 1rem; font-weight: 600; cursor: pointer; width: 100%; }
.persona-form__button:disabled { background: var(--muted); cursor: wait; }
.success { background: #e8f9ee; color: #177233; border-radius: 6px; padding: 0.75rem 1rem; margin: 1.5rem 0 1rem; }
.persona { background: var(--surface); border: 1px solid var(--overlay); border-radius: 12px; padding: 1.5rem; }
.persona__type { font-size: 1.1rem; font-weight: 700; }
.persona__soulmate { color: var(--muted); margin-bottom: 1rem; }
.persona__content { line-height: 1.8; }
.persona__content p, .persona__content ul, .persona__content pre { margin-bottom: 1rem; }
.persona__content h3, .persona__content h4 { margin: 1rem 0 0.5rem; }
.persona__content li { margin-left: 1.5rem; }
.persona__content table { width: 100%; border-collapse: collapse; margin-bottom: 1rem; }
.persona__content th, .persona__content td { border-bottom: 1px solid var(--overlay); padding: 0.4rem; text-align: left; }
.persona__content pre { background: var(--base); padding: 0.75rem; border-radius: 6px; white-space: pre-wrap; }
.persona__content hr { border: none; border-top: 1px solid var(--overlay); margin: 1rem 0; }
.soul-color { color: #ffffff; padding: 20px; border-radius: 10px; text-align: center; border: 2px solid #ddd; text-shadow: 0px 0px 5px rgba(0,0,0,0.5); margin: 1rem 0; }
.soul-color__hex { font-size: 1.2em; }
.persona__actions { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1.5rem; }
.persona__share, .persona__again { padding: 0.7rem 1.2rem; border-radius: 8px; text-decoration: none; font-weight: 600; }
.persona__share { background: #000000; color: #ffffff; }
.persona__again { border: 1px solid var(--overlay); color: var(--text); }
.persona__timestamp { color: var(--muted); font-size: 0.8rem; margin-top: 1rem; text-align: right; }
.warning, .error { border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
.warning { background: #fffbe6; border: 2px solid var(--warning); }
.error { background: #fdecec; border: 2px solid var(--accent); }
.warning__title, .error__title { font-weight: 700; margin-bottom: 0.5rem; }
.warning__retry, .error__retry { display: inline-block; margin-top: 1rem; color: var(--text); }
"#;
