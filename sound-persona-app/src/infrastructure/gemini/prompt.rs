use crate::domain::{UserInput, AXES, PERSONA_TYPES};
use sound_persona_errors::AppError;

/// Builds the analysis prompt. Fields go in verbatim; the only check is the
/// one `UserInput::validate` performs.
pub fn build_persona_prompt(input: &UserInput) -> Result<String, AppError> {
    input.validate()?;

    let [s1, s2, s3] = &input.songs;

    let axes = AXES
        .iter()
        .map(|a| format!("{}({}) vs {}({})", a.left, a.left_label, a.right, a.right_label))
        .collect::<Vec<_>>()
        .join("\n");

    let taxonomy = PERSONA_TYPES
        .iter()
        .map(|t| format!("- {}: {}", t.code, t.name))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        r#"あなたは音楽心理診断AI「Sound Persona」です。
以下の詳細データからユーザーを分析してください。

【入力データ】
1. {s1_title} (Artist: {s1_artist})
2. {s2_title} (Artist: {s2_artist})
3. {s3_title} (Artist: {s3_artist})
* 重視: {element}
* 状況: {situation}
* 定義: {value}

【分析軸】
{axes}

【タイプ一覧】
(Typeは必ず以下の16タイプから1つ選ぶこと。二つ名はタイプ名を参考に自由に作ってよい)
{taxonomy}

【出力フォーマット】
(マークダウン形式)
## 🎧 Type: **[4文字]**
### 『 [二つ名] 』

**🎨 Soul Color (魂の色)**
* カラー名: [色名]
* カラーコード: **[#RRGGBB]**

**🧠 Persona Analysis (詳細性格分析)**
(300文字程度で深く分析)

**👗 Fashion & Spot**
* Fashion: [似合うスタイル]
* Spot: [似合う場所]

**🤝 Soulmate Connection**
* 最高の相性: **[逆の4文字]** 型
* (理由を一言で)

---
**🐦 X(Twitter)シェア用**
(以下の枠内をそのままコピーできる形で)
```
【Sound Persona 音楽診断】
私のタイプ：[4文字]『 [二つ名] 』
魂の色：[カラー名]
音楽とは「{value}」である。
#SoundPersona
```
"#,
        s1_title = s1.title,
        s1_artist = s1.artist,
        s2_title = s2.title,
        s2_artist = s2.artist,
        s3_title = s3.title,
        s3_artist = s3.artist,
        element = input.element,
        situation = input.situation,
        value = input.value,
        axes = axes,
        taxonomy = taxonomy,
    ))
}
