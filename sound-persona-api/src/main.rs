mod markdown;
mod render;

use axum::{
    extract::Query,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use serde::Deserialize;
use sound_persona_app::domain::{Song, UserInput};
use sound_persona_app::AppContext;
use sound_persona_ui::pages::AnalyzePersonaFn;
use sound_persona_ui::App;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

#[derive(Deserialize, Default)]
#[serde(default)]
struct AnalyzeForm {
    song1_title: String,
    song1_artist: String,
    song2_title: String,
    song2_artist: String,
    song3_title: String,
    song3_artist: String,
    element: String,
    situation: String,
    value: String,
}

impl From<AnalyzeForm> for UserInput {
    fn from(form: AnalyzeForm) -> Self {
        UserInput::new([
            Song::new(form.song1_title, form.song1_artist),
            Song::new(form.song2_title, form.song2_artist),
            Song::new(form.song3_title, form.song3_artist),
        ])
        .with_element(form.element)
        .with_situation(form.situation)
        .with_value(form.value)
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env(&format!("http://{}", addr)) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<AnalyzePersonaFn>();
    tracing::info!("Registered server function: AnalyzePersonaFn");

    let app = Router::new()
        .route("/analyze", get({
            let ctx = app_context.clone();
            move |query: Query<AnalyzeForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_analyze_form(ctx, query.0).await
                }
            }
        }).post({
            let ctx = app_context.clone();
            move |form: Form<AnalyzeForm>| {
                let ctx = ctx.clone();
                async move {
                    handle_analyze_form(ctx, form.0).await
                }
            }
        }))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Share links point at {}", app_context.app_url);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

async fn handle_analyze_form(ctx: AppContext, form: AnalyzeForm) -> impl IntoResponse {
    match ctx.analyze_persona.execute(form.into()).await {
        Ok(report) => Html(render::render_result_page(&report)).into_response(),
        Err(e) => {
            if !e.is_recoverable() {
                tracing::error!("Analysis failed: {}", e);
            }
            (e.status_code(), Html(render::render_error_page(&e))).into_response()
        }
    }
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    let submit_script = r#"
        document.addEventListener('DOMContentLoaded', function() {
            const form = document.querySelector('.persona-form');
            const button = document.querySelector('.persona-form__button');
            const warning = document.getElementById('form-warning');

            form.addEventListener('submit', function(ev) {
                const song = form.elements['song1_title'].value.trim();
                const value = form.elements['value'].value.trim();
                if (!song || !value) {
                    ev.preventDefault();
                    warning.hidden = false;
                    return;
                }
                warning.hidden = true;
                button.disabled = true;
                button.textContent = '🎧 波形を解析中... あなたの深層心理にダイブしています...';
            });
        });
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="ja">
            <head>{shell_head()}</head>
            <body>
                <App/>
                <script>{submit_script}</script>
            </body>
        </html>
    }
}

/// Static head content. The page title comes from `App` through `MetaTags`.
fn shell_head() -> impl IntoView {
    use leptos_meta::MetaTags;

    view! {
        <meta charset="utf-8"/>
        <meta name="viewport" content="width=device-width, initial-scale=1"/>
        <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🎧</text></svg>"/>
        <style>{render::CSS}</style>
        <MetaTags/>
    }
}
