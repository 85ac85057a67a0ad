use anyhow::{Context, Result};
use blog_articles::application::{
    ports::{
        render::{MarkdownRenderer, TemplateRenderer},
        seed::SeedSource,
        time::Clock,
    },
    services::ApplicationServices,
};
use blog_articles::config::AppConfig;
use blog_articles::domain::article::{ArticleCollection, ArticleRemote};
use blog_articles::infrastructure::{
    http::{ReqwestArticleRemote, build_client},
    render::{PulldownMarkdownRenderer, TeraTemplateRenderer},
    seed::seed_source_for,
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let services = build_services(&config).await?;

    match std::env::args().nth(1).as_deref() {
        None | Some("index") => print_index(&services).await,
        Some("truncate") => {
            services.article_commands.truncate_table().await?;
            Ok(())
        }
        Some(other) => anyhow::bail!("unknown command `{other}`; expected `index` or `truncate`"),
    }
}

async fn build_services(config: &AppConfig) -> Result<ApplicationServices> {
    let http = build_client(config.request_timeout())?;

    let remote: Arc<dyn ArticleRemote> =
        Arc::new(ReqwestArticleRemote::new(http.clone(), config.api_base())?);
    let seed: Arc<dyn SeedSource> = seed_source_for(config.seed_location(), http);
    let markdown: Arc<dyn MarkdownRenderer> = Arc::new(PulldownMarkdownRenderer::default());
    let templates: Arc<dyn TemplateRenderer> = match config.template_path() {
        Some(path) => Arc::new(
            TeraTemplateRenderer::from_file(path)
                .await
                .with_context(|| format!("loading template {}", path.display()))?,
        ),
        None => Arc::new(TeraTemplateRenderer::with_default_template()?),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    Ok(ApplicationServices::new(remote, seed, markdown, templates, clock))
}

async fn print_index(services: &ApplicationServices) -> Result<()> {
    let mut collection = ArticleCollection::new();
    let outcome = services.article_queries.fetch_all(&mut collection).await?;
    tracing::info!(count = outcome.count(), seeded = outcome.was_seeded(), "articles fetched");

    for html in services.article_rendering.render_collection(&mut collection)? {
        println!("{html}");
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,reqwest=warn,hyper=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
