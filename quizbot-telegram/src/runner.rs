//! Startup wiring and the dispatcher loop: teloxide updates become core events and go to the
//! [`Router`]; SIGINT/SIGTERM stop polling, in-flight updates finish, then the contact log closes.

use std::sync::Arc;

use anyhow::{Context, Result};
use handlers::{register_handlers, ContentCatalog, HandlerDeps, RandomSelection};
use interaction_router::Router;
use quizbot_core::{init_tracing, ToCoreEvent};
use storage::{ContactLogger, UserStateStore};
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use tracing::{debug, error, info, instrument, warn};

use crate::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::bot_adapter::TelegramBotAdapter;
use crate::config::BotConfig;

/// Router plus the resources the runner must release on shutdown.
pub struct BotComponents {
    pub router: Arc<Router>,
    pub contact_log: Arc<ContactLogger>,
}

/// Loads and validates the catalog, opens the contact log and registers every handler.
/// Does not touch the network; used by `run_bot` and by tests.
#[instrument(skip(config))]
pub async fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let catalog = ContentCatalog::load(config.catalog_path.as_deref())
        .context("Failed to load content catalog")?;
    let contact_log = Arc::new(
        ContactLogger::open(&config.contact_log_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to open contact log {}",
                    config.contact_log_path.display()
                )
            })?,
    );

    let router = Router::new(UserStateStore::new(), config.score_policy());
    let deps = HandlerDeps::for_router(
        &router,
        Arc::new(catalog),
        Arc::new(RandomSelection::new()),
        contact_log.clone(),
    );
    let router = register_handlers(router, &deps);
    info!(
        score_tracking = config.score_tracking,
        bonus_points = deps.bonus_points,
        "Handlers registered"
    );

    Ok(BotComponents {
        router: Arc::new(router),
        contact_log,
    })
}

fn teloxide_bot(config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Main entry: validate config, init logging, build components, then poll until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        contact_log = %config.contact_log_path.display(),
        score_tracking = config.score_tracking,
        "Initializing bot"
    );

    let components = build_components(&config).await?;
    let bot = teloxide_bot(&config);
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Bot started successfully"),
        Err(e) => warn!(error = %e, "get_me failed; polling anyway"),
    }

    dispatch(bot, components.router.clone()).await;

    components
        .contact_log
        .close()
        .await
        .context("Failed to close contact log")?;
    info!("Bot stopped");
    Ok(())
}

async fn dispatch(bot: teloxide::Bot, router: Arc<Router>) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router])
        .default_handler(|upd| async move {
            debug!(update_id = ?upd.id, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build();

    let shutdown = dispatcher.shutdown_token();
    tokio::spawn(async move {
        terminate_signal().await;
        info!("SIGTERM received, shutting down");
        match shutdown.shutdown() {
            Ok(done) => done.await,
            Err(e) => warn!(error = ?e, "Dispatcher was not running"),
        }
    });

    info!("Starting dispatcher with long polling");
    dispatcher.dispatch().await;
    info!("Dispatcher stopped");
}

#[cfg(unix)]
async fn terminate_signal() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!(error = %e, "Cannot listen for SIGTERM");
            std::future::pending::<()>().await
        }
    }
}

#[cfg(not(unix))]
async fn terminate_signal() {
    std::future::pending::<()>().await
}

async fn message_handler(
    bot: teloxide::Bot,
    msg: Message,
    router: Arc<Router>,
) -> ResponseResult<()> {
    let Some(event) = TelegramMessageWrapper(&msg).to_core() else {
        debug!(chat_id = msg.chat.id.0, "Ignoring unsupported message");
        return Ok(());
    };
    info!(
        user_id = event.user.id,
        chat_id = event.chat.id,
        kind = ?event.kind,
        "Received message"
    );
    router
        .dispatch(&TelegramBotAdapter::new(bot), &event)
        .await;
    Ok(())
}

async fn callback_handler(
    bot: teloxide::Bot,
    query: CallbackQuery,
    router: Arc<Router>,
) -> ResponseResult<()> {
    let Some(event) = TelegramCallbackWrapper(&query).to_core() else {
        debug!(user_id = query.from.id.0, "Ignoring callback without data");
        return Ok(());
    };
    info!(
        user_id = event.user.id,
        chat_id = event.chat.id,
        kind = ?event.kind,
        "Received callback"
    );
    router
        .dispatch(&TelegramBotAdapter::new(bot), &event)
        .await;
    Ok(())
}
