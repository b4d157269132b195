//! Coach chat proxy server binary.
//!
//! Configuration comes from CLI flags with environment fallbacks; a `.env`
//! file in the working directory is loaded first when present.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use coach_core::config::{API_KEY_ENV, ConfigError, DEFAULT_BASE_URL, ProviderConfig};
use coach_core::provider::openai::OpenAiCompatibleProvider;
use coach_core::settings::{ChatSettings, ChatVariant, DEFAULT_MAX_TOKENS};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments for the chat proxy.
#[derive(Parser, Debug)]
#[command(name = "coach_api_server", about = "Coach chat proxy server", version)]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Handler preset: sectioned, common or raw-fetch.
    #[arg(long, env = "CHAT_VARIANT", default_value = "sectioned")]
    variant: ChatVariant,

    /// Model identifier; defaults to the variant's model.
    #[arg(long, env = "CHAT_MODEL")]
    model: Option<String>,

    /// Maximum output tokens per completion.
    #[arg(
        long,
        env = "CHAT_MAX_TOKENS",
        default_value_t = DEFAULT_MAX_TOKENS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_tokens: u32,

    /// OpenAI-compatible API root.
    #[arg(long, env = "PROVIDER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    provider_base_url: String,

    /// Timeout for one provider call, in seconds.
    #[arg(long, env = "PROVIDER_TIMEOUT_SECS", default_value_t = 60)]
    provider_timeout_secs: u64,

    /// Provider API key.
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Sent upstream as `HTTP-Referer`.
    #[arg(long, env = "SITE_URL")]
    site_url: Option<String>,

    /// Sent upstream as `X-Title`.
    #[arg(long, env = "SITE_NAME")]
    site_name: Option<String>,
}

impl Args {
    fn chat_settings(&self) -> ChatSettings {
        let settings = ChatSettings::for_variant(self.variant).with_max_tokens(self.max_tokens);
        match self.model.as_deref().map(str::trim) {
            Some(model) if !model.is_empty() => settings.with_model(model),
            _ => settings,
        }
    }

    fn provider_config(&self) -> Result<ProviderConfig, ConfigError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or(ConfigError::Missing(API_KEY_ENV))?;
        Ok(ProviderConfig::new(
            self.provider_base_url.clone(),
            api_key,
            Duration::from_secs(self.provider_timeout_secs),
        )?
        .with_site(self.site_url.clone(), self.site_name.clone()))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,coach_api=debug,coach_core=debug")),
        )
        .init();

    let args = Args::parse();

    let settings = args.chat_settings();
    let provider_config = args.provider_config()?;

    info!(
        variant = %settings.variant,
        model = %settings.model,
        max_tokens = settings.max_tokens,
        "configuring chat handler"
    );
    info!(
        base_url = %provider_config.base_url,
        timeout_secs = args.provider_timeout_secs,
        "configuring provider"
    );

    let provider = OpenAiCompatibleProvider::new(provider_config)?;
    let state = coach_api::AppState {
        settings,
        provider: Arc::new(provider),
    };

    let app = coach_api::router(state);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "server running on http://localhost:{}", local_addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["coach_api_server", "--api-key", "sk-test"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("parse args")
    }

    #[test]
    fn variant_flag_selects_preset() {
        let args = parse(&["--variant", "common"]);
        let s = args.chat_settings();
        assert_eq!(s.variant, ChatVariant::Common);
        assert!(s.strict_sections);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let res = Args::try_parse_from(["coach_api_server", "--variant", "streaming"]);
        assert!(res.is_err());
    }

    #[test]
    fn model_override_wins() {
        let args = parse(&["--variant", "sectioned", "--model", "openai/gpt-4o-mini"]);
        assert_eq!(args.chat_settings().model, "openai/gpt-4o-mini");
    }

    #[test]
    fn blank_model_keeps_default() {
        let args = parse(&["--variant", "raw-fetch", "--model", " "]);
        assert_eq!(args.chat_settings().model, "openai/gpt-3.5-turbo");
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let res = Args::try_parse_from(["coach_api_server", "--max-tokens", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn provider_config_from_flags() {
        let args = parse(&[
            "--provider-base-url",
            "http://localhost:9000/v1",
            "--provider-timeout-secs",
            "5",
            "--site-name",
            "Coach",
        ]);
        let cfg = args.provider_config().unwrap();
        assert_eq!(cfg.api_key, "sk-test");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.site_name.as_deref(), Some("Coach"));
        assert_eq!(cfg.completions_url(), "http://localhost:9000/v1/chat/completions");
    }

    #[test]
    fn zero_timeout_is_a_config_error() {
        let args = parse(&["--provider-timeout-secs", "0"]);
        assert!(matches!(
            args.provider_config(),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
