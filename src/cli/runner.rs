//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{ZzzBannerType, ZzzNotes};
use crate::pagination::into_stream;
use crate::types::{Game, JsonValue};
use futures::TryStreamExt;
use serde::Serialize;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::new(self.load_config()?)?;
        let uid = self.cli.uid;

        match &self.cli.command {
            Commands::Signals {
                banners,
                limit,
                end_id,
            } => self.signals(&client, banners, *limit, *end_id).await,
            Commands::GachaInfo { raw: true } => {
                self.output(&client.get_zzz_gacha_info_raw(uid).await?)
            }
            Commands::GachaInfo { raw: false } => {
                self.output(&client.get_zzz_gacha_info(uid).await?)
            }
            Commands::GachaCalendar => self.output(&client.get_zzz_gacha_calendar(uid).await?),
            Commands::Events => self.output(&client.get_zzz_event_calendar(uid).await?),
            Commands::DeadlyAssault { previous, raw: true } => {
                self.output(&client.get_deadly_assault_raw(uid, *previous).await?)
            }
            Commands::DeadlyAssault {
                previous,
                raw: false,
            } => self.output(&client.get_deadly_assault(uid, *previous).await?),
            Commands::ShiyuDefense { previous, raw: true } => {
                self.output(&client.get_shiyu_defense_raw(uid, *previous).await?)
            }
            Commands::ShiyuDefense {
                previous,
                raw: false,
            } => self.output(&client.get_shiyu_defense(uid, *previous).await?),
            Commands::ThresholdSimulation { brief: true, .. } => {
                self.output(&client.get_threshold_simulation_brief(uid).await?)
            }
            Commands::ThresholdSimulation { id, raw: true, .. } => {
                self.output(&client.get_threshold_simulation_raw(*id, uid).await?)
            }
            Commands::ThresholdSimulation { id, .. } => {
                self.output(&client.get_threshold_simulation(*id, uid).await?)
            }
            Commands::Notes { raw: true } => {
                self.output(&client.get_zzz_notes::<JsonValue>(uid).await?)
            }
            Commands::Notes { raw: false } => {
                self.output(&client.get_zzz_notes::<ZzzNotes>(uid).await?)
            }
            Commands::Diary { month } => {
                self.output(&client.get_zzz_diary(uid, month.as_deref()).await?)
            }
        }
    }

    /// Load the configuration file and apply command-line overrides
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                ClientConfig::from_file(path)?
            }
            None => ClientConfig::default(),
        };

        if let Some(lang) = &self.cli.lang {
            config = config.with_lang(lang.clone());
        }
        if let Some(uid) = self.cli.uid {
            config = config.with_uid(Game::Zzz, uid);
        }
        config.validate()?;
        Ok(config)
    }

    /// Print every pull as its own line, streaming as pages arrive
    async fn signals(
        &self,
        client: &Client,
        banners: &[i64],
        limit: Option<usize>,
        end_id: u64,
    ) -> Result<()> {
        let banners = banners
            .iter()
            .map(|&code| ZzzBannerType::try_from(code))
            .collect::<Result<Vec<_>>>()?;

        let history = client.chronicle_signal_history(self.cli.uid, &banners, limit, end_id)?;
        let mut stream = Box::pin(into_stream(history));
        let mut count = 0usize;
        while let Some(signal) = stream.try_next().await? {
            self.output(&signal)?;
            count += 1;
        }

        info!(count, "Signal history complete");
        Ok(())
    }

    /// Output a value
    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}
