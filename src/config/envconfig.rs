use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub type EnvVars = config_rs::Map<String, String>;

pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    /// `.env` is read from the working directory, next to the default
    /// `testdb.db`. Variables already set in the process win.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::from_vars(None)
    }

    /// Builds the config from `vars` instead of the process environment when
    /// given. Either way the result is validated.
    fn from_vars(vars: Option<EnvVars>) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(
                config_rs::Environment::with_prefix(Self::PREFIX)
                    .prefix_separator("_")
                    .separator(Self::SEPARATOR)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
