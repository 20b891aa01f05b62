use figment::providers::{Format, Json, Toml, Yaml};
use figment::Figment;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::Result;

pub fn parse(args: &Cli) -> Result<AppConfig> {
    let cfg_file = match args.config.as_ref() {
        Some(path) => Some(path.to_owned()),
        None => dirs::config_dir().map(|d| d.join("i3rate/config")),
    };

    // running without any config file at all is fine, every option has a default
    let cfg_file = match cfg_file {
        Some(path) => path,
        None => return Ok(AppConfig::default()),
    };

    let figment = Figment::new()
        .merge(Toml::file(cfg_file.with_extension("toml")))
        .merge(Json::file(cfg_file.with_extension("json")))
        .merge(Yaml::file(cfg_file.with_extension("yaml")))
        .merge(Yaml::file(cfg_file.with_extension("yml")));

    Ok(figment.extract::<AppConfig>()?)
}
