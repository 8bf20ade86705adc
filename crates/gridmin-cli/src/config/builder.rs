use super::defaults::DefaultsConfig;
use super::file::{ExclusionMode, FileConfig, FileExtractionConfig};
use super::models::AppConfig;
use crate::cli::{ExclusionArgs, LocateArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use gridmin::engine::config::ExtractionConfigBuilder;
use gridmin::engine::policy::ExclusionPolicy;
use std::str::FromStr;
use tracing::debug;

/// Merges defaults, the optional TOML file, `--set` overrides and explicit flags, in that order
/// of increasing precedence.
pub fn build_config(args: &LocateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;
    let extraction_file = file_config.extraction.take().unwrap_or_default();

    let num_minima = args
        .num_minima
        .or(extraction_file.num_minima)
        .unwrap_or(defaults.num_minima);
    let policy = resolve_policy(&args.exclusion, &extraction_file, &defaults);
    debug!("Resolved exclusion policy: {:?}", policy);

    let extraction = ExtractionConfigBuilder::new()
        .num_minima(num_minima)
        .exclusion_policy(policy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    extraction.validate()?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        report_path: args.output.clone(),
        extraction,
    })
}

fn resolve_policy(
    cli: &ExclusionArgs,
    file_val: &FileExtractionConfig,
    defaults: &DefaultsConfig,
) -> Option<ExclusionPolicy> {
    if cli.no_exclusion {
        return None;
    }
    if let Some(radius) = cli.exclusion_radius {
        return Some(ExclusionPolicy::SpatialRadius(radius));
    }
    if let Some(band) = cli.value_band {
        return Some(ExclusionPolicy::ValueBand(band));
    }

    match file_val.mode.unwrap_or(defaults.mode) {
        ExclusionMode::SpatialRadius => Some(ExclusionPolicy::SpatialRadius(
            file_val.exclusion_radius.unwrap_or(defaults.exclusion_radius),
        )),
        ExclusionMode::ValueBand => Some(ExclusionPolicy::ValueBand(
            file_val.value_band.unwrap_or(defaults.value_band),
        )),
        ExclusionMode::None => None,
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
        let extraction = config.extraction.get_or_insert_with(Default::default);

        match key {
            "extraction.num-minima" => {
                extraction.num_minima = Some(parse_value(key, value_str, "integer")?);
            }
            "extraction.mode" => {
                extraction.mode = Some(value_str.parse()?);
            }
            "extraction.exclusion-radius" => {
                extraction.exclusion_radius = Some(parse_value(key, value_str, "float")?);
            }
            "extraction.value-band" => {
                extraction.value_band = Some(parse_value(key, value_str, "float")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
