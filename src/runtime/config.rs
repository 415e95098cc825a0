//! Configuration Management
use config::File;
use config::Source;
use config::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;
use std::sync::MutexGuard;
use tracing::level_filters::LevelFilter;

use crate::image::BoundaryKind;

/// Get global configuration
pub fn config() -> Config {
    get_config().clone()
}

// helper to deal with poisoned Mutex
fn get_config() -> MutexGuard<'static, Config> {
    CONFIG.lock().unwrap_or_else(|poison| {
        warn!("config poisoned, restoring initial config");
        let mut c = poison.into_inner();
        *c = init_config();
        CONFIG.clear_poison();
        c
    })
}

/// Set config value
pub fn set<V: Into<config::Value>>(name: impl Into<String>, value: V) {
    get_config().set_value(name, value);
}

/// Get value from config
pub fn get_value(name: &str) -> Option<Value> {
    get_config().misc.get(name).cloned()
}

/// Try to parse value from config string
pub fn get<T: FromStr>(name: &str) -> Option<T> {
    get_config()
        .misc
        .get(name)
        .and_then(|v| v.clone().into_string().ok())
        .and_then(|v| v.parse::<T>().ok())
}

fn init_config() -> Config {
    let mut settings = ::config::Config::builder();

    // user config
    if let Some(mut path) = dirs::config_dir() {
        path.push("mprj-fir");
        path.push("config.toml");

        settings = settings.add_source(File::from(path.clone()).required(false));
    }

    // project config
    settings =
        settings.add_source(File::new("config.toml", config::FileFormat::Toml).required(false));

    // env config
    settings = settings.add_source(config::Environment::with_prefix("mprj_fir"));

    // start from default config
    let mut c = Config::default();

    match settings.build() {
        Ok(settings) => match settings.collect() {
            Ok(config) => {
                for (k, v) in config.into_iter() {
                    c.set_value(k, v);
                }
            }
            Err(e) => warn!("error parsing config {e:?}"),
        },
        Err(e) => warn!("error reading config {e:?}"),
    }
    c
}

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(init_config()));

/// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LevelFilter,
    /// What the image kernel reads before the start of its history buffer
    pub boundary: BoundaryKind,
    /// Kernel invocations per testbench run
    pub iterations: usize,
    /// Check reported outputs against the golden vector
    pub verify: bool,
    misc: HashMap<String, Value>,
}

impl Config {
    fn set_value<V: Into<config::Value>>(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let value = value.into();

        match name.as_str() {
            "log_level" => {
                if let Some(v) = config_parse::<LevelFilter>(&name, &value) {
                    self.log_level = v;
                }
            }
            "boundary" => {
                if let Some(v) = config_parse::<BoundaryKind>(&name, &value) {
                    self.boundary = v;
                }
            }
            "iterations" => {
                if let Some(v) = config_parse::<usize>(&name, &value) {
                    self.iterations = v;
                }
            }
            "verify" => {
                if let Some(v) = config_parse::<bool>(&name, &value) {
                    self.verify = v;
                }
            }
            _ => {
                self.misc.insert(name, value);
            }
        }
    }
}

impl Default for Config {
    #[cfg(debug_assertions)]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::DEBUG,
            boundary: BoundaryKind::Zero,
            iterations: 1,
            verify: true,
            misc: HashMap::new(),
        }
    }

    #[cfg(not(debug_assertions))]
    fn default() -> Self {
        Config {
            log_level: LevelFilter::INFO,
            boundary: BoundaryKind::Zero,
            iterations: 1,
            verify: true,
            misc: HashMap::new(),
        }
    }
}

fn config_parse<T: FromStr>(name: &str, v: &Value) -> Option<T> {
    let parsed = v
        .clone()
        .into_string()
        .ok()
        .and_then(|s| s.parse::<T>().ok());
    if parsed.is_none() {
        warn!("invalid config value for {name}: {v:?}, keeping previous");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_keys() {
        let mut c = Config::default();
        c.set_value("boundary", "taps");
        c.set_value("iterations", 3i64);
        c.set_value("verify", false);
        c.set_value("log_level", "warn");
        assert_eq!(c.boundary, BoundaryKind::Taps);
        assert_eq!(c.iterations, 3);
        assert!(!c.verify);
        assert_eq!(c.log_level, LevelFilter::WARN);
    }

    #[test]
    fn invalid_value_keeps_previous() {
        let mut c = Config::default();
        c.set_value("iterations", "many");
        c.set_value("boundary", "wrap");
        assert_eq!(c.iterations, 1);
        assert_eq!(c.boundary, BoundaryKind::Zero);
    }

    #[test]
    fn unknown_keys_go_to_misc() {
        let mut c = Config::default();
        c.set_value("probe", "la");
        assert_eq!(
            c.misc.get("probe").and_then(|v| v.clone().into_string().ok()),
            Some("la".to_string())
        );
    }
}
