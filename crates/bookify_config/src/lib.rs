use config::{Config, ConfigError, Environment, File, Map};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod models;
pub use models::*;

/// Marker value that is swapped for an environment variable after loading.
pub const SECRET_FROM_ENV: &str = "secret_from_env";

/// Loads the application configuration.
///
/// Sources, lowest priority first:
/// 1. built-in defaults of [`AppConfig`]
/// 2. `{BOOKIFY_CONFIG_DIR}/default.{toml,yaml,json}`
/// 3. `{BOOKIFY_CONFIG_DIR}/{RUN_ENV}.{toml,yaml,json}`
/// 4. `BOOKIFY_*` environment variables, `__` separating nested keys
///
/// `secret_from_env` markers are resolved last.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("BOOKIFY_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let config = load_config_from(&config_dir, &run_env, None)?;
    apply_env_overrides_from_marker(config)
}

/// Loads configuration from an explicit directory and run environment.
///
/// `env_source` replaces the process environment for the `BOOKIFY_*` layer,
/// which keeps callers that build their own maps away from global state.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    env_source: Option<Map<String, String>>,
) -> Result<AppConfig, ConfigError> {
    let default_path = config_dir.join("default");
    let env_path = config_dir.join(run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let environment = Environment::with_prefix("BOOKIFY")
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("calendar.time_slots")
        .with_list_parse_key("calendar.blackout_slots")
        .try_parsing(true)
        .source(env_source);

    let builder = Config::builder()
        .add_source(File::with_name(&path_to_str(&default_path)?).required(false))
        .add_source(File::with_name(&path_to_str(&env_path)?).required(false))
        .add_source(environment);

    builder.build()?.try_deserialize()
}

fn path_to_str(path: &Path) -> Result<String, ConfigError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| ConfigError::Message(format!("non UTF-8 config path: {}", path.display())))
}

/// Recursively replaces all "secret_from_env" string values using `lookup`.
///
/// The variable name is the upper-cased key path joined by `_`, so
/// `mail_relay.endpoint` reads `MAIL_RELAY_ENDPOINT`.
fn inject_env_secrets(value: &mut Value, lookup: &dyn Fn(&str) -> Option<String>) {
    fn walk(path: &mut Vec<String>, obj: &mut Value, lookup: &dyn Fn(&str) -> Option<String>) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.to_string());
                    walk(path, v, lookup);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_FROM_ENV => {
                let env_key = path.join("_").to_uppercase();
                match lookup(&env_key) {
                    Some(env_val) => *obj = Value::String(env_val),
                    None => warn!("env var {} not found for {}", env_key, SECRET_FROM_ENV),
                }
            }
            _ => {}
        }
    }

    walk(&mut Vec::new(), value, lookup);
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    apply_overrides_with(config, &|key| env::var(key).ok())
}

/// Same as [`apply_env_overrides_from_marker`] with a custom variable lookup.
pub fn apply_overrides_with(
    config: AppConfig,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    inject_env_secrets(&mut json, lookup);
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` when set, otherwise the first command line
/// argument if it starts with `.env`, otherwise `.env`. Loading happens once
/// per process; the chosen path is returned either way.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
