use std::env;
use std::path::PathBuf;

use blog_client::config::{read_config, Config};

use crate::config_data::write_sample_cfg;
use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let candidates = [
        env::current_exe().ok().and_then(|exe| exe.parent().map(|dir| dir.join(CFG_FILE_NAME))),
        env::current_dir().ok().map(|dir| dir.join(CFG_FILE_NAME)),
        dirs::config_dir().map(|dir| dir.join(CFG_FILE_NAME)),
    ];

    candidates.into_iter().flatten().find(|path| path.exists())
}

/// Reads the configuration, falling back to the defaults when there is no file anywhere.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config, String> {
    let config_path = match cfg_path.or_else(get_config_path) {
        Some(path) => path,
        None => {
            let mut config = Config::default();
            config.apply_env();
            return Ok(config);
        }
    };

    let mut config = read_config(&config_path).map_err(|e| e.to_string())?;
    config.apply_env();

    Ok(config)
}

pub(crate) fn generate_cfg(config_path: Option<PathBuf>) -> Result<PathBuf, String> {
    let path = match config_path {
        Some(path) => path,
        None => match dirs::config_dir() {
            Some(dir) => dir.join(CFG_FILE_NAME),
            None => return Err("Could not find user config dir".to_string()),
        },
    };

    write_sample_cfg(&path).map_err(|e| format!("Error writing {}: {}", path.display(), e))?;

    Ok(path)
}
