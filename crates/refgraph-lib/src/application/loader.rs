//! Configuration loading from environment files

use crate::primitives::ConfigError;

/// Environment files read at startup, first match wins per variable
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` and `.env` into the process environment
///
/// Missing files are skipped; unreadable or malformed ones are errors.
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in &ENV_FILES {
        if let Err(e) = dotenvy::from_filename(env_file) {
            if !e.not_found() {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
