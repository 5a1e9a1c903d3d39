use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use serde::Deserialize;

use crate::Error;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub debug: bool,
    /// Treat numbers beyond the largest scale as an error instead of printing `unknown`.
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Reads a JSON config. A missing file is not an error and results in the default config.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        match File::open(path) {
            Ok(f) => Ok(serde_json::from_reader(BufReader::new(f))?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Applies command line flags. A flag can only switch a setting on, never off.
    pub fn with_flags(mut self, debug: bool, strict: bool) -> Self {
        self.debug |= debug;
        self.strict |= strict;
        self
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "numwords-config-{}-{}.json",
            name,
            std::process::id()
        ));
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(config.strict);
        assert!(!config.debug);
    }

    #[test]
    fn test_with_flags() {
        let from_file = Config {
            debug: false,
            strict: true,
        };
        assert_eq!(
            from_file.clone().with_flags(false, false),
            from_file,
        );
        assert_eq!(
            from_file.with_flags(true, false),
            Config {
                debug: true,
                strict: true
            }
        );
        assert_eq!(
            Config::default().with_flags(false, true),
            Config {
                debug: false,
                strict: true
            }
        );
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("numwords-config-does-not-exist.json");
        assert_eq!(Config::from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_read_file() {
        let path = write_config("read", r#"{"debug": true, "strict": true}"#);
        let config = Config::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            config,
            Config {
                debug: true,
                strict: true
            }
        );
    }

    #[test]
    fn test_invalid_file() {
        let path = write_config("invalid", "debug = true");
        let result = Config::from_path(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(Error::Json(_))));
    }
}
