use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub const DEFAULT_PRICES_DIR: &str = "./prices";
pub const DEFAULT_OUTPUT_PATH: &str = "output.html";
pub const FILE_MARKER: &str = "price";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prices_dir: PathBuf,
    pub output_path: PathBuf,
    pub marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prices_dir: PathBuf::from(DEFAULT_PRICES_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            marker: FILE_MARKER.to_owned(),
        }
    }
}

impl Config {
    /// Builds the configuration from command line arguments.
    ///
    /// Usage: `price-machine [PRICES_DIR] [OUTPUT_HTML]`, the first element
    /// being the program name.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().skip(1).collect();
        let mut config = Config::default();

        match args.as_slice() {
            [] => {}
            [dir] => config.prices_dir = dir.into(),
            [dir, output] => {
                config.prices_dir = dir.into();
                config.output_path = output.into();
            }
            _ => Err(anyhow!(
                "too many arguments, usage: price-machine [PRICES_DIR] [OUTPUT_HTML]"
            ))?,
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_arguments() -> Result<()> {
        let config = Config::from_args(args(&["price-machine"]))?;
        assert_eq!(config, Config::default());
        assert_eq!(config.prices_dir, PathBuf::from("./prices"));
        assert_eq!(config.output_path, PathBuf::from("output.html"));
        assert_eq!(config.marker, "price");
        Ok(())
    }

    #[test]
    fn test_directory_and_output_arguments() -> Result<()> {
        let config = Config::from_args(args(&["price-machine", "/data/lists"]))?;
        assert_eq!(config.prices_dir, PathBuf::from("/data/lists"));
        assert_eq!(config.output_path, PathBuf::from("output.html"));

        let config = Config::from_args(args(&["price-machine", "lists", "out/report.html"]))?;
        assert_eq!(config.output_path, PathBuf::from("out/report.html"));
        Ok(())
    }

    #[test]
    fn test_too_many_arguments() {
        let res = Config::from_args(args(&["price-machine", "a", "b", "c"]));
        assert!(res.is_err());
    }
}
