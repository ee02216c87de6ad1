//! `tsgen.toml` project configuration.
//!
//! ```toml
//! [output]
//! dir = "src/apis"
//! preamble = "import axios from './base'"
//! error_style = "sentinel"
//!
//! [lint]
//! strict = false
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;
use tsgen_codegen_typescript::{ErrorStyle, GeneratorOptions};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG: &str = "tsgen.toml";

/// Output directory used when neither flags nor config name one.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub lint: LintConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub preamble: Option<String>,
    pub error_style: Option<ErrorStyle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub strict: bool,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `tsgen.toml` in the working
    /// directory is used when present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::open(Path::new(DEFAULT_CONFIG)),
            None => Ok(Self::default()),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config '{}'", path.display()))?;
        let config = Self::parse(&content)
            .wrap_err_with(|| format!("invalid config '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Effective generation settings after merging flags over the config file.
#[derive(Debug)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub strict: bool,
    pub options: GeneratorOptions,
}

/// Values given on the command line (or through their environment variables).
#[derive(Debug, Default)]
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub preamble: Option<String>,
    pub error_style: Option<ErrorStyle>,
    pub strict: bool,
}

impl Settings {
    pub fn resolve(config: Config, overrides: Overrides) -> Self {
        Self {
            output_dir: overrides
                .output_dir
                .or(config.output.dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            strict: overrides.strict || config.lint.strict,
            options: GeneratorOptions {
                preamble: overrides.preamble.or(config.output.preamble),
                error_style: overrides
                    .error_style
                    .or(config.output.error_style)
                    .unwrap_or_default(),
            },
        }
    }
}
