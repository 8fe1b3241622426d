// SPDX-License-Identifier: MPL-2.0
//! Where settings and exported reports live on disk.
//!
//! Each [`AppDir`] is looked up in this order, first hit wins:
//! an explicit path from the caller, the `--config-dir` / `--data-dir`
//! flag, the `ICED_SERVICES_*_DIR` environment variable, then the
//! platform directory with an `IcedServices` subfolder.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_FOLDER: &str = "IcedServices";

pub const ENV_DATA_DIR: &str = "ICED_SERVICES_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "ICED_SERVICES_CONFIG_DIR";

#[derive(Debug, Default)]
struct FlagDirs {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
}

static FLAG_DIRS: OnceLock<FlagDirs> = OnceLock::new();

/// Remembers the directory flags given on the command line. Later calls
/// are ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = FLAG_DIRS.set(FlagDirs {
        data: data_dir.map(PathBuf::from),
        config: config_dir.map(PathBuf::from),
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    /// Holds `settings.toml`.
    Config,
    /// Holds exported diagnostics and head fragments.
    Data,
}

impl AppDir {
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            AppDir::Config => ENV_CONFIG_DIR,
            AppDir::Data => ENV_DATA_DIR,
        }
    }

    fn from_flags(self) -> Option<PathBuf> {
        let flags = FLAG_DIRS.get()?;
        match self {
            AppDir::Config => flags.config.clone(),
            AppDir::Data => flags.data.clone(),
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Config => dirs::config_dir(),
            AppDir::Data => dirs::data_dir(),
        }
    }

    #[must_use]
    pub fn resolve(self) -> Option<PathBuf> {
        self.resolve_with(None)
    }

    /// Like [`AppDir::resolve`], but `explicit` beats every other source.
    #[must_use]
    pub fn resolve_with(self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        first_location(
            explicit,
            self.from_flags(),
            std::env::var_os(self.env_var()),
            self.platform_base(),
        )
    }
}

fn first_location(
    explicit: Option<PathBuf>,
    flag: Option<PathBuf>,
    env: Option<OsString>,
    platform_base: Option<PathBuf>,
) -> Option<PathBuf> {
    explicit
        .or(flag)
        .or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| platform_base.map(|base| base.join(APP_FOLDER)))
}
