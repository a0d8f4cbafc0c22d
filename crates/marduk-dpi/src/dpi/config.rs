use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ConfigError;

use super::{DpiScale, DpiVisual, DpiWindow};

/// Environment variable read by [`DpiConfig::from_env`].
pub const DPI_MODE_ENV: &str = "MARDUK_DPI_MODE";

/// Who resolves the DPI scale of a visual.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DpiMode {
    /// Ask the visual for its platform-reported DPI scale.
    Platform,
    /// The platform scales underneath this layer; report an unscaled (1, 1).
    Uniform,
}

impl DpiMode {
    /// Mode selected at build time by the `uniform-dpi` cargo feature.
    #[inline]
    pub const fn build_default() -> Self {
        if cfg!(feature = "uniform-dpi") {
            Self::Uniform
        } else {
            Self::Platform
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Uniform => "uniform",
        }
    }
}

impl Default for DpiMode {
    fn default() -> Self {
        Self::build_default()
    }
}

impl fmt::Display for DpiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DpiMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("platform") {
            Ok(Self::Platform)
        } else if s.eq_ignore_ascii_case("uniform") {
            Ok(Self::Uniform)
        } else {
            Err(ConfigError::unknown_mode(s))
        }
    }
}

/// DPI resolution settings.
///
/// Resolved once at startup: build default, optionally overridden by
/// [`DPI_MODE_ENV`], then [`install`](DpiConfig::install)ed for the process.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct DpiConfig {
    pub mode: DpiMode,
}

static INSTALLED: OnceLock<DpiConfig> = OnceLock::new();

impl DpiConfig {
    #[inline]
    pub const fn new(mode: DpiMode) -> Self {
        Self { mode }
    }

    /// Reads [`DPI_MODE_ENV`]; falls back to the build default when it is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = std::env::var(DPI_MODE_ENV).ok();
        let config = Self::from_env_value(value.as_deref())?;
        log::debug!("DPI mode resolved: {} ({DPI_MODE_ENV}={value:?})", config.mode);
        Ok(config)
    }

    pub(crate) fn from_env_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(v) => Ok(Self::new(v.parse()?)),
        }
    }

    /// Installs this configuration for the whole process.
    ///
    /// Only the first call takes effect.
    pub fn install(self) -> Result<(), ConfigError> {
        INSTALLED
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)?;
        log::debug!("DPI configuration installed: mode={}", self.mode);
        Ok(())
    }

    /// The installed configuration, or the build default if none was installed.
    #[inline]
    pub fn current() -> Self {
        INSTALLED.get().copied().unwrap_or_default()
    }

    /// Current DPI scale of `visual` under this configuration.
    pub fn get_dpi<V: DpiVisual + ?Sized>(&self, visual: &V) -> DpiScale {
        match self.mode {
            DpiMode::Uniform => DpiScale::IDENTITY,
            DpiMode::Platform => {
                let scale = visual.dpi_scale();
                log::trace!("platform DPI query: {scale}");
                scale
            }
        }
    }

    /// Current DPI scale of `window`'s root visual.
    #[inline]
    pub fn get_dpi_for_window<W: DpiWindow + ?Sized>(&self, window: &W) -> DpiScale {
        self.get_dpi(window.root_visual())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Matrix;

    struct FixedVisual(DpiScale);

    impl DpiVisual for FixedVisual {
        fn render_transform(&self) -> Option<Matrix> {
            None
        }

        fn dpi_scale(&self) -> DpiScale {
            self.0
        }
    }

    struct FixedWindow(FixedVisual);

    impl DpiWindow for FixedWindow {
        fn root_visual(&self) -> &dyn DpiVisual {
            &self.0
        }
    }

    // ── DpiMode parsing ───────────────────────────────────────────────────

    #[test]
    fn build_default_follows_feature() {
        let expected = if cfg!(feature = "uniform-dpi") {
            DpiMode::Uniform
        } else {
            DpiMode::Platform
        };
        assert_eq!(DpiMode::build_default(), expected);
        assert_eq!(DpiConfig::default().mode, expected);
    }

    #[test]
    fn parse_known_modes_case_insensitive() {
        assert_eq!("platform".parse::<DpiMode>(), Ok(DpiMode::Platform));
        assert_eq!("UNIFORM".parse::<DpiMode>(), Ok(DpiMode::Uniform));
        assert_eq!("  Uniform \n".parse::<DpiMode>(), Ok(DpiMode::Uniform));
    }

    #[test]
    fn parse_unknown_mode_fails() {
        let err = "retina".parse::<DpiMode>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownMode { value: "retina".into() });
        assert!(err.to_string().contains("retina"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for mode in [DpiMode::Platform, DpiMode::Uniform] {
            assert_eq!(mode.to_string().parse::<DpiMode>(), Ok(mode));
        }
    }

    // ── DpiConfig::from_env_value ─────────────────────────────────────────

    #[test]
    fn env_unset_or_empty_uses_build_default() {
        let expected = DpiConfig::new(DpiMode::build_default());
        assert_eq!(DpiConfig::from_env_value(None), Ok(expected));
        assert_eq!(DpiConfig::from_env_value(Some("   ")), Ok(expected));
    }

    #[test]
    fn env_value_overrides_default() {
        assert_eq!(
            DpiConfig::from_env_value(Some("uniform")),
            Ok(DpiConfig::new(DpiMode::Uniform))
        );
        assert_eq!(
            DpiConfig::from_env_value(Some("platform")),
            Ok(DpiConfig::new(DpiMode::Platform))
        );
    }

    #[test]
    fn env_value_invalid_is_error() {
        assert!(DpiConfig::from_env_value(Some("auto")).is_err());
    }

    // ── install ───────────────────────────────────────────────────────────

    #[test]
    fn install_takes_effect_once() {
        // Installs the build default so other tests reading `current()` are unaffected.
        let config = DpiConfig::default();
        let _ = config.install();
        assert_eq!(config.install(), Err(ConfigError::AlreadyInstalled));
        assert_eq!(DpiConfig::current(), config);
    }

    // ── get_dpi ───────────────────────────────────────────────────────────

    #[test]
    fn platform_mode_reports_visual_scale() {
        let visual = FixedVisual(DpiScale::new(1.5, 2.0));
        let dpi = DpiConfig::new(DpiMode::Platform).get_dpi(&visual);
        assert_eq!(dpi, DpiScale::new(1.5, 2.0));
    }

    #[test]
    fn uniform_mode_reports_exactly_one() {
        let visual = FixedVisual(DpiScale::new(1.5, 2.0));
        let dpi = DpiConfig::new(DpiMode::Uniform).get_dpi(&visual);
        assert_eq!(dpi.scale_x(), 1.0);
        assert_eq!(dpi.scale_y(), 1.0);
    }

    #[test]
    fn window_delegates_to_root_visual() {
        let window = FixedWindow(FixedVisual(DpiScale::uniform(1.25)));
        let config = DpiConfig::new(DpiMode::Platform);
        assert_eq!(config.get_dpi_for_window(&window), DpiScale::uniform(1.25));
        assert_eq!(
            DpiConfig::new(DpiMode::Uniform).get_dpi_for_window(&window),
            DpiScale::IDENTITY
        );
    }
}
