//! Logging setup
//!
//! The subscriber goes up before the config file is read, with a bootstrap
//! filter, so config warnings have somewhere to go. Once the config is
//! loaded its `[logging] filter` is swapped in through a reload handle.
//! `RUST_LOG` pins the filter and wins over the config.

use crate::config::LoggingConfig;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, reload, EnvFilter, Registry};

/// Filter in effect until the config is loaded
pub const BOOTSTRAP_FILTER: &str = "folio=info";

/// Swaps the active filter once configuration is known
pub struct FilterControl {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl FilterControl {
    /// Apply the configured filter unless the environment pinned one
    pub fn apply(&self, config: &LoggingConfig) {
        if self.pinned {
            tracing::debug!("RUST_LOG set, ignoring configured filter {:?}", config.filter);
            return;
        }

        match EnvFilter::try_new(&config.filter) {
            Ok(filter) => {
                if let Err(e) = self.handle.reload(filter) {
                    tracing::warn!("Failed to apply log filter: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Invalid log filter {:?}: {}", config.filter, e);
            }
        }
    }
}

/// Build the subscriber. `env` is the filter from `RUST_LOG`, if any.
pub fn subscriber<W>(
    env: Option<EnvFilter>,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, FilterControl)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let pinned = env.is_some();
    let (filter, handle) =
        reload::Layer::new(env.unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_FILTER)));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));

    (subscriber, FilterControl { handle, pinned })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_malformed_config_warning_is_logged() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[carousel\n");
        let capture = Capture::default();
        let (subscriber, control) = subscriber(None, capture.clone());

        let config = tracing::subscriber::with_default(subscriber, || {
            let config = FolioConfig::load(&path);
            control.apply(&config.logging);
            config
        });

        assert_eq!(config.carousel.swipe_threshold, 50.0);
        let out = capture.contents();
        assert!(out.contains("WARN"), "{}", out);
        assert!(out.contains("Failed to parse config"), "{}", out);
    }

    #[test]
    fn test_configured_filter_replaces_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[logging]\nfilter = \"folio=warn\"\n");
        let capture = Capture::default();
        let (subscriber, control) = subscriber(None, capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "folio", "before reload");
            control.apply(&FolioConfig::load(&path).logging);
            tracing::info!(target: "folio", "after reload");
            tracing::warn!(target: "folio", "still visible");
        });

        let out = capture.contents();
        assert!(out.contains("before reload"), "{}", out);
        assert!(!out.contains("after reload"), "{}", out);
        assert!(out.contains("still visible"), "{}", out);
    }

    #[test]
    fn test_env_filter_wins_over_config() {
        let capture = Capture::default();
        let (subscriber, control) = subscriber(Some(EnvFilter::new("folio=debug")), capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            control.apply(&LoggingConfig {
                filter: "folio=error".to_string(),
            });
            tracing::debug!(target: "folio", "debug kept");
        });

        assert!(capture.contents().contains("debug kept"));
    }

    #[test]
    fn test_invalid_configured_filter_keeps_bootstrap() {
        let capture = Capture::default();
        let (subscriber, control) = subscriber(None, capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            control.apply(&LoggingConfig {
                filter: "folio=loud".to_string(),
            });
            tracing::info!(target: "folio", "bootstrap still active");
        });

        let out = capture.contents();
        assert!(out.contains("Invalid log filter"), "{}", out);
        assert!(out.contains("bootstrap still active"), "{}", out);
    }
}
