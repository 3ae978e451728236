//! Logging setup
//!
//! Installs the global `tracing` subscriber: an `EnvFilter` driven by
//! `RUST_LOG` (falling back to the configured filter) and a compact fmt layer
//! on stderr so command output on stdout stays clean. The filter sits behind
//! a reload layer so logging can start before the config file is read.

use anyhow::{anyhow, Result};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Build the filter, preferring `RUST_LOG` over `default_filter`.
pub fn log_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("emotion_router=info"))
}

/// Handle for swapping the active filter after startup
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    /// Replace the filter; `RUST_LOG` still wins when set.
    pub fn set_filter(&self, default_filter: &str) -> Result<()> {
        self.0
            .reload(log_filter(default_filter))
            .map_err(|e| anyhow!("Failed to update log filter: {}", e))
    }
}

pub(crate) fn subscriber<W>(filter: EnvFilter, writer: W) -> (impl Subscriber + Send + Sync + 'static, LogHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = Registry::default()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(writer));
    (subscriber, LogHandle(handle))
}

pub fn init_logging(default_filter: &str) -> Result<LogHandle> {
    let (subscriber, handle) = subscriber(log_filter(default_filter), std::io::stderr);
    subscriber
        .try_init()
        .map_err(|e| anyhow!("Failed to set tracing subscriber: {}", e))?;
    Ok(handle)
}


#[cfg(test)]
mod tests {
    use super::capture::CapturedLogs;
    use super::*;

    #[test]
    fn test_reload_changes_active_filter() {
        let logs = CapturedLogs::default();
        let sink = logs.clone();
        let (subscriber, handle) = subscriber(EnvFilter::new("warn"), move || sink.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        tracing::info!("before reload");
        handle.0.reload(EnvFilter::new("info")).unwrap();
        tracing::info!("after reload");

        let output = logs.contents();
        assert!(!output.contains("before reload"));
        assert!(output.contains("after reload"));
    }
}
