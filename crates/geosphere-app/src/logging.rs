//! Tracing subscriber setup.
//!
//! The subscriber is installed before the config is read, with a reloadable
//! filter, so the loader's own messages are not lost and the `[logging]`
//! level can still be applied afterwards.

use tracing::Subscriber;
use tracing_subscriber::filter::{Directive, EnvFilter, LevelFilter};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, Registry};

pub const DEFAULT_DIRECTIVE: &str = "geosphere=info";

/// Handle for swapping the active filter.
pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` plus `directive`. An unparseable directive falls back to `info`.
pub fn env_filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse::<Directive>()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

/// Build the subscriber, writing formatted events to `writer`.
pub fn subscriber<W>(directive: &str, writer: W) -> (impl Subscriber + Send + Sync, FilterHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(env_filter(directive));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));
    (subscriber, handle)
}

/// Replace the active filter with one built from `directive`.
pub fn set_directive(handle: &FilterHandle, directive: &str) -> Result<(), reload::Error> {
    handle.reload(env_filter(directive))
}
