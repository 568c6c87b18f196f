use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};

use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Used when no log4rs YAML file is present.
const FALLBACK_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}";

/// A unique reference for a simulated submission, quoted back to the user.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SubmissionId(pub usize);

impl Display for SubmissionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RKV-{:06}", self.0)
    }
}

impl SubmissionId {
    /// Atomically get the next ID. This wraps around back to zero if you somehow exceed a usize.
    pub fn next() -> SubmissionId {
        static SUBMISSION_ID_COUNTER: AtomicUsize = AtomicUsize::new(1);
        SubmissionId(SUBMISSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Set up the global logger from the configured log4rs file, or a stderr
/// console logger at `info` if that file does not exist.
pub fn init(config: &Config) -> Result<()> {
    let path = config.log_config();
    if path.exists() {
        log4rs::init_file(path, Default::default()).map_err(|e| Error::Logging(e.to_string()))?;
        info!("Initialised logging from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let log_config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .map_err(|e| Error::Logging(e.to_string()))?;
    log4rs::init_config(log_config).map_err(|e| Error::Logging(e.to_string()))?;
    info!("Initialised console logging");
    Ok(())
}
