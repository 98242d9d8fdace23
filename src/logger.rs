use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    scope: Option<String>,
}

impl Logger {
    fn new(scope: Option<String>) -> Self {
        Self { scope }
    }

    pub fn write(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.scope {
            Some(scope) => println!("[{}][{}] {}", timestamp, scope, message),
            None => println!("[{}] {}", timestamp, message),
        }
    }
}

pub fn init_logger(scope: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(scope));
}

// Messages logged before init_logger are dropped, so a host that wants no
// log output simply never initializes the logger.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.write(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
