use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub time_limit: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            time_limit: Duration::from_secs(10),
        }
    }
}
