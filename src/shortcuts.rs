//! Fixed shortcut tables mapping friendly names to GA dimension/metric ids.

pub const MINUTE: &str = "ga:minute";
pub const HOUR: &str = "ga:hour";
pub const DATE: &str = "ga:date";
pub const DAY: &str = "ga:day";
pub const WEEK: &str = "ga:week";
pub const MONTH: &str = "ga:month";
pub const YEAR: &str = "ga:year";

pub const VISITS: &str = "ga:visits";

/// Time-granularity dimension shortcuts.
pub const DIMENSION_SHORTCUTS: &[(&str, &str)] = &[
    ("minutely", MINUTE),
    ("hourly", HOUR),
    ("date", DATE),
    ("daily", DAY),
    ("weekly", WEEK),
    ("monthly", MONTH),
    ("yearly", YEAR),
];

pub const METRIC_SHORTCUTS: &[(&str, &str)] = &[("visitors", VISITS)];

fn lookup(table: &[(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
}

pub fn dimension(name: &str) -> Option<&'static str> {
    lookup(DIMENSION_SHORTCUTS, name)
}

pub fn metric(name: &str) -> Option<&'static str> {
    lookup(METRIC_SHORTCUTS, name)
}
