// src/config/consts.rs

// Net config
pub const SCHEDULE_URL: &str = "https://www.ire.org/conferences/nicar18/schedule/";
pub const LINK_HOST: &str = "https://ire.org";

// Event: one date per day container, in document order
pub const DATES: [&str; 5] = [
    "2018-03-07",
    "2018-03-08",
    "2018-03-09",
    "2018-03-10",
    "2018-03-11",
];

// Page layout
pub const SEL_DAY: &str = "ul.listview.pane";
pub const SEL_TYPE: &str = ".col-10";
pub const SEL_TITLE: &str = ".title3";
pub const SEL_LINK: &str = ".title3 a";
pub const SEL_GRAFS: &str = ".col-60 p";
pub const SEL_META: &str = ".meta p";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "schedule";
pub const DEFAULT_FILE: &str = "nicar-2018-schedule";
