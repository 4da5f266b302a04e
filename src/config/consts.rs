// src/config/consts.rs

// Channels (exact names as the listing service spells them)
pub const DESIRED_CHANNELS: &[&str] = &[
    "&prive HD",
    "&flix HD",
    "MNX",
    "Sony Pix",
    "Movies Now",
    "Star Movies",
    "Romedy Now",
    "MN+",
    "Star Movies Select HD",
];

// Net config
pub const GUIDE_PAGE_URL: &str = "https://www.dishtv.in/channel-guide.html";
pub const EPG_ENDPOINT: &str = "https://www.dishtv.in/services/epg/channels";
pub const ORIGIN: &str = "https://www.dishtv.in";
pub const TOKEN_COOKIE: &str = "channelguidetoken";
pub const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 13; SM-G981B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/140.0.0.0 Mobile Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 20;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Headless browser: page script sets the token a few seconds after load
pub const BROWSER_TOKEN_WAIT_SECS: u64 = 10;
pub const BROWSER_POLL_MS: u64 = 500;

// Credentials from the environment
pub const ENV_TOKEN: &str = "TV_GUIDE_TOKEN";
pub const ENV_COOKIE: &str = "TV_GUIDE_COOKIE";

// Dates: the listing is published in IST (+05:30)
pub const LOCAL_UTC_OFFSET_MINUTES: i32 = 330;
pub const FETCH_DATE_FORMAT: &str = "%d/%m/%Y";

// Layout
pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const CHANNEL_COLUMN_WIDTH: u32 = 200;
pub const CHANNEL_BLOCK_INSET: u32 = 10;
pub const HOURS_IN_RULER: u32 = 24;

/// (fill, border), assigned by channel ordinal.
pub const PALETTE: &[(&str, &str)] = &[
    ("#4285F4", "#1a73e8"),
    ("#DB4437", "#c53727"),
    ("#0F9D58", "#0b8043"),
    ("#AB47BC", "#8E24AA"),
    ("#00ACC1", "#00838F"),
    ("#FF7043", "#F4511E"),
    ("#F4B400", "#f09300"),
    ("#78909C", "#546E7A"),
    ("#5C6BC0", "#3949AB"),
];

pub const UNTITLED_PROGRAM: &str = "Untitled Program";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const SEARCH_URL: &str = "https://www.google.com/search?q=";

// Files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "guide.log";
pub const DEFAULT_SNAPSHOT_FILE: &str = "tv_guide_today_and_tomorrow.json";
pub const DEFAULT_HTML_FILE: &str = "index.html";
