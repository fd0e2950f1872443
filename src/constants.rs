/// Application
pub const APP_NAME: &str = "Inkwell";
pub const STORAGE_KEY: &str = "inkwell_entries_v1";
pub const LOG_FILE_NAME: &str = "inkwell.log";
pub const MAX_ENTRIES: usize = 60;

/// Base networks
pub const BASE_MAINNET: u64 = 0x2105;
pub const BASE_SEPOLIA: u64 = 0x14a34;

/// Tip defaults (Base Builder Code: base.dev -> Settings -> Builder Code)
pub const DEFAULT_BUILDER_CODE: &str = "bc_y3qsg8sr";
pub const DEFAULT_RECIPIENT: &str = "0x04514c3d1a7074E6972190A5632875F4d14785F8";
pub const USDC_BASE: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const TIP_PRESETS: [&str; 4] = ["1", "3", "5", "10"];

// ERC-20 transfer(address,uint256)
pub const TRANSFER_SELECTOR: &str = "a9059cbb";
pub const USDC_DECIMALS: u32 = 6;
pub const WALLET_CALLS_VERSION: &str = "2.0.0";
pub const USER_REJECTED_CODE: i64 = 4001;

// Timings
pub const PREPARE_DELAY_MILLIS: u64 = 1200;
pub const SENDING_DELAY_MILLIS: u64 = 650;
pub const HOST_DETECT_TIMEOUT_MILLIS: u64 = 800;
pub const TOAST_MILLIS: u64 = 2600;
pub const SCRAP_FLIGHT_MILLIS: u64 = 950;
pub const TICK_MILLIS: u64 = 50;

pub const MAX_ERROR_MESSAGE_CHARS: usize = 180;
pub const SCRAP_PREVIEW_CHARS: usize = 220;
pub const DAY_MILLIS: i64 = 86_400_000;

pub const PROMPTS: [&str; 24] = [
    "Annotate the oddest metaphor you noticed today.",
    "Extract one argument you disagree with—and why.",
    "Summarize a page in 17 words.",
    "List three hidden assumptions in the piece.",
    "Copy a sentence worth stealing (ethically).",
    "Find the author’s quietest claim.",
    "Note one term you must define before tomorrow.",
    "Write the counter-headline you expected.",
    "Identify the missing stakeholder.",
    "Mark a statistic to verify later.",
    "Sketch the logic chain in 5 bullets.",
    "Spot the emotional lever being pulled.",
    "Record a question only a specialist could answer.",
    "Turn the thesis into a single testable prediction.",
    "Write one analogy that makes it clearer.",
    "Where does the argument change gear?",
    "Clip a quote to reuse in a future debate.",
    "Name the “villain” and “hero” in the framing.",
    "Find the paragraph that would not survive editing.",
    "Translate jargon into kitchen-table English.",
    "Locate the quiet contradiction.",
    "Note the source you should read next.",
    "Write a one-line takeaway for your future self.",
    "Choose one sentence to highlight in ink-red.",
];

pub const INKWELL_FRAMES: [&str; 3] = [
    r#"
 ___       _                  _ _
|_ _|_ __ | | ____      _____| | |
 | || '_ \| |/ /\ \ /\ / / _ \ | |
 | || | | |   <  \ V  V /  __/ | |
|___|_| |_|_|\_\  \_/\_/ \___|_|_|
"#,
    r#"
 ___       _                  _ _
|_ _|_ __ | | ____      _____| | |  .
 | || '_ \| |/ /\ \ /\ / / _ \ | |
 | || | | |   <  \ V  V /  __/ | |
|___|_| |_|_|\_\  \_/\_/ \___|_|_|
"#,
    r#"
 ___       _                  _ _
|_ _|_ __ | | ____      _____| | |  .
 | || '_ \| |/ /\ \ /\ / / _ \ | |  :
 | || | | |   <  \ V  V /  __/ | |
|___|_| |_|_|\_\  \_/\_/ \___|_|_|
"#,
];

pub const INK_PULSE_FRAMES: [&str; 4] = ["·  ·  ·", "•  ·  ·", "•  •  ·", "•  •  •"];
