pub const LOADING_LABEL: &str = "Loading...";
pub const PROMPT: &str = "Enter a URL to crawl (\"cancel\" stops the running crawl, Ctrl-D quits):";
pub const CANCEL_COMMAND: &str = "cancel";
pub const NORMAL_HEADING: &str = "Normal images:";
pub const LOGO_HEADING: &str = "Logos:";
pub const LIST_BULLET: &str = "  ";
