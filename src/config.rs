/// Compile-time settings for the extension

/// Key under which the whole group list lives in `chrome.storage.local`
pub const STORAGE_KEY: &str = "bookmarkGroups";

/// Name of the group created when nothing has been stored yet
pub const DEFAULT_GROUP_NAME: &str = "Default Group";

pub fn logger_config() -> wasm_logger::Config {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::Config::new(level)
}
