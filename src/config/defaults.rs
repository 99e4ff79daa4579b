use std::collections::HashMap;

use super::keys;

/// Fallback values used when neither the environment, the env file, nor the
/// caller supplies one.
pub fn default_values() -> HashMap<String, String> {
    [
        (keys::APP_NAME, "default_app"),
        (keys::APP_ENV, "local"),
        (keys::APP_KEY, ""),
        (keys::APP_DEBUG, "false"),
        (keys::APP_URL, "http://localhost"),
        (keys::APP_TIMEZONE, "UTC"),
        (keys::APP_LOCALE, "en"),
        (keys::APP_FALLBACK_LOCALE, "en"),
        (keys::APP_CIPHER, "AES-256-CBC"),
        (keys::AUTH_SECRET, "my_default_secret"),
        (keys::DB_HOST, "127.0.0.1"),
        (keys::DB_PORT, "5432"),
        (keys::DB_DATABASE, "default_db"),
        (keys::DB_USERNAME, "default_user"),
        (keys::DB_PASSWORD, "default_pass"),
        (keys::SSL_MODE, "disable"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
