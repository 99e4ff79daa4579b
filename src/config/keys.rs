//! Names of the environment variables this crate reads.

pub const APP_NAME: &str = "APP_NAME";
pub const APP_ENV: &str = "APP_ENV";
pub const APP_KEY: &str = "APP_KEY";
pub const APP_DEBUG: &str = "APP_DEBUG";
pub const APP_URL: &str = "APP_URL";
pub const APP_TIMEZONE: &str = "APP_TIMEZONE";
pub const APP_LOCALE: &str = "APP_LOCALE";
pub const APP_FALLBACK_LOCALE: &str = "APP_FALLBACK_LOCALE";
pub const APP_CIPHER: &str = "APP_CIPHER";
pub const AUTH_SECRET: &str = "AUTH_SECRET";

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_DATABASE: &str = "DB_DATABASE";
pub const DB_USERNAME: &str = "DB_USERNAME";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const SSL_MODE: &str = "SSL_MODE";
