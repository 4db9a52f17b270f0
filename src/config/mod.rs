use crate::api::NoteError;

pub(crate) const DEFAULT_API_URL: &str = "https://notehub-public.goit.study/api";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

/// Notes per page requested from the API.
pub(crate) const PER_PAGE: u32 = 12;

/// Quiet period before a typed search is committed.
pub(crate) const SEARCH_DEBOUNCE_MS: i32 = 1000;

/// Raw, unvalidated configuration values from one source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EnvSource {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub log_level: Option<String>,
}

impl EnvSource {
    /// Values baked in by the build environment (`NOTEHUB_TOKEN=... trunk build`).
    pub fn build_time() -> Self {
        Self {
            token: option_env!("NOTEHUB_TOKEN").map(str::to_string),
            api_url: option_env!("NOTEHUB_API_URL").map(str::to_string),
            log_level: option_env!("NOTEHUB_LOG_LEVEL").map(str::to_string),
        }
    }

    /// Values injected by the hosting page as `window.ENV = { NOTEHUB_TOKEN, API_URL, LOG_LEVEL }`.
    pub fn from_window() -> Self {
        let Some(env) = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object())
        else {
            return Self::default();
        };

        let get = |key: &str| {
            js_sys::Reflect::get(&env, &key.into())
                .ok()
                .and_then(|v| v.as_string())
        };

        Self {
            token: get("NOTEHUB_TOKEN"),
            api_url: get("API_URL"),
            log_level: get("LOG_LEVEL"),
        }
    }

    /// Runtime values win over build-time values.
    pub fn detect() -> Self {
        Self::from_window().or(Self::build_time())
    }

    /// Field-wise fallback: blank values count as missing.
    pub fn or(self, fallback: EnvSource) -> EnvSource {
        let pick = |a: Option<String>, b: Option<String>| non_blank(a).or_else(|| non_blank(b));
        EnvSource {
            token: pick(self.token, fallback.token),
            api_url: pick(self.api_url, fallback.api_url),
            log_level: pick(self.log_level, fallback.log_level),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub api_url: String,
    pub token: String,
    pub log_level: String,
    pub per_page: u32,
    pub search_debounce_ms: i32,
}

impl AppConfig {
    /// Resolve once at startup. A missing token is fatal: requests are never
    /// sent unauthenticated.
    pub fn resolve(source: EnvSource) -> Result<Self, NoteError> {
        let source = source.or(EnvSource::default());
        let log_level = source.log_level().to_string();

        let token = source
            .token
            .ok_or_else(|| NoteError::Config("NOTEHUB_TOKEN is not set".to_string()))?;

        let api_url = source
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_url,
            token,
            log_level,
            per_page: PER_PAGE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
        })
    }
}
