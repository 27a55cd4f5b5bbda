//! # Chart Loader
//!
//! Drives the hosted chart widget through [`ChartWidget`]: fetch the script
//! once, then create the widget with options derived from settings.
//!
//! Script and init failures are separate states so the UI can offer
//! "retry download" vs "retry with different options". Retrying is always
//! the user's call.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::app::state::{SettingsState, Theme};
use crate::app::store::{Store, SubscriptionId};
use crate::core::service::{ChartError, ChartWidget};

/// Hosted widget script.
pub const CHART_SCRIPT_URL: &str = "https://s3.tradingview.com/tv.js";

/// Default DOM container for the widget.
pub const DEFAULT_CONTAINER_ID: &str = "dex-chart";

/// Chart timeframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    #[default]
    OneHour,
    FourHours,
    OneDay,
}

impl Interval {
    pub fn label(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1m",
            Interval::FiveMinutes => "5m",
            Interval::FifteenMinutes => "15m",
            Interval::OneHour => "1h",
            Interval::FourHours => "4h",
            Interval::OneDay => "1d",
        }
    }

    /// Code understood by the widget.
    pub fn widget_code(&self) -> &'static str {
        match self {
            Interval::OneMinute => "1",
            Interval::FiveMinutes => "5",
            Interval::FifteenMinutes => "15",
            Interval::OneHour => "60",
            Interval::FourHours => "240",
            Interval::OneDay => "D",
        }
    }
}

/// Color scheme passed to the widget. It has no "auto".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTheme {
    Light,
    Dark,
}

impl ChartTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartTheme::Light => "light",
            ChartTheme::Dark => "dark",
        }
    }
}

impl From<Theme> for ChartTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ChartTheme::Light,
            Theme::Dark | Theme::Auto => ChartTheme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Market symbol, e.g. `BINANCE:ETHUSDT`
    pub symbol: String,
    pub interval: Interval,
    pub theme: ChartTheme,
    pub locale: &'static str,
    pub container_id: String,
}

impl ChartOptions {
    pub fn from_settings(
        symbol: impl Into<String>,
        interval: Interval,
        settings: &SettingsState,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            theme: settings.theme.into(),
            locale: settings.language.code(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChartState {
    #[default]
    Idle,
    LoadingScript,
    Initializing,
    Ready,
    ScriptFailed(String),
    InitFailed(String),
}

impl ChartState {
    pub fn is_failed(&self) -> bool {
        matches!(self, ChartState::ScriptFailed(_) | ChartState::InitFailed(_))
    }
}

#[derive(Clone)]
pub struct ChartLoader {
    widget: Arc<dyn ChartWidget>,
    state: Arc<Store<ChartState>>,
    /// Set once the script has loaded; concurrent loads wait on one fetch.
    script: Arc<OnceCell<()>>,
    last_options: Arc<Mutex<Option<ChartOptions>>>,
}

impl ChartLoader {
    pub fn new(widget: Arc<dyn ChartWidget>) -> Self {
        Self {
            widget,
            state: Arc::new(Store::default()),
            script: Arc::new(OnceCell::new()),
            last_options: Arc::new(Mutex::new(None)),
        }
    }

    pub fn state(&self) -> ChartState {
        self.state.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&ChartState) + Send + Sync + 'static) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Fetch the script if needed, then create the widget.
    ///
    /// The outcome is reported through [`ChartLoader::state`] and also
    /// returned for callers that want it.
    pub async fn load(&self, options: ChartOptions) -> Result<(), ChartError> {
        *self.last_options.lock() = Some(options.clone());

        let script = self
            .script
            .get_or_try_init(|| async {
                self.state.set(ChartState::LoadingScript);
                self.widget.load_script(CHART_SCRIPT_URL).await?;
                tracing::debug!(src = CHART_SCRIPT_URL, "Chart script loaded");
                Ok::<(), ChartError>(())
            })
            .await;
        if let Err(e) = script {
            tracing::warn!(src = CHART_SCRIPT_URL, "{}", e);
            self.state.set(ChartState::ScriptFailed(e.to_string()));
            return Err(e);
        }

        self.state.set(ChartState::Initializing);
        match self.widget.init(&options).await {
            Ok(()) => {
                tracing::info!(
                    symbol = %options.symbol,
                    interval = options.interval.label(),
                    "Chart ready"
                );
                self.state.set(ChartState::Ready);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(symbol = %options.symbol, "{}", e);
                self.state.set(ChartState::InitFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Re-run the last [`ChartLoader::load`]. Does nothing if there was none.
    pub async fn retry(&self) -> Result<(), ChartError> {
        let options = self.last_options.lock().clone();
        match options {
            Some(options) => {
                tracing::info!(symbol = %options.symbol, "Retrying chart load");
                self.load(options).await
            }
            None => {
                tracing::debug!("Chart retry requested before any load");
                Ok(())
            }
        }
    }
}
