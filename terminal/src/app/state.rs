//! # Application State Types
//!
//! All state-related types: screens, auth forms, market, portfolio,
//! trade panel, and watchlist state.

use std::sync::Arc;

use shared::{Coin, Holding, MarketData, SortOrder, Trade, TradeSide, User, UserStats, WatchlistEntry};

use crate::services::api::ApiClient;
use crate::services::session::SessionStore;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Authentication screen (login/register)
    Auth,
    /// Coin listing and market overview
    Market,
    /// Portfolio dashboard (balance, holdings, trades, watchlist)
    Dashboard,
    /// Trade execution panel
    Trade,
}

impl Screen {
    /// All screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Auth, Screen::Market, Screen::Dashboard, Screen::Trade]
    }

    /// Screen title for the nav bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Sign In",
            Screen::Market => "Market",
            Screen::Dashboard => "Dashboard",
            Screen::Trade => "Trade",
        }
    }

    /// Whether the screen needs an authenticated session. Navigating to
    /// one of these while anonymous redirects to [`Screen::Auth`].
    pub fn requires_auth(&self) -> bool {
        matches!(self, Screen::Dashboard | Screen::Trade)
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Login form
    Login {
        email: String,
        password: String,
        error: Option<String>,
        /// A login request is in flight.
        pending: bool,
    },
    /// Registration form
    Register {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
        error: Option<String>,
        /// A registration request is in flight.
        pending: bool,
    },
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            email: String::new(),
            password: String::new(),
            error: None,
            pending: false,
        }
    }

    pub fn register() -> Self {
        AuthState::Register {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
            pending: false,
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        match self {
            AuthState::Login { error, .. } | AuthState::Register { error, .. } => {
                *error = Some(message.into());
            }
        }
    }

    pub(crate) fn set_pending(&mut self, value: bool) {
        match self {
            AuthState::Login { pending, .. } | AuthState::Register { pending, .. } => {
                *pending = value;
            }
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        match self {
            AuthState::Login { pending, .. } | AuthState::Register { pending, .. } => *pending,
        }
    }
}

/// The in-memory session, mirroring the persisted one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Sort field for the coin listing, mapped to the server's `sort`
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    MarketCap,
    Price,
    Change24h,
    Name,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::MarketCap,
            SortField::Price,
            SortField::Change24h,
            SortField::Name,
        ]
    }

    pub fn param(&self) -> &'static str {
        match self {
            SortField::MarketCap => "market_cap",
            SortField::Price => "current_price",
            SortField::Change24h => "price_change_percentage_24h",
            SortField::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::MarketCap => "Market Cap",
            SortField::Price => "Price",
            SortField::Change24h => "24h Change",
            SortField::Name => "Name",
        }
    }
}

/// Market screen state
#[derive(Debug, Clone)]
pub struct MarketState {
    pub coins: Vec<Coin>,
    pub market_data: Option<MarketData>,
    pub loading: bool,
    /// Guard against task pileup; one coins fetch in flight at a time.
    pub fetching: bool,
    /// A fetch was requested while one was in flight (e.g. the sort
    /// changed); the resolving task issues it with the current query.
    pub refetch_pending: bool,
    pub error: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl Default for MarketState {
    fn default() -> Self {
        // Server defaults: market cap, descending.
        MarketState {
            coins: Vec::new(),
            market_data: None,
            loading: false,
            fetching: false,
            refetch_pending: false,
            error: None,
            sort_field: SortField::MarketCap,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Dashboard state
#[derive(Debug, Clone, Default)]
pub struct PortfolioState {
    pub stats: Option<UserStats>,
    pub holdings: Vec<Holding>,
    pub portfolio_value: f64,
    pub trades: Vec<Trade>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Trade panel state
#[derive(Debug, Clone)]
pub struct TradeState {
    pub selected_coin: Option<Coin>,
    pub side: TradeSide,
    pub quantity_input: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for TradeState {
    fn default() -> Self {
        TradeState {
            selected_coin: None,
            side: TradeSide::Buy,
            quantity_input: String::new(),
            submitting: false,
            error: None,
        }
    }
}

/// Watchlist state
#[derive(Debug, Clone, Default)]
pub struct WatchlistState {
    pub entries: Vec<WatchlistEntry>,
    pub loading: bool,
    pub error: Option<String>,
}

impl WatchlistState {
    /// The entry tracking a coin, if the user watches it.
    pub fn entry_for(&self, coin_id: i64) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.coin_id == coin_id)
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient notification queued for the toast widget.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notification {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }
}

/// Shared application state. Wrapped in `Arc<RwLock>` by [`crate::app::App`];
/// locks are held briefly on both the UI and task sides.
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    pub session: SessionState,
    pub market: MarketState,
    pub portfolio: PortfolioState,
    pub trade: TradeState,
    pub watchlist: WatchlistState,
    pub pending_notifications: Vec<Notification>,
    pub api_client: Arc<ApiClient>,
    pub session_store: Arc<SessionStore>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.pending_notifications.push(notification);
    }
}
