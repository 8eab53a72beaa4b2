use serde::Serialize;

/// Balances held on a single venue.
///
/// A wallet tracks a base asset (X, e.g. fiat) and a quote asset (Y, e.g. a
/// crypto asset). A buy never spends more than the wallet's own base balance,
/// so base stays non-negative when it starts that way. The quote sold on the
/// other venue is not checked against its holdings and the wallet does not
/// clamp either balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wallet {
    /// Current base asset balance
    base: f64,
    /// Current quote asset balance
    quote: f64,
    /// Base asset balance the wallet was created with
    initial_base: f64,
    /// Quote asset balance the wallet was created with
    initial_quote: f64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BALANCE, Self::DEFAULT_BALANCE)
    }
}

impl Wallet {
    /// Balance of both assets in a wallet created with [`Wallet::default`]
    pub const DEFAULT_BALANCE: f64 = 100.0;

    /// Creates a new wallet with the given starting balances.
    ///
    /// # Arguments
    ///
    /// * `base` - Starting base asset balance
    /// * `quote` - Starting quote asset balance
    #[must_use]
    pub const fn new(base: f64, quote: f64) -> Self {
        Self {
            base,
            quote,
            initial_base: base,
            initial_quote: quote,
        }
    }

    /// Current base asset balance
    #[must_use]
    pub const fn base(&self) -> f64 {
        self.base
    }

    /// Current quote asset balance
    #[must_use]
    pub const fn quote(&self) -> f64 {
        self.quote
    }

    /// Base asset balance at the start of the run
    #[must_use]
    pub const fn initial_base(&self) -> f64 {
        self.initial_base
    }

    /// Quote asset balance at the start of the run
    #[must_use]
    pub const fn initial_quote(&self) -> f64 {
        self.initial_quote
    }

    /// Buy leg of a trade: spend base, receive quote.
    pub(crate) fn buy(&mut self, base_spent: f64, quote_received: f64) {
        self.base -= base_spent;
        self.quote += quote_received;
    }

    /// Sell leg of a trade: spend quote, receive base.
    pub(crate) fn sell(&mut self, quote_spent: f64, base_received: f64) {
        self.quote -= quote_spent;
        self.base += base_received;
    }
}
