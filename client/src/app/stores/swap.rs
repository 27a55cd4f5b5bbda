//! # Swap Draft Store
//!
//! The in-progress swap form. Amounts are kept exactly as typed; parsing
//! happens when a quote is requested, not here.

use shared::Token;

use crate::app::state::SwapDraftState;
use crate::app::store::{Store, SubscriptionId};
use crate::core::error::Result;
use crate::utils::validation::{validate_amount, validate_slippage};

#[derive(Default)]
pub struct SwapStore {
    store: Store<SwapDraftState>,
}

impl SwapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SwapDraftState {
        self.store.get()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&SwapDraftState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn set_from_token(&self, token: Option<Token>) {
        self.store.update(|s| s.from_token = token);
    }

    pub fn set_to_token(&self, token: Option<Token>) {
        self.store.update(|s| s.to_token = token);
    }

    pub fn set_from_amount(&self, amount: impl Into<String>) {
        let amount = amount.into();
        self.store.update(|s| s.from_amount = amount);
    }

    pub fn set_to_amount(&self, amount: impl Into<String>) {
        let amount = amount.into();
        self.store.update(|s| s.to_amount = amount);
    }

    /// Set slippage in percent, rejecting values outside [0, 100].
    pub fn set_slippage(&self, slippage: f64) -> Result<()> {
        validate_slippage(slippage).into_result()?;
        self.store.update(|s| s.slippage_tolerance = slippage);
        Ok(())
    }

    pub fn set_loading(&self, loading: bool) {
        self.store.update(|s| s.is_loading = loading);
    }

    /// Flip the swap direction: tokens and amounts trade places in one update.
    pub fn swap_tokens(&self) {
        self.store.update(|s| {
            std::mem::swap(&mut s.from_token, &mut s.to_token);
            std::mem::swap(&mut s.from_amount, &mut s.to_amount);
        });
    }

    pub fn reset(&self) {
        self.store.set(SwapDraftState::default());
    }

    /// Whether the draft is complete enough to ask for a quote.
    pub fn is_quotable(&self) -> bool {
        self.store.with(|s| match (&s.from_token, &s.to_token) {
            (Some(from), Some(to)) => {
                from != to
                    && !s.is_loading
                    && !s.from_amount.trim().is_empty()
                    && validate_amount(&s.from_amount).is_valid
            }
            _ => false,
        })
    }
}
