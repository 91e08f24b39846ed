//! A thin client for the Dwolla payments REST API: account information, OAuth token exchange,
//! money transfers and money requests, all funnelled through a single envelope-parsing core.

mod account;
mod api;
mod config;
mod data_objects;
mod error;
mod helpers;
pub mod logging;
mod oauth;
mod requests;
mod secret;
mod transactions;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use api::{DwollaApi, Params};
pub use config::{DwollaConfig, DEFAULT_OAUTH_SCOPE, DEFAULT_POSTFIX, OAUTH_POSTFIX, PRODUCTION_HOST, SANDBOX_HOST};
pub use data_objects::{
    AccessTokenSet,
    AccountInfo,
    AutoWithdrawalStatus,
    Envelope,
    MoneyRequest,
    NearbyUser,
    Refund,
    RequestFulfillment,
    Transaction,
    TransactionStats,
    UserRef,
};
pub use error::DwollaApiError;
pub use secret::Secret;
