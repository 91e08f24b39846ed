//! Quick-start for the transaction endpoints: send money, list transactions, refund, and
//! fetch statistics.
//!
//! Configure credentials through the `DWOLLA_*` environment variables before running.

use dwolla_tools::{DwollaApi, DwollaConfig, Params};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let api = DwollaApi::new(DwollaConfig::new_from_env_or_default())?;

    // Send $5.50 to another account.
    let id = api.send("812-197-4121", 5.50, Params::new())?;
    println!("Sent $5.50. Transaction id: {id}");

    // List transactions for the user the stored OAuth token belongs to.
    for tx in api.transactions(Params::new())? {
        println!("{}: {} {} ({})", tx.id, tx.amount, tx.transaction_type, tx.status);
    }

    // Refund $2.00 from the account balance for an earlier transaction.
    let refund = api.refund("123456", "Balance", 2.00, Params::new())?;
    println!("Refunded {} on {}", refund.amount, refund.refund_date);

    // Look up a single transaction.
    let info = api.transaction_info("123456")?;
    println!("Transaction 123456 is {}", info.status);

    // Transaction statistics for the current user.
    let stats = api.transaction_stats(Params::new())?;
    println!("{} transactions totalling {}", stats.transactions_count, stats.transactions_total);
    Ok(())
}
