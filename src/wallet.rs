use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("invalid coin expression: {0:?}")]
    InvalidCoin(String),
}

/// A parsed coin expression such as `100ujkl`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub amount: u128,
    pub denom: String,
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Parses an `<integer><denom>` coin expression, the unit the chain
/// accepts for withdrawals.
pub fn parse_coin(input: &str) -> Result<Coin, WalletError> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| WalletError::InvalidCoin(input.to_string()))?;

    let (amount, denom) = input.split_at(split);
    if amount.is_empty()
        || !denom.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        || !denom.chars().all(|c| c.is_ascii_alphanumeric() || c == '/')
    {
        return Err(WalletError::InvalidCoin(input.to_string()));
    }

    let amount = amount
        .parse::<u128>()
        .map_err(|_| WalletError::InvalidCoin(input.to_string()))?;

    Ok(Coin {
        amount,
        denom: denom.to_string(),
    })
}

/// Wallet operations the API needs from whoever hosts it.
#[async_trait]
pub trait WalletOps: Send + Sync {
    fn address(&self) -> &str;

    /// Sends `amount` (a coin expression) to `to_address`, returning a
    /// human-readable receipt.
    async fn send(&self, to_address: &str, amount: &str) -> Result<String, WalletError>;
}

/// Wallet backing for the built-in `serve` command.
///
/// Validates and echoes transfers instead of broadcasting them, so the
/// console can be exercised without a chain connection. Providers mounting
/// the router in their daemon supply their own `WalletOps`.
pub struct DevWallet {
    address: String,
}

impl DevWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait]
impl WalletOps for DevWallet {
    fn address(&self) -> &str {
        &self.address
    }

    async fn send(&self, to_address: &str, amount: &str) -> Result<String, WalletError> {
        let coin = parse_coin(amount)?;
        info!(from = %self.address, to = to_address, %coin, "dev wallet send");
        Ok(format!("sent {} from {} to {}", coin, self.address, to_address))
    }
}
