use tracing::{error, info};

use crate::api::models::WithdrawRequest;
use crate::client::{ClientError, WalletApiClient};
use crate::panel::StatusPanel;

/// Where a withdrawal's fields come from, read at submit time.
pub trait WithdrawFormSource {
    /// Returns the current form state, or `None` if no form is available.
    fn read(&self) -> Option<WithdrawRequest>;
}

/// Form source backed by command-line arguments.
pub struct ArgsForm {
    pub to_address: String,
    pub amount: String,
}

impl WithdrawFormSource for ArgsForm {
    fn read(&self) -> Option<WithdrawRequest> {
        Some(WithdrawRequest {
            to_address: self.to_address.clone(),
            amount: self.amount.clone(),
        })
    }
}

/// Fetches provider status and version, then renders the status fragments.
///
/// Both requests must settle before anything is rendered; a failure in
/// either leaves the panel untouched and is returned to the caller. The
/// version payload is only checked for being well-formed JSON.
pub async fn show_status(
    client: &WalletApiClient,
    panel: &mut impl StatusPanel,
) -> Result<(), ClientError> {
    let (index, _version) = tokio::try_join!(client.fetch_index(), client.fetch_version())?;

    panel.append(&format!("Status: {}", index.status));
    panel.append(&format!("Wallet: {}", index.address));

    Ok(())
}

/// Reads the withdrawal form and submits it.
///
/// Failures stop here: whatever goes wrong (missing form, network, bad
/// response body) is logged and swallowed.
pub async fn handle_withdraw(client: &WalletApiClient, form: &dyn WithdrawFormSource) {
    let Some(request) = form.read() else {
        error!("withdraw form is not available");
        return;
    };

    match client.submit_withdrawal(&request).await {
        Ok(response) => info!(%response, "withdrawal submitted"),
        Err(err) => error!(error = %err, "withdrawal failed"),
    }
}
