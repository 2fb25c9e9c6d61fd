use serde_json::Value;

use crate::network::{AResult, Method, NodeProvider, TronManager};
use crate::transactions::TransactionRequest;

/// Transaction builder creates unsigned transactions on the full node
/// from validated requests.
#[derive(Clone, Debug)]
pub struct TransactionBuilder<'a, P: NodeProvider> {
    manager: &'a TronManager<P>,
}

impl<'a, P: NodeProvider> TransactionBuilder<'a, P> {
    /// Full node endpoint creating a TRX transfer transaction.
    pub const CREATE_TRANSACTION_PATH: &'static str = "/wallet/createtransaction";

    #[must_use]
    pub const fn new(manager: &'a TronManager<P>) -> Self {
        //! Create a new builder.
        Self { manager }
    }

    pub async fn send_trx(&self, to: &str, amount: f64, from: &str) -> AResult<Value> {
        //! Create a transfer of `amount` TRX. If the recipient does not
        //! exist yet, the node creates the account as part of the transfer.
        //!
        //! Inputs are validated before any request is made; validation
        //! errors are [`TransactionError`](crate::transactions::TransactionError)s.
        let request = TransactionRequest::transfer(to, amount, from)?;
        self.submit(&request).await
    }

    pub async fn submit(&self, request: &TransactionRequest) -> AResult<Value> {
        //! Submit a prepared request as a single call. The node response
        //! (an unsigned transaction or an error object) is returned as-is.
        tracing::debug!(
            to = %request.to_address,
            owner = %request.owner_address,
            amount = request.amount,
            "creating transfer transaction"
        );
        let body = serde_json::to_value(request)?;
        self.manager
            .request(Self::CREATE_TRANSACTION_PATH, Some(&body), Method::Post)
            .await
    }
}
