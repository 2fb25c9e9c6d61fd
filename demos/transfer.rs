//! Network communication requires `http` crate feature.
//!
//! Sends 1 TRX on the Shasta testnet from the account given by
//! `TEST_PRIVATE_KEY` to `TEST_TO_ADDRESS`.

use serde_json::{json, Value};
use std::time::Duration;
use tron_devkit::client::{Tron, TronOptions};
use tron_devkit::currency::from_sun;
use tron_devkit::network::AResult;

fn broadcast_tx_id(response: &Value) -> AResult<String> {
    match (response["result"].as_bool(), response["txid"].as_str()) {
        (Some(true), Some(tx_id)) if !tx_id.is_empty() => Ok(tx_id.to_string()),
        _ => Err(format!("Broadcast failed: {response}").into()),
    }
}

async fn transfer() -> AResult<()> {
    let private_key = std::env::var("TEST_PRIVATE_KEY").expect("Private key must be provided");
    let recipient = std::env::var("TEST_TO_ADDRESS").expect("Address must be provided");
    let tron = Tron::new(TronOptions::shasta().private_key(private_key))?;
    let trx = tron.trx().expect("Trx module is enabled by default");
    let sender = tron
        .session()
        .owner_address()
        .expect("Private key is set")
        .to_base58();
    println!("Sending from {sender} to {recipient}");

    let status = tron.is_connected().await;
    println!("Connected: {status:?}");

    let before = trx.get_balance(&sender).await?;
    println!("Balance before: {} TRX", from_sun(before));
    let response = trx.send_trx(&recipient, 1.0).await?;
    println!("Broadcast response: {response}");
    let tx_id = broadcast_tx_id(&response)?;
    loop {
        match trx.get_transaction(&tx_id).await {
            Ok(tx) => {
                println!("Transaction found: {}", tx["txID"]);
                break;
            }
            Err(_) => {
                println!("Transaction not processed yet");
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    }
    let after = trx.get_balance(&sender).await?;
    println!("Balance after: {} TRX", from_sun(after));
    Ok(())
}

#[test]
fn test_broadcast_tx_id() {
    let tx_id = "ab".repeat(32);
    assert_eq!(
        broadcast_tx_id(&json!({"result": true, "txid": tx_id})).unwrap(),
        tx_id
    );
    assert!(broadcast_tx_id(&json!({"code": "SIGERROR", "message": "00"})).is_err());
    assert!(broadcast_tx_id(&json!({"result": true})).is_err());
    assert!(broadcast_tx_id(&json!({"result": false, "txid": tx_id})).is_err());
}

#[tokio::main]
async fn main() {
    transfer().await.expect("Must not fail");
}
