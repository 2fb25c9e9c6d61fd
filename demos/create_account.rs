use tron_devkit::{base58_to_hex, Account};

fn create_account() {
    let account = Account::generate();
    println!("Private key: {}", account.private_key_hex());
    println!("Public key: {}", account.public_key_hex());
    println!("Address (base58): {}", account.address.to_base58());
    println!("Address (hex): {}", account.address.to_hex());
    assert_eq!(
        base58_to_hex(&account.address.to_base58()).expect("Generated address is valid"),
        account.address.to_hex()
    );
}

#[test]
fn test_run() {
    create_account();
}

fn main() {
    create_account();
}
