use tron_devkit::{
    base58_to_hex, hex_to_base58, to_hex, Address, AddressConvertible, AddressValidationError,
    PublicKey,
};

const PAIRS: [(&str, &str); 4] = [
    (
        "418840e6c55b9ada326d211d818c34a994aeced808",
        "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL",
    ),
    (
        "41928c9af0651632157ef27a2cf17ca72c575a4d21",
        "TPL66VK2gCXNCD7EJg9pgJRfqcRazjhUZY",
    ),
    (
        "412c7536e3605d9c16a7a3d7b1898e529396a65c23",
        "TE2H9hWjzYdwzDFRJfx9BFhr4MmjH1CHaz",
    ),
    (
        "410000000000000000000000000000000000000000",
        "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb",
    ),
];

#[test]
fn test_hex_base58_round_trip() {
    for (hex, base58) in PAIRS {
        assert_eq!(hex_to_base58(hex).unwrap(), base58);
        assert_eq!(base58_to_hex(base58).unwrap(), hex);
        assert_eq!(hex_to_base58(&base58_to_hex(base58).unwrap()).unwrap(), base58);
        assert_eq!(base58_to_hex(&hex_to_base58(hex).unwrap()).unwrap(), hex);
    }
}

#[test]
fn test_hex_input_is_normalized() {
    assert_eq!(
        hex_to_base58("0x418840E6C55B9ADA326D211D818C34A994AECED808").unwrap(),
        "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL"
    );
    assert_eq!(
        to_hex("418840E6C55B9ADA326D211D818C34A994AECED808").unwrap(),
        "418840e6c55b9ada326d211d818c34a994aeced808"
    );
    assert_eq!(
        to_hex("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL").unwrap(),
        "418840e6c55b9ada326d211d818c34a994aeced808"
    );
}

#[test]
fn test_corrupted_checksum() {
    assert_eq!(
        base58_to_hex("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeM"),
        Err(AddressValidationError::InvalidChecksum)
    );
}

#[test]
fn test_malformed_input() {
    assert_eq!(
        base58_to_hex("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYq"),
        Err(AddressValidationError::InvalidLength {
            expected: 34,
            got: 32
        })
    );
    // '0' and 'l' are not in the base58 alphabet.
    assert!(matches!(
        base58_to_hex("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYq0l"),
        Err(AddressValidationError::InvalidEncoding(_))
    ));
    assert_eq!(
        hex_to_base58("8840e6c55b9ada326d211d818c34a994aeced808"),
        Err(AddressValidationError::InvalidLength {
            expected: 42,
            got: 40
        })
    );
    assert_eq!(
        hex_to_base58("428840e6c55b9ada326d211d818c34a994aeced808"),
        Err(AddressValidationError::InvalidPrefix(0x42))
    );
    assert!(matches!(
        hex_to_base58("41zz40e6c55b9ada326d211d818c34a994aeced808"),
        Err(AddressValidationError::InvalidEncoding(_))
    ));
}

#[test]
fn test_upubkey_to_address() {
    let pubkey: PublicKey = (
        "04b90e9bb2617387eba4502c730de65a33878ef384a46f1096d86f2da19043304afa67d0ad09cf2bea0c6f2d1767a9e62a7a7ecc41facf18f2fa505d92243a658f"
    ).parse().unwrap();
    let ref_addr: Address = "41d989829d88b0ed1b06edf5c50174ecfa64f14a64".parse().unwrap();
    assert_eq!(pubkey.address(), ref_addr);
    assert_eq!(
        pubkey.address().to_base58(),
        "TVoSN4dxX6kEYv72UQvJBxPKTaMvqukmzE"
    );
}

#[test]
fn test_pubkey_to_address() {
    let pubkey: PublicKey = "03c1573f1528638ae14cbe04a74e6583c5562d59214223762c1a11121e24619cbc"
        .parse()
        .unwrap();
    let ref_addr: Address = "TRwn8X7zgaewz77zZEqfybPTnyBvsx2mPy".parse().unwrap();
    assert_eq!(pubkey.address(), ref_addr);
    assert_eq!(
        pubkey.address().to_hex(),
        "41af3cd5c36b97e9c28c263dc4639c6d7d53303a13"
    );
}

#[test]
fn test_parse_either_form() {
    let from_hex: Address = PAIRS[0].0.parse().unwrap();
    let from_base58: Address = PAIRS[0].1.parse().unwrap();
    assert_eq!(from_hex, from_base58);
    assert_eq!(from_hex.len(), Address::WIDTH);
    assert_eq!(from_hex[0], Address::PREFIX);
}
