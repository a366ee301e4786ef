// Base32 alphabet of Conflux addresses (no i, l, o, q).
const BASE32_ALPHABET: &str = "abcdefghjkmnprstuvwxyz0123456789";
const BASE32_BODY_LEN: usize = 42;

/// Shape check for hex (`0x` + 40 hex digits) and Conflux base32
/// (`cfx:`, `cfxtest:`, `net<id>:`) addresses. Checksums are not verified.
pub fn is_valid_address(address: &str) -> bool {
    let address = address.trim();
    if let Some(hex) = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
    {
        return hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit());
    }
    is_base32_address(&address.to_ascii_lowercase())
}

fn is_base32_address(address: &str) -> bool {
    let mut parts = address.split(':');
    let (Some(network), Some(last)) = (parts.next(), parts.next_back()) else {
        return false;
    };
    // Optional `type.user` style segments between network and body.
    if parts.any(|segment| !segment.starts_with("type.")) {
        return false;
    }
    let network_ok = match network {
        "cfx" | "cfxtest" => true,
        other => other
            .strip_prefix("net")
            .is_some_and(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())),
    };
    network_ok && last.len() == BASE32_BODY_LEN && last.chars().all(|c| BASE32_ALPHABET.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_addresses() {
        assert!(is_valid_address("0x1234567890abcdef1234567890ABCDEF12345678"));
        assert!(!is_valid_address("0x1234"));
        assert!(!is_valid_address("0xZZ34567890abcdef1234567890abcdef12345678"));
    }

    #[test]
    fn accepts_base32_addresses() {
        assert!(is_valid_address("cfx:aak2rra2njvd77ezwjvx04kkds9fzagfe6ku8scz91"));
        assert!(is_valid_address("CFXTEST:TYPE.USER:AAK2RRA2NJVD77EZWJVX04KKDS9FZAGFE6KU8SCZ91"));
        assert!(is_valid_address("net8888:aak2rra2njvd77ezwjvx04kkds9fzagfe6ku8scz91"));
        assert!(!is_valid_address("btc:aak2rra2njvd77ezwjvx04kkds9fzagfe6ku8scz91"));
        assert!(!is_valid_address("cfx:short"));
        assert!(!is_valid_address(""));
    }
}
