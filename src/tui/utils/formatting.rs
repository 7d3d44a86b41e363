//! Text formatting helpers for addresses and mnemonics

/// Format a long address for display (show first 8 and last 8 characters)
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        address.to_string()
    } else {
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 8..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

/// Number mnemonic words and lay them out `per_line` to a row
pub fn format_mnemonic(mnemonic: &str, per_line: usize) -> Vec<String> {
    let numbered: Vec<String> = mnemonic
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| format!("{:>2}. {:<10}", i + 1, word))
        .collect();

    numbered
        .chunks(per_line.max(1))
        .map(|row| row.concat().trim_end().to_string())
        .collect()
}
