use std::path::PathBuf;
use tempfile::TempDir;

#[allow(dead_code)]
pub mod test_utils {
    use super::*;
    use wallet_shell::{Account, AccountsStore};

    /// Password accepted by the vault strength rules
    pub const TEST_PASSWORD: &str = "Correct-Horse-42";

    /// Temporary directory and a vault path inside it
    pub fn temp_vault() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("accounts.vault");
        (dir, path)
    }

    /// In-memory store with two accounts and known mnemonics
    pub fn two_account_store() -> AccountsStore {
        let mut store =
            AccountsStore::with_password(TEST_PASSWORD).expect("Failed to hash password");
        store
            .insert_account(
                Account::new("Account 1", "n1first"),
                "abandon ability able".to_string(),
            )
            .expect("Failed to insert first account");
        store
            .insert_account(Account::new("Savings", "n1second"), "zoo zone zero".to_string())
            .expect("Failed to insert second account");
        store
    }
}
