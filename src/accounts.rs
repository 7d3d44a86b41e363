//! Reference accounts provider
//!
//! `AccountsStore` owns the account list, the selected account and the
//! account dialog key, and implements [`AccountsCommands`] for the UI. When
//! opened from a vault every change is written back to it. A change that
//! cannot be written is undone in memory as well.
//!
//! Mnemonics are only held encrypted, under a key derived from the wallet
//! password. A store without a password keeps no mnemonics.

pub mod vault;

use bip39::Mnemonic;
use rand::{thread_rng, RngCore};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use crate::context::{Account, AccountsCommands, AccountsProvider, AccountsSnapshot, DialogKey};
use crate::error::Error;

pub use vault::{SealedMnemonic, Vault, VaultAccount, VaultKey};

/// Maximum account name length
pub const MAX_ACCOUNT_NAME_LEN: usize = 32;

/// Name given to the first account of a new wallet
pub const FIRST_ACCOUNT_NAME: &str = "Account 1";

fn account_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9 _-]+$").expect("valid account name regex"))
}

/// In-memory accounts provider with optional vault persistence
#[derive(Debug, Default)]
pub struct AccountsStore {
    accounts: Vec<Account>,
    /// Encrypted mnemonic per account address
    mnemonics: HashMap<String, SealedMnemonic>,
    /// Address of the selected account
    selected: Option<String>,
    /// Address of the account targeted by the edit/mnemonic dialogs
    account_to_edit: Option<String>,
    dialog_to_display: Option<DialogKey>,
    password_hash: Option<String>,
    key: Option<VaultKey>,
    vault: Option<Vault>,
}

impl AccountsStore {
    /// Create an empty store with no password and no vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose mnemonics are gated by `password`
    pub fn with_password(password: &str) -> Result<Self, Error> {
        Ok(Self {
            password_hash: Some(vault::hash_password(password)?),
            key: Some(VaultKey::generate(password)?),
            ..Self::default()
        })
    }

    /// Create a new vault at `path` holding one freshly generated account
    pub fn create_vault(path: &Path, password: &str) -> Result<Self, Error> {
        let vault = Vault::new(path);
        if vault.exists() {
            return Err(Error::Vault(format!(
                "Vault already exists: {}",
                path.display()
            )));
        }
        vault::validate_password(password)?;

        let mut store = Self::with_password(password)?;
        store.vault = Some(vault);
        store.add_account(FIRST_ACCOUNT_NAME)?;

        tracing::info!("created vault at {}", path.display());
        Ok(store)
    }

    /// Open an existing vault
    pub fn open_vault(path: &Path, password: &str) -> Result<Self, Error> {
        let vault = Vault::new(path);
        let contents = vault.load(password)?;

        let mut store = Self {
            password_hash: Some(contents.password_hash),
            key: Some(VaultKey::derive(password, &contents.key_salt)?),
            ..Self::default()
        };
        for entry in contents.accounts {
            store.insert_sealed(Account::new(entry.id, entry.address), Some(entry.mnemonic))?;
        }
        if let Some(address) = contents.selected {
            if store.find_by_address(&address).is_some() {
                store.selected = Some(address);
            }
        }
        store.vault = Some(vault);

        tracing::info!(
            "opened vault at {} with {} account(s)",
            path.display(),
            store.accounts.len()
        );
        Ok(store)
    }

    /// Add an account with a known mnemonic. The first account becomes selected.
    pub fn insert_account(&mut self, account: Account, mnemonic: String) -> Result<(), Error> {
        let sealed = match &self.key {
            Some(key) => Some(key.seal(&mnemonic)?),
            None => None,
        };
        self.insert_sealed(account, sealed)
    }

    fn insert_sealed(
        &mut self,
        account: Account,
        mnemonic: Option<SealedMnemonic>,
    ) -> Result<(), Error> {
        if self.find_by_address(&account.address).is_some() {
            return Err(Error::Account(format!(
                "Account with address {} already exists",
                account.address
            )));
        }
        self.validate_account_name(&account.id, None)?;

        if self.selected.is_none() {
            self.selected = Some(account.address.clone());
        }
        if let Some(mnemonic) = mnemonic {
            self.mnemonics.insert(account.address.clone(), mnemonic);
        }
        self.accounts.push(account);
        Ok(())
    }

    pub fn snapshot(&self) -> AccountsSnapshot<'_> {
        AccountsSnapshot {
            accounts: Some(&self.accounts),
            selected_account: self.selected_account(),
            dialog_to_display: self.dialog_to_display,
            account_to_edit: self
                .account_to_edit
                .as_deref()
                .and_then(|address| self.find_by_address(address)),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn selected_account(&self) -> Option<&Account> {
        self.selected
            .as_deref()
            .and_then(|address| self.find_by_address(address))
    }

    pub fn dialog_to_display(&self) -> Option<DialogKey> {
        self.dialog_to_display
    }

    pub fn vault_path(&self) -> Option<&Path> {
        self.vault.as_ref().map(Vault::path)
    }

    fn find_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    fn find_by_address(&self, address: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.address == address)
    }

    /// Check a proposed account name. `current_id` is the account being renamed.
    pub fn validate_account_name(&self, name: &str, current_id: Option<&str>) -> Result<(), Error> {
        if name.trim().is_empty() {
            return Err(Error::Account("Account name cannot be empty".to_string()));
        }
        if name.chars().count() > MAX_ACCOUNT_NAME_LEN {
            return Err(Error::Account(format!(
                "Account name must be at most {} characters",
                MAX_ACCOUNT_NAME_LEN
            )));
        }
        if !account_name_pattern().is_match(name) {
            return Err(Error::Account(
                "Account name may only contain letters, digits, spaces, '_' and '-'".to_string(),
            ));
        }
        let taken = self
            .accounts
            .iter()
            .any(|a| a.id == name && Some(a.id.as_str()) != current_id);
        if taken {
            return Err(Error::Account(format!("Account '{}' already exists", name)));
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), Error> {
        let (Some(vault), Some(hash), Some(key)) = (&self.vault, &self.password_hash, &self.key)
        else {
            return Ok(());
        };

        let entries = self
            .accounts
            .iter()
            .map(|account| {
                let mnemonic = self.mnemonics.get(&account.address).cloned().ok_or_else(|| {
                    Error::Vault(format!("No mnemonic stored for {}", account.id))
                })?;
                Ok(VaultAccount {
                    id: account.id.clone(),
                    address: account.address.clone(),
                    mnemonic,
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        vault.save(hash, key.salt(), self.selected.as_deref(), &entries)
    }

    /// Write the current state, or undo the in-memory change with `rollback`
    fn commit(&mut self, rollback: impl FnOnce(&mut Self)) -> Result<(), Error> {
        if let Err(e) = self.persist() {
            tracing::error!("failed to save vault: {}", e);
            rollback(self);
            return Err(e);
        }
        Ok(())
    }
}

/// Generate a random 12-word mnemonic and a display address for it.
///
/// The address is a random placeholder assigned by this provider. It shares
/// nothing with the mnemonic entropy.
fn generate_account_material() -> Result<(String, String), Error> {
    let mut rng = thread_rng();
    let mut entropy = [0u8; 16];
    rng.fill_bytes(&mut entropy);
    let mut address = [0u8; 20];
    rng.fill_bytes(&mut address);

    let mnemonic = Mnemonic::from_entropy(&entropy)
        .map_err(|e| Error::Account(format!("Failed to generate mnemonic: {}", e)))?;

    Ok((mnemonic.to_string(), format!("n1{}", hex::encode(address))))
}

impl AccountsProvider for AccountsStore {
    fn snapshot(&self) -> AccountsSnapshot<'_> {
        AccountsStore::snapshot(self)
    }
}

impl AccountsCommands for AccountsStore {
    fn set_dialog_to_display(&mut self, dialog: Option<DialogKey>) {
        tracing::debug!("dialog to display: {:?}", dialog);
        self.dialog_to_display = dialog;
    }

    fn set_account_to_edit(&mut self, id: Option<&str>) {
        self.account_to_edit = id
            .and_then(|id| self.find_by_id(id))
            .map(|account| account.address.clone());
    }

    fn select_account(&mut self, id: &str) -> Result<(), Error> {
        let address = self
            .find_by_id(id)
            .map(|account| account.address.clone())
            .ok_or_else(|| Error::Account(format!("Unknown account: {}", id)))?;

        let previous = self.selected.replace(address);
        self.commit(|store| store.selected = previous)?;

        tracing::info!("selected account {}", id);
        Ok(())
    }

    fn add_account(&mut self, name: &str) -> Result<Account, Error> {
        let name = name.trim();
        self.validate_account_name(name, None)?;

        let (mnemonic, address) = generate_account_material()?;
        let account = Account::new(name, address);
        let previous = self.selected.clone();
        self.insert_account(account.clone(), mnemonic)?;
        self.commit(|store| {
            if let Some(added) = store.accounts.pop() {
                store.mnemonics.remove(&added.address);
            }
            store.selected = previous;
        })?;

        tracing::info!("added account {}", account.id);
        Ok(account)
    }

    fn rename_account(&mut self, id: &str, new_name: &str) -> Result<(), Error> {
        let new_name = new_name.trim();
        self.validate_account_name(new_name, Some(id))?;

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::Account(format!("Unknown account: {}", id)))?;
        let address = account.address.clone();
        account.id = new_name.to_string();

        let old_id = id.to_string();
        self.commit(|store| {
            if let Some(account) = store.accounts.iter_mut().find(|a| a.address == address) {
                account.id = old_id;
            }
        })?;

        tracing::info!("renamed account {} to {}", id, new_name);
        Ok(())
    }

    fn reveal_mnemonic(&self, id: &str, password: &str) -> Result<String, Error> {
        let hash = self
            .password_hash
            .as_deref()
            .ok_or_else(|| Error::Vault("No wallet password is set".to_string()))?;
        vault::verify_password(hash, password)?;

        let account = self
            .find_by_id(id)
            .ok_or_else(|| Error::Account(format!("Unknown account: {}", id)))?;
        let sealed = self
            .mnemonics
            .get(&account.address)
            .ok_or_else(|| Error::Account(format!("No mnemonic stored for {}", id)))?;
        let salt = self
            .key
            .as_ref()
            .map(VaultKey::salt)
            .ok_or_else(|| Error::Vault("No wallet key is set".to_string()))?;

        let mnemonic = VaultKey::derive(password, salt)?.open(sealed)?;
        tracing::info!("mnemonic revealed for account {}", id);
        Ok(mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "Correct-Horse-42";

    fn store_with_two_accounts() -> AccountsStore {
        let mut store = AccountsStore::with_password(PASSWORD).unwrap();
        store
            .insert_account(Account::new("Account 1", "n1first"), "one".to_string())
            .unwrap();
        store
            .insert_account(Account::new("Savings", "n1second"), "two".to_string())
            .unwrap();
        store
    }

    #[test]
    fn test_first_inserted_account_is_selected() {
        let store = store_with_two_accounts();
        assert_eq!(store.selected_account().unwrap().id, "Account 1");
        assert_eq!(store.snapshot().accounts.unwrap().len(), 2);
    }

    #[test]
    fn test_select_account() {
        let mut store = store_with_two_accounts();
        store.select_account("Savings").unwrap();
        assert_eq!(store.selected_account().unwrap().address, "n1second");
        assert!(matches!(
            store.select_account("Missing"),
            Err(Error::Account(_))
        ));
    }

    #[test]
    fn test_add_account_generates_mnemonic() {
        let mut store = store_with_two_accounts();
        let account = store.add_account("  Trading ").unwrap();
        assert_eq!(account.id, "Trading");
        assert!(account.address.starts_with("n1"));

        let words = store.reveal_mnemonic("Trading", PASSWORD).unwrap();
        assert_eq!(words.split_whitespace().count(), 12);
    }

    #[test]
    fn test_account_name_validation() {
        let mut store = store_with_two_accounts();
        assert!(store.add_account("").is_err());
        assert!(store.add_account("   ").is_err());
        assert!(store.add_account("Savings").is_err());
        assert!(store.add_account("bad/name").is_err());
        assert!(store.add_account(&"x".repeat(MAX_ACCOUNT_NAME_LEN + 1)).is_err());
        assert!(store.add_account(&"x".repeat(MAX_ACCOUNT_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_rename_keeps_selection() {
        let mut store = store_with_two_accounts();
        store.rename_account("Account 1", "Main").unwrap();
        assert_eq!(store.selected_account().unwrap().id, "Main");

        // Renaming to its own name is allowed, to a sibling's is not
        assert!(store.rename_account("Main", "Main").is_ok());
        assert!(store.rename_account("Main", "Savings").is_err());
    }

    #[test]
    fn test_account_to_edit_follows_rename() {
        let mut store = store_with_two_accounts();
        store.set_account_to_edit(Some("Savings"));
        store.rename_account("Savings", "Rainy Day").unwrap();
        assert_eq!(store.snapshot().account_to_edit.unwrap().id, "Rainy Day");

        store.set_account_to_edit(None);
        assert!(store.snapshot().account_to_edit.is_none());
    }

    #[test]
    fn test_reveal_mnemonic_checks_password() {
        let store = store_with_two_accounts();
        assert_eq!(store.reveal_mnemonic("Savings", PASSWORD).unwrap(), "two");
        assert!(matches!(
            store.reveal_mnemonic("Savings", "nope"),
            Err(Error::Vault(_))
        ));
    }

    #[test]
    fn test_reveal_without_password_fails() {
        let mut store = AccountsStore::new();
        store
            .insert_account(Account::new("Account 1", "n1first"), "one".to_string())
            .unwrap();
        assert!(store.reveal_mnemonic("Account 1", "").is_err());
    }

    #[test]
    fn test_mnemonics_are_kept_encrypted() {
        let store = store_with_two_accounts();
        let sealed = &store.mnemonics["n1second"];
        assert_ne!(sealed.encrypted_mnemonic, b"two".to_vec());
        assert_eq!(sealed.nonce.len(), 12);
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        let mut store = AccountsStore::create_vault(&path, PASSWORD).unwrap();
        store.add_account("Savings").unwrap();

        // A directory where the vault file should be makes every write fail
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        assert!(store.add_account("Trading").is_err());
        assert_eq!(store.accounts().len(), 2);
        assert_eq!(store.mnemonics.len(), 2);
        assert!(store.find_by_id("Trading").is_none());

        assert!(store.select_account("Savings").is_err());
        assert_eq!(store.selected_account().unwrap().id, FIRST_ACCOUNT_NAME);

        assert!(store.rename_account("Savings", "Rainy Day").is_err());
        assert!(store.find_by_id("Savings").is_some());
        assert!(store.find_by_id("Rainy Day").is_none());

        std::fs::remove_dir(&path).unwrap();
        store.add_account("Trading").unwrap();
        assert_eq!(store.accounts().len(), 3);
        let reopened = AccountsStore::open_vault(&path, PASSWORD).unwrap();
        assert_eq!(reopened.accounts().len(), 3);
    }

    #[test]
    fn test_dialog_key_round_trip_through_snapshot() {
        let mut store = store_with_two_accounts();
        assert_eq!(store.snapshot().dialog_to_display, None);
        store.set_dialog_to_display(Some(DialogKey::Accounts));
        assert!(store.snapshot().is_showing(DialogKey::Accounts));
        store.set_dialog_to_display(None);
        assert_eq!(store.dialog_to_display(), None);
    }
}
