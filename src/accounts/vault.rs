use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::{thread_rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

const KEY_SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;

/// Mnemonic encrypted with AES-256-GCM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SealedMnemonic {
    pub encrypted_mnemonic: Vec<u8>,
    pub nonce: Vec<u8>,
}

/// AES-256 key derived from the wallet password with Argon2
#[derive(Clone)]
pub struct VaultKey {
    salt: Vec<u8>,
    key: [u8; 32],
}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultKey")
            .field("salt", &hex::encode(&self.salt))
            .finish_non_exhaustive()
    }
}

impl VaultKey {
    /// Derive a key for a new wallet with a fresh salt
    pub fn generate(password: &str) -> Result<Self, Error> {
        let mut salt = [0u8; KEY_SALT_LEN];
        thread_rng().fill_bytes(&mut salt);
        Self::derive(password, &salt)
    }

    /// Derive the key for `password` and a stored salt
    pub fn derive(password: &str, salt: &[u8]) -> Result<Self, Error> {
        let mut key = [0u8; 32];
        Argon2::default()
            .hash_password_into(password.as_bytes(), salt, &mut key)
            .map_err(|e| Error::Vault(format!("Failed to derive key: {}", e)))?;

        Ok(Self {
            salt: salt.to_vec(),
            key,
        })
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.key))
    }

    /// Encrypt `mnemonic` under a random nonce
    pub fn seal(&self, mnemonic: &str) -> Result<SealedMnemonic, Error> {
        let mut nonce = [0u8; NONCE_LEN];
        thread_rng().fill_bytes(&mut nonce);

        let encrypted_mnemonic = self
            .cipher()
            .encrypt(Nonce::from_slice(&nonce), mnemonic.as_bytes())
            .map_err(|e| Error::Vault(format!("Failed to encrypt mnemonic: {}", e)))?;

        Ok(SealedMnemonic {
            encrypted_mnemonic,
            nonce: nonce.to_vec(),
        })
    }

    /// Decrypt a sealed mnemonic. Fails for a key derived from another password.
    pub fn open(&self, sealed: &SealedMnemonic) -> Result<String, Error> {
        if sealed.nonce.len() != NONCE_LEN {
            return Err(Error::Vault("Invalid mnemonic nonce".to_string()));
        }

        let bytes = self
            .cipher()
            .decrypt(
                Nonce::from_slice(&sealed.nonce),
                sealed.encrypted_mnemonic.as_ref(),
            )
            .map_err(|_| Error::Vault("Failed to decrypt mnemonic".to_string()))?;

        String::from_utf8(bytes).map_err(|e| Error::Vault(format!("Invalid mnemonic data: {}", e)))
    }
}

/// Account entry as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultAccount {
    pub id: String,
    pub address: String,
    #[serde(flatten)]
    pub mnemonic: SealedMnemonic,
}

/// Vault file layout
#[derive(Debug, Serialize, Deserialize)]
struct VaultData {
    /// Argon2 PHC string for the wallet password
    password_hash: String,
    /// Salt of the mnemonic encryption key
    key_salt: Vec<u8>,
    /// Address of the selected account
    selected: Option<String>,
    accounts: Vec<VaultAccount>,
    created_at: String,
    updated_at: Option<String>,
}

/// Vault content after a successful password check
#[derive(Debug, Clone)]
pub struct VaultContents {
    pub password_hash: String,
    pub key_salt: Vec<u8>,
    pub selected: Option<String>,
    pub accounts: Vec<VaultAccount>,
}

/// Password-gated accounts file
#[derive(Debug, Clone)]
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the vault, replacing any previous content
    pub fn save(
        &self,
        password_hash: &str,
        key_salt: &[u8],
        selected: Option<&str>,
        accounts: &[VaultAccount],
    ) -> Result<(), Error> {
        let created_at = self
            .read_file()
            .map(|data| data.created_at)
            .unwrap_or_else(|_| chrono::Utc::now().to_rfc3339());

        let data = VaultData {
            password_hash: password_hash.to_string(),
            key_salt: key_salt.to_vec(),
            selected: selected.map(str::to_string),
            accounts: accounts.to_vec(),
            created_at,
            updated_at: Some(chrono::Utc::now().to_rfc3339()),
        };

        let json = serde_json::to_string_pretty(&data)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        restrict_permissions(&self.path)?;

        tracing::debug!("vault saved: {} account(s)", accounts.len());
        Ok(())
    }

    /// Load the vault after checking `password`
    pub fn load(&self, password: &str) -> Result<VaultContents, Error> {
        if !self.exists() {
            return Err(Error::Vault(format!(
                "Vault not found: {}",
                self.path.display()
            )));
        }

        let data = self.read_file()?;
        verify_password(&data.password_hash, password)?;

        Ok(VaultContents {
            password_hash: data.password_hash,
            key_salt: data.key_salt,
            selected: data.selected,
            accounts: data.accounts,
        })
    }

    fn read_file(&self) -> Result<VaultData, Error> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| Error::Vault(format!("Failed to read vault file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Vault(format!("Failed to parse vault file: {}", e)))
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), Error> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), Error> {
    Ok(())
}

/// Hash a wallet password with Argon2
pub fn hash_password(password: &str) -> Result<String, Error> {
    let mut salt_bytes = [0u8; 16];
    thread_rng().fill_bytes(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| Error::Vault(format!("Failed to encode salt: {}", e)))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Vault(format!("Failed to hash password: {}", e)))
}

/// Check `password` against an Argon2 PHC string
pub fn verify_password(password_hash: &str, password: &str) -> Result<(), Error> {
    let parsed_hash = PasswordHash::new(password_hash)
        .map_err(|e| Error::Vault(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| Error::Vault("Invalid password".to_string()))
}

/// Validate password strength for a new vault
pub fn validate_password(password: &str) -> Result<(), Error> {
    if password.chars().count() < 12 {
        return Err(Error::Vault(
            "Password must be at least 12 characters long".to_string(),
        ));
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_upper {
        return Err(Error::Vault(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }
    if !has_lower {
        return Err(Error::Vault(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }
    if !has_digit {
        return Err(Error::Vault(
            "Password must contain at least one number".to_string(),
        ));
    }

    Ok(())
}
