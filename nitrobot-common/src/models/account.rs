use serde::{Deserialize, Serialize};

/// Top-level shape of the Nitrado accounts document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsConfig {
    pub nitrado_accounts: Vec<NitradoAccount>,
}

/// One hosting account: an API token plus the gameservers it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NitradoAccount {
    pub auth_token: String,
    pub gameservers: Vec<Gameserver>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gameserver {
    pub gameserver_id: String,
    pub gameserver_name: String,
}

/// Credentials resolved from a human-typed server name at call time.
/// Never persisted; handlers build one per invocation and drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCredentials {
    pub auth_token: String,
    pub gameserver_id: String,
    pub gameserver_name: String,
}
