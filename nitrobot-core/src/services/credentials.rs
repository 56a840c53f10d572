// File: nitrobot-core/src/services/credentials.rs

use nitrobot_common::models::{AccountsConfig, ServerCredentials};

/// Looks up hosting credentials for a human-typed server name.
///
/// Users type `my_server` where the config says "My Server", so the input
/// is normalized (underscores to spaces, lowercased) and compared against
/// each configured server's lowercased display name. Accounts are scanned
/// in table order; the first match wins. `None` is the expected miss
/// outcome, not an error - every server-scoped handler hits this path for
/// typos.
pub fn resolve_credentials(
    server_name: &str,
    accounts: &AccountsConfig,
) -> Option<ServerCredentials> {
    let wanted = server_name.replace('_', " ").to_lowercase();

    for account in &accounts.nitrado_accounts {
        for gameserver in &account.gameservers {
            if gameserver.gameserver_name.to_lowercase() == wanted {
                return Some(ServerCredentials {
                    auth_token: account.auth_token.clone(),
                    gameserver_id: gameserver.gameserver_id.clone(),
                    gameserver_name: gameserver.gameserver_name.clone(),
                });
            }
        }
    }

    None
}
