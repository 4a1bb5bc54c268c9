//! Token metadata update.

use mpl_token_metadata::accounts::Metadata;
use mpl_token_metadata::instructions::UpdateV1Builder;
use mpl_token_metadata::types::Data;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::chain::transaction::send_instructions;
use crate::chain::types::ChainError;
use crate::chain::{ChainClient, Wallet};
use crate::nft::NftError;

/// Result of a metadata update.
#[derive(Debug, Clone)]
pub struct UpdatedNft {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub signature: Signature,
}

/// On-chain metadata strings are stored space-padded with NULs.
fn unpad(s: &str) -> String {
    s.trim_end_matches('\0').to_string()
}

/// Instruction replacing a token's metadata URI, carrying every other
/// field over unchanged from the current on-chain record.
pub fn update_uri_instruction(
    authority: &Pubkey,
    mint: &Pubkey,
    current: &Metadata,
    new_uri: &str,
) -> Instruction {
    let (metadata, _) = Metadata::find_pda(mint);

    UpdateV1Builder::new()
        .authority(*authority)
        .metadata(metadata)
        .mint(*mint)
        .payer(*authority)
        .data(Data {
            name: unpad(&current.name),
            symbol: unpad(&current.symbol),
            uri: new_uri.to_string(),
            seller_fee_basis_points: current.seller_fee_basis_points,
            creators: current.creators.clone(),
        })
        .instruction()
}

/// Point an existing token's metadata at a new URI.
///
/// Looks the token's metadata account up once, then submits a single
/// update instruction. The wallet must be the token's update authority.
pub async fn update_nft_uri(
    client: &ChainClient,
    wallet: &Wallet,
    mint: &Pubkey,
    new_uri: &str,
) -> Result<UpdatedNft, NftError> {
    let (metadata_address, _) = Metadata::find_pda(mint);
    let account = client.account(&metadata_address).await?;
    let current =
        Metadata::safe_deserialize(&account.data).map_err(|e| ChainError::MalformedAccount {
            address: metadata_address,
            message: e.to_string(),
        })?;

    tracing::info!(
        mint = %mint,
        name = %unpad(&current.name),
        current_uri = %unpad(&current.uri),
        new_uri = %new_uri,
        "updating token metadata"
    );

    let instruction = update_uri_instruction(&wallet.pubkey(), mint, &current, new_uri);
    let signature = send_instructions(client, wallet, &[instruction], &[]).await?;

    tracing::info!(
        explorer = %client.cluster().explorer_address(mint),
        transaction = %client.cluster().explorer_tx(&signature),
        "metadata updated"
    );
    Ok(UpdatedNft {
        mint: *mint,
        metadata: metadata_address,
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpl_token_metadata::types::Key;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn current_metadata(mint: Pubkey, authority: Pubkey) -> Metadata {
        Metadata {
            key: Key::MetadataV1,
            update_authority: authority,
            mint,
            name: "My NFT\0\0\0\0".to_string(),
            symbol: "Gakydo\0\0".to_string(),
            uri: "https://arweave.net/OLD\0\0\0".to_string(),
            seller_fee_basis_points: 250,
            creators: None,
            primary_sale_happened: false,
            is_mutable: true,
            edition_nonce: None,
            token_standard: None,
            collection: None,
            uses: None,
            collection_details: None,
            programmable_config: None,
        }
    }

    #[test]
    fn test_update_replaces_uri_and_preserves_fields() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let current = current_metadata(mint, authority);

        let ix = update_uri_instruction(&authority, &mint, &current, "https://arweave.net/NEW");
        assert_eq!(ix.program_id, mpl_token_metadata::ID);
        assert!(contains(&ix.data, b"https://arweave.net/NEW"));
        assert!(!contains(&ix.data, b"https://arweave.net/OLD"));
        assert!(contains(&ix.data, b"My NFT"));
        assert!(contains(&ix.data, &250u16.to_le_bytes()));
    }

    #[test]
    fn test_update_targets_metadata_pda() {
        let mint = Pubkey::new_unique();
        let authority = Pubkey::new_unique();
        let current = current_metadata(mint, authority);

        let ix = update_uri_instruction(&authority, &mint, &current, "uri");
        let (metadata, _) = Metadata::find_pda(&mint);
        assert!(ix.accounts.iter().any(|m| m.pubkey == metadata));
        assert!(ix
            .accounts
            .iter()
            .any(|m| m.pubkey == authority && m.is_signer));
    }

    #[test]
    fn test_unpad() {
        assert_eq!(unpad("abc\0\0"), "abc");
        assert_eq!(unpad("abc"), "abc");
        assert_eq!(unpad(""), "");
    }
}
