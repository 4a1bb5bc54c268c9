//! Token creation.
//!
//! One transaction creates the mint, metadata, and master edition accounts
//! (`CreateV1`) and mints the single token to the payer's associated token
//! account (`MintV1`). Minting into a collection appends a
//! `VerifyCollectionV1` signed by the collection authority.

use mpl_token_metadata::accounts::{MasterEdition, Metadata};
use mpl_token_metadata::instructions::{CreateV1Builder, MintV1Builder, VerifyCollectionV1Builder};
use mpl_token_metadata::types::{Collection, CollectionDetails, PrintSupply, TokenStandard};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use spl_associated_token_account::get_associated_token_address;

use crate::chain::transaction::send_instructions;
use crate::chain::{ChainClient, Wallet};
use crate::nft::descriptor::{
    CollectionDescriptor, NftDescriptor, MAX_SELLER_FEE_BASIS_POINTS,
};
use crate::nft::NftError;

/// Addresses and signature produced by a successful mint.
#[derive(Debug, Clone)]
pub struct MintedNft {
    pub mint: Pubkey,
    pub metadata: Pubkey,
    pub master_edition: Pubkey,
    pub token: Pubkey,
    pub signature: Signature,
}

/// Instructions for creating one token and minting it to the payer.
///
/// `collection` attaches an unverified collection reference;
/// `is_collection_parent` marks the new token itself as a sized collection.
pub fn create_instructions(
    payer: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    descriptor: &NftDescriptor,
    uri: &str,
    collection: Option<&Pubkey>,
    is_collection_parent: bool,
) -> Vec<Instruction> {
    let (metadata, _) = Metadata::find_pda(mint);
    let (master_edition, _) = MasterEdition::find_pda(mint);
    let token = get_associated_token_address(payer, mint);

    let mut create = CreateV1Builder::new();
    create
        .metadata(metadata)
        .master_edition(Some(master_edition))
        .mint(*mint, true)
        .authority(*authority)
        .payer(*payer)
        .update_authority(*authority, true)
        .is_mutable(true)
        .primary_sale_happened(false)
        .name(descriptor.name.clone())
        .symbol(descriptor.symbol.clone())
        .uri(uri.to_string())
        .seller_fee_basis_points(descriptor.seller_fee_basis_points)
        .token_standard(TokenStandard::NonFungible)
        .print_supply(PrintSupply::Zero);
    if let Some(parent) = collection {
        create.collection(Collection {
            verified: false,
            key: *parent,
        });
    }
    if is_collection_parent {
        create.collection_details(CollectionDetails::V1 { size: 0 });
    }

    let mint_one = MintV1Builder::new()
        .token(token)
        .token_owner(Some(*payer))
        .metadata(metadata)
        .master_edition(Some(master_edition))
        .mint(*mint)
        .authority(*authority)
        .payer(*payer)
        .amount(1)
        .instruction();

    vec![create.instruction(), mint_one]
}

/// Instruction marking a token's collection reference as verified.
pub fn verify_collection_instruction(
    authority: &Pubkey,
    item_metadata: &Pubkey,
    collection_mint: &Pubkey,
) -> Instruction {
    let (collection_metadata, _) = Metadata::find_pda(collection_mint);
    let (collection_master_edition, _) = MasterEdition::find_pda(collection_mint);

    VerifyCollectionV1Builder::new()
        .authority(*authority)
        .metadata(*item_metadata)
        .collection_mint(*collection_mint)
        .collection_metadata(Some(collection_metadata))
        .collection_master_edition(Some(collection_master_edition))
        .instruction()
}

fn check_royalty(descriptor: &NftDescriptor) -> Result<(), NftError> {
    if descriptor.seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
        return Err(NftError::InvalidRoyalty(descriptor.seller_fee_basis_points));
    }
    Ok(())
}

async fn submit_mint(
    client: &ChainClient,
    wallet: &Wallet,
    mint: Keypair,
    instructions: Vec<Instruction>,
) -> Result<MintedNft, NftError> {
    let mint_address = mint.pubkey();
    let (metadata, _) = Metadata::find_pda(&mint_address);
    let (master_edition, _) = MasterEdition::find_pda(&mint_address);
    let token = get_associated_token_address(&wallet.pubkey(), &mint_address);

    let signature = send_instructions(client, wallet, &instructions, &[&mint]).await?;

    tracing::info!(
        mint = %mint_address,
        explorer = %client.cluster().explorer_address(&mint_address),
        "token minted"
    );
    Ok(MintedNft {
        mint: mint_address,
        metadata,
        master_edition,
        token,
        signature,
    })
}

/// Mint a new NFT pointing at an uploaded metadata URI.
pub async fn create_nft(
    client: &ChainClient,
    wallet: &Wallet,
    descriptor: &NftDescriptor,
    uri: &str,
) -> Result<MintedNft, NftError> {
    check_royalty(descriptor)?;
    let mint = Keypair::new();
    let payer = wallet.pubkey();
    let instructions =
        create_instructions(&payer, &payer, &mint.pubkey(), descriptor, uri, None, false);
    submit_mint(client, wallet, mint, instructions).await
}

/// Mint a new NFT as a verified member of an existing collection.
///
/// The wallet must be the collection's verification authority.
pub async fn create_nft_in_collection(
    client: &ChainClient,
    wallet: &Wallet,
    descriptor: &NftDescriptor,
    uri: &str,
    collection_mint: &Pubkey,
) -> Result<MintedNft, NftError> {
    check_royalty(descriptor)?;
    let mint = Keypair::new();
    let payer = wallet.pubkey();
    let mut instructions = create_instructions(
        &payer,
        &payer,
        &mint.pubkey(),
        descriptor,
        uri,
        Some(collection_mint),
        false,
    );
    let (item_metadata, _) = Metadata::find_pda(&mint.pubkey());
    instructions.push(verify_collection_instruction(
        &payer,
        &item_metadata,
        collection_mint,
    ));
    submit_mint(client, wallet, mint, instructions).await
}

/// Mint a sized collection parent NFT.
pub async fn create_collection_nft(
    client: &ChainClient,
    wallet: &Wallet,
    descriptor: &CollectionDescriptor,
    uri: &str,
) -> Result<MintedNft, NftError> {
    if descriptor.collection_authority != wallet.pubkey() {
        return Err(NftError::AuthorityMismatch {
            authority: descriptor.collection_authority,
            wallet: wallet.pubkey(),
        });
    }
    let nft = descriptor.as_nft();
    check_royalty(&nft)?;
    let mint = Keypair::new();
    let payer = wallet.pubkey();
    let instructions = create_instructions(
        &payer,
        &descriptor.collection_authority,
        &mint.pubkey(),
        &nft,
        uri,
        None,
        descriptor.is_collection,
    );
    submit_mint(client, wallet, mint, instructions).await
}
