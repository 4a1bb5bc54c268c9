//! Transaction assembly and submission.
//!
//! One instruction list becomes one signed transaction, submitted at
//! finalized commitment. There is no retry or fee-bump logic; a failed
//! submission surfaces as an error to the caller.

use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::signature::{Keypair, Signature};
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

use crate::chain::client::ChainClient;
use crate::chain::types::ChainResult;
use crate::chain::wallet::Wallet;

/// Sign a transaction with the wallet as fee payer plus any extra signers.
pub fn sign_transaction(
    wallet: &Wallet,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
    blockhash: Hash,
) -> Transaction {
    let mut signers: Vec<&dyn Signer> = vec![wallet.keypair()];
    signers.extend(extra_signers.iter().map(|k| *k as &dyn Signer));

    Transaction::new_signed_with_payer(
        instructions,
        Some(&wallet.pubkey()),
        &signers,
        blockhash,
    )
}

/// Assemble, sign, and submit one transaction, waiting for finality.
pub async fn send_instructions(
    client: &ChainClient,
    wallet: &Wallet,
    instructions: &[Instruction],
    extra_signers: &[&Keypair],
) -> ChainResult<Signature> {
    let blockhash = client.latest_blockhash().await?;
    let transaction = sign_transaction(wallet, instructions, extra_signers, blockhash);

    tracing::debug!(
        payer = %wallet.pubkey(),
        instructions = instructions.len(),
        "submitting transaction"
    );
    let signature = client.send_and_confirm(&transaction).await?;
    tracing::debug!(signature = %signature, "transaction finalized");
    Ok(signature)
}
