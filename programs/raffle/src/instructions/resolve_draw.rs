use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::RaffleError;
use crate::events::WinnerPicked;
use crate::state::{Raffle, RafflePhase};

/// Accounts required to settle the in-flight draw.
///
/// This ensures that:
/// 1. The randomness account provided is the one committed for this draw.
/// 2. The oracle has revealed a value for the committed slot.
/// 3. The winner account is the player the revealed value selects.
#[derive(Accounts)]
pub struct ResolveDraw<'info> {
    /// The crank turning the oracle reveal into a settlement. Identity is
    /// not checked; the randomness account is the trusted channel.
    pub caller: Signer<'info>,

    /// The raffle state account.
    #[account(
        mut,
        seeds = [b"raffle".as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// The randomness oracle account committed by `perform_upkeep`.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The winning player's wallet, recomputable off-chain from the
    /// revealed value. Receives the entire pot.
    /// CHECK: Must equal the player the revealed value selects; verified in
    /// the handler before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Settles the pending draw with the oracle's revealed value.
///
/// The instruction is all-or-nothing: winner selection, payout, and the
/// reset back to `Open` either all take effect or none do.
pub fn process_resolve_draw(ctx: Context<ResolveDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    let request = ctx.accounts.randomness_account_data.key();

    // Replayed, stale, or forged reveals all fail here, as does a reveal
    // arriving with no draw in flight.
    if raffle.phase != RafflePhase::Drawing || raffle.pending_request != Some(request) {
        return Err(RaffleError::UnknownRequest.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;

    let random_word = u64::from_le_bytes(revealed_random_value[0..8].try_into().unwrap());
    msg!("Randomness result: {}", random_word);

    let (winner, payout) = raffle.settle_draw(request, random_word, clock.unix_timestamp)?;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerAccountMismatch
    );

    let raffle_info = raffle.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();

    let remaining = raffle_info
        .lamports()
        .checked_sub(payout)
        .ok_or(RaffleError::PayoutFailed)?;
    let credited = winner_info
        .lamports()
        .checked_add(payout)
        .ok_or(RaffleError::Overflow)?;
    **raffle_info.try_borrow_mut_lamports()? = remaining;
    **winner_info.try_borrow_mut_lamports()? = credited;

    msg!("Winner: {}", winner);

    emit!(WinnerPicked { winner, payout });

    Ok(())
}
