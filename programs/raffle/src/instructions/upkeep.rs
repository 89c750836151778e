use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::error::RaffleError;
use crate::events::DrawRequested;
use crate::state::Raffle;

/// Accounts for the read-only upkeep probe.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    /// The raffle being probed. Never mutated.
    #[account(
        seeds = [b"raffle".as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Accounts required to start a draw. Callable by anyone; the handler
/// re-derives the upkeep predicate and never trusts the caller.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The automation caller. Identity is not checked.
    pub caller: Signer<'info>,

    /// The raffle state account.
    #[account(
        mut,
        seeds = [b"raffle".as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Fresh randomness account from Switchboard, committed as this draw's
    /// request.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Reports whether a draw is currently due. Anyone may call this at any
/// time; it reads the clock and the raffle and mutates nothing.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    let needed = ctx.accounts.raffle.upkeep_needed(clock.unix_timestamp);

    msg!("Upkeep needed: {}", needed);

    Ok(needed)
}

/// Starts a draw once upkeep is due.
///
/// The predicate from `check_upkeep` is evaluated again here, inside the
/// mutating instruction. On success the raffle moves to `Drawing` and the
/// supplied randomness account becomes the single pending request; until it
/// resolves, the predicate stays false and no second draw can start.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    if !raffle.upkeep_needed(clock.unix_timestamp) {
        msg!("Pot: {}", raffle.prize_pot);
        msg!("Players: {}", raffle.player_count());
        msg!("Phase: {:?}", raffle.phase);
        return Err(RaffleError::UpkeepNotNeeded.into());
    }

    // The commitment must target the previous slot: anything older has
    // already revealed, and a revealed value must never be accepted as a
    // pending request.
    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    if randomness_data.seed_slot != clock.slot - 1 {
        return Err(RaffleError::RandomnessAlreadyRevealed.into());
    }

    let request = ctx.accounts.randomness_account_data.key();
    raffle.begin_draw(request, clock.unix_timestamp)?;

    emit!(DrawRequested {
        request,
        players: raffle.player_count(),
        pot: raffle.prize_pot,
    });

    Ok(())
}
