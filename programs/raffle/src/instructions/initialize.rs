use anchor_lang::prelude::*;

use crate::error::RaffleError;
use crate::state::{Raffle, RafflePhase};

/// Accounts required to create the raffle.
/// This sets up the single raffle account on-chain with its fixed parameters.
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Raffle state account that stores the round and its entries.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [b"raffle".as_ref()],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the raffle with its entrance fee and draw interval. Both are
/// immutable for the life of the account. The first draw becomes due one
/// full interval after initialization.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeRaffle accounts
/// * `entrance_fee` - Minimum payment per entry, in lamports
/// * `draw_interval` - Seconds between draws; must be positive
pub fn process_initialize_raffle(
    ctx: Context<InitializeRaffle>,
    entrance_fee: u64,
    draw_interval: i64,
) -> Result<()> {
    require!(draw_interval > 0, RaffleError::InvalidDrawInterval);

    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.entrance_fee = entrance_fee;
    raffle.draw_interval = draw_interval;
    raffle.players = Vec::new();
    raffle.last_draw_timestamp = clock.unix_timestamp;
    raffle.phase = RafflePhase::Open;
    raffle.recent_winner = None;
    raffle.pending_request = None;
    raffle.prize_pot = 0;

    Ok(())
}
