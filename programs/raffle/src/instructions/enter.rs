use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The wallet entering the raffle and paying the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Raffle state account tracking the current round.
    #[account(
        mut,
        seeds = [b"raffle".as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program for the fee transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round for `amount` lamports.
///
/// The full `amount` is moved into the pot; anything above the entrance fee
/// is kept, not refunded. Entering twice buys two independent slots.
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    let raffle = &mut ctx.accounts.raffle;

    raffle.record_entry(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RaffleEntered {
        player,
        amount,
        total_players: raffle.player_count(),
    });

    Ok(())
}
