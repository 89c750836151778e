use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod events;
mod instructions;
pub mod state;

declare_id!("3WXVuJyUiWvL9FgQ4KxyhDLVKrR4V71Tgh6ctoWVEYV4");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        entrance_fee: u64,
        draw_interval: i64,
    ) -> Result<()> {
        process_initialize_raffle(ctx, entrance_fee, draw_interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn resolve_draw(ctx: Context<ResolveDraw>) -> Result<()> {
        process_resolve_draw(ctx)
    }
}
