use anchor_lang::prelude::*;

#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub total_players: u64,
}

#[event]
pub struct DrawRequested {
    pub request: Pubkey,
    pub players: u64,
    pub pot: u64,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub payout: u64,
}
