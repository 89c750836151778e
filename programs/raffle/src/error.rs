use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Payment is below the entrance fee")]
    InsufficientPayment,

    #[msg("Raffle is not open for entries")]
    NotOpen,

    #[msg("Player list is at capacity for this round")]
    RaffleFull,

    #[msg("Upkeep conditions are not met")]
    UpkeepNotNeeded,

    #[msg("Request does not match the pending draw")]
    UnknownRequest,

    #[msg("Prize transfer to the winner failed")]
    PayoutFailed,

    #[msg("Draw interval must be positive")]
    InvalidDrawInterval,

    #[msg("Randomness account data is malformed")]
    InvalidRandomnessAccount,

    #[msg("Randomness was already revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness has not resolved yet")]
    RandomnessNotResolved,

    #[msg("Winner account does not match the drawn player")]
    WinnerAccountMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,
}
