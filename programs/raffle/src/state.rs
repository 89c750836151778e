use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Hard cap on entries per round. The raffle account is sized for this many
/// players at initialization; entries past the cap are rejected.
pub const MAX_PLAYERS: usize = 100;

/// Lifecycle of a raffle round. There is no third state: a round is either
/// accepting entries or waiting on a committed randomness reveal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum RafflePhase {
    Open,
    Drawing,
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Minimum payment (in lamports) required per entry.
    /// Set at initialization, immutable afterwards.
    pub entrance_fee: u64,

    /// Seconds that must elapse since `last_draw_timestamp` before a draw
    /// becomes due. Set at initialization, immutable afterwards.
    pub draw_interval: i64,

    /// Every accepted entry for the current round, in entry order. The same
    /// wallet may appear more than once; each slot is a separate chance to
    /// win. Cleared when a draw settles.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// UNIX timestamp of initialization or of the last settled draw.
    pub last_draw_timestamp: i64,

    /// Whether the round is accepting entries or waiting on the oracle.
    pub phase: RafflePhase,

    /// Winner of the most recently settled draw. `None` until the first
    /// draw settles.
    pub recent_winner: Option<Pubkey>,

    /// Address of the Switchboard randomness account committed for the
    /// in-flight draw. `Some` exactly while `phase` is `Drawing`.
    pub pending_request: Option<Pubkey>,

    /// Lamports collected from entries since the last payout. The account
    /// additionally holds its rent-exempt minimum, which is never paid out.
    pub prize_pot: u64,
}

impl Raffle {
    /// Records one entry. The payment itself is moved by the instruction
    /// handler; this validates and mutates the round state only.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount >= self.entrance_fee, RaffleError::InsufficientPayment);
        require!(self.phase == RafflePhase::Open, RaffleError::NotOpen);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.players.push(player);
        self.prize_pot = self
            .prize_pot
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;

        Ok(())
    }

    /// Whether a draw is due at `now`. All four conditions are necessary;
    /// the result is derived fresh on every call and never cached.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        self.phase == RafflePhase::Open
            && now.saturating_sub(self.last_draw_timestamp) >= self.draw_interval
            && !self.players.is_empty()
            && self.prize_pot > 0
    }

    /// Moves the round into `Drawing`, recording `request` as the one
    /// outstanding randomness request. Re-derives the upkeep predicate
    /// itself; a caller's claim that upkeep is due is never trusted.
    pub fn begin_draw(&mut self, request: Pubkey, now: i64) -> Result<()> {
        require!(self.upkeep_needed(now), RaffleError::UpkeepNotNeeded);

        self.phase = RafflePhase::Drawing;
        self.pending_request = Some(request);

        Ok(())
    }

    /// Settles the in-flight draw with the revealed `random_word`. Fails if
    /// `request` is not the single outstanding one, which covers replayed,
    /// stale, and forged reveals as well as rounds with no draw in flight.
    ///
    /// Winner selection is `random_word % players.len()`. The modulo bias
    /// against a 64-bit word is negligible for the supported player counts.
    ///
    /// Returns the winner and the payout due; the caller moves the lamports
    /// within the same instruction so the whole settlement is atomic.
    pub fn settle_draw(
        &mut self,
        request: Pubkey,
        random_word: u64,
        now: i64,
    ) -> Result<(Pubkey, u64)> {
        if self.phase != RafflePhase::Drawing || self.pending_request != Some(request) {
            return err!(RaffleError::UnknownRequest);
        }

        let winner_index = (random_word % self.players.len() as u64) as usize;
        let winner = self.players[winner_index];
        let payout = self.prize_pot;

        self.recent_winner = Some(winner);
        self.players.clear();
        self.phase = RafflePhase::Open;
        self.pending_request = None;
        self.last_draw_timestamp = now;
        self.prize_pot = 0;

        Ok((winner, payout))
    }

    pub fn player(&self, index: usize) -> Option<Pubkey> {
        self.players.get(index).copied()
    }

    pub fn player_count(&self) -> u64 {
        self.players.len() as u64
    }
}
