//! Ticketfair User account definition

use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::utils::checked_add_u64;

#[account]
#[derive(Debug)]
pub struct User {
    pub authority: Pubkey,
    /// Also the id of the next event this user organizes
    pub events_created: u64,
    pub tickets_won: u64,
    pub bump: u8,
}

impl User {
    pub const SPACE: usize = 8 + 32 + 8 + 8 + 1;

    /// Bind a freshly allocated profile to `authority`; a no-op for an existing one.
    pub fn ensure_initialized(&mut self, authority: Pubkey, bump: u8) -> Result<()> {
        if self.authority == Pubkey::default() {
            self.authority = authority;
            self.events_created = 0;
            self.tickets_won = 0;
            self.bump = bump;
        }
        require_keys_eq!(self.authority, authority, ErrorCode::Unauthorized);
        Ok(())
    }

    pub fn record_event_created(&mut self) -> Result<u64> {
        let event_id = self.events_created;
        self.events_created = checked_add_u64(self.events_created, 1)?;
        Ok(event_id)
    }

    pub fn record_ticket_won(&mut self) -> Result<()> {
        self.tickets_won = checked_add_u64(self.tickets_won, 1)?;
        Ok(())
    }
}
