//! Ticketfair Ticket account definition

use anchor_lang::prelude::*;

#[account]
#[derive(Debug)]
pub struct Ticket {
    pub event: Pubkey,
    pub buyer: Pubkey,
    /// The cNFT asset id assigned to this ticket
    pub asset_id: Pubkey,
    pub bump: u8,
}

impl Ticket {
    pub const SPACE: usize = 8 + 32 + 32 + 32 + 1;
}
