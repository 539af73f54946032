//! Ticketfair Bid account definition (Dutch Auction)

use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::{Event, EventStatus};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidStatus {
    Pending,
    TicketAwarded,
    Refunded,
}

#[account]
#[derive(Debug)]
pub struct Bid {
    pub bidder: Pubkey,
    pub event: Pubkey,
    /// Lamports escrowed at placement
    pub amount: u64,
    pub status: BidStatus,
    /// Set once the surplus of an awarded bid has been returned
    pub surplus_refunded: bool,
    pub bump: u8,
}

impl Bid {
    pub const SPACE: usize = 8 + 32 + 32 + 8 + 1 + 1 + 1;

    pub fn new(bidder: Pubkey, event: Pubkey, amount: u64, bump: u8) -> Self {
        Self {
            bidder,
            event,
            amount,
            status: BidStatus::Pending,
            surplus_refunded: false,
            bump,
        }
    }

    /// Lamports owed back to the bidder once `event` is finalized.
    ///
    /// A pending bid lost the auction and is refunded in full. An awarded bid gets
    /// back what it paid above the close price, exactly once, and stays awarded.
    pub fn refund(&mut self, caller: Pubkey, event_key: Pubkey, event: &Event) -> Result<u64> {
        require_keys_eq!(caller, self.bidder, ErrorCode::Unauthorized);
        require_keys_eq!(self.event, event_key, ErrorCode::BidEventMismatch);
        require!(
            event.status == EventStatus::Finalized,
            ErrorCode::InvalidStateTransition
        );

        match self.status {
            BidStatus::Refunded => err!(ErrorCode::AlreadyRefunded),
            BidStatus::Pending => {
                self.status = BidStatus::Refunded;
                Ok(self.amount)
            }
            BidStatus::TicketAwarded => {
                require!(!self.surplus_refunded, ErrorCode::AlreadyRefunded);
                let surplus = self
                    .amount
                    .checked_sub(event.auction_close_price)
                    .ok_or(ErrorCode::MathOverflow)?;
                self.surplus_refunded = true;
                Ok(surplus)
            }
        }
    }
}
