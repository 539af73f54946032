use anchor_lang::prelude::*;

#[event]
pub struct EventCreated {
    pub event: Pubkey,
    pub organizer: Pubkey,
    pub event_id: u64,
    pub ticket_supply: u32,
    pub start_price: u64,
    pub end_price: u64,
    pub auction_start_time: i64,
    pub auction_end_time: i64,
}

#[event]
pub struct EventActivated {
    pub event: Pubkey,
}

#[event]
pub struct BidPlaced {
    pub event: Pubkey,
    pub bidder: Pubkey,
    pub amount: u64,
    pub placed_at: i64,
}

#[event]
pub struct AuctionFinalized {
    pub event: Pubkey,
    pub close_price: u64,
    pub finalized_at: i64,
}

#[event]
pub struct TicketAwarded {
    pub event: Pubkey,
    pub buyer: Pubkey,
    pub asset_id: Pubkey,
    pub organizer_payout: u64,
    pub tickets_awarded: u32,
}

#[event]
pub struct BidRefunded {
    pub event: Pubkey,
    pub bidder: Pubkey,
    pub refunded: u64,
    /// True when this returned the surplus of an awarded bid.
    pub partial: bool,
}
