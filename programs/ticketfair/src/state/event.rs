//! Ticketfair Event account definition (Dutch Auction)

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;
use crate::state::{Bid, BidStatus, Ticket};
use crate::utils::{checked_add_u32, derive_asset_id, dutch_auction_price};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Created,
    Active,
    Finalized,
}

/// Organizer-supplied parameters for a new event.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateEventArgs {
    pub metadata_url: String,
    pub ticket_supply: u32,
    pub start_price: u64,
    pub end_price: u64,
    pub auction_start_time: i64,
    pub auction_end_time: i64,
}

impl CreateEventArgs {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.ticket_supply > 0 && self.ticket_supply <= MAX_TICKETS_PER_EVENT,
            ErrorCode::InvalidParameters
        );
        require!(self.start_price >= self.end_price, ErrorCode::InvalidParameters);
        require!(
            self.auction_end_time > self.auction_start_time,
            ErrorCode::InvalidParameters
        );
        require!(
            self.metadata_url.len() <= MAX_METADATA_URL_LEN,
            ErrorCode::InvalidParameters
        );
        Ok(())
    }
}

/// Result of awarding a ticket: the new ticket record and the close price owed
/// to the organizer out of escrow.
#[derive(Clone, Debug)]
pub struct TicketAward {
    pub ticket: Ticket,
    pub organizer_payout: u64,
}

#[account]
#[derive(Debug)]
pub struct Event {
    /// The event organizer
    pub organizer: Pubkey,
    /// Sequence number of this event among the organizer's events
    pub event_id: u64,
    /// Off-chain metadata reference (e.g., Walrus blob URL)
    pub metadata_url: String,
    /// Total number of tickets available
    pub ticket_supply: u32,
    /// Number of tickets awarded so far
    pub tickets_awarded: u32,
    /// Starting price for Dutch auction (in lamports)
    pub start_price: u64,
    /// Ending price for Dutch auction (in lamports)
    pub end_price: u64,
    /// Auction start time (Unix timestamp)
    pub auction_start_time: i64,
    /// Auction end time (Unix timestamp)
    pub auction_end_time: i64,
    /// Settlement price, 0 until the auction is finalized
    pub auction_close_price: u64,
    pub status: EventStatus,
    /// PDA bump
    pub bump: u8,
    /// Bubblegum Merkle Tree the ticket cNFTs are minted into
    pub merkle_tree: Pubkey,
    /// Ticket asset ids, handed out in order as tickets are awarded
    pub asset_ids: Vec<Pubkey>,
}

impl Event {
    /// Account size (discriminator included) for an event with `ticket_supply` tickets.
    pub fn space(ticket_supply: u32) -> usize {
        8 + // discriminator
        32 + // organizer
        8 + // event_id
        4 + MAX_METADATA_URL_LEN + // metadata_url
        4 + // ticket_supply
        4 + // tickets_awarded
        8 + // start_price
        8 + // end_price
        8 + // auction_start_time
        8 + // auction_end_time
        8 + // auction_close_price
        1 + // status
        1 + // bump
        32 + // merkle_tree
        4 + 32 * ticket_supply.min(MAX_TICKETS_PER_EVENT) as usize // asset_ids
    }

    pub fn new(
        event_key: Pubkey,
        organizer: Pubkey,
        event_id: u64,
        merkle_tree: Pubkey,
        bump: u8,
        args: CreateEventArgs,
    ) -> Result<Self> {
        args.validate()?;

        let asset_ids = (0..args.ticket_supply)
            .map(|index| derive_asset_id(&event_key, index))
            .collect();

        Ok(Self {
            organizer,
            event_id,
            metadata_url: args.metadata_url,
            ticket_supply: args.ticket_supply,
            tickets_awarded: 0,
            start_price: args.start_price,
            end_price: args.end_price,
            auction_start_time: args.auction_start_time,
            auction_end_time: args.auction_end_time,
            auction_close_price: 0,
            status: EventStatus::Created,
            bump,
            merkle_tree,
            asset_ids,
        })
    }

    /// Calculate the current auction price based on the event parameters and the given timestamp.
    pub fn current_price(&self, now: i64) -> Result<u64> {
        dutch_auction_price(
            self.start_price,
            self.end_price,
            self.auction_start_time,
            self.auction_end_time,
            now,
        )
    }

    pub fn tickets_remaining(&self) -> u32 {
        self.ticket_supply.saturating_sub(self.tickets_awarded)
    }

    /// Asset id the next award must carry, if any remain.
    pub fn next_asset_id(&self) -> Option<Pubkey> {
        self.asset_ids.get(self.tickets_awarded as usize).copied()
    }

    pub fn activate(&mut self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.organizer, ErrorCode::Unauthorized);
        require!(
            self.status == EventStatus::Created,
            ErrorCode::InvalidStateTransition
        );
        self.status = EventStatus::Active;
        Ok(())
    }

    /// Check that a bid of `amount` is admissible at `now`.
    pub fn admit_bid(&self, amount: u64, now: i64) -> Result<()> {
        require!(
            self.status == EventStatus::Active,
            ErrorCode::AuctionNotActive
        );
        require!(now >= self.auction_start_time, ErrorCode::AuctionNotStarted);
        require!(now < self.auction_end_time, ErrorCode::AuctionEnded);
        require!(amount > 0, ErrorCode::InvalidParameters);

        let current_price = self.current_price(now)?;
        require!(amount == current_price, ErrorCode::BidNotAtCurrentPrice);
        Ok(())
    }

    pub fn finalize(&mut self, caller: Pubkey, close_price: u64, now: i64) -> Result<()> {
        require_keys_eq!(caller, self.organizer, ErrorCode::Unauthorized);
        require!(
            self.status == EventStatus::Active,
            ErrorCode::InvalidStateTransition
        );
        require!(now >= self.auction_end_time, ErrorCode::AuctionNotEnded);
        require!(
            close_price >= self.end_price && close_price <= self.start_price,
            ErrorCode::InvalidClosePrice
        );

        self.auction_close_price = close_price;
        self.status = EventStatus::Finalized;
        Ok(())
    }

    /// Award the next ticket to `bid`. Nothing is mutated unless every check passes.
    ///
    /// Supply is checked before the bid itself, so a sold-out event reports
    /// `SoldOut` for every bid, whatever its status.
    pub fn award_ticket(
        &mut self,
        event_key: Pubkey,
        caller: Pubkey,
        bid: &mut Bid,
        asset_id: Pubkey,
        ticket_bump: u8,
    ) -> Result<TicketAward> {
        require_keys_eq!(caller, self.organizer, ErrorCode::Unauthorized);
        require!(
            self.status == EventStatus::Finalized,
            ErrorCode::InvalidStateTransition
        );
        require_keys_eq!(bid.event, event_key, ErrorCode::BidEventMismatch);
        require!(
            self.tickets_awarded < self.ticket_supply,
            ErrorCode::SoldOut
        );
        require!(
            bid.status == BidStatus::Pending && bid.amount >= self.auction_close_price,
            ErrorCode::BidNotEligible
        );
        require!(
            self.next_asset_id() == Some(asset_id),
            ErrorCode::InvalidAsset
        );

        self.tickets_awarded = checked_add_u32(self.tickets_awarded, 1)?;
        bid.status = BidStatus::TicketAwarded;

        Ok(TicketAward {
            ticket: Ticket {
                event: event_key,
                buyer: bid.bidder,
                asset_id,
                bump: ticket_bump,
            },
            organizer_payout: self.auction_close_price,
        })
    }
}
