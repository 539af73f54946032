#![allow(unexpected_cfgs)]
// See https://solana.stackexchange.com/questions/17777/unexpected-cfg-condition-value-solana)

pub mod constants;
pub mod error;
pub mod events;
pub mod handlers;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;
use handlers::*;
use state::CreateEventArgs;

declare_id!("8jR5GeNzeweq35Uo84kGP3v1NcBaZWH5u62k7PxN4T2y");

#[program]
pub mod ticketfair {
    use super::*;

    /// Create a new Ticketfair user profile.
    pub fn create_user(context: Context<CreateUserAccountConstraints>) -> Result<()> {
        handlers::ticketfair_user::create_user(context)
    }

    /// Create a new Ticketfair event in the Created state.
    pub fn create_event(
        context: Context<CreateEventAccountConstraints>,
        args: CreateEventArgs,
    ) -> Result<()> {
        handlers::ticketfair_event::create_event(context, args)
    }

    /// Open a Created event for bidding.
    pub fn activate_event(context: Context<ActivateEventAccountConstraints>) -> Result<()> {
        handlers::ticketfair_event::activate_event(context)
    }

    /// Escrow a bid at exactly the current Dutch auction price.
    pub fn place_bid(context: Context<PlaceBidAccountConstraints>, amount: u64) -> Result<()> {
        handlers::ticketfair_bid::place_bid(context, amount)
    }

    /// Finalize an ended auction and set the closing price.
    pub fn finalize_auction(
        context: Context<FinalizeEventAccountConstraints>,
        close_price: u64,
    ) -> Result<()> {
        handlers::ticketfair_event::finalize_auction(context, close_price)
    }

    /// Award the next ticket asset to a pending bid at or above the close price.
    pub fn award_ticket(
        context: Context<AwardTicketAccountConstraints>,
        asset_id: Pubkey,
    ) -> Result<()> {
        handlers::ticketfair_bid::award_ticket(context, asset_id)
    }

    /// Refund a losing bid in full, or the surplus of a winning one.
    pub fn refund_bid(context: Context<RefundBidAccountConstraints>) -> Result<()> {
        handlers::ticketfair_bid::refund_bid(context)
    }
}
