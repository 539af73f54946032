//! Ticketfair bid instruction handlers (Dutch Auction)

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{BidPlaced, BidRefunded, TicketAwarded};
use crate::handlers::shared::transfer_lamports;
use crate::state::{Bid, BidStatus, Event, Ticket, User};
use crate::utils::escrow_withdraw;

#[derive(Accounts)]
pub struct PlaceBidAccountConstraints<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,
    /// Read-only, so bids from different bidders never contend on it
    #[account(
        seeds = [EVENT_SEED, event.organizer.as_ref(), &event.event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
    /// The PDA that will hold escrowed funds for the event
    #[account(mut, seeds = [ESCROW_SEED, event.key().as_ref()], bump)]
    pub escrow: SystemAccount<'info>,
    #[account(
        init,
        payer = bidder,
        space = Bid::SPACE,
        seeds = [BID_SEED, event.key().as_ref(), bidder.key().as_ref()],
        bump
    )]
    pub bid: Account<'info, Bid>,
    pub system_program: Program<'info, System>,
}

pub fn place_bid(context: Context<PlaceBidAccountConstraints>, amount: u64) -> Result<()> {
    // Bids are priced against the cluster clock, not the client's
    let now = Clock::get()?.unix_timestamp;
    let event_key = context.accounts.event.key();
    let bidder = context.accounts.bidder.key();

    if let Err(error) = context.accounts.event.admit_bid(amount, now) {
        msg!(
            "Bid of {} rejected at {}: current price is {:?}",
            amount,
            now,
            context.accounts.event.current_price(now).ok()
        );
        return Err(error);
    }

    transfer_lamports(
        &context.accounts.bidder.to_account_info(),
        &context.accounts.escrow.to_account_info(),
        amount,
        &context.accounts.system_program,
        None,
    )?;

    context
        .accounts
        .bid
        .set_inner(Bid::new(bidder, event_key, amount, context.bumps.bid));

    emit!(BidPlaced {
        event: event_key,
        bidder,
        amount,
        placed_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AwardTicketAccountConstraints<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,
    #[account(
        mut,
        seeds = [EVENT_SEED, event.organizer.as_ref(), &event.event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
    #[account(mut, seeds = [ESCROW_SEED, event.key().as_ref()], bump)]
    pub escrow: SystemAccount<'info>,
    #[account(
        mut,
        seeds = [BID_SEED, event.key().as_ref(), bid.bidder.as_ref()],
        bump = bid.bump,
    )]
    pub bid: Account<'info, Bid>,
    #[account(
        init,
        payer = organizer,
        space = Ticket::SPACE,
        seeds = [TICKET_SEED, event.key().as_ref(), bid.bidder.as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,
    #[account(
        init_if_needed,
        payer = organizer,
        space = User::SPACE,
        seeds = [USER_SEED, bid.bidder.as_ref()],
        bump
    )]
    pub buyer_profile: Account<'info, User>,
    pub system_program: Program<'info, System>,
}

pub fn award_ticket(
    context: Context<AwardTicketAccountConstraints>,
    asset_id: Pubkey,
) -> Result<()> {
    let event_key = context.accounts.event.key();
    let organizer = context.accounts.organizer.key();

    let accounts = &mut *context.accounts;
    let award = accounts.event.award_ticket(
        event_key,
        organizer,
        &mut accounts.bid,
        asset_id,
        context.bumps.ticket,
    )?;

    // The close price is settled now; any surplus waits in escrow for refund_bid
    let rent_floor = Rent::get()?.minimum_balance(0);
    escrow_withdraw(accounts.escrow.lamports(), award.organizer_payout, rent_floor)?;
    let escrow_bump = [context.bumps.escrow];
    let escrow_seeds: &[&[u8]] = &[ESCROW_SEED, event_key.as_ref(), &escrow_bump];
    transfer_lamports(
        &accounts.escrow.to_account_info(),
        &accounts.organizer.to_account_info(),
        award.organizer_payout,
        &accounts.system_program,
        Some(escrow_seeds),
    )?;

    let buyer = award.ticket.buyer;
    accounts
        .buyer_profile
        .ensure_initialized(buyer, context.bumps.buyer_profile)?;
    accounts.buyer_profile.record_ticket_won()?;
    accounts.ticket.set_inner(award.ticket);

    msg!(
        "Awarded ticket {}/{} to {}",
        accounts.event.tickets_awarded,
        accounts.event.ticket_supply,
        buyer
    );
    emit!(TicketAwarded {
        event: event_key,
        buyer,
        asset_id,
        organizer_payout: award.organizer_payout,
        tickets_awarded: accounts.event.tickets_awarded,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RefundBidAccountConstraints<'info> {
    #[account(mut)]
    pub bidder: Signer<'info>,
    #[account(
        seeds = [EVENT_SEED, event.organizer.as_ref(), &event.event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
    #[account(mut, seeds = [ESCROW_SEED, event.key().as_ref()], bump)]
    pub escrow: SystemAccount<'info>,
    #[account(
        mut,
        seeds = [BID_SEED, event.key().as_ref(), bidder.key().as_ref()],
        bump = bid.bump,
    )]
    pub bid: Account<'info, Bid>,
    pub system_program: Program<'info, System>,
}

pub fn refund_bid(context: Context<RefundBidAccountConstraints>) -> Result<()> {
    let event_key = context.accounts.event.key();
    let bidder = context.accounts.bidder.key();

    let accounts = &mut *context.accounts;
    let refund_amount = accounts.bid.refund(bidder, event_key, &accounts.event)?;
    let rent_floor = Rent::get()?.minimum_balance(0);
    escrow_withdraw(accounts.escrow.lamports(), refund_amount, rent_floor)?;

    let escrow_bump = [context.bumps.escrow];
    let escrow_seeds: &[&[u8]] = &[ESCROW_SEED, event_key.as_ref(), &escrow_bump];
    transfer_lamports(
        &accounts.escrow.to_account_info(),
        &accounts.bidder.to_account_info(),
        refund_amount,
        &accounts.system_program,
        Some(escrow_seeds),
    )?;

    let partial = accounts.bid.status == BidStatus::TicketAwarded;
    msg!("Refunded {} lamports to {}", refund_amount, bidder);
    emit!(BidRefunded {
        event: event_key,
        bidder,
        refunded: refund_amount,
        partial,
    });
    Ok(())
}
