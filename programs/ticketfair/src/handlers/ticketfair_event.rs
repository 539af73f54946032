//! Ticketfair event instruction handlers

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{AuctionFinalized, EventActivated, EventCreated};
use crate::handlers::shared::transfer_lamports;
use crate::state::{CreateEventArgs, Event, User};
use crate::utils::escrow_top_up;

#[derive(Accounts)]
#[instruction(args: CreateEventArgs)]
pub struct CreateEventAccountConstraints<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,
    /// Supplies the event id, so it must come before the event account
    #[account(
        init_if_needed,
        payer = organizer,
        space = User::SPACE,
        seeds = [USER_SEED, organizer.key().as_ref()],
        bump
    )]
    pub organizer_profile: Account<'info, User>,
    #[account(
        init,
        payer = organizer,
        space = Event::space(args.ticket_supply),
        seeds = [EVENT_SEED, organizer.key().as_ref(), &organizer_profile.events_created.to_le_bytes()],
        bump
    )]
    pub event: Account<'info, Event>,
    /// Holds escrowed bid lamports for the event
    #[account(mut, seeds = [ESCROW_SEED, event.key().as_ref()], bump)]
    pub escrow: SystemAccount<'info>,
    /// Bubblegum Merkle Tree for the ticket cNFTs (must be created before event)
    /// CHECK: Only recorded for the off-chain minter
    pub merkle_tree: UncheckedAccount<'info>,
    pub system_program: Program<'info, System>,
}

pub fn create_event(
    context: Context<CreateEventAccountConstraints>,
    args: CreateEventArgs,
) -> Result<()> {
    let organizer = context.accounts.organizer.key();
    let event_key = context.accounts.event.key();

    let profile = &mut context.accounts.organizer_profile;
    profile.ensure_initialized(organizer, context.bumps.organizer_profile)?;
    let event_id = profile.record_event_created()?;

    let event = Event::new(
        event_key,
        organizer,
        event_id,
        context.accounts.merkle_tree.key(),
        context.bumps.event,
        args,
    )?;

    // Keep the vault rent exempt so settlements can drain it down to bids only
    let rent_floor = Rent::get()?.minimum_balance(0);
    let shortfall = escrow_top_up(rent_floor, context.accounts.escrow.lamports());
    transfer_lamports(
        &context.accounts.organizer.to_account_info(),
        &context.accounts.escrow.to_account_info(),
        shortfall,
        &context.accounts.system_program,
        None,
    )?;

    msg!(
        "Created event #{} with {} tickets, price {} -> {} over [{}, {})",
        event_id,
        event.ticket_supply,
        event.start_price,
        event.end_price,
        event.auction_start_time,
        event.auction_end_time
    );
    emit!(EventCreated {
        event: event_key,
        organizer,
        event_id,
        ticket_supply: event.ticket_supply,
        start_price: event.start_price,
        end_price: event.end_price,
        auction_start_time: event.auction_start_time,
        auction_end_time: event.auction_end_time,
    });

    context.accounts.event.set_inner(event);
    Ok(())
}

#[derive(Accounts)]
pub struct ActivateEventAccountConstraints<'info> {
    pub organizer: Signer<'info>,
    #[account(
        mut,
        seeds = [EVENT_SEED, event.organizer.as_ref(), &event.event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
}

pub fn activate_event(context: Context<ActivateEventAccountConstraints>) -> Result<()> {
    let event_key = context.accounts.event.key();
    context
        .accounts
        .event
        .activate(context.accounts.organizer.key())?;

    msg!("Event {} is now accepting bids", event_key);
    emit!(EventActivated { event: event_key });
    Ok(())
}

#[derive(Accounts)]
pub struct FinalizeEventAccountConstraints<'info> {
    pub organizer: Signer<'info>,
    #[account(
        mut,
        seeds = [EVENT_SEED, event.organizer.as_ref(), &event.event_id.to_le_bytes()],
        bump = event.bump,
    )]
    pub event: Account<'info, Event>,
}

pub fn finalize_auction(
    context: Context<FinalizeEventAccountConstraints>,
    close_price: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let event_key = context.accounts.event.key();
    context
        .accounts
        .event
        .finalize(context.accounts.organizer.key(), close_price, now)?;

    msg!("Auction {} finalized at close price {}", event_key, close_price);
    emit!(AuctionFinalized {
        event: event_key,
        close_price,
        finalized_at: now,
    });
    Ok(())
}
