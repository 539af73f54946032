//! Ticketfair user instruction handlers

use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::state::User;

#[derive(Accounts)]
pub struct CreateUserAccountConstraints<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    /// Also created on demand by create_event and award_ticket
    #[account(
        init_if_needed,
        payer = authority,
        space = User::SPACE,
        seeds = [USER_SEED, authority.key().as_ref()],
        bump
    )]
    pub user: Account<'info, User>,
    pub system_program: Program<'info, System>,
}

pub fn create_user(context: Context<CreateUserAccountConstraints>) -> Result<()> {
    let authority = context.accounts.authority.key();
    context
        .accounts
        .user
        .ensure_initialized(authority, context.bumps.user)?;
    msg!("Created Ticketfair user profile for {}", authority);
    Ok(())
}
