use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::constants::ASSET_ID_DOMAIN;
use crate::error::ErrorCode;

/// Linear Dutch-auction price at `now`.
///
/// The price holds at `start_price` up to `auction_start_time`, falls linearly and
/// holds at `end_price` from `auction_end_time` on. The reduction is computed in
/// 128-bit arithmetic and truncated, so clients predicting a bid amount must use
/// this exact function with the same `now` the program will observe.
pub fn dutch_auction_price(
    start_price: u64,
    end_price: u64,
    auction_start_time: i64,
    auction_end_time: i64,
    now: i64,
) -> Result<u64> {
    if now <= auction_start_time {
        return Ok(start_price);
    }
    if now >= auction_end_time {
        return Ok(end_price);
    }

    let elapsed = u128::try_from(i128::from(now) - i128::from(auction_start_time))
        .map_err(|_| error!(ErrorCode::MathOverflow))?;
    let duration = u128::try_from(i128::from(auction_end_time) - i128::from(auction_start_time))
        .map_err(|_| error!(ErrorCode::MathOverflow))?;
    let price_diff = start_price
        .checked_sub(end_price)
        .ok_or(ErrorCode::MathOverflow)?;

    let reduction = (price_diff as u128)
        .checked_mul(elapsed)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(duration)
        .ok_or(ErrorCode::MathOverflow)?;
    let reduction = u64::try_from(reduction).map_err(|_| error!(ErrorCode::MathOverflow))?;

    start_price
        .checked_sub(reduction)
        .ok_or(ErrorCode::MathOverflow.into())
}

pub fn checked_add_u32(a: u32, b: u32) -> Result<u32> {
    a.checked_add(b).ok_or(ErrorCode::MathOverflow.into())
}

pub fn checked_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(ErrorCode::MathOverflow.into())
}

/// Lamports needed to bring the escrow vault up to `rent_floor`.
pub fn escrow_top_up(rent_floor: u64, vault_balance: u64) -> u64 {
    rent_floor.saturating_sub(vault_balance)
}

/// Vault balance left after paying out `amount`, which must not dip below `rent_floor`.
pub fn escrow_withdraw(vault_balance: u64, amount: u64, rent_floor: u64) -> Result<u64> {
    let remaining = vault_balance
        .checked_sub(amount)
        .ok_or(ErrorCode::EscrowShortfall)?;
    require!(remaining >= rent_floor, ErrorCode::EscrowShortfall);
    Ok(remaining)
}

/// Identifier of the `index`-th ticket asset of an event.
pub fn derive_asset_id(event: &Pubkey, index: u32) -> Pubkey {
    let digest = hashv(&[ASSET_ID_DOMAIN, event.as_ref(), &index.to_le_bytes()]);
    Pubkey::new_from_array(digest.to_bytes())
}
