use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Invalid event parameters.")]
    InvalidParameters,
    #[msg("Operation not allowed in the current event or bid state.")]
    InvalidStateTransition,
    #[msg("Signer is not allowed to perform this operation.")]
    Unauthorized,
    #[msg("Auction is not active.")]
    AuctionNotActive,
    #[msg("Auction has not started yet.")]
    AuctionNotStarted,
    #[msg("Auction has already ended.")]
    AuctionEnded,
    #[msg("Auction end time has not been reached.")]
    AuctionNotEnded,
    #[msg("Bid must be exactly equal to the current auction price.")]
    BidNotAtCurrentPrice,
    #[msg("Close price must lie between the end price and the start price.")]
    InvalidClosePrice,
    #[msg("All tickets for this event have been awarded.")]
    SoldOut,
    #[msg("Bid is not eligible for a ticket.")]
    BidNotEligible,
    #[msg("Bid does not belong to this event.")]
    BidEventMismatch,
    #[msg("Asset id is not the next unassigned ticket asset.")]
    InvalidAsset,
    #[msg("Bid has already been refunded.")]
    AlreadyRefunded,
    #[msg("Escrow vault cannot cover this payout.")]
    EscrowShortfall,
    #[msg("Math overflow")]
    MathOverflow,
}
