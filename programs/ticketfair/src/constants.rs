// Constants for the Ticketfair Dutch auction program

// PDA seeds
pub const USER_SEED: &[u8] = b"user";
pub const EVENT_SEED: &[u8] = b"event";
pub const ESCROW_SEED: &[u8] = b"escrow";
pub const BID_SEED: &[u8] = b"bid";
pub const TICKET_SEED: &[u8] = b"ticket";

/// Domain separator for ticket asset identifiers.
pub const ASSET_ID_DOMAIN: &[u8] = b"ticket_asset";

// Event parameter limits
pub const MAX_METADATA_URL_LEN: usize = 200;
/// Keeps a full Event account under the 10 KiB CPI allocation limit.
pub const MAX_TICKETS_PER_EVENT: u32 = 300;
