//! Error codes returned by every fallible DecaStake entry point.
//!
//! # Code ranges
//! | Range  | Purpose                          |
//! |--------|----------------------------------|
//! | 1 – 2  | Lifecycle / initialisation       |
//! | 3      | Authorisation                    |
//! | 4 – 9  | Pool and position preconditions  |
//! | 10     | Collaborator token failures      |
//! | 11 – 13 | Arithmetic, ownership and registry state |
//!
//! Discriminants are part of the public interface and must stay stable.

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // ── Lifecycle ────────────────────────────────────────────
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // ── Auth ─────────────────────────────────────────────────
    /// Caller is not the owner (admin operations) or not the pending owner.
    Unauthorized = 3,

    // ── Preconditions ────────────────────────────────────────
    /// `pool_id >= pool_length()`.
    PoolNotFound = 4,
    /// Stake attempted while the pool is paused.
    PoolPaused = 5,
    /// Stake would push `total_staked` above `stake_limit`.
    CapacityExceeded = 6,
    /// Stake amount is zero or negative.
    InvalidAmount = 7,
    /// Fee, period, rate or limit outside the accepted range.
    InvalidParameter = 8,
    /// Unstake on a position with nothing staked.
    NoStake = 9,

    // ── Collaborators ────────────────────────────────────────
    /// A token contract rejected a transfer; nothing was committed.
    TransferFailed = 10,

    // ── Arithmetic / state ───────────────────────────────────
    MathOverflow = 11,
    /// `accept_owner` / `cancel_owner_transfer` with no transfer in flight.
    NoPendingOwner = 12,
    /// `register_pool` with the registry already at `MAX_POOLS`.
    PoolLimitReached = 13,
}
