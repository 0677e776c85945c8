use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    // === Authorization Errors ===
    #[msg("Caller is not the owner or the manager")]
    Unauthorized,

    #[msg("Invalid owner for this operation")]
    InvalidOwner,

    // === Configuration / Input Errors ===
    #[msg("Invalid vault configuration")]
    InvalidConfiguration,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Operation would mint or burn zero shares")]
    ZeroShares,

    #[msg("The yield-bearing asset cannot be moved or approved")]
    ForbiddenAsset,

    // === Balance Errors ===
    #[msg("Insufficient share balance")]
    InsufficientBalance,

    #[msg("Share account is not empty")]
    ShareAccountNotEmpty,

    #[msg("Share account does not belong to this holder")]
    HolderMismatch,

    // === Venue / Rewards Errors ===
    #[msg("External venue or rewards call failed")]
    ExternalCallFailure,

    #[msg("Venue accounts do not match the registry")]
    VenueMismatch,

    #[msg("External call returned malformed data")]
    InvalidReturnData,

    // === State Errors ===
    #[msg("Vault is locked by an operation in progress")]
    ReentrantCall,

    #[msg("Vault reserve is empty while shares are outstanding")]
    ReserveDepleted,

    // === Math Errors ===
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("Division by zero")]
    DivisionByZero,

    #[msg("Amount exceeds u64 maximum")]
    AmountOverflow,
}
