pub mod password;
mod token;

pub use token::{Claims, TokenIssuer, TOKEN_TTL_HOURS};
