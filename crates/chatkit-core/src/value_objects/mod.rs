//! Value objects - identifier types shared with the server

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeParseError};
